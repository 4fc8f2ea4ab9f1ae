use serde::{Deserialize, Serialize};

/// Inline formatting annotation attached to a text run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Strong,
    Emphasis,
    Code,
    Strike,
    Link { href: String },
    /// Host-defined mark the engine has no literal syntax for
    Other { name: String },
}

impl Mark {
    /// Nesting priority for marker emission. Lower values render outermost,
    /// i.e. their opening syntax appears furthest from the text and their
    /// closing syntax nearest the end of the nested stack.
    ///
    /// The table is fixed:
    ///
    /// | mark          | priority |
    /// |---------------|----------|
    /// | link          | 0        |
    /// | strikethrough | 1        |
    /// | strong        | 2        |
    /// | emphasis      | 3        |
    /// | inline code   | 4        |
    /// | unrecognized  | 5        |
    pub fn priority(&self) -> u8 {
        match self {
            Mark::Link { .. } => 0,
            Mark::Strike => 1,
            Mark::Strong => 2,
            Mark::Emphasis => 3,
            Mark::Code => 4,
            Mark::Other { .. } => 5,
        }
    }

    /// Short name for diagnostics and error messages
    pub fn name(&self) -> &str {
        match self {
            Mark::Strong => "strong",
            Mark::Emphasis => "emphasis",
            Mark::Code => "code",
            Mark::Strike => "strike",
            Mark::Link { .. } => "link",
            Mark::Other { name } => name,
        }
    }
}
