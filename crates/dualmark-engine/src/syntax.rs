use serde::{Deserialize, Serialize};

use crate::model::Mark;

/// Literal marker syntax used when the source view is active.
///
/// Hosts may deserialize an override to change delimiters without touching
/// the engine; the default table holds the CommonMark literals. A mark kind
/// with no entry here simply renders no marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxTable {
    /// Strong emphasis delimiter, both sides
    pub strong: String,
    /// Emphasis delimiter, both sides
    pub emphasis: String,
    /// Inline code delimiter, both sides
    pub code: String,
    /// Strikethrough delimiter, both sides
    pub strike: String,
    /// Bullet list item prefix
    pub bullet: String,
    /// Blockquote prefix
    pub quote: String,
    /// Code fence line
    pub fence: String,
    /// Cosmetic tag applied over horizontal rules
    pub rule_tag: String,
}

impl Default for SyntaxTable {
    fn default() -> Self {
        Self {
            strong: "**".to_string(),
            emphasis: "*".to_string(),
            code: "`".to_string(),
            strike: "~~".to_string(),
            bullet: "- ".to_string(),
            quote: "> ".to_string(),
            fence: "```".to_string(),
            rule_tag: "md-hr".to_string(),
        }
    }
}

impl SyntaxTable {
    /// Opening and closing literals for an inline mark.
    ///
    /// `None` means the kind has no defined syntax and its boundaries are
    /// silently skipped at emission. A link's closing literal embeds the
    /// destination verbatim; an empty destination yields an empty
    /// parenthetical.
    pub fn mark_delimiters(&self, mark: &Mark) -> Option<(String, String)> {
        match mark {
            Mark::Strong => Some((self.strong.clone(), self.strong.clone())),
            Mark::Emphasis => Some((self.emphasis.clone(), self.emphasis.clone())),
            Mark::Code => Some((self.code.clone(), self.code.clone())),
            Mark::Strike => Some((self.strike.clone(), self.strike.clone())),
            Mark::Link { href } => Some(("[".to_string(), format!("]({href})"))),
            Mark::Other { .. } => None,
        }
    }

    /// Heading prefix for a given level (`#` repeated, then a space)
    pub fn heading_prefix(&self, level: u8) -> String {
        let mut prefix = "#".repeat(usize::from(level));
        prefix.push(' ');
        prefix
    }

    /// Opening fence line, carrying the block's language when present
    pub fn fence_open(&self, lang: Option<&str>) -> String {
        match lang {
            Some(lang) => format!("{}{lang}", self.fence),
            None => self.fence.clone(),
        }
    }

    /// Matching closing fence line
    pub fn fence_close(&self) -> String {
        self.fence.clone()
    }

    /// Ordered list item prefix for a computed number
    pub fn ordered_prefix(&self, number: u64) -> String {
        format!("{number}. ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_table_matches_commonmark_literals() {
        let table = SyntaxTable::default();
        assert_eq!(table.strong, "**");
        assert_eq!(table.emphasis, "*");
        assert_eq!(table.heading_prefix(3), "### ");
        assert_eq!(table.fence_open(Some("rust")), "```rust");
        assert_eq!(table.fence_close(), "```");
        assert_eq!(table.ordered_prefix(12), "12. ");
    }

    #[test]
    fn test_link_close_embeds_destination_verbatim() {
        let table = SyntaxTable::default();
        let (open, close) = table
            .mark_delimiters(&Mark::Link {
                href: "https://example.com/a(b)".to_string(),
            })
            .unwrap();
        assert_eq!(open, "[");
        assert_eq!(close, "](https://example.com/a(b))");
    }

    #[test]
    fn test_empty_link_destination_renders_empty_parenthetical() {
        let table = SyntaxTable::default();
        let (_, close) = table
            .mark_delimiters(&Mark::Link {
                href: String::new(),
            })
            .unwrap();
        assert_eq!(close, "]()");
    }

    #[test]
    fn test_unrecognized_mark_has_no_delimiters() {
        let table = SyntaxTable::default();
        assert_eq!(
            table.mark_delimiters(&Mark::Other {
                name: "highlight".to_string()
            }),
            None
        );
    }
}
