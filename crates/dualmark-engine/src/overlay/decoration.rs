use serde::{Deserialize, Serialize};

/// Which side of its anchor position a point decoration sticks to.
///
/// Bias keeps a marker from drifting when the host applies edits adjacent
/// to the anchor: a `Left`-biased marker stays attached to the content on
/// its left (insertions at the anchor land after it), a `Right`-biased
/// marker stays attached to the content on its right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bias {
    Left,
    Right,
}

/// One renderable overlay item.
///
/// Decorations never alter the document: a `Point` renders marker text at
/// a position, a `RangeTag` applies a cosmetic attribute over an existing
/// node range. Both are recomputed wholesale on each relevant change and
/// are only meaningful against the snapshot version they were computed
/// from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decoration {
    /// Rendered marker text inserted at a position
    Point {
        at: usize,
        text: String,
        bias: Bias,
    },
    /// Cosmetic attribute applied to an existing node range
    RangeTag {
        range: std::ops::Range<usize>,
        tag: String,
    },
}

impl Decoration {
    /// Anchor position used for overlay ordering
    pub fn anchor(&self) -> usize {
        match self {
            Decoration::Point { at, .. } => *at,
            Decoration::RangeTag { range, .. } => range.start,
        }
    }
}

/// The full overlay for one `(snapshot, mode)` pair, sorted by anchor
/// position.
///
/// Decorations sharing an anchor keep their emission order, which is what
/// makes nested markers read as balanced brackets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlaySet {
    /// Version of the snapshot this overlay was computed from
    pub version: u64,
    pub decorations: Vec<Decoration>,
}

impl OverlaySet {
    /// The empty overlay for a snapshot version
    pub fn empty(version: u64) -> Self {
        Self {
            version,
            decorations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Concatenated marker text at one position, in emission order.
    /// Test and debugging aid; hosts render decorations individually.
    pub fn marker_text_at(&self, pos: usize) -> String {
        self.decorations
            .iter()
            .filter_map(|d| match d {
                Decoration::Point { at, text, .. } if *at == pos => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
