use crate::model::Document;
use crate::overlay::decoration::{Bias, Decoration, OverlaySet};
use crate::overlay::extract::{BlockDescriptor, Edge, extract};
use crate::overlay::resolve::resolve;
use crate::syntax::SyntaxTable;

/// Overlay computation bound to one marker syntax table.
///
/// The engine holds no other state: [`OverlayEngine::compute`] is a pure
/// function of `(document snapshot, mode flag)` and is safe to call on
/// every document-state transition.
#[derive(Debug, Clone, Default)]
pub struct OverlayEngine {
    syntax: SyntaxTable,
}

impl OverlayEngine {
    pub fn new(syntax: SyntaxTable) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    /// Compute the full overlay set for a snapshot.
    ///
    /// With the mode flag off this is always the empty overlay. Otherwise
    /// block descriptors become left-biased point insertions (code fences
    /// two of them, horizontal rules a range tag), and each resolved inline
    /// boundary becomes a point insertion carrying its literal syntax:
    /// start markers right-biased so they stay immediately before the
    /// following content, end markers left-biased so they stay immediately
    /// after the preceding content.
    pub fn compute(&self, doc: &Document, source_mode: bool) -> OverlaySet {
        if !source_mode {
            return OverlaySet::empty(doc.version);
        }

        let extraction = extract(doc, &self.syntax);
        let mut decorations = Vec::new();

        for descriptor in extraction.blocks {
            match descriptor {
                BlockDescriptor::Marker { at, text } => {
                    decorations.push(Decoration::Point {
                        at,
                        text,
                        bias: Bias::Left,
                    });
                }
                BlockDescriptor::Fence {
                    open_at,
                    open_text,
                    close_at,
                    close_text,
                } => {
                    decorations.push(Decoration::Point {
                        at: open_at,
                        text: open_text,
                        bias: Bias::Left,
                    });
                    decorations.push(Decoration::Point {
                        at: close_at,
                        text: close_text,
                        bias: Bias::Right,
                    });
                }
                BlockDescriptor::Rule { range } => {
                    decorations.push(Decoration::RangeTag {
                        range,
                        tag: self.syntax.rule_tag.clone(),
                    });
                }
            }
        }

        for event in resolve(extraction.boundaries) {
            // A kind with no literal syntax silently produces no marker
            let Some((open, close)) = self.syntax.mark_delimiters(&event.mark) else {
                continue;
            };
            let (text, bias) = match event.edge {
                Edge::Start => (open, Bias::Right),
                Edge::End => (close, Bias::Left),
            };
            decorations.push(Decoration::Point {
                at: event.position,
                text,
                bias,
            });
        }

        // Stable by anchor: block markers stay ahead of inline markers at a
        // shared position, and the resolver's within-position order survives
        decorations.sort_by_key(Decoration::anchor);

        OverlaySet {
            version: doc.version,
            decorations,
        }
    }
}

/// Convenience wrapper over [`OverlayEngine`] with the default syntax table
pub fn compute_overlay(doc: &Document, source_mode: bool) -> OverlaySet {
    OverlayEngine::default().compute(doc, source_mode)
}
