use crate::model::{BlockKind, BlockNode, Document, Mark, Node, walk};
use crate::syntax::SyntaxTable;

/// Which edge of a mark's span a boundary event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// The start or end edge of one mark on one text run.
///
/// Boundary events are derived data: they exist only between extraction and
/// emission within a single overlay computation and are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryEvent {
    pub position: usize,
    pub edge: Edge,
    pub mark: Mark,
    /// Fixed nesting priority from [`Mark::priority`]; lower is outermost
    pub priority: u8,
}

/// Block-level syntax marker descriptor produced by extraction.
///
/// Descriptors carry the literal marker text and its structural anchor;
/// turning them into renderable decorations (and choosing point vs. range
/// form) is the emitter's job.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockDescriptor {
    /// Single marker rendered just inside a block's content start
    Marker { at: usize, text: String },
    /// Code fence pair: an opening line at content start, a closing line at
    /// content end
    Fence {
        open_at: usize,
        open_text: String,
        close_at: usize,
        close_text: String,
    },
    /// Horizontal rule, tagged over its node range rather than given marker
    /// text
    Rule { range: std::ops::Range<usize> },
}

/// Everything one extraction pass produces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub blocks: Vec<BlockDescriptor>,
    pub boundaries: Vec<BoundaryEvent>,
}

/// Walk a snapshot once and collect block marker descriptors plus the full
/// inline boundary event set.
///
/// The pass visits every node exactly once and never mutates the tree. Every
/// mark on every text run emits its own start/end pair — including runs that
/// are adjacent continuations of the same mark. Merging adjacent equal-mark
/// runs is deliberately not done here or anywhere downstream; two abutting
/// bold runs render two abutting delimiter pairs, matching the observed
/// behavior this engine reproduces.
pub fn extract(doc: &Document, syntax: &SyntaxTable) -> Extraction {
    let mut extraction = Extraction::default();

    let mut pos = 0;
    for child in &doc.children {
        if let Node::Block(block) = child {
            extract_block(block, pos, syntax, &mut extraction);
        }
        pos += child.node_size();
    }

    for visit in walk::text_runs(doc) {
        for mark in &visit.run.marks {
            extraction.boundaries.push(BoundaryEvent {
                position: visit.start,
                edge: Edge::Start,
                mark: mark.clone(),
                priority: mark.priority(),
            });
            extraction.boundaries.push(BoundaryEvent {
                position: visit.end,
                edge: Edge::End,
                mark: mark.clone(),
                priority: mark.priority(),
            });
        }
    }

    extraction
}

fn extract_block(block: &BlockNode, start: usize, syntax: &SyntaxTable, out: &mut Extraction) {
    let end = start + block.node_size();

    match &block.kind {
        BlockKind::Heading { level } => {
            out.blocks.push(BlockDescriptor::Marker {
                at: start + 1,
                text: syntax.heading_prefix(*level),
            });
        }
        BlockKind::BlockQuote => {
            out.blocks.push(BlockDescriptor::Marker {
                at: start + 1,
                text: syntax.quote.clone(),
            });
        }
        BlockKind::CodeFence { lang } => {
            out.blocks.push(BlockDescriptor::Fence {
                open_at: start + 1,
                open_text: syntax.fence_open(lang.as_deref()),
                close_at: end - 1,
                close_text: syntax.fence_close(),
            });
        }
        BlockKind::ThematicBreak => {
            out.blocks.push(BlockDescriptor::Rule { range: start..end });
        }
        BlockKind::BulletList => {
            let mut child_pos = start + 1;
            for child in &block.children {
                if matches!(child, Node::Block(_)) {
                    out.blocks.push(BlockDescriptor::Marker {
                        at: child_pos + 1,
                        text: syntax.bullet.clone(),
                    });
                }
                child_pos += child.node_size();
            }
        }
        BlockKind::OrderedList { start: seed } => {
            // Running counter seeded from the list's start attribute,
            // incremented once per child item
            let mut number = *seed;
            let mut child_pos = start + 1;
            for child in &block.children {
                if matches!(child, Node::Block(_)) {
                    out.blocks.push(BlockDescriptor::Marker {
                        at: child_pos + 1,
                        text: syntax.ordered_prefix(number),
                    });
                    number += 1;
                }
                child_pos += child.node_size();
            }
        }
        BlockKind::Paragraph | BlockKind::ListItem => {}
    }

    let mut child_pos = start + 1;
    for child in &block.children {
        if let Node::Block(child_block) = child {
            extract_block(child_block, child_pos, syntax, out);
        }
        child_pos += child.node_size();
    }
}
