use crate::model::{BlockKind, BlockNode, Document, Node, TextRun};

/// A block node paired with its absolute `[start, end)` range
#[derive(Debug, Clone, Copy)]
pub struct BlockVisit<'a> {
    pub node: &'a BlockNode,
    pub start: usize,
    pub end: usize,
    /// Nesting depth below the document root
    pub depth: usize,
}

impl BlockVisit<'_> {
    /// Range of the block's content, excluding the enter/leave positions.
    /// A childless leaf has an empty content range at its start.
    pub fn content_range(&self) -> std::ops::Range<usize> {
        if matches!(self.node.kind, BlockKind::ThematicBreak) {
            self.start..self.start
        } else {
            self.start + 1..self.end - 1
        }
    }
}

/// A text run paired with its absolute `[start, end)` range
#[derive(Debug, Clone, Copy)]
pub struct TextVisit<'a> {
    pub run: &'a TextRun,
    pub start: usize,
    pub end: usize,
}

/// Collect every block node in pre-order with absolute positions.
///
/// Positions are recomputed from the snapshot on every call; nothing here
/// caches ranges across document versions.
pub fn blocks(doc: &Document) -> Vec<BlockVisit<'_>> {
    let mut out = Vec::new();
    let mut pos = 0;
    for child in &doc.children {
        collect_blocks(child, &mut pos, 0, &mut out);
    }
    out
}

fn collect_blocks<'a>(
    node: &'a Node,
    pos: &mut usize,
    depth: usize,
    out: &mut Vec<BlockVisit<'a>>,
) {
    match node {
        Node::Text(run) => *pos += run.len(),
        Node::Block(block) => {
            let start = *pos;
            let end = start + block.node_size();
            out.push(BlockVisit {
                node: block,
                start,
                end,
                depth,
            });
            *pos = if matches!(block.kind, BlockKind::ThematicBreak) {
                end
            } else {
                start + 1
            };
            for child in &block.children {
                collect_blocks(child, pos, depth + 1, out);
            }
            *pos = end;
        }
    }
}

/// Collect every text run in document order with absolute positions
pub fn text_runs(doc: &Document) -> Vec<TextVisit<'_>> {
    let mut out = Vec::new();
    let mut pos = 0;
    for child in &doc.children {
        collect_runs(child, &mut pos, &mut out);
    }
    out
}

fn collect_runs<'a>(node: &'a Node, pos: &mut usize, out: &mut Vec<TextVisit<'a>>) {
    match node {
        Node::Text(run) => {
            let start = *pos;
            let end = start + run.len();
            out.push(TextVisit { run, start, end });
            *pos = end;
        }
        Node::Block(block) => {
            if matches!(block.kind, BlockKind::ThematicBreak) {
                *pos += 1;
                return;
            }
            *pos += 1;
            for child in &block.children {
                collect_runs(child, pos, out);
            }
            *pos += 1;
        }
    }
}

/// Innermost block of a matching kind whose range fully contains `range`.
///
/// Returns `None` when no such block exists, including when `range` falls
/// outside the document entirely; callers treat that as "decline and move
/// on", never as an error.
pub fn find_containing<'a>(
    doc: &'a Document,
    range: &std::ops::Range<usize>,
    mut matches_kind: impl FnMut(&BlockKind) -> bool,
) -> Option<BlockVisit<'a>> {
    let mut best: Option<BlockVisit<'a>> = None;
    for visit in blocks(doc) {
        if !matches_kind(&visit.node.kind) {
            continue;
        }
        if visit.start <= range.start && range.end <= visit.end {
            let tighter = best
                .map(|b| visit.end - visit.start < b.end - b.start)
                .unwrap_or(true);
            if tighter {
                best = Some(visit);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mark;
    use pretty_assertions::assert_eq;

    fn sample_doc() -> Document {
        // 0: <h1> 1..3 "Hi" 3: </h1>
        // 4: <ul> 5: <li> 6: <p> 7..10 "abc" 10: </p> 11: </li> 12: </ul>
        // 13: <hr>
        Document::new(vec![
            Node::block(BlockKind::Heading { level: 1 }, vec![Node::text("Hi")]),
            Node::block(
                BlockKind::BulletList,
                vec![Node::block(
                    BlockKind::ListItem,
                    vec![Node::block(BlockKind::Paragraph, vec![Node::text("abc")])],
                )],
            ),
            Node::block(BlockKind::ThematicBreak, vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_blocks_ranges_nest_without_gaps() {
        let doc = sample_doc();
        let visits = blocks(&doc);
        let ranges: Vec<(&'static str, usize, usize)> = visits
            .iter()
            .map(|v| (v.node.kind.name(), v.start, v.end))
            .collect();
        assert_eq!(
            ranges,
            vec![
                ("heading", 0, 4),
                ("bullet_list", 4, 13),
                ("list_item", 5, 12),
                ("paragraph", 6, 11),
                ("thematic_break", 13, 14),
            ]
        );
    }

    #[test]
    fn test_text_runs_have_absolute_positions() {
        let doc = sample_doc();
        let runs = text_runs(&doc);
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].start, runs[0].end), (1, 3));
        assert_eq!((runs[1].start, runs[1].end), (7, 10));
    }

    #[test]
    fn test_content_range_excludes_node_boundaries() {
        let doc = sample_doc();
        let visits = blocks(&doc);
        assert_eq!(visits[0].content_range(), 1..3);
        // Leaf block has an empty content range
        assert_eq!(visits[4].content_range(), 13..13);
    }

    #[test]
    fn test_find_containing_picks_innermost_match() {
        let doc = sample_doc();
        let hit = find_containing(&doc, &(7..10), |k| {
            matches!(k, BlockKind::Paragraph | BlockKind::ListItem)
        })
        .unwrap();
        assert_eq!(hit.node.kind.name(), "paragraph");
    }

    #[test]
    fn test_find_containing_declines_out_of_bounds() {
        let doc = sample_doc();
        assert!(find_containing(&doc, &(40..50), |_| true).is_none());
    }

    #[test]
    fn test_marked_runs_keep_positions() {
        let doc = Document::new(vec![Node::block(
            BlockKind::Paragraph,
            vec![
                Node::text("ab"),
                Node::marked_text("cd", vec![Mark::Strong]),
            ],
        )])
        .unwrap();
        let runs = text_runs(&doc);
        assert_eq!((runs[0].start, runs[0].end), (1, 3));
        assert_eq!((runs[1].start, runs[1].end), (3, 5));
    }
}
