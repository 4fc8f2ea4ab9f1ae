//! Cross-module overlay properties: balanced nesting, idempotence, the
//! mode-off invariant, and list numbering, exercised through the public
//! API only.

use dualmark_engine::{
    BlockKind, Decoration, Document, Mark, Node, compute_overlay,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn paragraph(children: Vec<Node>) -> Node {
    Node::block(BlockKind::Paragraph, children)
}

fn heading(level: u8, text: &str) -> Node {
    Node::block(BlockKind::Heading { level }, vec![Node::text(text)])
}

fn list_item(text: &str) -> Node {
    Node::block(
        BlockKind::ListItem,
        vec![paragraph(vec![Node::text(text)])],
    )
}

/// Reconstruct the marker stream and check it reads as balanced brackets:
/// each closing marker must match the most recently opened one.
fn assert_balanced(overlay: &dualmark_engine::OverlaySet, pairs: &[(&str, &str)]) {
    let mut stack: Vec<String> = Vec::new();
    for decoration in &overlay.decorations {
        let Decoration::Point { text, .. } = decoration else {
            continue;
        };
        let close_match = pairs
            .iter()
            .find(|(_, close)| *close == text.as_str())
            .map(|(open, _)| open.to_string());
        if let Some(open) = close_match
            && stack.last() == Some(&open)
        {
            stack.pop();
            continue;
        }
        if pairs.iter().any(|(open, _)| *open == text.as_str()) {
            stack.push(text.clone());
        }
    }
    assert!(stack.is_empty(), "unclosed markers: {stack:?}");
}

#[test]
fn nested_marks_emit_outer_first_and_close_inner_first() {
    let doc = Document::new(vec![paragraph(vec![Node::marked_text(
        "run",
        vec![Mark::Emphasis, Mark::Strong],
    )])])
    .unwrap();

    let overlay = compute_overlay(&doc, true);

    // Expected start order at the run start: ** then *; at the end: * then **
    assert_eq!(overlay.marker_text_at(1), "***");
    assert_eq!(overlay.marker_text_at(4), "***");

    let texts: Vec<String> = overlay
        .decorations
        .iter()
        .filter_map(|d| match d {
            Decoration::Point { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["**", "*", "*", "**"]);
}

#[test]
fn mark_transition_closes_old_span_before_opening_new() {
    // strong text directly followed by emphasis text: the seam position
    // hosts strong's end and emphasis's start, in that order
    let doc = Document::new(vec![paragraph(vec![
        Node::marked_text("ab", vec![Mark::Strong]),
        Node::marked_text("cd", vec![Mark::Emphasis]),
    ])])
    .unwrap();

    let overlay = compute_overlay(&doc, true);
    assert_eq!(overlay.marker_text_at(3), "***");

    let seam: Vec<String> = overlay
        .decorations
        .iter()
        .filter_map(|d| match d {
            Decoration::Point { at: 3, text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(seam, vec!["**", "*"], "strong closes, then emphasis opens");
}

#[test]
fn deep_stack_stays_balanced() {
    let doc = Document::new(vec![paragraph(vec![
        Node::marked_text(
            "all",
            vec![
                Mark::Code,
                Mark::Strong,
                Mark::Link {
                    href: "https://example.com".to_string(),
                },
                Mark::Strike,
                Mark::Emphasis,
            ],
        ),
        Node::marked_text("tail", vec![Mark::Strong]),
    ])])
    .unwrap();

    let overlay = compute_overlay(&doc, true);
    assert_balanced(
        &overlay,
        &[
            ("**", "**"),
            ("*", "*"),
            ("`", "`"),
            ("~~", "~~"),
            ("[", "](https://example.com)"),
        ],
    );
}

#[rstest]
#[case(Document::new(vec![]).unwrap())]
#[case(Document::new(vec![paragraph(vec![Node::text("plain")])]).unwrap())]
#[case(Document::new(vec![
    heading(1, "H"),
    paragraph(vec![Node::marked_text("x", vec![Mark::Strong])]),
    Node::block(BlockKind::ThematicBreak, vec![]),
]).unwrap())]
fn mode_off_is_empty_for_any_document(#[case] doc: Document) {
    assert!(compute_overlay(&doc, false).is_empty());
}

#[rstest]
#[case(false)]
#[case(true)]
fn compute_overlay_is_idempotent(#[case] mode: bool) {
    let doc = Document::new(vec![
        heading(3, "Title"),
        Node::block(
            BlockKind::OrderedList { start: 3 },
            vec![list_item("a"), list_item("b")],
        ),
        paragraph(vec![
            Node::text("pre "),
            Node::marked_text("mid", vec![Mark::Strong, Mark::Emphasis]),
        ]),
    ])
    .unwrap();

    assert_eq!(compute_overlay(&doc, mode), compute_overlay(&doc, mode));
}

#[test]
fn ordered_list_numbers_run_from_start_attribute() {
    let doc = Document::new(vec![Node::block(
        BlockKind::OrderedList { start: 3 },
        vec![
            list_item("one"),
            list_item("two"),
            list_item("three"),
            list_item("four"),
        ],
    )])
    .unwrap();

    let overlay = compute_overlay(&doc, true);
    let numbers: Vec<String> = overlay
        .decorations
        .iter()
        .filter_map(|d| match d {
            Decoration::Point { text, .. } => Some(text.trim_end().to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec!["3.", "4.", "5.", "6."]);
}

#[test]
fn nested_ordered_lists_keep_independent_counters() {
    let inner = Node::block(
        BlockKind::OrderedList { start: 1 },
        vec![list_item("inner-a"), list_item("inner-b")],
    );
    let outer_item = Node::block(
        BlockKind::ListItem,
        vec![paragraph(vec![Node::text("outer")]), inner],
    );
    let doc = Document::new(vec![Node::block(
        BlockKind::OrderedList { start: 5 },
        vec![outer_item, list_item("next")],
    )])
    .unwrap();

    let overlay = compute_overlay(&doc, true);
    let numbers: Vec<String> = overlay
        .decorations
        .iter()
        .filter_map(|d| match d {
            Decoration::Point { text, .. } => Some(text.trim_end().to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec!["5.", "6.", "1.", "2."]);
}

#[test]
fn overlay_version_tracks_snapshot_version() {
    let doc = Document::new(vec![heading(1, "v")]).unwrap().with_version(9);
    assert_eq!(compute_overlay(&doc, true).version, 9);
    assert_eq!(compute_overlay(&doc, false).version, 9);
}

#[test]
fn adjacent_equal_mark_runs_render_two_abutting_pairs() {
    // Observed behavior carried over deliberately: adjacent bold runs do
    // not merge into one visual pair
    let doc = Document::new(vec![paragraph(vec![
        Node::marked_text("ab", vec![Mark::Strong]),
        Node::marked_text("cd", vec![Mark::Strong]),
    ])])
    .unwrap();

    let overlay = compute_overlay(&doc, true);
    assert_eq!(overlay.len(), 4);
    assert_eq!(overlay.marker_text_at(3), "****");
}

#[test]
fn decorations_sort_by_anchor_position() {
    let doc = Document::new(vec![
        heading(1, "T"),
        paragraph(vec![Node::marked_text("x", vec![Mark::Strong])]),
        Node::block(BlockKind::ThematicBreak, vec![]),
    ])
    .unwrap();

    let overlay = compute_overlay(&doc, true);
    let anchors: Vec<usize> = overlay.decorations.iter().map(Decoration::anchor).collect();
    let mut sorted = anchors.clone();
    sorted.sort_unstable();
    assert_eq!(anchors, sorted);
}
