use serde::{Deserialize, Serialize};

use crate::model::{BlockKind, Document, walk};

/// Keyboard keys the host forwards to this core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Backspace,
    Delete,
    Enter,
    Char(char),
}

/// A single keyboard event as the host reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
}

/// Document change dispatched back to the host.
///
/// The deletion rule is the only place this core originates a mutation;
/// everything else it produces is a non-destructive overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    DeleteRange { range: std::ops::Range<usize> },
}

/// Whole-block deletion for a fully selected heading.
///
/// Intercepts a deletion key only when the selection is non-empty, lies
/// entirely inside one heading, and covers that heading's entire content.
/// The default behavior would delete just the selected text and leave an
/// empty block behind; this rule deletes the whole block instead,
/// dispatching exactly one mutation, and reports the event as handled so
/// no further handlers run. In every other case it declines and dispatches
/// nothing.
///
/// Positions are checked against the snapshot before use; a selection that
/// no longer resolves (stale snapshot) makes the rule decline rather than
/// dispatch a partial change.
pub fn handle_delete(
    doc: &Document,
    selection: &std::ops::Range<usize>,
    event: &KeyEvent,
    dispatch: &mut dyn FnMut(Mutation),
) -> bool {
    if !matches!(event.key, Key::Backspace | Key::Delete) {
        return false;
    }
    if selection.is_empty() {
        return false;
    }
    if doc.assert_pos(selection.end).is_err() {
        return false;
    }

    let Some(block) = walk::find_containing(doc, selection, |kind| {
        matches!(kind, BlockKind::Heading { .. })
    }) else {
        return false;
    };

    // Full-content selection: offset 0 through the content length
    if *selection != block.content_range() {
        return false;
    }

    dispatch(Mutation::DeleteRange {
        range: block.start..block.end,
    });
    true
}
