use std::collections::BTreeMap;

use crate::overlay::extract::{BoundaryEvent, Edge};

/// Linearize boundary events into a deterministic, correctly nesting
/// emission sequence.
///
/// Two passes, so emission order never depends on tree-traversal order:
/// events are first collected into a position-keyed multimap, then each
/// position's local set is ordered on its own.
///
/// At one position the local order is:
///
/// 1. the END group, descending by priority — inner marks' closing syntax
///    emitted first, nearest the text, then progressively outer ones;
/// 2. the START group, ascending by priority — outer marks' opening syntax
///    emitted first, furthest from the text.
///
/// The end group always precedes the start group: a position can
/// simultaneously host the ends of previously-open marks and the starts of
/// newly-open ones (a mark transition boundary), and every ending mark must
/// be fully closed before any newly-opening stack begins, or the rendered
/// nesting would visually cross.
///
/// Ties inside a group (equal priority, e.g. two links) keep their
/// collection order; the sorts are stable.
pub fn resolve(events: Vec<BoundaryEvent>) -> Vec<BoundaryEvent> {
    let mut by_position: BTreeMap<usize, (Vec<BoundaryEvent>, Vec<BoundaryEvent>)> =
        BTreeMap::new();

    for event in events {
        let slot = by_position.entry(event.position).or_default();
        match event.edge {
            Edge::End => slot.0.push(event),
            Edge::Start => slot.1.push(event),
        }
    }

    let mut resolved = Vec::new();
    for (_, (mut ends, mut starts)) in by_position {
        ends.sort_by(|a, b| b.priority.cmp(&a.priority));
        starts.sort_by(|a, b| a.priority.cmp(&b.priority));
        resolved.extend(ends);
        resolved.extend(starts);
    }
    resolved
}
