/*!
 * # View Module (Mode-Aware Node Views)
 *
 * Per-node view identity for the one node kind that renders structurally
 * differently between the formatted and source views: headings.
 *
 * ## Lifecycle
 *
 * A [`HeadingView`] is created by the [`NodeViewFactory`] when the host
 * first renders a heading. The factory reads the [`RenderContext`]'s mode
 * flag *once* and freezes it on the instance; the flag is never re-read
 * implicitly afterwards. On each document update the host calls
 * [`HeadingView::update`]:
 *
 * - content-only change, same mode, same level → [`PatchOutcome::Patched`]:
 *   the instance refreshes its text and empty flag in place;
 * - mode flip, level change, or wrong node kind →
 *   [`PatchOutcome::Recreate`]: the host discards the instance and creates
 *   a fresh one, which picks up the current mode and level.
 *
 * Freeze-at-creation avoids re-deriving the mode on every keystroke while
 * still converging after any flip, at the cost of exactly one rebuild per
 * affected node per flip.
 */

pub mod context;
pub mod node_view;

pub use context::RenderContext;
pub use node_view::{
    HeadingView, NodeViewFactory, PatchOutcome, RenderedElement, ViewId, ViewState,
};
