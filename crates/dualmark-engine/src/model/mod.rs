/*!
 * # Document Model Module
 *
 * The immutable, versioned node tree the rendering core consumes. The model
 * is deliberately small: it is the *input* to the overlay engine and node
 * views, never something this crate parses out of markup text or serializes
 * back to it.
 *
 * ## Key Properties
 *
 * ### 1. Versioned Snapshots
 * - A [`Document`] pairs the tree with a version stamp
 * - Consumers compare versions for change detection; positions computed
 *   against one version are never reused against another
 *
 * ### 2. Flattened Positions
 * - Positions are integer offsets into a flattened traversal of the tree
 * - Entering or leaving a block node costs 1, each character of text
 *   costs 1, and a childless leaf block occupies a single position
 * - Every node covers a contiguous `[start, end)` range; child ranges nest
 *   exactly inside their parent with no gaps
 *
 * ### 3. Marks on Text Runs
 * - Inline formatting is an ordered set of [`Mark`]s carried by each
 *   [`TextRun`]
 * - Adjacent runs with identical marks are conceptually one span; the
 *   overlay layer treats mark *boundaries*, not run edges, as significant
 *
 * ## Module Structure
 *
 * - **`node`**: [`Document`], [`Node`], [`BlockNode`], [`TextRun`],
 *   [`BlockKind`] and the position arithmetic
 * - **`mark`**: [`Mark`] and its fixed nesting priority table
 * - **`walk`**: absolute-positioned traversal helpers
 */

pub mod mark;
pub mod node;
pub mod walk;

pub use mark::Mark;
pub use node::{BlockKind, BlockNode, Document, Node, TextRun};
pub use walk::{BlockVisit, TextVisit};
