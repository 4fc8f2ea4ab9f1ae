/*!
 * # Overlay Module (Decoration Engine)
 *
 * Computes the non-destructive syntax-marker overlay that the source view
 * renders over a document, without ever touching the document itself.
 *
 * ## Pipeline
 *
 * The engine is a pure function of `(document snapshot, mode flag)` and runs
 * in three stages on every document-state transition:
 *
 * ### 1. Extraction (`extract`)
 * - One full-tree traversal of the snapshot
 * - Emits a block marker descriptor per qualifying block node (heading
 *   hashes, blockquote caret, list bullets and computed numbers, the two
 *   code-fence lines, a cosmetic tag for horizontal rules)
 * - Emits a start/end boundary event pair for every mark on every text run,
 *   tagged with the mark's fixed nesting priority
 *
 * ### 2. Resolution (`resolve`)
 * - Groups boundary events by exact position into an ordered multimap
 * - Linearizes each position's local set: closing boundaries first (inner
 *   marks nearest the text), then opening boundaries (outer marks furthest
 *   from the text), so emitted markers always read as balanced brackets
 *
 * ### 3. Emission (`emit`)
 * - Turns descriptors and resolved boundaries into [`Decoration`]s: point
 *   insertions with a position bias, or range tags for cosmetic effects
 * - Returns the empty overlay whenever the mode flag is off
 *
 * ## Guarantees
 *
 * - Recomputed wholesale per call; no state retained between calls
 * - Deterministic: the same snapshot and flag always yield the same set
 * - Total: tolerates empty documents and documents with zero marks
 * - Boundary events are derived data and never outlive one computation
 */

pub mod decoration;
pub mod emit;
pub mod extract;
pub mod resolve;

pub use decoration::{Bias, Decoration, OverlaySet};
pub use emit::{OverlayEngine, compute_overlay};
pub use extract::{BlockDescriptor, BoundaryEvent, Edge, Extraction, extract};
pub use resolve::resolve;
