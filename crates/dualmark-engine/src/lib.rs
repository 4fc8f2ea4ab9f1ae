pub mod error;
pub mod keymap;
pub mod model;
pub mod overlay;
pub mod syntax;
pub mod view;

// Re-export key types for easier usage
pub use error::{ModelError, NotGoverned};
pub use keymap::{Key, KeyEvent, Mutation, handle_delete};
pub use model::{BlockKind, BlockNode, Document, Mark, Node, TextRun};
pub use overlay::{
    Bias, Decoration, OverlayEngine, OverlaySet, compute_overlay,
};
pub use syntax::SyntaxTable;
pub use view::{
    HeadingView, NodeViewFactory, PatchOutcome, RenderContext, RenderedElement, ViewId, ViewState,
};
