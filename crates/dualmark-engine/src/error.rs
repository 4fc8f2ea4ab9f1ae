use thiserror::Error;

use crate::model::BlockKind;

/// Errors raised while validating a document tree or resolving positions
/// against it.
///
/// These surface only at the model-construction boundary. Everything past
/// that point degrades silently instead: a kind with no literal syntax
/// emits no marker, an unresolvable position aborts that one operation,
/// and a structurally incompatible view update reports [`PatchOutcome::Recreate`]
/// rather than erroring.
///
/// [`PatchOutcome::Recreate`]: crate::view::PatchOutcome::Recreate
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("heading level {level} outside 1..=6")]
    InvalidHeadingLevel { level: u8 },

    #[error("thematic break cannot contain children")]
    RuleWithChildren,

    #[error("text run not allowed at the document root")]
    TextAtRoot,

    #[error("empty text runs are not representable")]
    EmptyTextRun,

    #[error("list item must sit inside a list container")]
    ItemOutsideList,

    #[error("list container may only hold list items, found {found}")]
    NonItemInList { found: &'static str },

    #[error("code fence text cannot carry marks")]
    MarkedCodeText,

    #[error("code fence cannot contain {found} blocks")]
    BlockInCodeFence { found: &'static str },

    #[error("position {pos} outside document bounds 0..={len}")]
    PositionOutOfBounds { pos: usize, len: usize },
}

/// Error raised when a node view factory is handed a node outside the kind
/// it governs
#[derive(Debug, Error, PartialEq)]
#[error("node view factory governs {governs}, got {got:?}")]
pub struct NotGoverned {
    pub governs: &'static str,
    pub got: BlockKind,
}
