use std::cell::Cell;
use std::rc::Rc;

/// Instance-scoped rendering context shared between the host, the overlay
/// engine's callers, and every node view created for one editor instance.
///
/// Holds the mode flag behind a shared cell so that clones observe the same
/// value. The core only ever reads the flag; the host sets it. Everything
/// here is single-threaded by design, so `Rc<Cell<_>>` rather than any
/// synchronized wrapper.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    source_mode: Rc<Cell<bool>>,
}

impl RenderContext {
    /// New context with the source view disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether source-syntax overlay rendering is currently enabled
    pub fn source_mode(&self) -> bool {
        self.source_mode.get()
    }

    /// Flip the mode flag. Host-only; already-created node views keep their
    /// frozen flag until their next update reports a rebuild.
    pub fn set_source_mode(&self, on: bool) {
        self.source_mode.set(on);
    }
}
