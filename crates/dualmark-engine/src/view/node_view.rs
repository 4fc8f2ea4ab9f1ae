use uuid::Uuid;

use crate::error::NotGoverned;
use crate::model::{BlockKind, BlockNode};
use crate::syntax::SyntaxTable;
use crate::view::RenderContext;

/// Stable identity of one live node view instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub Uuid);

impl ViewId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Which of the two renderings this instance was built as
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Default formatted rendering
    Formatted,
    /// Source rendering with the marker prefix as a separate, non-editable
    /// label ahead of the editable text region
    SourceEditable { prefix: String },
}

/// Result of reconciling a view instance against an updated node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The instance absorbed the update in place
    Patched,
    /// The instance cannot represent the updated node; the host must
    /// destroy it and create a fresh one
    Recreate,
}

/// Host-facing description of a view's current rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedElement {
    /// Element tag, `h1`..`h6`
    pub tag: String,
    /// Non-editable marker label, present only in the source rendering
    pub prefix: Option<String>,
    /// Content of the editable region
    pub text: String,
    /// Whether the placeholder marker should stay visible
    pub placeholder: bool,
}

/// Mode-aware view instance for a single heading node.
///
/// The mode flag is read from the context exactly once, at creation, and
/// frozen; [`HeadingView::update`] compares the frozen value against the
/// context's current one and reports [`PatchOutcome::Recreate`] on any
/// mismatch instead of re-rendering in place. Structural attributes work
/// the same way: a level change invalidates the instance.
#[derive(Debug, Clone)]
pub struct HeadingView {
    id: ViewId,
    created_in_source_mode: bool,
    level: u8,
    content: String,
    empty: bool,
    state: ViewState,
    ctx: RenderContext,
}

impl HeadingView {
    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn created_in_source_mode(&self) -> bool {
        self.created_in_source_mode
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Empty visual flag, kept current across content-only patches
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Reconcile this instance against the updated node.
    ///
    /// Patches in place only when the node is still a heading of the same
    /// level and the global mode flag still equals the value frozen at
    /// creation. Anything else is a structural mismatch and the caller must
    /// rebuild; no partial in-place fix is ever attempted.
    pub fn update(&mut self, node: &BlockNode) -> PatchOutcome {
        let BlockKind::Heading { level } = node.kind else {
            return PatchOutcome::Recreate;
        };
        if level != self.level {
            return PatchOutcome::Recreate;
        }
        if self.ctx.source_mode() != self.created_in_source_mode {
            return PatchOutcome::Recreate;
        }

        self.content = node.text_content();
        self.empty = self.content.is_empty();
        PatchOutcome::Patched
    }

    /// Current rendering as host-consumable data
    pub fn rendered(&self) -> RenderedElement {
        RenderedElement {
            tag: format!("h{}", self.level),
            prefix: match &self.state {
                ViewState::Formatted => None,
                ViewState::SourceEditable { prefix } => Some(prefix.clone()),
            },
            text: self.content.clone(),
            placeholder: self.empty,
        }
    }

    /// Render to an HTML string. Debug/SSR aid; interactive hosts consume
    /// [`HeadingView::rendered`] instead.
    pub fn to_html(&self) -> String {
        let rendered = self.rendered();
        let mut html = format!("<{}", rendered.tag);
        if rendered.placeholder {
            html.push_str(" class=\"empty\"");
        }
        html.push('>');
        if let Some(prefix) = &rendered.prefix {
            html.push_str("<span class=\"marker\" contenteditable=\"false\">");
            html.push_str(&html_escape::encode_text(prefix));
            html.push_str("</span>");
        }
        html.push_str(&html_escape::encode_text(&rendered.text));
        html.push_str(&format!("</{}>", rendered.tag));
        html
    }
}

/// Creates [`HeadingView`] instances bound to one rendering context.
///
/// The factory is where the mode flag gets frozen: `create` snapshots the
/// context's current value onto the new instance. A node of any other kind
/// is refused outright rather than half-rendered.
#[derive(Debug, Clone)]
pub struct NodeViewFactory {
    ctx: RenderContext,
    syntax: SyntaxTable,
}

impl NodeViewFactory {
    pub fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            syntax: SyntaxTable::default(),
        }
    }

    pub fn with_syntax(ctx: RenderContext, syntax: SyntaxTable) -> Self {
        Self { ctx, syntax }
    }

    /// Build a fresh view for a heading node, entering whichever state
    /// matches the context's mode flag at this instant
    pub fn create(&self, node: &BlockNode) -> Result<HeadingView, NotGoverned> {
        let BlockKind::Heading { level } = node.kind else {
            return Err(NotGoverned {
                governs: "heading",
                got: node.kind.clone(),
            });
        };

        let source_mode = self.ctx.source_mode();
        let content = node.text_content();
        let empty = content.is_empty();
        let state = if source_mode {
            ViewState::SourceEditable {
                prefix: self.syntax.heading_prefix(level),
            }
        } else {
            ViewState::Formatted
        };

        Ok(HeadingView {
            id: ViewId::fresh(),
            created_in_source_mode: source_mode,
            level,
            content,
            empty,
            state,
            ctx: self.ctx.clone(),
        })
    }
}
