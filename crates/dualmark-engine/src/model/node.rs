use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::Mark;

/// Block node classification with structural attributes
///
/// The kind determines both how a node renders and which syntax markers the
/// overlay layer emits for it. Structural attributes (heading level, ordered
/// list start) live in the variant so a kind comparison also compares them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Regular paragraph text
    Paragraph,
    /// ATX heading (# to ######)
    Heading { level: u8 },
    /// Unordered list container
    BulletList,
    /// Ordered list container; `start` seeds the item numbering
    OrderedList { start: u64 },
    /// Single list item inside a bullet or ordered list
    ListItem,
    /// Block quote (> quoted text)
    BlockQuote,
    /// Fenced code block with optional language
    CodeFence { lang: Option<String> },
    /// Horizontal rule (---); childless leaf
    ThematicBreak,
}

impl BlockKind {
    /// Stable name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading { .. } => "heading",
            BlockKind::BulletList => "bullet_list",
            BlockKind::OrderedList { .. } => "ordered_list",
            BlockKind::ListItem => "list_item",
            BlockKind::BlockQuote => "block_quote",
            BlockKind::CodeFence { .. } => "code_fence",
            BlockKind::ThematicBreak => "thematic_break",
        }
    }
}

/// A node in the document tree: either a block with children or a text leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Block(BlockNode),
    Text(TextRun),
}

/// Block-level node with kind-specific attributes and child nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    pub kind: BlockKind,
    pub children: Vec<Node>,
}

/// Inline text leaf carrying an ordered set of marks
///
/// A run is a storage unit, not a visual one: two adjacent runs with the
/// same mark set are one continuous span to the reader. Offsets count
/// Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub marks: Vec<Mark>,
}

impl Node {
    /// Convenience constructor for an unmarked text run
    pub fn text(text: &str) -> Node {
        Node::Text(TextRun {
            text: text.to_string(),
            marks: Vec::new(),
        })
    }

    /// Convenience constructor for a marked text run
    pub fn marked_text(text: &str, marks: Vec<Mark>) -> Node {
        Node::Text(TextRun {
            text: text.to_string(),
            marks,
        })
    }

    /// Convenience constructor for a block node
    pub fn block(kind: BlockKind, children: Vec<Node>) -> Node {
        Node::Block(BlockNode { kind, children })
    }

    /// Size of this node in flattened positions.
    ///
    /// Text runs cost one position per character. A childless leaf block
    /// occupies a single position; any other block costs one position to
    /// enter, one to leave, plus its content.
    pub fn node_size(&self) -> usize {
        match self {
            Node::Text(run) => run.len(),
            Node::Block(block) => block.node_size(),
        }
    }
}

impl BlockNode {
    /// Size of this block in flattened positions
    pub fn node_size(&self) -> usize {
        if matches!(self.kind, BlockKind::ThematicBreak) {
            1
        } else {
            2 + self.content_size()
        }
    }

    /// Combined size of the children
    pub fn content_size(&self) -> usize {
        self.children.iter().map(Node::node_size).sum()
    }

    /// Concatenated text of all descendant runs
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text(run) => out.push_str(&run.text),
            Node::Block(block) => collect_text(&block.children, out),
        }
    }
}

impl TextRun {
    /// Length of the run in positions (Unicode scalar values)
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Immutable, versioned document snapshot
///
/// The document is the single input the overlay engine computes from. It is
/// never mutated in place: edits produce a new snapshot with a bumped
/// version, and every position handed out by this crate is valid only
/// against the snapshot that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Version stamp for change detection
    pub version: u64,
    /// Top-level block nodes; positions start at 0 before the first child
    pub children: Vec<Node>,
}

impl Document {
    /// Build a document at version 0, validating the tree shape.
    ///
    /// Validation rejects trees the rendering core cannot position
    /// correctly: bare text at the root, heading levels outside 1..=6,
    /// children under a thematic break, non-item children in list
    /// containers, and marked or non-text content inside code fences.
    pub fn new(children: Vec<Node>) -> anyhow::Result<Self> {
        validate_children(&children, None)?;
        Ok(Self {
            version: 0,
            children,
        })
    }

    /// Same tree with a different version stamp
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Total size of the document in flattened positions
    pub fn len(&self) -> usize {
        self.children.iter().map(Node::node_size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check a position against the current snapshot's bounds
    pub fn assert_pos(&self, pos: usize) -> Result<(), ModelError> {
        let len = self.len();
        if pos > len {
            return Err(ModelError::PositionOutOfBounds { pos, len });
        }
        Ok(())
    }
}

fn validate_children(children: &[Node], parent: Option<&BlockKind>) -> Result<(), ModelError> {
    for child in children {
        match child {
            Node::Text(run) if run.is_empty() => return Err(ModelError::EmptyTextRun),
            Node::Text(run) => match parent {
                None => return Err(ModelError::TextAtRoot),
                Some(BlockKind::CodeFence { .. }) if !run.marks.is_empty() => {
                    return Err(ModelError::MarkedCodeText);
                }
                Some(BlockKind::BulletList | BlockKind::OrderedList { .. }) => {
                    return Err(ModelError::NonItemInList { found: "text run" });
                }
                _ => {}
            },
            Node::Block(block) => {
                match &block.kind {
                    BlockKind::Heading { level } if !(1..=6).contains(level) => {
                        return Err(ModelError::InvalidHeadingLevel { level: *level });
                    }
                    BlockKind::ThematicBreak if !block.children.is_empty() => {
                        return Err(ModelError::RuleWithChildren);
                    }
                    BlockKind::ListItem
                        if !matches!(
                            parent,
                            Some(BlockKind::BulletList | BlockKind::OrderedList { .. })
                        ) =>
                    {
                        return Err(ModelError::ItemOutsideList);
                    }
                    _ => {}
                }
                if matches!(
                    parent,
                    Some(BlockKind::BulletList | BlockKind::OrderedList { .. })
                ) && !matches!(block.kind, BlockKind::ListItem)
                {
                    return Err(ModelError::NonItemInList {
                        found: block.kind.name(),
                    });
                }
                if matches!(parent, Some(BlockKind::CodeFence { .. })) {
                    return Err(ModelError::BlockInCodeFence {
                        found: block.kind.name(),
                    });
                }
                validate_children(&block.children, Some(&block.kind))?;
            }
        }
    }
    Ok(())
}
