use std::fmt;

use serde::Serialize;

use super::types::NodeKind;

/// Structural class of a node type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeClass {
    /// Block container: blockquote, lists, code blocks, headings, panels...
    Parent,
    /// Leaf-bearing node whose own text (if any) is rendered after its children.
    Child,
    Unknown,
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeClass::Parent => write!(f, "parent"),
            NodeClass::Child => write!(f, "child"),
            NodeClass::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify a node type. Inline nodes (cards, emoji, mentions, hard breaks)
/// belong to neither vocabulary and come back as [`NodeClass::Unknown`].
pub fn classify(kind: &NodeKind) -> NodeClass {
    match kind {
        NodeKind::Blockquote
        | NodeKind::BulletList
        | NodeKind::CodeBlock
        | NodeKind::Heading
        | NodeKind::OrderedList
        | NodeKind::Panel
        | NodeKind::Paragraph
        | NodeKind::Table
        | NodeKind::Media => NodeClass::Parent,
        NodeKind::Text
        | NodeKind::ListItem
        | NodeKind::TableRow
        | NodeKind::TableHeader
        | NodeKind::TableCell => NodeClass::Child,
        NodeKind::InlineCard
        | NodeKind::Emoji
        | NodeKind::Mention
        | NodeKind::HardBreak
        | NodeKind::Unrecognized(_) => NodeClass::Unknown,
    }
}

/// Classify a raw type tag as found in JSON.
pub fn classify_tag(tag: &str) -> NodeClass {
    classify(&NodeKind::from(tag))
}
