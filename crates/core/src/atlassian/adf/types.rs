//! Document model for ADF (Atlassian Document Format) trees.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::AdfError;

/// Attribute map attached to nodes and marks.
pub type Attrs = Map<String, Value>;

/// Root type tag every ADF document carries.
pub const DOC_TYPE: &str = "doc";

/// Node type tag.
///
/// Tags outside the known vocabulary are kept verbatim in
/// [`NodeKind::Unrecognized`] so newer documents still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Blockquote,
    BulletList,
    CodeBlock,
    Heading,
    OrderedList,
    Panel,
    Paragraph,
    Table,
    Media,
    Text,
    ListItem,
    TableRow,
    TableHeader,
    TableCell,
    InlineCard,
    Emoji,
    Mention,
    HardBreak,
    Unrecognized(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Blockquote => "blockquote",
            NodeKind::BulletList => "bulletList",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::Heading => "heading",
            NodeKind::OrderedList => "orderedList",
            NodeKind::Panel => "panel",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Table => "table",
            NodeKind::Media => "media",
            NodeKind::Text => "text",
            NodeKind::ListItem => "listItem",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableHeader => "tableHeader",
            NodeKind::TableCell => "tableCell",
            NodeKind::InlineCard => "inlineCard",
            NodeKind::Emoji => "emoji",
            NodeKind::Mention => "mention",
            NodeKind::HardBreak => "hardBreak",
            NodeKind::Unrecognized(tag) => tag,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "blockquote" => NodeKind::Blockquote,
            "bulletList" => NodeKind::BulletList,
            "codeBlock" => NodeKind::CodeBlock,
            "heading" => NodeKind::Heading,
            "orderedList" => NodeKind::OrderedList,
            "panel" => NodeKind::Panel,
            "paragraph" => NodeKind::Paragraph,
            "table" => NodeKind::Table,
            "media" => NodeKind::Media,
            "text" => NodeKind::Text,
            "listItem" => NodeKind::ListItem,
            "tableRow" => NodeKind::TableRow,
            "tableHeader" => NodeKind::TableHeader,
            "tableCell" => NodeKind::TableCell,
            "inlineCard" => NodeKind::InlineCard,
            "emoji" => NodeKind::Emoji,
            "mention" => NodeKind::Mention,
            "hardBreak" => NodeKind::HardBreak,
            other => NodeKind::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        NodeKind::from(tag.as_str())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mark type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkKind {
    Em,
    Link,
    Code,
    Strike,
    Strong,
    Unrecognized(String),
}

impl MarkKind {
    pub fn as_str(&self) -> &str {
        match self {
            MarkKind::Em => "em",
            MarkKind::Link => "link",
            MarkKind::Code => "code",
            MarkKind::Strike => "strike",
            MarkKind::Strong => "strong",
            MarkKind::Unrecognized(tag) => tag,
        }
    }
}

impl From<&str> for MarkKind {
    fn from(tag: &str) -> Self {
        match tag {
            "em" => MarkKind::Em,
            "link" => MarkKind::Link,
            "code" => MarkKind::Code,
            "strike" => MarkKind::Strike,
            "strong" => MarkKind::Strong,
            other => MarkKind::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for MarkKind {
    fn from(tag: String) -> Self {
        MarkKind::from(tag.as_str())
    }
}

impl From<MarkKind> for String {
    fn from(kind: MarkKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for MarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Root of an ADF tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "type", default = "default_doc_type")]
    pub doc_type: String,
    #[serde(default)]
    pub content: Vec<Node>,
}

fn default_version() -> u32 {
    1
}

fn default_doc_type() -> String {
    DOC_TYPE.to_string()
}

impl Default for Document {
    fn default() -> Self {
        Document::new(Vec::new())
    }
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Document {
            version: default_version(),
            doc_type: default_doc_type(),
            content,
        }
    }

    /// Decode a document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, AdfError> {
        let doc: Document = serde_json::from_str(json)?;
        doc.validate()
    }

    /// Decode a document from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, AdfError> {
        let doc: Document = serde_json::from_value(value)?;
        doc.validate()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn validate(self) -> Result<Self, AdfError> {
        if self.doc_type != DOC_TYPE {
            return Err(AdfError::NotADocument(self.doc_type));
        }
        Ok(self)
    }
}

/// A single element of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl Node {
    pub fn new(kind: NodeKind, content: Vec<Node>) -> Self {
        Node {
            kind,
            content,
            attrs: None,
            text: None,
            marks: Vec::new(),
        }
    }

    /// A `text` node carrying `marks` in the given order.
    pub fn text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Node {
            kind: NodeKind::Text,
            content: Vec::new(),
            attrs: None,
            text: Some(text.into()),
            marks,
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.as_ref().and_then(|attrs| attrs.get(key))
    }

    /// String attribute, skipped when missing or not a string.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attr(key).and_then(Value::as_str)
    }

    /// Heading level, falling back to level 1 when absent or out of range.
    pub fn heading_level(&self) -> HeadingLevel {
        self.attr("level")
            .and_then(Value::as_u64)
            .and_then(|level| u8::try_from(level).ok())
            .and_then(|level| HeadingLevel::try_from(level).ok())
            .unwrap_or(HeadingLevel::H1)
    }

    pub fn panel_type(&self) -> Option<PanelType> {
        self.attr_str("panelType").and_then(PanelType::parse)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.content.iter().map(Node::count).sum::<usize>()
    }
}

/// Inline decoration applied to a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Mark { kind, attrs: None }
    }

    pub fn link(href: impl Into<String>) -> Self {
        let mut attrs = Attrs::new();
        attrs.insert("href".to_string(), Value::String(href.into()));
        Mark {
            kind: MarkKind::Link,
            attrs: Some(attrs),
        }
    }

    /// Link target: `href`, or `url` for older payloads.
    pub fn href(&self) -> Option<&str> {
        let attrs = self.attrs.as_ref()?;
        attrs
            .get("href")
            .and_then(Value::as_str)
            .or_else(|| attrs.get("url").and_then(Value::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("heading level must be between 1 and 6")]
pub struct InvalidHeadingLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Heading level 1 -- the fallback for missing or invalid levels.
    pub const H1: Self = HeadingLevel(1);

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=6).contains(&value) {
            Ok(HeadingLevel(value))
        } else {
            Err(InvalidHeadingLevel)
        }
    }
}

/// Semantic color category of a `panel` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelType {
    Info,
    Note,
    Error,
    Success,
    Warning,
}

impl PanelType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "info" => Some(PanelType::Info),
            "note" => Some(PanelType::Note),
            "error" => Some(PanelType::Error),
            "success" => Some(PanelType::Success),
            "warning" => Some(PanelType::Warning),
            _ => None,
        }
    }

    /// Background color used by the wiki `{panel}` macro.
    pub fn background_color(self) -> &'static str {
        match self {
            PanelType::Info => "#deebff",
            PanelType::Note => "#eae6ff",
            PanelType::Error => "#ffebe6",
            PanelType::Success => "#e3fcef",
            PanelType::Warning => "#fffae6",
        }
    }
}
