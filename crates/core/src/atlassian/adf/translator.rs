//! Depth-first walker that renders a [`Document`] through a pluggable strategy.

use super::classify::{classify, NodeClass};
use super::types::{Document, Mark, Node, NodeKind};

/// Anything a strategy is asked to open or close.
#[derive(Debug, Clone, Copy)]
pub enum Tag<'a> {
    Node(&'a Node),
    Mark(&'a Mark),
}

impl<'a> Tag<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Tag::Node(node) => node.kind.as_str(),
            Tag::Mark(mark) => mark.kind.as_str(),
        }
    }
}

/// Rendering strategy: the text emitted when entering and leaving a tag.
///
/// Implementations may keep state across calls (list numbering, table
/// columns), so one instance must not serve two translations at once.
pub trait TagOpenerCloser {
    fn open(&mut self, tag: Tag<'_>, depth: usize) -> String;
    fn close(&mut self, tag: Tag<'_>) -> String;

    /// Leaf text as it appears in the output. Defaults to [`sanitize`].
    fn leaf_text(&mut self, text: &str) -> String {
        sanitize(text)
    }
}

impl<T: TagOpenerCloser + ?Sized> TagOpenerCloser for Box<T> {
    fn open(&mut self, tag: Tag<'_>, depth: usize) -> String {
        (**self).open(tag, depth)
    }

    fn close(&mut self, tag: Tag<'_>) -> String {
        (**self).close(tag)
    }

    fn leaf_text(&mut self, text: &str) -> String {
        (**self).leaf_text(text)
    }
}

impl<T: TagOpenerCloser + ?Sized> TagOpenerCloser for &mut T {
    fn open(&mut self, tag: Tag<'_>, depth: usize) -> String {
        (**self).open(tag, depth)
    }

    fn close(&mut self, tag: Tag<'_>) -> String {
        (**self).close(tag)
    }

    fn leaf_text(&mut self, text: &str) -> String {
        (**self).leaf_text(text)
    }
}

/// Walks a document and collects strategy output.
pub struct Translator<'a, T> {
    doc: Option<&'a Document>,
    strategy: T,
    buf: String,
}

impl<'a, T: TagOpenerCloser> Translator<'a, T> {
    pub fn new(doc: &'a Document, strategy: T) -> Self {
        Self::optional(Some(doc), strategy)
    }

    /// Translator over a possibly absent document; translates to `""` when absent.
    pub fn optional(doc: Option<&'a Document>, strategy: T) -> Self {
        Translator {
            doc,
            strategy,
            buf: String::new(),
        }
    }

    /// Render the whole document.
    ///
    /// Output is only repeatable across calls when the strategy keeps no
    /// state between them.
    pub fn translate(&mut self) -> String {
        self.buf.clear();

        let Some(doc) = self.doc else {
            return String::new();
        };

        log::trace!("translating document with {} top-level nodes", doc.content.len());

        for node in &doc.content {
            self.visit(node, 0);
        }

        std::mem::take(&mut self.buf)
    }

    pub fn into_strategy(self) -> T {
        self.strategy
    }

    fn visit(&mut self, node: &Node, depth: usize) {
        self.buf.push_str(&self.strategy.open(Tag::Node(node), depth));

        for child in &node.content {
            self.visit(child, depth + 1);
        }

        if classify(&node.kind) == NodeClass::Child {
            self.render_leaf(node, depth);
        }

        self.buf.push_str(&self.strategy.close(Tag::Node(node)));
    }

    fn render_leaf(&mut self, node: &Node, depth: usize) {
        let marks: &[Mark] = if node.kind == NodeKind::Text {
            &node.marks
        } else {
            &[]
        };

        let mut leaf = String::new();
        for mark in marks {
            leaf.push_str(&self.strategy.open(Tag::Mark(mark), depth));
        }
        leaf.push_str(&self.strategy.leaf_text(node.text.as_deref().unwrap_or_default()));
        for mark in marks.iter().rev() {
            leaf.push_str(&self.strategy.close(Tag::Mark(mark)));
        }

        self.buf.push_str(&leaf);
    }
}

/// Trim surrounding whitespace and trailing newlines from leaf text.
pub fn trim_leaf(text: &str) -> &str {
    text.trim().trim_end_matches('\n')
}

/// Clean up leaf text for terminal display.
///
/// Angle brackets are swapped for look-alike characters so the terminal
/// markdown renderer does not read them as HTML.
pub fn sanitize(text: &str) -> String {
    trim_leaf(text).replace('<', "❬").replace('>', "❭")
}
