//! In-place text substitution across a document tree.

use super::types::{Document, Node, NodeKind};

impl Document {
    /// Replace every occurrence of `old` with `new` in all text nodes.
    ///
    /// Marks, attributes and the tree shape are left untouched. An empty
    /// `old` matches nothing.
    pub fn replace_all(&mut self, old: &str, new: &str) {
        if old.is_empty() {
            return;
        }

        for node in &mut self.content {
            replace_in_node(node, old, new);
        }
    }
}

/// [`Document::replace_all`] for a possibly absent document.
pub fn replace_all(doc: Option<&mut Document>, old: &str, new: &str) {
    if let Some(doc) = doc {
        doc.replace_all(old, new);
    }
}

fn replace_in_node(node: &mut Node, old: &str, new: &str) {
    for child in &mut node.content {
        replace_in_node(child, old, new);
    }

    if node.kind != NodeKind::Text {
        return;
    }

    if let Some(text) = node.text.as_mut() {
        if text.contains(old) {
            *text = text.replace(old, new);
        }
    }
}
