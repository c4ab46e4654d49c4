use serde::Serialize;

use super::classify::{classify, NodeClass};
use super::types::{Document, Node};

/// One row of a flattened document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineEntry {
    pub depth: usize,
    pub kind: String,
    pub class: NodeClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<String>,
}

/// Flatten a document in pre-order, recording each node's depth and class.
pub fn outline(doc: &Document) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    for node in &doc.content {
        collect(node, 0, &mut entries);
    }
    entries
}

fn collect(node: &Node, depth: usize, entries: &mut Vec<OutlineEntry>) {
    entries.push(OutlineEntry {
        depth,
        kind: node.kind.to_string(),
        class: classify(&node.kind),
        text: node.text.clone(),
        marks: node.marks.iter().map(|m| m.kind.to_string()).collect(),
    });

    for child in &node.content {
        collect(child, depth + 1, entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outline_is_preorder_with_depths() {
        let doc = Document::from_value(json!({
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "a", "marks": [{"type": "em"}]}
                ]},
                {"type": "rule"}
            ]
        }))
        .unwrap();

        let entries = outline(&doc);

        assert_eq!(entries.len(), 3);
        assert_eq!((entries[0].depth, entries[0].kind.as_str()), (0, "paragraph"));
        assert_eq!(entries[0].class, NodeClass::Parent);
        assert_eq!((entries[1].depth, entries[1].kind.as_str()), (1, "text"));
        assert_eq!(entries[1].text.as_deref(), Some("a"));
        assert_eq!(entries[1].marks, vec!["em"]);
        assert_eq!(entries[2].class, NodeClass::Unknown);
    }

    #[test]
    fn test_outline_of_empty_document() {
        assert!(outline(&Document::default()).is_empty());
    }
}
