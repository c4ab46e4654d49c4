//! Jira wiki-markup rendering strategy.
//!
//! Wraps [`MarkdownTranslator`] and swaps in wiki macros for selected node
//! types. Only `panel` is overridden out of the box; more hooks can be
//! registered with [`WikiMarkupTranslator::with_open_hook`] and
//! [`WikiMarkupTranslator::with_close_hook`].

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::markdown::MarkdownTranslator;
use super::translator::{trim_leaf, Tag, TagOpenerCloser};
use super::types::{Node, NodeKind};

/// Override for the opening text of a node type.
pub type OpenHook = Box<dyn Fn(&Node, usize) -> String>;

/// Override for the closing text of a node type.
pub type CloseHook = Box<dyn Fn(&Node) -> String>;

pub struct WikiMarkupTranslator {
    base: MarkdownTranslator,
    open_hooks: HashMap<NodeKind, OpenHook>,
    close_hooks: HashMap<NodeKind, CloseHook>,
}

impl Default for WikiMarkupTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WikiMarkupTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WikiMarkupTranslator")
            .field("base", &self.base)
            .field("open_hooks", &self.open_hooks.keys().collect::<Vec<_>>())
            .field("close_hooks", &self.close_hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl WikiMarkupTranslator {
    pub fn new() -> Self {
        WikiMarkupTranslator {
            base: MarkdownTranslator::new(),
            open_hooks: HashMap::new(),
            close_hooks: HashMap::new(),
        }
        .with_open_hook(NodeKind::Panel, open_panel)
        .with_close_hook(NodeKind::Panel, close_panel)
    }

    /// Replace the opening text for `kind`, overriding any earlier hook.
    pub fn with_open_hook<F>(mut self, kind: NodeKind, hook: F) -> Self
    where
        F: Fn(&Node, usize) -> String + 'static,
    {
        self.open_hooks.insert(kind, Box::new(hook));
        self
    }

    /// Replace the closing text for `kind`, overriding any earlier hook.
    pub fn with_close_hook<F>(mut self, kind: NodeKind, hook: F) -> Self
    where
        F: Fn(&Node) -> String + 'static,
    {
        self.close_hooks.insert(kind, Box::new(hook));
        self
    }

    pub fn reset(&mut self) {
        self.base.reset();
    }
}

impl TagOpenerCloser for WikiMarkupTranslator {
    fn open(&mut self, tag: Tag<'_>, depth: usize) -> String {
        if let Tag::Node(node) = tag {
            if let Some(hook) = self.open_hooks.get(&node.kind) {
                return hook(node, depth);
            }
        }
        self.base.open(tag, depth)
    }

    fn close(&mut self, tag: Tag<'_>) -> String {
        if let Tag::Node(node) = tag {
            if let Some(hook) = self.close_hooks.get(&node.kind) {
                return hook(node);
            }
        }
        self.base.close(tag)
    }

    /// Leaf text is trimmed but not escaped.
    fn leaf_text(&mut self, text: &str) -> String {
        trim_leaf(text).to_string()
    }
}

/// `{panel:bgColor=#deebff|title=Note}`
fn open_panel(node: &Node, _depth: usize) -> String {
    let mut params: Vec<String> = Vec::new();

    if let Some(panel_type) = node.panel_type() {
        params.push(format!("bgColor={}", panel_type.background_color()));
    }

    if let Some(attrs) = &node.attrs {
        let mut extra: Vec<(&String, &Value)> = attrs
            .iter()
            .filter(|(key, _)| key.as_str() != "panelType")
            .collect();
        extra.sort_by(|a, b| a.0.cmp(b.0));

        for (key, value) in extra {
            match value {
                Value::String(s) => params.push(format!("{key}={s}")),
                Value::Null => {}
                other => params.push(format!("{key}={other}")),
            }
        }
    }

    if params.is_empty() {
        "{panel}\n".to_string()
    } else {
        format!("{{panel:{}}}\n", params.join("|"))
    }
}

fn close_panel(_node: &Node) -> String {
    "{panel}\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlassian::adf::translator::Translator;
    use crate::atlassian::adf::types::Document;
    use serde_json::json;

    fn render(value: serde_json::Value) -> String {
        let doc = Document::from_value(value).unwrap();
        Translator::new(&doc, WikiMarkupTranslator::new()).translate()
    }

    fn panel(attrs: serde_json::Value, text: &str) -> serde_json::Value {
        json!({
            "type": "doc",
            "content": [{
                "type": "panel",
                "attrs": attrs,
                "content": [{"type": "paragraph", "content": [{"type": "text", "text": text}]}]
            }]
        })
    }

    #[test]
    fn test_info_panel() {
        // Act
        let out = render(panel(json!({"panelType": "info"}), "Hello"));

        // Assert
        assert_eq!(out, "{panel:bgColor=#deebff}\n Hello \n\n{panel}\n");
    }

    #[test]
    fn test_error_panel_delimiters_are_balanced() {
        let out = render(panel(json!({"panelType": "error"}), "Boom"));

        assert!(out.contains("bgColor=#ffebe6"));
        assert!(out.starts_with("{panel:"));
        assert_eq!(out.matches("{panel:").count(), 1);
        assert_eq!(out.matches("{panel}").count(), 1);
        assert!(out.ends_with("{panel}\n"));
    }

    #[test]
    fn test_panel_colors() {
        for (panel_type, color) in [
            ("note", "#eae6ff"),
            ("success", "#e3fcef"),
            ("warning", "#fffae6"),
        ] {
            let out = render(panel(json!({"panelType": panel_type}), "x"));
            assert!(out.starts_with(&format!("{{panel:bgColor={color}}}\n")), "{out}");
        }
    }

    #[test]
    fn test_extra_panel_attrs_are_appended_sorted() {
        let out = render(panel(
            json!({"panelType": "info", "title": "Heads up", "borderWidth": 2}),
            "x",
        ));

        assert!(out.starts_with("{panel:bgColor=#deebff|borderWidth=2|title=Heads up}\n"));
    }

    #[test]
    fn test_unknown_panel_type_omits_color() {
        let out = render(panel(json!({"panelType": "custom"}), "x"));
        assert_eq!(out, "{panel}\n x \n\n{panel}\n");
    }

    #[test]
    fn test_other_nodes_fall_through_to_markdown() {
        let out = render(json!({
            "type": "doc",
            "content": [
                {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "H2"}]},
                {"type": "paragraph", "content": [{"type": "text", "text": "Bold", "marks": [{"type": "strong"}]}]}
            ]
        }));

        assert_eq!(out, "## H2\n **Bold** \n\n");
    }

    #[test]
    fn test_angle_brackets_stay_literal() {
        let out = render(json!({
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "a <b> c"}]},
                {"type": "codeBlock", "content": [{"type": "text", "text": "fn f() -> Vec<u8>"}]}
            ]
        }));

        assert_eq!(out, " a <b> c \n\n```\nfn f() -> Vec<u8>\n```\n");
    }

    #[test]
    fn test_custom_hook_overrides_base() {
        let doc = Document::from_value(json!({
            "type": "doc",
            "content": [{"type": "blockquote", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "quoted"}]}
            ]}]
        }))
        .unwrap();
        let strategy = WikiMarkupTranslator::new()
            .with_open_hook(NodeKind::Blockquote, |_, _| "{quote}\n".to_string())
            .with_close_hook(NodeKind::Blockquote, |_| "{quote}\n".to_string());

        let out = Translator::new(&doc, strategy).translate();

        assert_eq!(out, "{quote}\n quoted \n\n{quote}\n");
    }
}
