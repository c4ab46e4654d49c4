//! Markdown rendering strategy.

use super::translator::{sanitize, trim_leaf, Tag, TagOpenerCloser};
use super::types::{Mark, MarkKind, Node, NodeKind};

/// Indentation unit for nested list items.
const LIST_INDENT: &str = "\t";

/// Renders ADF as CommonMark-flavoured Markdown for terminal display.
///
/// The strategy is stateful: lists and tables are tracked across the calls
/// of one translation. Build a fresh instance per translation or call
/// [`MarkdownTranslator::reset`] in between.
#[derive(Debug, Default)]
pub struct MarkdownTranslator {
    state: RenderState,
}

#[derive(Debug, Default)]
struct RenderState {
    list: ListState,
    table: TableState,
    /// Open paragraphs enclosing the current node.
    paragraphs: usize,
    /// Open code blocks enclosing the current node.
    code_blocks: usize,
}

#[derive(Debug, Clone, Copy)]
struct ListFrame {
    ordered: bool,
    depth: usize,
}

#[derive(Debug, Default)]
struct ListState {
    frames: Vec<ListFrame>,
    /// Ordered item counter. It never restarts within one translation, so
    /// separate ordered lists continue each other's numbering.
    counter: usize,
}

impl ListState {
    fn enter(&mut self, ordered: bool, depth: usize) {
        self.frames.push(ListFrame { ordered, depth });
    }

    fn leave(&mut self) {
        self.frames.pop();
    }

    fn item_prefix(&mut self, depth: usize) -> String {
        let (Some(outer), Some(active)) = (self.frames.first(), self.frames.last()) else {
            return "- ".to_string();
        };

        let indent = LIST_INDENT.repeat(depth.saturating_sub(outer.depth + 1) / 2);

        if active.ordered {
            self.counter += 1;
            format!("{indent}{}. ", self.counter)
        } else {
            format!("{indent}- ")
        }
    }
}

#[derive(Debug, Default)]
struct TableState {
    rows: usize,
    header_cols: usize,
    row_cols: usize,
    separator_pending: bool,
    /// Open cells enclosing the current node.
    cells: usize,
}

impl TableState {
    fn start() -> Self {
        TableState {
            separator_pending: true,
            ..TableState::default()
        }
    }

    fn open_row(&mut self) {
        self.rows += 1;
        self.row_cols = 0;
    }

    fn open_cell(&mut self, header: bool) -> &'static str {
        if header && self.rows <= 1 {
            self.header_cols += 1;
        }
        self.row_cols += 1;
        self.cells += 1;

        if self.row_cols > 1 {
            "|"
        } else {
            ""
        }
    }

    fn close_cell(&mut self) {
        self.cells = self.cells.saturating_sub(1);
    }

    fn close_row(&mut self) -> String {
        let mut out = String::from("\n");

        if self.separator_pending {
            self.separator_pending = false;

            let cols = if self.header_cols > 0 {
                self.header_cols
            } else {
                self.row_cols
            };
            if cols > 0 {
                out.push_str(&vec!["---"; cols].join(" | "));
                out.push('\n');
            }
        }

        out
    }
}

impl MarkdownTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all list and table state.
    pub fn reset(&mut self) {
        self.state = RenderState::default();
    }

    fn open_node(&mut self, node: &Node, depth: usize) -> String {
        match &node.kind {
            NodeKind::Blockquote => "> ".to_string(),
            NodeKind::CodeBlock => {
                self.state.code_blocks += 1;
                match node.attr_str("language") {
                    Some(language) if !language.is_empty() => format!("```{language}\n"),
                    _ => "```\n".to_string(),
                }
            }
            NodeKind::Heading => format!("{} ", "#".repeat(node.heading_level().as_u8() as usize)),
            NodeKind::BulletList => {
                self.state.list.enter(false, depth);
                String::new()
            }
            NodeKind::OrderedList => {
                self.state.list.enter(true, depth);
                String::new()
            }
            NodeKind::ListItem => self.state.list.item_prefix(depth),
            NodeKind::Paragraph => {
                self.state.paragraphs += 1;
                String::new()
            }
            NodeKind::Table => {
                self.state.table = TableState::start();
                "\n".to_string()
            }
            NodeKind::TableRow => {
                self.state.table.open_row();
                String::new()
            }
            NodeKind::TableHeader => self.state.table.open_cell(true).to_string(),
            NodeKind::TableCell => self.state.table.open_cell(false).to_string(),
            NodeKind::Text => self.run_padding(node).to_string(),
            NodeKind::Media => "[attachment]".to_string(),
            NodeKind::HardBreak => "\n\n".to_string(),
            NodeKind::Mention => {
                let name = node
                    .attr_str("text")
                    .or_else(|| node.attr_str("id"))
                    .unwrap_or_default();
                format!("@{}", name.trim_start_matches('@'))
            }
            NodeKind::Emoji => node
                .attr_str("text")
                .or_else(|| node.attr_str("shortName"))
                .unwrap_or_default()
                .to_string(),
            NodeKind::Panel | NodeKind::InlineCard => String::new(),
            NodeKind::Unrecognized(tag) => {
                log::debug!("skipping unrecognized node type {tag:?}");
                String::new()
            }
        }
    }

    fn close_node(&mut self, node: &Node) -> String {
        match &node.kind {
            NodeKind::Blockquote | NodeKind::Heading => "\n".to_string(),
            NodeKind::CodeBlock => {
                self.state.code_blocks = self.state.code_blocks.saturating_sub(1);
                "\n```\n".to_string()
            }
            NodeKind::BulletList | NodeKind::OrderedList => {
                self.state.list.leave();
                String::new()
            }
            NodeKind::Paragraph => {
                self.state.paragraphs = self.state.paragraphs.saturating_sub(1);
                if self.state.table.cells > 0 {
                    String::new()
                } else {
                    "\n\n".to_string()
                }
            }
            NodeKind::Table => {
                self.state.table = TableState::default();
                "\n".to_string()
            }
            NodeKind::TableRow => self.state.table.close_row(),
            NodeKind::TableHeader | NodeKind::TableCell => {
                self.state.table.close_cell();
                String::new()
            }
            NodeKind::Text => self.run_padding(node).to_string(),
            NodeKind::InlineCard => match node.attr_str("url") {
                Some(url) => format!(" {url} "),
                None => String::new(),
            },
            NodeKind::ListItem
            | NodeKind::Panel
            | NodeKind::Media
            | NodeKind::HardBreak
            | NodeKind::Mention
            | NodeKind::Emoji
            | NodeKind::Unrecognized(_) => String::new(),
        }
    }

    /// Plain runs inside a paragraph get the same surrounding space a
    /// marked run carries from its mark tokens.
    fn run_padding(&self, node: &Node) -> &'static str {
        let plain = node
            .marks
            .iter()
            .all(|mark| matches!(mark.kind, MarkKind::Unrecognized(_)));

        if plain && self.state.paragraphs > 0 {
            " "
        } else {
            ""
        }
    }
}

fn open_mark(mark: &Mark) -> &'static str {
    match mark.kind {
        MarkKind::Strong => " **",
        MarkKind::Em => " _",
        MarkKind::Code => " `",
        MarkKind::Strike => " ~",
        MarkKind::Link => " [",
        MarkKind::Unrecognized(_) => "",
    }
}

fn close_mark(mark: &Mark) -> String {
    match mark.kind {
        MarkKind::Strong => "** ".to_string(),
        MarkKind::Em => "_ ".to_string(),
        MarkKind::Code => "` ".to_string(),
        MarkKind::Strike => "~ ".to_string(),
        MarkKind::Link => format!("]({}) ", mark.href().unwrap_or_default()),
        MarkKind::Unrecognized(_) => String::new(),
    }
}

impl TagOpenerCloser for MarkdownTranslator {
    fn open(&mut self, tag: Tag<'_>, depth: usize) -> String {
        match tag {
            Tag::Node(node) => self.open_node(node, depth),
            Tag::Mark(mark) => open_mark(mark).to_string(),
        }
    }

    fn close(&mut self, tag: Tag<'_>) -> String {
        match tag {
            Tag::Node(node) => self.close_node(node),
            Tag::Mark(mark) => close_mark(mark),
        }
    }

    /// Angle brackets stay literal inside code blocks.
    fn leaf_text(&mut self, text: &str) -> String {
        if self.state.code_blocks > 0 {
            trim_leaf(text).to_string()
        } else {
            sanitize(text)
        }
    }
}
