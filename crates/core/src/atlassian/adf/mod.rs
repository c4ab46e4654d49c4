//! ADF (Atlassian Document Format) translation engine
//!
//! Jira stores issue descriptions and comments as ADF, a JSON tree of typed
//! nodes. This module decodes that tree, renders it through a pluggable
//! open/close strategy, and rewrites text in place.
//!
//! - [`types`]: the document model
//! - [`classify`]: parent/child/unknown classification of node tags
//! - [`translator`]: the depth-first walker and the strategy trait
//! - [`markdown`]: Markdown strategy for terminal display
//! - [`wiki`]: Jira wiki-markup strategy for re-submitting content
//! - [`replace`]: structural find/replace
//! - [`outline`]: flattened tree listing
//!
//! ```rust,ignore
//! use jira_core::atlassian::adf::{translate, Dialect, Document};
//!
//! let mut doc = Document::from_json(raw)?;
//! doc.replace_all("PROJ-1", "PROJ-2");
//! let markdown = translate(Some(&doc), Dialect::Markdown);
//! ```

pub mod classify;
pub mod markdown;
pub mod outline;
pub mod replace;
pub mod translator;
pub mod types;
pub mod wiki;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use classify::{classify, classify_tag, NodeClass};
pub use markdown::MarkdownTranslator;
pub use outline::{outline, OutlineEntry};
pub use replace::replace_all;
pub use translator::{sanitize, trim_leaf, Tag, TagOpenerCloser, Translator};
pub use types::{
    Attrs, Document, HeadingLevel, Mark, MarkKind, Node, NodeKind, PanelType, DOC_TYPE,
};
pub use wiki::WikiMarkupTranslator;

#[derive(Debug, Error)]
pub enum AdfError {
    #[error("Invalid ADF document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a document of type \"doc\", found \"{0}\"")]
    NotADocument(String),
}

/// Output dialect of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Dialect {
    #[default]
    Markdown,
    Wiki,
}

impl Dialect {
    /// A fresh strategy for this dialect.
    pub fn strategy(self) -> Box<dyn TagOpenerCloser> {
        match self {
            Dialect::Markdown => Box::new(MarkdownTranslator::new()),
            Dialect::Wiki => Box::new(WikiMarkupTranslator::new()),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Markdown => write!(f, "markdown"),
            Dialect::Wiki => write!(f, "wiki"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown dialect '{0}'. Expected 'markdown' or 'wiki'")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Dialect::Markdown),
            "wiki" | "jira" => Ok(Dialect::Wiki),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = UnknownDialect;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Render `doc` in `dialect` with a freshly built strategy.
pub fn translate(doc: Option<&Document>, dialect: Dialect) -> String {
    Translator::optional(doc, dialect.strategy()).translate()
}
