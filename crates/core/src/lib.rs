//! Core library for jira
//!
//! This crate implements the **Functional Core** of the jira application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`jira_core`** (this crate): Pure transformation functions with zero I/O
//! - **`jira`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! The one deliberate exception is the rendering strategies in
//! [`atlassian::adf`], which keep list and table counters while a single
//! document is being translated.
//!
//! # Module Organization
//!
//! - [`atlassian::adf`]: ADF document model, translator engine, Markdown and
//!   wiki-markup strategies, structural find/replace
//! - [`atlassian::jira`]: Jira field transformations built on top of the engine
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use jira_core::atlassian::adf::{Document, MarkdownTranslator, Translator};
//!
//! // Create fixture data (no HTTP required)
//! let doc = Document::from_json(r#"{"type":"doc","version":1,"content":[]}"#)?;
//!
//! // Render with a fresh strategy
//! let markdown = Translator::new(&doc, MarkdownTranslator::new()).translate();
//!
//! assert_eq!(markdown, "");
//! ```

pub mod atlassian;
