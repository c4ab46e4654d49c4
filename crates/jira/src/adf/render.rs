//! Render ADF documents as text

use std::path::PathBuf;

use jira_core::atlassian::adf::{Dialect, DOC_TYPE};
use jira_core::atlassian::jira::extract_description;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::input::read_input;
use crate::prelude::{eprintln, println, *};

/// Options for rendering an ADF document
#[derive(Debug, clap::Args, Clone)]
pub struct RenderOptions {
    /// ADF JSON file, or a JSON string field ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Output dialect: markdown or wiki
    #[arg(long, short = 'f', env = "JIRA_RENDER_FORMAT")]
    pub format: Option<Dialect>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Output structure for the render command
#[derive(Debug, Serialize, PartialEq)]
pub struct RenderOutput {
    pub format: Dialect,
    pub content: Option<String>,
}

/// Render raw JSON input: an ADF document, or a plain string field.
pub fn render_data(raw: &str, dialect: Dialect) -> Result<RenderOutput> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| eyre!("Failed to parse input as JSON: {}", e))?;

    match &value {
        Value::String(_) => {}
        Value::Object(map) if map.get("type").and_then(Value::as_str) == Some(DOC_TYPE) => {}
        _ => {
            return Err(eyre!(
                "Input must be an ADF document (\"type\": \"doc\") or a JSON string"
            ))
        }
    }

    let content = extract_description(Some(value), dialect)?;

    Ok(RenderOutput {
        format: dialect,
        content,
    })
}

/// Handle the render command
pub fn handler(options: RenderOptions, config: &Config) -> Result<()> {
    let dialect = options.format.unwrap_or(config.render.format);
    log::debug!("Rendering as {}", dialect);

    let raw = read_input(options.file.as_deref())?;
    let output = render_data(&raw, dialect)?;

    if options.json {
        println!("{}", to_json(&output, config.output.pretty)?);
        return Ok(());
    }

    match output.content {
        Some(content) => println!("{}", content),
        None => eprintln!("(empty document)"),
    }

    Ok(())
}
