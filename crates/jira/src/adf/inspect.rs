//! Inspect the structure of ADF documents

use std::path::PathBuf;

use colored::Colorize;
use jira_core::atlassian::adf::{outline, NodeClass, OutlineEntry};
use prettytable::row;

use crate::config::Config;
use crate::input::{parse_document, read_input};
use crate::prelude::{println, *};

/// Longest text preview shown in the table
const PREVIEW_CHARS: usize = 48;

/// Options for inspecting an ADF document
#[derive(Debug, clap::Args, Clone)]
pub struct InspectOptions {
    /// ADF JSON file ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn preview(text: &str) -> String {
    let flat = text.replace('\n', "⏎");
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        f!("{}…", cut)
    } else {
        flat
    }
}

fn colored_class(class: NodeClass) -> String {
    match class {
        NodeClass::Parent => class.to_string().blue().to_string(),
        NodeClass::Child => class.to_string().green().to_string(),
        NodeClass::Unknown => class.to_string().bright_black().to_string(),
    }
}

/// Build the outline table shown by `jira adf inspect`
pub fn build_table(entries: &[OutlineEntry]) -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(row![
        "Type".bold().cyan(),
        "Class".bold().cyan(),
        "Text".bold().cyan(),
        "Marks".bold().cyan()
    ]);

    for entry in entries {
        let kind = f!("{}{}", "  ".repeat(entry.depth), entry.kind);
        let text = entry.text.as_deref().map(preview).unwrap_or_default();
        table.add_row(row![
            kind,
            colored_class(entry.class),
            text.bright_white(),
            entry.marks.join(", ").yellow()
        ]);
    }

    table
}

/// Handle the inspect command
pub fn handler(options: InspectOptions, config: &Config) -> Result<()> {
    let raw = read_input(options.file.as_deref())?;
    let doc = parse_document(&raw)?;
    let entries = outline(&doc);

    if options.json {
        println!("{}", to_json(&entries, config.output.pretty)?);
        return Ok(());
    }

    println!(
        "\n{} {} (version {}, {} nodes)\n",
        "Document".bold().cyan(),
        doc.doc_type.bright_white(),
        doc.version,
        entries.len()
    );

    if entries.is_empty() {
        println!("{}", "(empty)".bright_black());
    } else {
        build_table(&entries).printstd();
    }

    println!();

    Ok(())
}
