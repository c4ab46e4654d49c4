//! Reading ADF payloads and writing results.

use std::fs;
use std::io::Read;
use std::path::Path;

use jira_core::atlassian::adf::Document;

use crate::prelude::{println, *};

fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

/// Read the whole input from `path`, or from stdin when `path` is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdin(Some(path)) => {
            log::debug!("Reading input from {}", path.display());
            fs::read_to_string(path).wrap_err_with(|| f!("Failed to read {}", path.display()))
        }
        _ => {
            log::debug!("Reading input from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(Error::from)?;
            Ok(buf)
        }
    }
}

/// Write `contents` to `path`, or to stdout when `path` is absent.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            log::debug!("Writing output to {}", path.display());
            fs::write(path, contents).wrap_err_with(|| f!("Failed to write {}", path.display()))
        }
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}

/// Decode raw JSON into an ADF document.
pub fn parse_document(raw: &str) -> Result<Document> {
    Document::from_json(raw).wrap_err("Failed to parse ADF document")
}
