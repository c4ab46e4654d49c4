//! Structural find/replace over ADF documents

use std::path::PathBuf;

use jira_core::atlassian::adf::{outline, translate, Dialect, Document, NodeKind};

use crate::config::Config;
use crate::input::{parse_document, read_input, write_output};
use crate::prelude::*;

/// Options for replacing text in an ADF document
#[derive(Debug, clap::Args, Clone)]
pub struct ReplaceOptions {
    /// ADF JSON file ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Text to search for
    #[arg(long, requires = "new")]
    pub old: Option<String>,

    /// Replacement text
    #[arg(long, requires = "old")]
    pub new: Option<String>,

    /// Extra OLD=NEW pairs, applied in order after --old/--new
    #[arg(long = "replace", short = 'r', value_name = "OLD=NEW")]
    pub replacements: Vec<String>,

    /// Write the result to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the result rendered in this dialect instead of ADF JSON
    #[arg(long)]
    pub render: Option<Dialect>,
}

/// Parse an `OLD=NEW` pair. Only the first `=` separates the two sides.
pub fn parse_replacement(pair: &str) -> std::result::Result<(String, String), Error> {
    let (old, new) = pair.split_once('=').ok_or_else(|| {
        Error::InvalidArgument(f!("Replacement '{}' must have the form OLD=NEW", pair))
    })?;

    if old.is_empty() {
        return Err(Error::InvalidArgument(f!(
            "Replacement '{}' has an empty search text",
            pair
        )));
    }

    Ok((old.to_string(), new.to_string()))
}

/// Collect the replacement pairs from the command options, in order.
pub fn collect_replacements(
    options: &ReplaceOptions,
) -> std::result::Result<Vec<(String, String)>, Error> {
    let mut pairs = Vec::new();

    if let (Some(old), Some(new)) = (&options.old, &options.new) {
        if old.is_empty() {
            return Err(Error::InvalidArgument(
                "--old must not be empty".to_string(),
            ));
        }
        pairs.push((old.clone(), new.clone()));
    }

    for pair in &options.replacements {
        pairs.push(parse_replacement(pair)?);
    }

    if pairs.is_empty() {
        return Err(Error::InvalidArgument(
            "Nothing to replace: pass --old/--new or --replace OLD=NEW".to_string(),
        ));
    }

    Ok(pairs)
}

fn count_occurrences(doc: &Document, needle: &str) -> usize {
    outline(doc)
        .iter()
        .filter(|entry| entry.kind == NodeKind::Text.as_str())
        .filter_map(|entry| entry.text.as_deref())
        .map(|text| text.matches(needle).count())
        .sum()
}

/// Apply every pair in order and return how many occurrences were replaced.
pub fn apply_replacements(doc: &mut Document, pairs: &[(String, String)]) -> usize {
    let mut total = 0;

    for (old, new) in pairs {
        let found = count_occurrences(doc, old);
        log::debug!("Replacing {} occurrence(s) of {:?} with {:?}", found, old, new);
        doc.replace_all(old, new);
        total += found;
    }

    total
}

/// Handle the replace command
pub fn handler(options: ReplaceOptions, config: &Config) -> Result<()> {
    let pairs = collect_replacements(&options)?;

    let raw = read_input(options.file.as_deref())?;
    let mut doc = parse_document(&raw)?;

    let replaced = apply_replacements(&mut doc, &pairs);
    log::info!("Replaced {} occurrence(s)", replaced);

    let contents = match options.render {
        Some(dialect) => translate(Some(&doc), dialect),
        None => to_json(&doc, config.output.pretty)?,
    };

    write_output(options.output.as_deref(), &contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> ReplaceOptions {
        ReplaceOptions {
            file: None,
            old: None,
            new: None,
            replacements: vec![],
            output: None,
            render: None,
        }
    }

    fn fixture() -> Document {
        Document::from_value(json!({
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "Clone of PROJ-1: PROJ-1 is broken"},
                    {"type": "text", "text": "owner: alice", "marks": [{"type": "em"}]}
                ]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_replacement() {
        assert_eq!(
            parse_replacement("a=b").unwrap(),
            ("a".to_string(), "b".to_string())
        );
        assert_eq!(
            parse_replacement("x==y").unwrap(),
            ("x".to_string(), "=y".to_string())
        );
        assert_eq!(
            parse_replacement("gone=").unwrap(),
            ("gone".to_string(), String::new())
        );
        assert!(matches!(
            parse_replacement("novalue"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_replacement("=b"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_collect_replacements_order() {
        let mut opts = options();
        opts.old = Some("a".to_string());
        opts.new = Some("b".to_string());
        opts.replacements = vec!["c=d".to_string(), "e=f".to_string()];

        let pairs = collect_replacements(&opts).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "b".to_string()),
                ("c".to_string(), "d".to_string()),
                ("e".to_string(), "f".to_string()),
            ]
        );
    }

    #[test]
    fn test_collect_replacements_requires_something() {
        assert!(collect_replacements(&options()).is_err());

        let mut opts = options();
        opts.old = Some(String::new());
        opts.new = Some("x".to_string());
        assert!(collect_replacements(&opts).is_err());
    }

    #[test]
    fn test_apply_replacements_counts_and_rewrites() {
        // Arrange
        let mut doc = fixture();
        let pairs = vec![
            ("PROJ-1".to_string(), "PROJ-9".to_string()),
            ("alice".to_string(), "bob".to_string()),
        ];

        // Act
        let replaced = apply_replacements(&mut doc, &pairs);

        // Assert
        assert_eq!(replaced, 3);
        let paragraph = &doc.content[0];
        assert_eq!(
            paragraph.content[0].text.as_deref(),
            Some("Clone of PROJ-9: PROJ-9 is broken")
        );
        assert_eq!(paragraph.content[1].text.as_deref(), Some("owner: bob"));
        assert_eq!(paragraph.content[1].marks.len(), 1);
    }

    #[test]
    fn test_count_only_covers_text_nodes() {
        // Arrange: a mention carrying stray text that replace_all leaves alone
        let mut doc = Document::from_value(json!({
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [
                    {"type": "mention", "text": "alice", "attrs": {"id": "alice"}},
                    {"type": "text", "text": "ping alice"}
                ]}
            ]
        }))
        .unwrap();

        // Act
        let replaced = apply_replacements(&mut doc, &[("alice".to_string(), "bob".to_string())]);

        // Assert
        assert_eq!(replaced, 1);
        assert_eq!(doc.content[0].content[0].text.as_deref(), Some("alice"));
        assert_eq!(doc.content[0].content[1].text.as_deref(), Some("ping bob"));
    }

    #[test]
    fn test_pairs_apply_sequentially() {
        let mut doc = fixture();
        let pairs = vec![
            ("alice".to_string(), "carol".to_string()),
            ("carol".to_string(), "dave".to_string()),
        ];

        apply_replacements(&mut doc, &pairs);

        assert_eq!(
            doc.content[0].content[1].text.as_deref(),
            Some("owner: dave")
        );
    }
}
