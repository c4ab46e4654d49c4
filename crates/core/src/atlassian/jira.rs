//! Transformation functions for Jira field values

use serde_json::Value;

use super::adf::{translate, AdfError, Dialect, Document, DOC_TYPE};

/// Extract description from Jira field (handles both string and ADF)
///
/// Jira descriptions and comment bodies can be either plain strings or ADF
/// (Atlassian Document Format) JSON. Strings pass through untouched; ADF
/// documents are rendered in `dialect`.
///
/// # Arguments
/// * `value` - The description field value from Jira API
/// * `dialect` - Output dialect for ADF documents
///
/// # Returns
/// * `Ok(None)` - when the value is absent, not text/ADF, or renders empty
/// * `Err(AdfError)` - when the value claims to be ADF but fails to decode
pub fn extract_description(
    value: Option<Value>,
    dialect: Dialect,
) -> Result<Option<String>, AdfError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let is_adf = value.get("type").and_then(Value::as_str) == Some(DOC_TYPE);

    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Object(_) if is_adf => {
            let doc = Document::from_value(value)?;
            let rendered = translate(Some(&doc), dialect);
            let rendered = rendered.trim();

            if rendered.is_empty() {
                Ok(None)
            } else {
                Ok(Some(rendered.to_string()))
            }
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_description_string() {
        // Arrange: Create a simple string description
        let value = Some(Value::String("This is a plain text description".to_string()));

        // Act: Extract description
        let result = extract_description(value, Dialect::Markdown).unwrap();

        // Assert: Verify string is returned as-is
        assert_eq!(result, Some("This is a plain text description".to_string()));
    }

    #[test]
    fn test_extract_description_adf_simple() {
        // Arrange: Create a simple ADF document
        let adf = json!({
            "type": "doc",
            "content": [
                {
                    "type": "paragraph",
                    "content": [
                        {
                            "type": "text",
                            "text": "Hello world"
                        }
                    ]
                }
            ]
        });

        // Act: Extract description
        let result = extract_description(Some(adf), Dialect::Markdown).unwrap();

        // Assert: Verify ADF is rendered to text
        assert_eq!(result, Some("Hello world".to_string()));
    }

    #[test]
    fn test_extract_description_adf_with_heading() {
        // Arrange: Create an ADF document with heading
        let adf = json!({
            "type": "doc",
            "content": [
                {
                    "type": "heading",
                    "attrs": {"level": 2},
                    "content": [
                        {
                            "type": "text",
                            "text": "Important"
                        }
                    ]
                },
                {
                    "type": "paragraph",
                    "content": [
                        {
                            "type": "text",
                            "text": "This is important info"
                        }
                    ]
                }
            ]
        });

        // Act: Extract description
        let result = extract_description(Some(adf), Dialect::Markdown).unwrap();

        // Assert: Verify heading is rendered with markdown
        let expected = "## Important\n This is important info";
        assert_eq!(result, Some(expected.to_string()));
    }

    #[test]
    fn test_extract_description_adf_panel_as_wiki() {
        // Arrange: Create an ADF document with a note panel
        let adf = json!({
            "type": "doc",
            "content": [
                {
                    "type": "panel",
                    "attrs": {"panelType": "note"},
                    "content": [
                        {
                            "type": "paragraph",
                            "content": [{"type": "text", "text": "Read me"}]
                        }
                    ]
                }
            ]
        });

        // Act: Extract description in wiki markup
        let result = extract_description(Some(adf), Dialect::Wiki).unwrap();

        // Assert: Verify the panel macro survives
        assert_eq!(
            result,
            Some("{panel:bgColor=#eae6ff}\n Read me \n\n{panel}".to_string())
        );
    }

    #[test]
    fn test_extract_description_empty_adf() {
        // Arrange: ADF document without content
        let adf = json!({"type": "doc", "version": 1, "content": []});

        // Act: Extract description
        let result = extract_description(Some(adf), Dialect::Markdown).unwrap();

        // Assert: Verify empty documents collapse to None
        assert_eq!(result, None);
    }

    #[test]
    fn test_extract_description_malformed_adf() {
        // Arrange: ADF document whose content is not a list
        let adf = json!({"type": "doc", "content": "oops"});

        // Act: Extract description
        let result = extract_description(Some(adf), Dialect::Markdown);

        // Assert: Verify the decoding error surfaces
        assert!(matches!(result, Err(AdfError::Json(_))));
    }

    #[test]
    fn test_extract_description_none() {
        // Arrange: None value
        let value = None;

        // Act: Extract description
        let result = extract_description(value, Dialect::Markdown).unwrap();

        // Assert: Verify None is returned
        assert_eq!(result, None);
    }

    #[test]
    fn test_extract_description_non_adf_object() {
        // Arrange: Create a non-ADF object
        let value = Some(json!({"foo": "bar"}));

        // Act: Extract description
        let result = extract_description(value, Dialect::Markdown).unwrap();

        // Assert: Verify None is returned for non-ADF objects
        assert_eq!(result, None);
    }
}
