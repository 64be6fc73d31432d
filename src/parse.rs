use crate::error::{ParseError, ParseErrorKind};
use crate::types::Model;
use std::collections::HashSet;

/// Parse a YAML (or JSON) model snapshot into an unvalidated [`Model`].
///
/// Performs deserialization and structural checks only. Does NOT run any
/// requirement checks; that is `validate`'s job.
pub fn parse_model(input: &str) -> Result<Model, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            path: None,
            line: None,
            column: None,
        });
    }

    // Deserialize via serde_json::Value as intermediate: YAML in, typed
    // Model out. JSON input parses through the same path since JSON is
    // a YAML subset.
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_saphyr_error(&msg),
            message: msg,
            path: None,
            line: None,
            column: None,
        }
    })?;

    // Ensure root is a mapping/object
    if !value.is_object() {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "snapshot root must be a mapping".to_string(),
            path: None,
            line: None,
            column: None,
        });
    }

    // Reject unknown top-level keys
    if let Some(obj) = value.as_object() {
        for key in obj.keys() {
            match key.as_str() {
                "source" | "schema" | "projects" | "elements" => {}
                other => {
                    return Err(ParseError {
                        kind: ParseErrorKind::TypeMismatch,
                        message: format!("unknown top-level field: {}", other),
                        path: Some(other.to_string()),
                        line: None,
                        column: None,
                    });
                }
            }
        }
    }

    let model: Model = serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_json_error(&msg),
            message: msg,
            path: None,
            line: None,
            column: None,
        }
    })?;

    check_unique_ids(&model)?;

    Ok(model)
}

/// Reject duplicate element ids. The id is the stable identity every
/// issue row refers back to; a collision would make the report ambiguous.
fn check_unique_ids(model: &Model) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    for (element, path) in model
        .projects
        .iter()
        .enumerate()
        .map(|(i, e)| (e, format!("projects[{}]", i)))
        .chain(
            model
                .elements
                .iter()
                .enumerate()
                .map(|(i, e)| (e, format!("elements[{}]", i))),
        )
    {
        if !seen.insert(element.id) {
            return Err(ParseError {
                kind: ParseErrorKind::TypeMismatch,
                message: format!("duplicate element id: {}", element.id),
                path: Some(path),
                line: None,
                column: None,
            });
        }
    }
    Ok(())
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown") || lower.contains("variant") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown variant") || lower.contains("unknown field") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("missing field") || lower.contains("invalid type") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
