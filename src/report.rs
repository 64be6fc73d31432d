//! Issue aggregation and export.
//!
//! The reporter is a pure projection: it partitions the validator's
//! issue stream by category without mutating, filtering, or reordering
//! anything, and renders the result for the console or for export.

use crate::error::ExportError;
use crate::extract::extract;
use crate::issue::Issue;
use crate::types::Model;
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

/// Categorized validation report for one model.
///
/// Empty sections are omitted from serialized exports but still appear
/// in the [`Report::summary`] as all-clear lines.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    /// Name of the model file the issues belong to.
    pub source: String,
    /// Project-level misses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project: Vec<Issue>,
    /// Element-level missing required attributes (catalog and fixed).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<Issue>,
    /// Attributes present but permitted by no rule.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unexpected_parameters: Vec<Issue>,
    /// Property sets recognized by no rule.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unexpected_psets: Vec<Issue>,
}

impl Report {
    /// Partition an issue stream by category.
    pub fn from_issues(source: impl Into<String>, issues: &[Issue]) -> Report {
        let mut report = Report {
            source: source.into(),
            project: Vec::new(),
            missing: Vec::new(),
            unexpected_parameters: Vec::new(),
            unexpected_psets: Vec::new(),
        };

        for issue in issues {
            match issue {
                Issue::ProjectMissing { .. } => report.project.push(issue.clone()),
                Issue::MissingRequired { .. } => report.missing.push(issue.clone()),
                Issue::UnexpectedParameter { .. } => {
                    report.unexpected_parameters.push(issue.clone())
                }
                Issue::UnexpectedPset { .. } => report.unexpected_psets.push(issue.clone()),
            }
        }

        report
    }

    /// Total issue count across all categories.
    pub fn total(&self) -> usize {
        self.project.len()
            + self.missing.len()
            + self.unexpected_parameters.len()
            + self.unexpected_psets.len()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Human-readable per-category summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "validation report for {}", self.source);

        let _ = match self.project.len() {
            0 => writeln!(out, "project-level: all required parameters present"),
            n => writeln!(out, "project-level: {} missing parameters", n),
        };
        let _ = match self.missing.len() {
            0 => writeln!(out, "element-level: all required parameters present"),
            n => writeln!(out, "element-level: {} missing parameters", n),
        };
        let _ = match self.unexpected_parameters.len() {
            0 => writeln!(out, "unexpected parameters: none"),
            n => writeln!(out, "unexpected parameters: {}", n),
        };
        let _ = match self.unexpected_psets.len() {
            0 => writeln!(out, "unexpected psets: none"),
            n => writeln!(out, "unexpected psets: {}", n),
        };

        out
    }

    /// Export as a JSON value. Empty sections are omitted.
    pub fn to_json(&self) -> Result<serde_json::Value, ExportError> {
        serde_json::to_value(self).map_err(|e| ExportError {
            message: format!("failed to convert report to JSON value: {}", e),
        })
    }

    /// Export as a YAML string. Empty sections are omitted.
    pub fn to_yaml(&self) -> Result<String, ExportError> {
        // Convert to serde_json::Value first for consistent field ordering
        let value = self.to_json()?;
        serde_saphyr::to_string(&value).map_err(|e| ExportError {
            message: format!("failed to serialize report to YAML: {}", e),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Plain-text listing of every element's flattened property sets.
///
/// A diagnostic aid, not part of the validation contract: shows each
/// element with its sets and rendered values, or "no property sets"
/// when extraction yields nothing.
pub fn render_inventory(model: &Model) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "inventory of {}", model.source);

    for element in &model.elements {
        match &element.global_id {
            Some(global_id) => {
                let _ = writeln!(out, "element {} ({})", element.id, global_id);
            }
            None => {
                let _ = writeln!(out, "element {}", element.id);
            }
        }

        let index = extract(element);
        if index.is_empty() {
            let _ = writeln!(out, "  no property sets");
            continue;
        }
        for group in index.groups() {
            let _ = writeln!(out, "  {}", group.name());
            for (attribute, value) in group.attributes() {
                let _ = writeln!(out, "    {} = {}", attribute, value);
            }
        }
    }

    out
}
