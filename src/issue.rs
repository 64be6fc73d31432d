//! Validation issues: the discrepancies the engine exists to surface.
//!
//! Issues are created exclusively by the validator and consumed
//! exclusively by the reporter. They are data, not errors: a model full
//! of issues is still a successful run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag of a [`Issue`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingRequired,
    UnexpectedParameter,
    UnexpectedPset,
    ProjectMissing,
}

/// One discrepancy found during validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// A required attribute is absent: the property set is missing or
    /// the set lacks the attribute.
    MissingRequired {
        element_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        global_id: Option<String>,
        /// Absent when the miss came from a fixed rule on an element
        /// with no recognizable type key.
        #[serde(skip_serializing_if = "Option::is_none")]
        type_key: Option<String>,
        pset: String,
        parameter: String,
    },
    /// An attribute present on the element that neither the catalog
    /// rules for its type key nor the fixed set permit in that set.
    UnexpectedParameter {
        element_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        global_id: Option<String>,
        type_key: String,
        pset: String,
        parameter: String,
    },
    /// A property set whose name appears nowhere in the catalog (any
    /// type key) nor in the fixed set.
    UnexpectedPset {
        element_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        global_id: Option<String>,
        type_key: String,
        pset: String,
    },
    /// A required project-level attribute is absent from the project
    /// root's designated set.
    ProjectMissing { pset: String, parameter: String },
}

impl Issue {
    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::MissingRequired { .. } => IssueKind::MissingRequired,
            Issue::UnexpectedParameter { .. } => IssueKind::UnexpectedParameter,
            Issue::UnexpectedPset { .. } => IssueKind::UnexpectedPset,
            Issue::ProjectMissing { .. } => IssueKind::ProjectMissing,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingRequired {
                element_id,
                pset,
                parameter,
                ..
            } => write!(
                f,
                "element {}: missing '{}' in pset '{}'",
                element_id, parameter, pset
            ),
            Issue::UnexpectedParameter {
                element_id,
                pset,
                parameter,
                ..
            } => write!(
                f,
                "element {}: unexpected '{}' in pset '{}'",
                element_id, parameter, pset
            ),
            Issue::UnexpectedPset {
                element_id, pset, ..
            } => write!(f, "element {}: unexpected pset '{}'", element_id, pset),
            Issue::ProjectMissing { pset, parameter } => write!(
                f,
                "project: missing '{}' in pset '{}'",
                parameter, pset
            ),
        }
    }
}
