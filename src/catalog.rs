//! Requirements catalog: tabular rows → per-type requirement lists.
//!
//! The catalog is built once at startup and immutable for the rest of
//! the run. Rows are kept in table order and never deduplicated: a
//! repeated row just produces a redundant, equivalent check.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One row of the requirements table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Type key the rule applies to.
    pub element: String,
    /// Required attribute name.
    pub parameter: String,
    /// Property set the attribute must live in.
    pub pset: String,
}

/// A required (attribute, property set) pair for one type key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Requirement {
    pub parameter: String,
    pub pset: String,
}

/// The requirements catalog: type key → ordered requirement list.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    by_type: HashMap<String, Vec<Requirement>>,
    allowed_psets: HashSet<String>,
}

impl Catalog {
    /// Build a catalog from tabular rows.
    ///
    /// All three fields are trimmed of surrounding whitespace before use
    /// as keys; no case normalization is applied. A field that trims to
    /// empty aborts the build.
    pub fn from_rows<I>(rows: I) -> Result<Catalog, CatalogError>
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        let mut by_type: HashMap<String, Vec<Requirement>> = HashMap::new();
        let mut allowed_psets = HashSet::new();

        for (i, row) in rows.into_iter().enumerate() {
            let element = row.element.trim();
            let parameter = row.parameter.trim();
            let pset = row.pset.trim();

            for (field, value) in [
                ("element", element),
                ("parameter", parameter),
                ("pset", pset),
            ] {
                if value.is_empty() {
                    return Err(CatalogError {
                        row: Some(i),
                        message: format!("field '{}' is empty", field),
                    });
                }
            }

            allowed_psets.insert(pset.to_string());
            by_type
                .entry(element.to_string())
                .or_default()
                .push(Requirement {
                    parameter: parameter.to_string(),
                    pset: pset.to_string(),
                });
        }

        Ok(Catalog {
            by_type,
            allowed_psets,
        })
    }

    /// Requirements for a type key, in table order. `None` when the
    /// catalog has no rows for this key.
    pub fn requirements_for(&self, type_key: &str) -> Option<&[Requirement]> {
        self.by_type.get(type_key).map(Vec::as_slice)
    }

    /// Whether the catalog carries any rows for this type key.
    pub fn contains_type(&self, type_key: &str) -> bool {
        self.by_type.contains_key(type_key)
    }

    /// The union of property-set names referenced anywhere in the
    /// catalog, across all type keys.
    pub fn allowed_psets(&self) -> &HashSet<String> {
        &self.allowed_psets
    }

    /// Number of distinct type keys.
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// Parse a YAML (or JSON) requirements document of the form
/// `{ rules: [ { element, parameter, pset }, … ] }` and build the
/// catalog from its rows.
///
/// Any malformed row (missing column, wrong type, blank field) aborts
/// with a [`CatalogError`] naming the row.
pub fn parse_catalog(input: &str) -> Result<Catalog, CatalogError> {
    Catalog::from_rows(parse_rows(input)?)
}

fn parse_rows(input: &str) -> Result<Vec<CatalogRow>, CatalogError> {
    if input.trim().is_empty() {
        return Err(CatalogError {
            row: None,
            message: "empty input".to_string(),
        });
    }

    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| CatalogError {
        row: None,
        message: e.to_string(),
    })?;

    let obj = value.as_object().ok_or_else(|| CatalogError {
        row: None,
        message: "requirements root must be a mapping".to_string(),
    })?;

    for key in obj.keys() {
        if key != "rules" {
            return Err(CatalogError {
                row: None,
                message: format!("unknown top-level field: {}", key),
            });
        }
    }

    let raw_rows = obj
        .get("rules")
        .and_then(|v| v.as_array())
        .ok_or_else(|| CatalogError {
            row: None,
            message: "'rules' must be a sequence of rows".to_string(),
        })?;

    // Convert row by row so a malformed row reports its index.
    let mut rows = Vec::with_capacity(raw_rows.len());
    for (i, raw) in raw_rows.iter().enumerate() {
        let row: CatalogRow = serde_json::from_value(raw.clone()).map_err(|e| CatalogError {
            row: Some(i),
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    Ok(rows)
}
