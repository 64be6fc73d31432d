//! The validation rule engine.
//!
//! Reconciles each element's actual property data against the
//! requirements catalog and the fixed rule set, and each project root
//! against the project-level set. Returns **all** issues, not just the
//! first; the pass is deterministic: element order, catalog row order,
//! and property document order fully determine the output.

use crate::catalog::Catalog;
use crate::error::{Diagnostic, DiagnosticSeverity};
use crate::extract::{PropertyIndex, extract, type_key};
use crate::issue::Issue;
use crate::registry::Rules;
use crate::types::{Element, Model};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// IFC GlobalId: 22 characters of the base-64 file alphabet.
static GLOBAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_$]{22}$").unwrap());

/// Result of a validation pass: issues and non-fatal warnings.
#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    pub issues: Vec<Issue>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate a model against a catalog under the standard rule registry.
pub fn validate(model: &Model, catalog: &Catalog) -> ValidationResult {
    validate_with_rules(model, catalog, &Rules::default())
}

/// Validate a model against a catalog under an explicit rule
/// configuration.
///
/// Per element: resolve the type key once, then run the completeness,
/// unexpected-parameter, and unexpected-pset checks. The checks are
/// independent (an element can contribute to all three categories) and
/// never short-circuit one another. Elements without a type key keep
/// their fixed-rule completeness checks but are excluded from every
/// catalog-gated check. Project roots run only the project-level check.
pub fn validate_with_rules(model: &Model, catalog: &Catalog, rules: &Rules) -> ValidationResult {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    // Allowed-pset universe for the extra-pset check: every pset named
    // anywhere in the catalog (all type keys) plus the fixed set's.
    let allowed_psets: HashSet<&str> = catalog
        .allowed_psets()
        .iter()
        .map(String::as_str)
        .chain(rules.fixed.iter().map(|r| r.pset))
        .collect();

    for (i, element) in model.elements.iter().enumerate() {
        let path = format!("elements[{}]", i);
        check_global_id(element, &path, &mut warnings);

        let key = type_key(element, rules.type_key_attribute);
        if key.is_none() {
            warnings.push(Diagnostic {
                severity: DiagnosticSeverity::Warning,
                code: "missing_type_key".to_string(),
                path: Some(path),
                message: format!(
                    "element {} has no usable '{}' value; only fixed-rule checks apply",
                    element.id, rules.type_key_attribute
                ),
            });
        }

        let index = extract(element);

        check_completeness(element, &index, key.as_deref(), catalog, rules, &mut issues);

        if let Some(key) = key.as_deref() {
            if catalog.contains_type(key) {
                check_unexpected_parameters(element, &index, key, catalog, rules, &mut issues);
            }
            check_unexpected_psets(element, &index, key, &allowed_psets, &mut issues);
        }
    }

    for (i, project) in model.projects.iter().enumerate() {
        let path = format!("projects[{}]", i);
        check_global_id(project, &path, &mut warnings);
        check_project(project, rules, &mut issues);
    }

    ValidationResult { issues, warnings }
}

// ─── Completeness ───────────────────────────────────────────────────────────

/// The effective requirement set is the catalog entries for the
/// element's type key (when it has one) followed by the fixed rules.
/// Duplicate catalog rows produce duplicate, equivalent checks.
fn check_completeness(
    element: &Element,
    index: &PropertyIndex,
    key: Option<&str>,
    catalog: &Catalog,
    rules: &Rules,
    issues: &mut Vec<Issue>,
) {
    let catalog_entries = key
        .and_then(|k| catalog.requirements_for(k))
        .unwrap_or_default();

    let required = catalog_entries
        .iter()
        .map(|r| (r.parameter.as_str(), r.pset.as_str()))
        .chain(rules.fixed.iter().map(|r| (r.parameter, r.pset)));

    for (parameter, pset) in required {
        if index.attribute(pset, parameter).is_none() {
            issues.push(Issue::MissingRequired {
                element_id: element.id,
                global_id: element.global_id.clone(),
                type_key: key.map(str::to_string),
                pset: pset.to_string(),
                parameter: parameter.to_string(),
            });
        }
    }
}

// ─── Unexpected parameters ──────────────────────────────────────────────────

/// Runs only when the element's type key is present in the catalog. An
/// actual attribute is allowed iff the catalog entries for this type
/// key, or the fixed rules restricted to its pset, permit it.
fn check_unexpected_parameters(
    element: &Element,
    index: &PropertyIndex,
    key: &str,
    catalog: &Catalog,
    rules: &Rules,
    issues: &mut Vec<Issue>,
) {
    let entries = catalog.requirements_for(key).unwrap_or_default();

    for group in index.groups() {
        for (attribute, _) in group.attributes() {
            let allowed = entries
                .iter()
                .any(|r| r.pset == group.name() && r.parameter == attribute)
                || rules.fixed_allows(group.name(), attribute);
            if !allowed {
                issues.push(Issue::UnexpectedParameter {
                    element_id: element.id,
                    global_id: element.global_id.clone(),
                    type_key: key.to_string(),
                    pset: group.name().to_string(),
                    parameter: attribute.to_string(),
                });
            }
        }
    }
}

// ─── Unexpected psets ───────────────────────────────────────────────────────

/// The allowed universe spans the whole catalog, not just this
/// element's type key: a pset that belongs to some other type's rules
/// is tolerated, and only globally-unrecognized names are flagged.
fn check_unexpected_psets(
    element: &Element,
    index: &PropertyIndex,
    key: &str,
    allowed_psets: &HashSet<&str>,
    issues: &mut Vec<Issue>,
) {
    for group in index.groups() {
        if !allowed_psets.contains(group.name()) {
            issues.push(Issue::UnexpectedPset {
                element_id: element.id,
                global_id: element.global_id.clone(),
                type_key: key.to_string(),
                pset: group.name().to_string(),
            });
        }
    }
}

// ─── Project-level check ────────────────────────────────────────────────────

/// A narrow completeness variant against one named pset and a fixed
/// attribute list. Fires even when the model has zero elements.
fn check_project(project: &Element, rules: &Rules, issues: &mut Vec<Issue>) {
    let index = extract(project);
    for parameter in rules.project_required {
        if index.attribute(rules.project_pset, parameter).is_none() {
            issues.push(Issue::ProjectMissing {
                pset: rules.project_pset.to_string(),
                parameter: parameter.to_string(),
            });
        }
    }
}

// ─── GlobalId hygiene ───────────────────────────────────────────────────────

fn check_global_id(element: &Element, path: &str, warnings: &mut Vec<Diagnostic>) {
    if let Some(global_id) = &element.global_id
        && !GLOBAL_ID_RE.is_match(global_id)
    {
        warnings.push(Diagnostic {
            severity: DiagnosticSeverity::Warning,
            code: "malformed_global_id".to_string(),
            path: Some(path.to_string()),
            message: format!(
                "element {} has GlobalId '{}' that is not 22 characters of the IFC base-64 alphabet",
                element.id, global_id
            ),
        });
    }
}
