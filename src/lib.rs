//! Validation engine for BIM property-set information requirements.
//!
//! `bimcheck` reconciles the metadata attached to the elements of a
//! building-information model against a declarative requirements
//! catalog, surfacing missing required attributes, attributes no rule
//! permits, and property sets no rule recognizes, plus a project-level
//! identification check. The model arrives as an already-materialized
//! property-graph snapshot (YAML or JSON); parsing the native IFC/STEP
//! format is out of scope.
//!
//! ```text
//! parse_model(yaml) → Model ──┐
//!                             ├→ validate(&model, &catalog) → ValidationResult
//! parse_catalog(yaml)→Catalog─┘            │
//!                                          ▼
//!                         Report::from_issues(...) → YAML/JSON export
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! let model = r#"
//! source: "bridge_deck.ifc"
//! elements:
//!   - id: 101
//!     definitions:
//!       - property_set:
//!           name: Structural
//!           properties:
//!             - name: NomeOggetto
//!               value: Beam
//!             - name: Material
//!               value: { type: IfcLabel, value: Steel }
//! "#;
//!
//! let catalog = r#"
//! rules:
//!   - element: Beam
//!     parameter: Material
//!     pset: Structural
//! "#;
//!
//! let result = bimcheck::audit(model, catalog).expect("inputs load");
//! println!("{}", result.report);
//! ```

pub mod catalog;
pub mod error;
pub mod extract;
pub mod issue;
pub mod parse;
pub mod registry;
pub mod report;
pub mod types;
pub mod validate;

pub use error::*;
pub use issue::*;
pub use types::*;

// Re-export entry-point items at the crate root for convenience.
pub use catalog::{Catalog, CatalogRow, parse_catalog};
pub use parse::parse_model;
pub use registry::{FixedRule, Rules};
pub use report::{Report, render_inventory};
pub use validate::{ValidationResult, validate, validate_with_rules};

/// Result of the [`audit`] convenience entry point.
pub struct AuditResult {
    /// The categorized report, identified by the model's source name.
    pub report: Report,
    /// The full issue stream in emission order.
    pub issues: Vec<Issue>,
    /// Non-fatal data-quality warnings.
    pub warnings: Vec<Diagnostic>,
}

/// Convenience entry point composing parse → validate → report.
///
/// Input-load failures abort before any validation runs, so a partial
/// result is never reported as complete.
///
/// # Errors
///
/// Returns [`BimCheckError`] when the model snapshot or the
/// requirements document cannot be loaded.
pub fn audit(model_input: &str, catalog_input: &str) -> Result<AuditResult, BimCheckError> {
    let model = parse::parse_model(model_input).map_err(BimCheckError::Parse)?;
    let catalog = catalog::parse_catalog(catalog_input).map_err(BimCheckError::Catalog)?;

    let outcome = validate::validate(&model, &catalog);
    let report = Report::from_issues(model.source.as_str(), &outcome.issues);

    Ok(AuditResult {
        report,
        issues: outcome.issues,
        warnings: outcome.warnings,
    })
}
