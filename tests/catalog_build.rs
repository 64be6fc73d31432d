use bimcheck::catalog::{Catalog, CatalogRow, parse_catalog};

fn row(element: &str, parameter: &str, pset: &str) -> CatalogRow {
    CatalogRow {
        element: element.to_string(),
        parameter: parameter.to_string(),
        pset: pset.to_string(),
    }
}

// ─── Construction from rows ─────────────────────────────────────────────────

#[test]
fn fields_are_trimmed_before_use_as_keys() {
    let catalog = Catalog::from_rows(vec![row(" Beam ", " Material ", " Structural ")])
        .expect("should build");
    let entries = catalog.requirements_for("Beam").expect("type key present");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].parameter, "Material");
    assert_eq!(entries[0].pset, "Structural");
    assert!(catalog.allowed_psets().contains("Structural"));
}

#[test]
fn no_case_normalization_is_applied() {
    let catalog =
        Catalog::from_rows(vec![row("beam", "Material", "Structural")]).expect("should build");
    assert!(catalog.contains_type("beam"));
    assert!(!catalog.contains_type("Beam"));
}

#[test]
fn duplicate_rows_are_preserved_in_order() {
    let catalog = Catalog::from_rows(vec![
        row("Beam", "Material", "Structural"),
        row("Beam", "Length", "Structural"),
        row("Beam", "Material", "Structural"),
    ])
    .expect("should build");
    let entries = catalog.requirements_for("Beam").expect("type key present");
    let parameters: Vec<_> = entries.iter().map(|r| r.parameter.as_str()).collect();
    assert_eq!(parameters, vec!["Material", "Length", "Material"]);
}

#[test]
fn blank_field_aborts_with_row_index() {
    let err = Catalog::from_rows(vec![
        row("Beam", "Material", "Structural"),
        row("Column", "  ", "Structural"),
    ])
    .expect_err("should abort");
    assert_eq!(err.row, Some(1));
    assert!(err.message.contains("parameter"));
}

#[test]
fn allowed_psets_span_all_type_keys() {
    let catalog = Catalog::from_rows(vec![
        row("Beam", "Material", "Structural"),
        row("Column", "Diameter", "ColumnData"),
    ])
    .expect("should build");
    assert!(catalog.allowed_psets().contains("Structural"));
    assert!(catalog.allowed_psets().contains("ColumnData"));
    assert_eq!(catalog.type_count(), 2);
}

#[test]
fn empty_row_set_builds_an_empty_catalog() {
    let catalog = Catalog::from_rows(Vec::new()).expect("should build");
    assert!(catalog.is_empty());
    assert!(catalog.allowed_psets().is_empty());
}

// ─── Parsing a requirements document ────────────────────────────────────────

#[test]
fn parses_a_rules_document() {
    let catalog = parse_catalog(
        r#"
rules:
  - element: Beam
    parameter: Material
    pset: Structural
  - element: Beam
    parameter: Length
    pset: Structural
"#,
    )
    .expect("should parse");
    let entries = catalog.requirements_for("Beam").expect("type key present");
    assert_eq!(entries.len(), 2);
}

#[test]
fn missing_column_aborts_with_row_index() {
    let err = parse_catalog(
        r#"
rules:
  - element: Beam
    parameter: Material
    pset: Structural
  - element: Column
    parameter: Diameter
"#,
    )
    .expect_err("should abort");
    assert_eq!(err.row, Some(1));
    assert!(err.message.contains("pset"), "got: {}", err.message);
}

#[test]
fn unknown_top_level_field_is_rejected() {
    let err = parse_catalog("rules: []\nextra: 1\n").expect_err("should fail");
    assert!(err.message.contains("extra"));
}

#[test]
fn non_sequence_rules_are_rejected() {
    let err = parse_catalog("rules: 5\n").expect_err("should fail");
    assert!(err.message.contains("sequence"));
}

#[test]
fn empty_input_is_rejected() {
    assert!(parse_catalog(" \n").is_err());
}
