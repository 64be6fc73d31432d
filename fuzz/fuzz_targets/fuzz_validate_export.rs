#![no_main]

use bimcheck::{Catalog, Report};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let model = match bimcheck::parse_model(&s) {
        Ok(m) => m,
        Err(_) => return,
    };

    let catalog = Catalog::default();

    // A parsed snapshot must validate deterministically, and a report
    // built from any issue stream must export.
    let first = bimcheck::validate(&model, &catalog);
    let second = bimcheck::validate(&model, &catalog);
    assert_eq!(first.issues, second.issues, "validation must be deterministic");

    let report = Report::from_issues(model.source.as_str(), &first.issues);
    assert_eq!(report.total(), first.issues.len());
    report.to_yaml().expect("report export must not fail");
});
