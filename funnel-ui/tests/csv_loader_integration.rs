//! Integration tests that exercise the loader against an on-disk fixture file.
//!
//! These complement the unit tests inside csv_loader.rs (which all use
//! inline string literals) by verifying the read-from-disk path and the
//! batch report built on top of it.

use std::path::{Path, PathBuf};

use funnel_core::{InputSet, NumericPolicy, StepId, compute};
use funnel_ui::{app, csv_loader};
use pretty_assertions::assert_eq;

/// Path to the sample CSV shipped with the test fixtures.
fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_scenarios.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let scenarios = csv_loader::load_from_file(&fixture_path(), NumericPolicy::Lenient)
        .expect("fixture file should load without error");

    // The fixture has exactly 3 rows.
    assert_eq!(scenarios.len(), 3);
}

#[test]
fn test_blank_row_uses_every_default() {
    let scenarios =
        csv_loader::load_from_file(&fixture_path(), NumericPolicy::Lenient).unwrap();
    let baseline = &scenarios[0];

    assert_eq!(baseline.name, "Baseline");
    assert_eq!(baseline.inputs, InputSet::default());
    assert_eq!(compute(&baseline.inputs).average_per_contact, 22.22);
}

#[test]
fn test_separated_amounts_are_read() {
    let scenarios =
        csv_loader::load_from_file(&fixture_path(), NumericPolicy::Strict).unwrap();
    let bigger = &scenarios[1];

    assert_eq!(
        bigger.inputs,
        InputSet::default().with_field(StepId::CaseSize, 10_000.0)
    );

    let result = compute(&bigger.inputs);
    assert_eq!(result.totals.cases_needed, 250.00);
    assert_eq!(result.totals.initial_contacts_needed, 22_500.00);
    assert_eq!(result.average_per_contact, 44.44);
}

#[test]
fn test_unnamed_zero_rate_row_is_degenerate() {
    let scenarios =
        csv_loader::load_from_file(&fixture_path(), NumericPolicy::Lenient).unwrap();
    let third = &scenarios[2];

    assert_eq!(third.name, "Scenario 3");
    assert_eq!(third.inputs.commission_rate, 0.0);
    assert!(compute(&third.inputs).is_degenerate());
}

#[test]
fn test_batch_report_covers_fixture() {
    let report = app::run_batch(&fixture_path(), NumericPolicy::Lenient).unwrap();

    assert!(report.contains("=== Baseline ==="));
    assert!(report.contains("=== Bigger cases ==="));
    assert!(report.contains("=== Scenario 3 ==="));
    assert!(report.contains("$44.44"));
    assert!(report.contains("Infinity"));
}
