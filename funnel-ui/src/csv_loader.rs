//! CSV loader for batch funnel scenarios.
//!
//! ## CSV Format
//!
//! One scenario per row. Headers are matched by name, so column order does
//! not matter. Header names are case-sensitive.
//!
//! | Column             | Required | Notes                                     |
//! |--------------------|----------|-------------------------------------------|
//! | `name`             | no       | Scenario label, `Scenario <n>` if absent  |
//! | `targetCommission` | no       | Default `1,000,000`                       |
//! | `commissionRate`   | no       | Percentage, default `40`                  |
//! | `caseSize`         | no       | Default `5,000`                           |
//! | `closingRatio`     | no       | Default `3`                               |
//! | `openingRatio`     | no       | Default `3`                               |
//! | `approachRatio`    | no       | Default `10`                              |
//!
//! A missing column or an empty cell keeps the step default. Any other cell
//! is coerced with the configured [`NumericPolicy`], so text that is not a
//! number becomes 0 rather than an error.
//!
//! ### Example
//!
//! ```csv
//! name,targetCommission,commissionRate,caseSize
//! Baseline,,,
//! Big cases,1000000,40,"12,500"
//! ```
use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use funnel_core::{InputSet, NumericPolicy, STEPS, StepId};
use serde::Deserialize;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    name: Option<String>,
    #[serde(rename = "targetCommission")]
    target_commission: Option<String>,
    #[serde(rename = "commissionRate")]
    commission_rate: Option<String>,
    #[serde(rename = "caseSize")]
    case_size: Option<String>,
    #[serde(rename = "closingRatio")]
    closing_ratio: Option<String>,
    #[serde(rename = "openingRatio")]
    opening_ratio: Option<String>,
    #[serde(rename = "approachRatio")]
    approach_ratio: Option<String>,
}

impl CsvRow {
    fn cell(
        &self,
        id: StepId,
    ) -> Option<&str> {
        let cell = match id {
            StepId::TargetCommission => &self.target_commission,
            StepId::CommissionRate => &self.commission_rate,
            StepId::CaseSize => &self.case_size,
            StepId::ClosingRatio => &self.closing_ratio,
            StepId::OpeningRatio => &self.opening_ratio,
            StepId::ApproachRatio => &self.approach_ratio,
        };
        cell.as_deref().filter(|text| !text.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One named set of funnel inputs read from a CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub inputs: InputSet,
}

/// Errors that can occur while loading CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, ragged
    /// rows, invalid UTF-8, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The file could not be opened or read.
    #[error("I/O error reading CSV: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// row_number is 1-based (header = row 0).
fn convert_row(
    row: CsvRow,
    row_number: usize,
    policy: NumericPolicy,
) -> Scenario {
    let inputs = STEPS.iter().fold(InputSet::default(), |inputs, step| {
        match row.cell(step.id) {
            Some(text) => inputs.with_field(step.id, policy.coerce(text)),
            None => inputs,
        }
    });

    let name = row
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("Scenario {row_number}"));

    Scenario { name, inputs }
}

/// Parse scenarios from any reader.
pub fn load_from_reader<R: Read>(
    reader: R,
    policy: NumericPolicy,
) -> Result<Vec<Scenario>, CsvLoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(false)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for (index, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let scenario = convert_row(record?, index + 1, policy);
        debug!(name = %scenario.name, "loaded scenario");
        scenarios.push(scenario);
    }
    Ok(scenarios)
}

/// Parse scenarios from an in-memory CSV string.
pub fn load_from_str(
    input: &str,
    policy: NumericPolicy,
) -> Result<Vec<Scenario>, CsvLoadError> {
    load_from_reader(input.as_bytes(), policy)
}

/// Parse scenarios from a CSV file on disk.
pub fn load_from_file(
    path: &Path,
    policy: NumericPolicy,
) -> Result<Vec<Scenario>, CsvLoadError> {
    let file = File::open(path)?;
    let scenarios = load_from_reader(file, policy)?;
    info!(path = %path.display(), count = scenarios.len(), "loaded CSV scenarios");
    Ok(scenarios)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
