//! Headless front end: drives the wizard from command-line edits or CSV
//! scenarios and renders plain-text reports.

use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use funnel_core::{
    FunnelResult, NumericPolicy, StepId, UnknownStepId, Wizard, WizardState, compute,
    diagram::mermaid,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::csv_loader;

/// A `--set KEY=VALUE` argument that could not be understood.
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("expected KEY=VALUE, got '{0}'")]
    MissingEquals(String),

    #[error(transparent)]
    UnknownStep(#[from] UnknownStepId),
}

/// Splits `key=value` into the step it addresses and the raw text.
///
/// The value is kept as text so the wizard's numeric policy decides how it
/// is read.
pub fn parse_assignment(arg: &str) -> Result<(StepId, String), AssignmentError> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| AssignmentError::MissingEquals(arg.to_string()))?;
    let id: StepId = key.trim().parse()?;
    Ok((id, value.to_string()))
}

/// Walks a fresh wizard from the first step to the results, entering each
/// edit when its step is active. Later edits for the same step win.
pub fn run_wizard(
    policy: NumericPolicy,
    edits: &[(StepId, String)],
) -> anyhow::Result<FunnelResult> {
    let mut wizard = Wizard::with_policy(policy);

    while let Some(step) = wizard.active_step() {
        for (_, raw) in edits.iter().filter(|(id, _)| *id == step.id) {
            wizard.edit(step.id, raw);
        }
        wizard.next();
    }
    debug_assert_eq!(wizard.state(), WizardState::Results);

    let result = wizard
        .result()
        .cloned()
        .context("wizard finished without a calculated result")?;
    if result.is_degenerate() {
        warn!("a zero input left some results undefined");
    }
    Ok(result)
}

/// Inputs, totals and the Mermaid diagram as one printable report.
pub fn render_report(result: &FunnelResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Inputs\n------\n{}\n", result.inputs);
    let _ = writeln!(out, "Results\n-------\n{}\n", result);
    let _ = write!(out, "Diagram\n-------\n{}", mermaid::render(&result.diagram));
    out
}

/// Computes every scenario in the CSV file and joins the reports.
pub fn run_batch(
    path: &Path,
    policy: NumericPolicy,
) -> anyhow::Result<String> {
    let scenarios = csv_loader::load_from_file(path, policy)
        .with_context(|| format!("cannot load scenarios from '{}'", path.display()))?;
    if scenarios.is_empty() {
        warn!(path = %path.display(), "CSV file holds no scenarios");
    }

    let mut out = String::new();
    for scenario in &scenarios {
        debug!(name = %scenario.name, "computing scenario");
        let result = compute(&scenario.inputs);
        let _ = writeln!(out, "=== {} ===\n{}", scenario.name, render_report(&result));
    }
    info!(count = scenarios.len(), "batch complete");
    Ok(out)
}
