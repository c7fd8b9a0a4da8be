//! Step-by-step collection of the funnel inputs.
//!
//! [`Wizard`] walks the [`STEPS`] table one field at a time. Advancing past
//! the last step runs the calculator once and enters the results state:
//!
//! ```text
//! Editing(0) -> Editing(1) -> ... -> Editing(N-1) -> Results
//!            <-            <- ... <-              <-
//! ```
//!
//! Navigation beyond either end is ignored.
//!
//! # Example
//!
//! ```
//! use funnel_core::{StepId, Wizard, WizardState};
//!
//! let mut wizard = Wizard::new();
//! wizard.edit(StepId::TargetCommission, "2,000,000");
//! while wizard.state() != WizardState::Results {
//!     wizard.next();
//! }
//!
//! assert_eq!(wizard.result().map(|r| r.average_per_contact), Some(22.22));
//! ```

mod input_policy;

pub use input_policy::NumericPolicy;

use serde::Serialize;
use tracing::{debug, info};

use crate::calculations::{FunnelCalculator, FunnelWorksheet};
use crate::models::{FunnelResult, InputSet, STEPS, Step, StepId, UnknownStepId};

/// Which screen the wizard is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WizardState {
    /// Collecting the step at this index.
    Editing(usize),
    /// All inputs collected and the funnel calculated.
    Results,
}

/// Controller for the input wizard.
///
/// Owns the current position, the collected [`InputSet`] and the result of
/// the last calculation.
#[derive(Debug, Clone)]
pub struct Wizard<C = FunnelWorksheet> {
    position: usize,
    inputs: InputSet,
    result: Option<FunnelResult>,
    policy: NumericPolicy,
    calculator: C,
}

impl Wizard<FunnelWorksheet> {
    /// A wizard on the first step, with default inputs and lenient parsing.
    pub fn new() -> Self {
        Self::with_policy(NumericPolicy::default())
    }

    pub fn with_policy(policy: NumericPolicy) -> Self {
        Self::with_calculator(FunnelWorksheet::new(), policy)
    }
}

impl Default for Wizard<FunnelWorksheet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FunnelCalculator> Wizard<C> {
    pub fn with_calculator(
        calculator: C,
        policy: NumericPolicy,
    ) -> Self {
        Self {
            position: 0,
            inputs: InputSet::default(),
            result: None,
            policy,
            calculator,
        }
    }

    pub fn steps(&self) -> &'static [Step] {
        &STEPS
    }

    /// Index of the active step, or `STEPS.len()` in the results state.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> WizardState {
        if self.position < STEPS.len() {
            WizardState::Editing(self.position)
        } else {
            WizardState::Results
        }
    }

    /// The step being edited, or `None` once results are shown.
    pub fn active_step(&self) -> Option<&'static Step> {
        STEPS.get(self.position)
    }

    pub fn current_value(
        &self,
        id: StepId,
    ) -> f64 {
        self.inputs.get_field(id)
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    /// The last calculation, if the wizard is showing results.
    pub fn result(&self) -> Option<&FunnelResult> {
        self.result.as_ref()
    }

    pub fn policy(&self) -> NumericPolicy {
        self.policy
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Stores `raw` for step `id`, coerced by the wizard's [`NumericPolicy`].
    ///
    /// Returns the value that was stored.
    pub fn edit(
        &mut self,
        id: StepId,
        raw: &str,
    ) -> f64 {
        let value = self.policy.coerce(raw);
        self.inputs.set_field(id, value);
        debug!(step = %id, raw, value, "input edited");
        value
    }

    /// Like [`edit`](Self::edit), addressed by the step's string key.
    pub fn edit_key(
        &mut self,
        key: &str,
        raw: &str,
    ) -> Result<f64, UnknownStepId> {
        let id: StepId = key.parse()?;
        Ok(self.edit(id, raw))
    }

    /// Moves forward one step. From the last step this calculates the
    /// funnel and enters [`WizardState::Results`]. Ignored in results.
    pub fn next(&mut self) -> WizardState {
        let last = STEPS.len() - 1;
        if self.position < last {
            self.position += 1;
            debug!(position = self.position, "advanced to next step");
        } else if self.position == last {
            let result = self.calculator.calculate(&self.inputs);
            info!(
                average_per_contact = result.average_per_contact,
                "funnel results ready"
            );
            self.result = Some(result);
            self.position = STEPS.len();
        } else {
            debug!("next ignored in results state");
        }
        self.state()
    }

    /// Moves back one step and drops any calculated result. Ignored on the
    /// first step. From results this returns to the last input step.
    pub fn prev(&mut self) -> WizardState {
        if self.position > 0 {
            self.position -= 1;
            if self.result.take().is_some() {
                debug!("discarded previous result");
            }
            debug!(position = self.position, "returned to previous step");
        }
        self.state()
    }

    /// Starts over on the first step with default inputs.
    pub fn restart(&mut self) {
        self.position = 0;
        self.inputs = InputSet::default();
        self.result = None;
        debug!("wizard restarted");
    }

    /// Whether a "Previous" control applies.
    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    /// Caption for the forward control, `None` in results.
    pub fn next_action_label(&self) -> Option<&'static str> {
        match self.state() {
            WizardState::Editing(i) if i + 1 < STEPS.len() => Some("Next"),
            WizardState::Editing(_) => Some("Calculate"),
            WizardState::Results => None,
        }
    }

    /// One-based number of the active step and the step count.
    pub fn progress(&self) -> (usize, usize) {
        ((self.position + 1).min(STEPS.len()), STEPS.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn walk_to_results(wizard: &mut Wizard) {
        while wizard.state() != WizardState::Results {
            wizard.next();
        }
    }

    #[test]
    fn starts_on_first_step_with_defaults() {
        let wizard = Wizard::new();

        assert_eq!(wizard.state(), WizardState::Editing(0));
        assert_eq!(wizard.active_step().map(|s| s.id), Some(StepId::TargetCommission));
        assert_eq!(wizard.inputs(), &InputSet::default());
        assert!(wizard.result().is_none());
    }

    #[test]
    fn next_walks_steps_in_order() {
        let mut wizard = Wizard::new();

        for (index, step) in STEPS.iter().enumerate().skip(1) {
            assert_eq!(wizard.next(), WizardState::Editing(index));
            assert_eq!(wizard.active_step(), Some(step));
        }
    }

    #[test]
    fn next_from_last_step_calculates() {
        let mut wizard = Wizard::new();

        walk_to_results(&mut wizard);

        assert_eq!(wizard.position(), STEPS.len());
        assert_eq!(wizard.active_step(), None);
        let result = wizard.result().expect("result after calculate");
        assert_eq!(result.totals.total_premium, 2_500_000.00);
        assert_eq!(result.average_per_contact, 22.22);
    }

    #[test]
    fn next_in_results_is_ignored() {
        let mut wizard = Wizard::new();
        walk_to_results(&mut wizard);
        let before = wizard.result().cloned();

        assert_eq!(wizard.next(), WizardState::Results);
        assert_eq!(wizard.position(), STEPS.len());
        assert_eq!(wizard.result().cloned(), before);
    }

    #[test]
    fn prev_on_first_step_is_ignored() {
        let mut wizard = Wizard::new();

        assert_eq!(wizard.prev(), WizardState::Editing(0));
        assert!(!wizard.can_go_back());
    }

    #[test]
    fn prev_from_results_discards_result() {
        let mut wizard = Wizard::new();
        walk_to_results(&mut wizard);

        assert_eq!(wizard.prev(), WizardState::Editing(STEPS.len() - 1));
        assert!(wizard.result().is_none());
    }

    #[test]
    fn edit_updates_only_named_entry() {
        let mut wizard = Wizard::new();

        let stored = wizard.edit(StepId::OpeningRatio, "4");

        assert_eq!(stored, 4.0);
        assert_eq!(
            wizard.inputs(),
            &InputSet::default().with_field(StepId::OpeningRatio, 4.0)
        );
    }

    #[test]
    fn edit_coerces_garbage_to_zero() {
        let mut wizard = Wizard::new();

        wizard.edit(StepId::CaseSize, "lots");

        assert_eq!(wizard.current_value(StepId::CaseSize), 0.0);
    }

    #[test]
    fn strict_policy_is_applied_to_edits() {
        let mut wizard = Wizard::with_policy(NumericPolicy::Strict);

        wizard.edit(StepId::ClosingRatio, "4 appointments");

        assert_eq!(wizard.policy(), NumericPolicy::Strict);
        assert_eq!(wizard.current_value(StepId::ClosingRatio), 0.0);
    }

    #[test]
    fn edit_key_rejects_unknown_key() {
        let mut wizard = Wizard::new();

        assert_eq!(wizard.edit_key("caseSize", "6000"), Ok(6_000.0));
        assert_eq!(
            wizard.edit_key("approvalRatio", "6"),
            Err(UnknownStepId("approvalRatio".to_string()))
        );
        assert_eq!(wizard.inputs(), &InputSet::default().with_field(StepId::CaseSize, 6_000.0));
    }

    #[test]
    fn restart_resets_everything() {
        let mut wizard = Wizard::new();
        wizard.edit(StepId::TargetCommission, "5");
        walk_to_results(&mut wizard);

        wizard.restart();

        assert_eq!(wizard.state(), WizardState::Editing(0));
        assert_eq!(wizard.inputs(), &InputSet::default());
        assert!(wizard.result().is_none());
    }

    #[test]
    fn next_action_label_switches_to_calculate_on_last_step() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.next_action_label(), Some("Next"));

        for _ in 0..STEPS.len() - 1 {
            wizard.next();
        }
        assert_eq!(wizard.next_action_label(), Some("Calculate"));

        wizard.next();
        assert_eq!(wizard.next_action_label(), None);
    }

    #[test]
    fn progress_is_one_based_and_capped() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.progress(), (1, 6));

        walk_to_results(&mut wizard);
        assert_eq!(wizard.progress(), (6, 6));
    }
}
