//! The sales funnel worksheet.
//!
//! Each line depends only on the lines above it:
//!
//! | Line | Quantity                  | Formula                                        |
//! |------|---------------------------|------------------------------------------------|
//! | 1    | Total premium             | target commission ÷ (commission rate ÷ 100)    |
//! | 2    | Cases needed              | Line 1 ÷ average case size                     |
//! | 3    | Appointments needed       | Line 2 × closing ratio                         |
//! | 4    | Prospects needed          | Line 3 × opening ratio                         |
//! | 5    | Initial contacts needed   | Line 4 × approach ratio                        |
//! | 6    | Average per contact       | target commission ÷ Line 5                     |
//!
//! Lines are chained on the unrounded values; every stored value is rounded
//! to two decimals. Zero divisors are not trapped: the IEEE result
//! (infinity or NaN) flows through to the output.
//!
//! # Example
//!
//! ```
//! use funnel_core::{FunnelWorksheet, InputSet};
//!
//! let result = FunnelWorksheet::new().calculate(&InputSet::default());
//!
//! assert_eq!(result.totals.total_premium, 2_500_000.00);
//! assert_eq!(result.totals.initial_contacts_needed, 45_000.00);
//! assert_eq!(result.average_per_contact, 22.22);
//! ```

use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::diagram::FunnelDiagram;
use crate::models::{FunnelResult, FunnelTotals, InputSet};

/// Anything that can turn a complete [`InputSet`] into a [`FunnelResult`].
///
/// The wizard calls this exactly once per "Calculate".
pub trait FunnelCalculator {
    fn calculate(
        &self,
        inputs: &InputSet,
    ) -> FunnelResult;
}

/// Runs the standard funnel worksheet.
pub fn compute(inputs: &InputSet) -> FunnelResult {
    FunnelWorksheet::new().calculate(inputs)
}

/// Calculator for the sales funnel worksheet. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunnelWorksheet;

impl FunnelWorksheet {
    pub fn new() -> Self {
        Self
    }

    /// Calculates every funnel line and the diagram for `inputs`.
    pub fn calculate(
        &self,
        inputs: &InputSet,
    ) -> FunnelResult {
        let total_premium = self.total_premium(inputs.target_commission, inputs.commission_rate);
        let cases_needed = self.cases_needed(total_premium, inputs.case_size);
        let appointments_needed = self.appointments_needed(cases_needed, inputs.closing_ratio);
        let prospects_needed = self.prospects_needed(appointments_needed, inputs.opening_ratio);
        let initial_contacts_needed =
            self.initial_contacts_needed(prospects_needed, inputs.approach_ratio);
        let average_per_contact =
            self.average_per_contact(inputs.target_commission, initial_contacts_needed);

        let totals = FunnelTotals {
            total_premium: round_half_up(total_premium),
            cases_needed: round_half_up(cases_needed),
            appointments_needed: round_half_up(appointments_needed),
            prospects_needed: round_half_up(prospects_needed),
            initial_contacts_needed: round_half_up(initial_contacts_needed),
        };
        let average_per_contact = round_half_up(average_per_contact);

        let result = FunnelResult {
            inputs: *inputs,
            diagram: FunnelDiagram::for_funnel(inputs, &totals, average_per_contact),
            totals,
            average_per_contact,
        };

        if result.is_degenerate() {
            warn!(
                average_per_contact = result.average_per_contact,
                "funnel has a zero divisor; derived values are not finite"
            );
        } else {
            debug!(
                total_premium = result.totals.total_premium,
                initial_contacts_needed = result.totals.initial_contacts_needed,
                average_per_contact = result.average_per_contact,
                "funnel calculated"
            );
        }

        result
    }

    /// Line 1: premium volume that yields the target commission.
    fn total_premium(
        &self,
        target_commission: f64,
        commission_rate: f64,
    ) -> f64 {
        target_commission / (commission_rate / 100.0)
    }

    /// Line 2: closed cases required.
    fn cases_needed(
        &self,
        total_premium: f64,
        case_size: f64,
    ) -> f64 {
        total_premium / case_size
    }

    /// Line 3: appointments required, at `closing_ratio` appointments per case.
    fn appointments_needed(
        &self,
        cases_needed: f64,
        closing_ratio: f64,
    ) -> f64 {
        cases_needed * closing_ratio
    }

    /// Line 4: interested prospects required per the opening ratio.
    fn prospects_needed(
        &self,
        appointments_needed: f64,
        opening_ratio: f64,
    ) -> f64 {
        appointments_needed * opening_ratio
    }

    /// Line 5: initial contacts required per the approach ratio.
    fn initial_contacts_needed(
        &self,
        prospects_needed: f64,
        approach_ratio: f64,
    ) -> f64 {
        prospects_needed * approach_ratio
    }

    /// Line 6: the headline metric.
    fn average_per_contact(
        &self,
        target_commission: f64,
        initial_contacts_needed: f64,
    ) -> f64 {
        target_commission / initial_contacts_needed
    }
}

impl FunnelCalculator for FunnelWorksheet {
    fn calculate(
        &self,
        inputs: &InputSet,
    ) -> FunnelResult {
        FunnelWorksheet::calculate(self, inputs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::StepId;

    fn worksheet() -> FunnelWorksheet {
        FunnelWorksheet::new()
    }

    // =========================================================================
    // line tests
    // =========================================================================

    #[test]
    fn total_premium_divides_by_rate_percentage() {
        assert_eq!(worksheet().total_premium(1_000_000.0, 40.0), 2_500_000.0);
    }

    #[test]
    fn total_premium_is_infinite_for_zero_rate() {
        assert_eq!(worksheet().total_premium(1_000_000.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn cases_needed_divides_by_case_size() {
        assert_eq!(worksheet().cases_needed(2_500_000.0, 5_000.0), 500.0);
    }

    #[test]
    fn appointments_needed_multiplies_by_closing_ratio() {
        assert_eq!(worksheet().appointments_needed(500.0, 3.0), 1_500.0);
    }

    #[test]
    fn prospects_needed_multiplies_by_opening_ratio() {
        assert_eq!(worksheet().prospects_needed(1_500.0, 3.0), 4_500.0);
    }

    #[test]
    fn initial_contacts_needed_multiplies_by_approach_ratio() {
        assert_eq!(worksheet().initial_contacts_needed(4_500.0, 10.0), 45_000.0);
    }

    #[test]
    fn average_per_contact_divides_target_by_contacts() {
        let average = worksheet().average_per_contact(1_000_000.0, 45_000.0);

        assert_eq!(round_half_up(average), 22.22);
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_default_scenario() {
        let result = worksheet().calculate(&InputSet::default());

        assert_eq!(
            result.totals,
            FunnelTotals {
                total_premium: 2_500_000.00,
                cases_needed: 500.00,
                appointments_needed: 1_500.00,
                prospects_needed: 4_500.00,
                initial_contacts_needed: 45_000.00,
            }
        );
        assert_eq!(result.average_per_contact, 22.22);
        assert_eq!(result.inputs, InputSet::default());
        assert!(!result.is_degenerate());
    }

    #[test]
    fn calculate_is_deterministic() {
        let inputs = InputSet::default().with_field(StepId::CaseSize, 3_333.0);

        assert_eq!(worksheet().calculate(&inputs), worksheet().calculate(&inputs));
    }

    #[test]
    fn calculate_rounds_every_stored_value() {
        let inputs = InputSet::default().with_field(StepId::CaseSize, 3_000.0);

        let result = worksheet().calculate(&inputs);

        // 2,500,000 / 3,000 = 833.333...
        assert_eq!(result.totals.cases_needed, 833.33);
        // Chained on the unrounded value: 833.333... × 3 = 2,500
        assert_eq!(result.totals.appointments_needed, 2_500.00);
        assert_eq!(result.totals.initial_contacts_needed, 75_000.00);
        assert_eq!(result.average_per_contact, 13.33);
    }

    #[test]
    fn scaling_target_scales_needed_but_not_average() {
        let base = worksheet().calculate(&InputSet::default());
        let doubled = worksheet().calculate(
            &InputSet::default().with_field(StepId::TargetCommission, 2_000_000.0),
        );

        for ((_, before), (_, after)) in base
            .totals
            .entries()
            .iter()
            .zip(doubled.totals.entries().iter())
        {
            assert!(after > before);
        }
        assert_eq!(doubled.totals.cases_needed, 1_000.00);
        assert_eq!(doubled.average_per_contact, base.average_per_contact);
    }

    #[test]
    fn calculate_zero_commission_rate_propagates_infinity() {
        let inputs = InputSet::default().with_field(StepId::CommissionRate, 0.0);

        let result = worksheet().calculate(&inputs);

        for (label, value) in result.totals.entries() {
            assert_eq!(value, f64::INFINITY, "{label} should be infinite");
        }
        // 1,000,000 / ∞ is exactly what IEEE division gives.
        assert_eq!(result.average_per_contact, 0.0);
        assert!(result.is_degenerate());
    }

    #[test]
    fn calculate_zero_ratio_makes_headline_infinite() {
        let inputs = InputSet::default().with_field(StepId::ClosingRatio, 0.0);

        let result = worksheet().calculate(&inputs);

        assert_eq!(result.totals.cases_needed, 500.00);
        assert_eq!(result.totals.appointments_needed, 0.0);
        assert_eq!(result.totals.initial_contacts_needed, 0.0);
        assert_eq!(result.average_per_contact, f64::INFINITY);
        assert!(result.is_degenerate());
    }

    #[test]
    fn calculate_zero_target_and_rate_is_nan_everywhere() {
        let inputs = InputSet::default()
            .with_field(StepId::TargetCommission, 0.0)
            .with_field(StepId::CommissionRate, 0.0);

        let result = worksheet().calculate(&inputs);

        assert!(result.totals.total_premium.is_nan());
        assert!(result.totals.initial_contacts_needed.is_nan());
        assert!(result.average_per_contact.is_nan());
    }

    #[test]
    fn calculate_huge_finite_values_stay_finite() {
        let inputs = InputSet {
            target_commission: 1e307,
            commission_rate: 100.0,
            case_size: 1.0,
            closing_ratio: 1.0,
            opening_ratio: 1.0,
            approach_ratio: 1.0,
        };

        let result = worksheet().calculate(&inputs);

        assert_eq!(result.totals.total_premium, 1e307);
        assert_eq!(result.totals.initial_contacts_needed, 1e307);
        assert_eq!(result.average_per_contact, 1.0);
        assert!(!result.is_degenerate());
    }

    #[test]
    fn compute_matches_worksheet() {
        let inputs = InputSet::default().with_field(StepId::OpeningRatio, 4.0);

        assert_eq!(compute(&inputs), worksheet().calculate(&inputs));
    }

    #[test]
    fn display_report_lists_totals_and_headline() {
        let text = compute(&InputSet::default()).to_string();

        assert!(text.contains("Total Premium:"));
        assert!(text.contains("2,500,000.00"));
        assert!(text.contains("Initial Contacts Needed:"));
        assert!(text.contains("45,000.00"));
        assert!(
            text.lines()
                .last()
                .is_some_and(|line| line.ends_with("$22.22"))
        );
    }
}
