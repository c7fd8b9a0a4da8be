use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::common::format_amount;
use crate::models::{STEPS, StepId};

/// The six values the wizard collects, one per [`StepId`].
///
/// Every field always holds a number; the record starts from the step
/// defaults and only ever has single entries replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSet {
    pub target_commission: f64,
    pub commission_rate: f64,
    pub case_size: f64,
    pub closing_ratio: f64,
    pub opening_ratio: f64,
    pub approach_ratio: f64,
}

impl Default for InputSet {
    fn default() -> Self {
        let mut inputs = Self {
            target_commission: 0.0,
            commission_rate: 0.0,
            case_size: 0.0,
            closing_ratio: 0.0,
            opening_ratio: 0.0,
            approach_ratio: 0.0,
        };
        for step in &STEPS {
            inputs.set_field(step.id, step.default_value);
        }
        inputs
    }
}

impl InputSet {
    pub fn get_field(
        &self,
        id: StepId,
    ) -> f64 {
        match id {
            StepId::TargetCommission => self.target_commission,
            StepId::CommissionRate => self.commission_rate,
            StepId::CaseSize => self.case_size,
            StepId::ClosingRatio => self.closing_ratio,
            StepId::OpeningRatio => self.opening_ratio,
            StepId::ApproachRatio => self.approach_ratio,
        }
    }

    pub fn set_field(
        &mut self,
        id: StepId,
        value: f64,
    ) {
        let slot = match id {
            StepId::TargetCommission => &mut self.target_commission,
            StepId::CommissionRate => &mut self.commission_rate,
            StepId::CaseSize => &mut self.case_size,
            StepId::ClosingRatio => &mut self.closing_ratio,
            StepId::OpeningRatio => &mut self.opening_ratio,
            StepId::ApproachRatio => &mut self.approach_ratio,
        };
        *slot = value;
    }

    /// Copy of `self` with one field replaced.
    pub fn with_field(
        mut self,
        id: StepId,
        value: f64,
    ) -> Self {
        self.set_field(id, value);
        self
    }
}

impl fmt::Display for InputSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (i, step) in STEPS.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<24}{:>18}",
                format!("{}:", step.label),
                format_amount(self.get_field(step.id))
            )?;
        }
        Ok(())
    }
}
