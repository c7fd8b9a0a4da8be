use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of one wizard step, and of the matching [`InputSet`](crate::InputSet) field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepId {
    TargetCommission,
    CommissionRate,
    CaseSize,
    ClosingRatio,
    OpeningRatio,
    ApproachRatio,
}

impl StepId {
    /// Stable string key, also used as CSV header and CLI `--set` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TargetCommission => "targetCommission",
            Self::CommissionRate => "commissionRate",
            Self::CaseSize => "caseSize",
            Self::ClosingRatio => "closingRatio",
            Self::OpeningRatio => "openingRatio",
            Self::ApproachRatio => "approachRatio",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "targetCommission" => Some(Self::TargetCommission),
            "commissionRate" => Some(Self::CommissionRate),
            "caseSize" => Some(Self::CaseSize),
            "closingRatio" => Some(Self::ClosingRatio),
            "openingRatio" => Some(Self::OpeningRatio),
            "approachRatio" => Some(Self::ApproachRatio),
            _ => None,
        }
    }

    /// Descriptor of this id in [`STEPS`].
    pub fn step(&self) -> &'static Step {
        &STEPS[self.index()]
    }

    /// Position of this id in [`STEPS`].
    pub fn index(&self) -> usize {
        match self {
            Self::TargetCommission => 0,
            Self::CommissionRate => 1,
            Self::CaseSize => 2,
            Self::ClosingRatio => 3,
            Self::OpeningRatio => 4,
            Self::ApproachRatio => 5,
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string key does not name any step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown step id '{0}'")]
pub struct UnknownStepId(pub String);

impl FromStr for StepId {
    type Err = UnknownStepId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownStepId(s.to_string()))
    }
}

/// One screen of the wizard: which field it edits, the prompt shown and the
/// value the field starts with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub id: StepId,
    pub label: &'static str,
    pub default_value: f64,
}

/// The wizard's steps in calculation dependency order.
pub const STEPS: [Step; 6] = [
    Step {
        id: StepId::TargetCommission,
        label: "Target Commission",
        default_value: 1_000_000.0,
    },
    Step {
        id: StepId::CommissionRate,
        label: "Commission Rate (%)",
        default_value: 40.0,
    },
    Step {
        id: StepId::CaseSize,
        label: "Average Case Size",
        default_value: 5_000.0,
    },
    Step {
        id: StepId::ClosingRatio,
        label: "Average Closing Ratio",
        default_value: 3.0,
    },
    Step {
        id: StepId::OpeningRatio,
        label: "Average Opening Ratio",
        default_value: 3.0,
    },
    Step {
        id: StepId::ApproachRatio,
        label: "Average Approach Ratio",
        default_value: 10.0,
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn steps_are_indexed_by_their_id() {
        for (index, step) in STEPS.iter().enumerate() {
            assert_eq!(step.id.index(), index);
            assert_eq!(step.id.step(), step);
        }
    }

    #[test]
    fn step_keys_round_trip_through_from_str() {
        for step in &STEPS {
            let parsed: StepId = step.id.as_str().parse().unwrap();
            assert_eq!(parsed, step.id);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "targetPremium".parse::<StepId>().unwrap_err();

        assert_eq!(err, UnknownStepId("targetPremium".to_string()));
        assert_eq!(err.to_string(), "unknown step id 'targetPremium'");
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(StepId::parse("CaseSize"), None);
    }

    #[test]
    fn defaults_match_reference_scenario() {
        let defaults: Vec<f64> = STEPS.iter().map(|s| s.default_value).collect();

        assert_eq!(defaults, vec![1_000_000.0, 40.0, 5_000.0, 3.0, 3.0, 10.0]);
    }
}
