use std::fmt;

use serde::Serialize;

use crate::calculations::common::format_amount;
use crate::diagram::FunnelDiagram;
use crate::models::InputSet;

/// The intermediate funnel quantities, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FunnelTotals {
    pub total_premium: f64,
    pub cases_needed: f64,
    pub appointments_needed: f64,
    pub prospects_needed: f64,
    pub initial_contacts_needed: f64,
}

impl FunnelTotals {
    /// Display label and value of each total, in funnel order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Total Premium", self.total_premium),
            ("Cases Needed", self.cases_needed),
            ("Appointments Needed", self.appointments_needed),
            ("Prospects Needed", self.prospects_needed),
            ("Initial Contacts Needed", self.initial_contacts_needed),
        ]
    }
}

/// Output of one funnel calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelResult {
    /// Inputs the calculation ran on.
    pub inputs: InputSet,
    pub totals: FunnelTotals,
    /// Headline metric: commission generated per initial contact.
    pub average_per_contact: f64,
    pub diagram: FunnelDiagram,
}

impl FunnelResult {
    /// True when a zero input made any derived value infinite or NaN.
    ///
    /// The values themselves are left exactly as the arithmetic produced them.
    pub fn is_degenerate(&self) -> bool {
        self.totals
            .entries()
            .iter()
            .map(|(_, value)| *value)
            .chain(std::iter::once(self.average_per_contact))
            .any(|value| !value.is_finite())
    }
}

impl fmt::Display for FunnelResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (label, value) in self.totals.entries() {
            writeln!(
                f,
                "{:<36}{:>18}",
                format!("{label}:"),
                format_amount(value)
            )?;
        }
        write!(
            f,
            "{:<36}{:>18}",
            "Average Premium per Initial Contact:",
            format!("${}", format_amount(self.average_per_contact))
        )
    }
}
