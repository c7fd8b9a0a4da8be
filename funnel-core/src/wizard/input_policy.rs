//! How raw field text becomes a number.
//!
//! Unparseable text is never an error: it is stored as `0`. The policy only
//! decides how much of the text has to look like a number.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Longest leading run of the text that reads as a float.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("leading number pattern is valid")
});

/// Named policy for turning field text into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericPolicy {
    /// Uses the leading numeric part of the text (`"12abc"` → 12) and
    /// falls back to 0 when there is none.
    #[default]
    Lenient,
    /// The whole text must be a number, otherwise 0.
    Strict,
}

impl NumericPolicy {
    /// Coerces `raw` to a number under this policy.
    ///
    /// Surrounding whitespace and `,` thousands separators are ignored in
    /// both modes. NaN is never returned.
    ///
    /// ```
    /// use funnel_core::NumericPolicy;
    ///
    /// assert_eq!(NumericPolicy::Lenient.coerce("1,000,000"), 1_000_000.0);
    /// assert_eq!(NumericPolicy::Lenient.coerce("40%"), 40.0);
    /// assert_eq!(NumericPolicy::Strict.coerce("40%"), 0.0);
    /// assert_eq!(NumericPolicy::Strict.coerce("abc"), 0.0);
    /// ```
    pub fn coerce(
        &self,
        raw: &str,
    ) -> f64 {
        let normalized = normalize_numeric_input(raw);
        let parsed = match self {
            Self::Lenient => LEADING_NUMBER
                .find(&normalized)
                .and_then(|m| m.as_str().parse::<f64>().ok()),
            Self::Strict => normalized.parse::<f64>().ok(),
        };

        match parsed {
            Some(value) if !value.is_nan() => value,
            _ => {
                if is_unfinished_number(&normalized) {
                    debug!(input = %raw, "unfinished number stored as 0");
                } else {
                    warn!(input = %raw, policy = ?self, "non-numeric input stored as 0");
                }
                0.0
            }
        }
    }
}

/// Empty text, or a sign and/or decimal point with no digits yet.
fn is_unfinished_number(normalized: &str) -> bool {
    matches!(normalized, "" | "+" | "-" | "." | "+." | "-.")
}

/// Trims whitespace and removes `,` thousands separators.
fn normalize_numeric_input(s: &str) -> String {
    s.trim().replace(',', "")
}
