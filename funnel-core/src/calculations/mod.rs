//! Sales funnel calculations.
//!
//! This module turns the six wizard inputs into the funnel totals, the
//! headline per-contact metric and the diagram describing the chain.

pub mod common;
pub mod funnel;

pub use funnel::{FunnelCalculator, FunnelWorksheet, compute};
