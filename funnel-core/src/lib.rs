pub mod calculations;
pub mod diagram;
pub mod models;
pub mod wizard;

pub use calculations::{FunnelCalculator, FunnelWorksheet, compute};
pub use models::*;
pub use wizard::{NumericPolicy, Wizard, WizardState};
