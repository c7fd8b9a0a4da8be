mod funnel_result;
mod input_set;
mod step;

pub use funnel_result::{FunnelResult, FunnelTotals};
pub use input_set::InputSet;
pub use step::{STEPS, Step, StepId, UnknownStepId};
