mod consumption_base;
mod cost_breakdown;
mod cost_category;
mod cost_ops;

pub use consumption_base::ConsumptionBase;
pub use cost_breakdown::CostBreakdown;
pub use cost_category::{CostCategory, TOTAL_KEY};
pub use cost_ops::compute_breakdown;
