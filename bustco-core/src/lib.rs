pub mod model;

pub use model::cost::{compute_breakdown, CostBreakdown, CostCategory};
pub use model::parameters::ParameterSet;
pub use model::profile::VariantProfile;
pub use model::{TcoError, Variant};
