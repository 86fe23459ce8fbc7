pub mod cost;
pub mod parameters;
pub mod profile;
mod tco_error;
mod variant;

pub use tco_error::TcoError;
pub use variant::Variant;
