mod defaults;
mod variant_profile;
mod vehicle_description;

pub use variant_profile::VariantProfile;
pub use vehicle_description::VehicleDescription;
