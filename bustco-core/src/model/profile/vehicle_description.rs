use serde::{Deserialize, Serialize};

/// the reference vehicle a variant's default parameters were taken from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VehicleDescription {
    pub model: String,
    pub summary: String,
    pub seats: u32,
    pub standing: u32,
}

impl VehicleDescription {
    pub fn new(model: &str, summary: &str, seats: u32, standing: u32) -> VehicleDescription {
        VehicleDescription {
            model: model.to_string(),
            summary: summary.to_string(),
            seats,
            standing,
        }
    }

    /// total passenger capacity.
    pub fn capacity(&self) -> u32 {
        self.seats + self.standing
    }
}
