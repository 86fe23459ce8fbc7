use super::VehicleDescription;
use crate::model::{parameters::ParameterSet, Variant};
use serde::{Deserialize, Serialize};

/// the starting point for a variant's calculator: reference vehicle plus
/// default parameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VariantProfile {
    pub variant: Variant,
    pub vehicle: VehicleDescription,
    pub parameters: ParameterSet,
}

impl VariantProfile {
    pub fn new(variant: Variant) -> VariantProfile {
        let vehicle = match variant {
            Variant::Ice => VehicleDescription::new(
                "Mercedes-Benz Citaro LE C2",
                "High-capacity European city bus designed for efficiency and reliability.",
                39,
                60,
            ),
            Variant::Bev => VehicleDescription::new(
                "MAN Lion's City E",
                "Zero-emission electric bus offering quiet, efficient and sustainable urban mobility.",
                16,
                24,
            ),
            Variant::BevAd => VehicleDescription::new(
                "eVersum eShuttle AD",
                "Autonomous electric shuttle enabling safe, efficient and driverless mobility.",
                16,
                24,
            ),
        };
        VariantProfile {
            variant,
            vehicle,
            parameters: ParameterSet::default_for(variant),
        }
    }

    /// profiles for every variant in comparison order.
    pub fn all() -> Vec<VariantProfile> {
        Variant::ALL.iter().map(|v| VariantProfile::new(*v)).collect()
    }
}
