use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// key of the sum-of-categories entry in a serialized breakdown.
pub const TOTAL_KEY: &str = "total";

/// a named cost bucket contributing to the total cost per cycle. every
/// breakdown carries every category, so breakdowns of different variants
/// line up row by row.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// fuel for ICE, electricity for BEV and BEV-AD
    Fuel,
    Adblue,
    Tires,
    Lubricant,
    Toll,
    Leasing,
    VehicleTax,
    Insurance,
    Inspection,
    Maintenance,
    Repairs,
    SmallParts,
    Cleaning,
    Garage,
    OnboardSystem,
    Transfer,
    Registration,
    Commissioning,
    Return,
    Driver,
    AdminPartial,
    AdminGeneral,
    AdLicense,
    Steward,
    TechSupervision,
}

impl CostCategory {
    pub const COUNT: usize = 25;

    /// every category in canonical order.
    pub const ALL: [CostCategory; CostCategory::COUNT] = [
        CostCategory::Fuel,
        CostCategory::Adblue,
        CostCategory::Tires,
        CostCategory::Lubricant,
        CostCategory::Toll,
        CostCategory::Leasing,
        CostCategory::VehicleTax,
        CostCategory::Insurance,
        CostCategory::Inspection,
        CostCategory::Maintenance,
        CostCategory::Repairs,
        CostCategory::SmallParts,
        CostCategory::Cleaning,
        CostCategory::Garage,
        CostCategory::OnboardSystem,
        CostCategory::Transfer,
        CostCategory::Registration,
        CostCategory::Commissioning,
        CostCategory::Return,
        CostCategory::Driver,
        CostCategory::AdminPartial,
        CostCategory::AdminGeneral,
        CostCategory::AdLicense,
        CostCategory::Steward,
        CostCategory::TechSupervision,
    ];

    /// position in [`CostCategory::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// canonical key, used in serialized breakdowns and chart labels.
    pub fn key(&self) -> &'static str {
        match self {
            CostCategory::Fuel => "fuel",
            CostCategory::Adblue => "adblue",
            CostCategory::Tires => "tires",
            CostCategory::Lubricant => "lubricant",
            CostCategory::Toll => "toll",
            CostCategory::Leasing => "leasing",
            CostCategory::VehicleTax => "vehicle_tax",
            CostCategory::Insurance => "insurance",
            CostCategory::Inspection => "inspection",
            CostCategory::Maintenance => "maintenance",
            CostCategory::Repairs => "repairs",
            CostCategory::SmallParts => "small_parts",
            CostCategory::Cleaning => "cleaning",
            CostCategory::Garage => "garage",
            CostCategory::OnboardSystem => "onboard_system",
            CostCategory::Transfer => "transfer",
            CostCategory::Registration => "registration",
            CostCategory::Commissioning => "commissioning",
            CostCategory::Return => "return",
            CostCategory::Driver => "driver",
            CostCategory::AdminPartial => "admin_partial",
            CostCategory::AdminGeneral => "admin_general",
            CostCategory::AdLicense => "ad_license",
            CostCategory::Steward => "steward",
            CostCategory::TechSupervision => "tech_supervision",
        }
    }

    /// row label in the comparison table.
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Fuel => "Fuel / Energy",
            CostCategory::Adblue => "AdBlue",
            CostCategory::Tires => "Tires",
            CostCategory::Lubricant => "Lubricant",
            CostCategory::Toll => "Toll",
            CostCategory::Leasing => "Leasing",
            CostCategory::VehicleTax => "Vehicle Tax",
            CostCategory::Insurance => "Insurance",
            CostCategory::Inspection => "Inspection",
            CostCategory::Maintenance => "Maintenance",
            CostCategory::Repairs => "Repairs",
            CostCategory::SmallParts => "Small Parts",
            CostCategory::Cleaning => "Cleaning",
            CostCategory::Garage => "Garage",
            CostCategory::OnboardSystem => "Onboard System Maint.",
            CostCategory::Transfer => "Delivery",
            CostCategory::Registration => "Registration",
            CostCategory::Commissioning => "Commissioning",
            CostCategory::Return => "Return Cost",
            CostCategory::Driver => "Driver Salary",
            CostCategory::AdminPartial => "Admin Partial",
            CostCategory::AdminGeneral => "General Admin",
            CostCategory::AdLicense => "AD License",
            CostCategory::Steward => "Steward",
            CostCategory::TechSupervision => "Tech Supervision",
        }
    }
}

impl Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CostCategory::ALL
            .iter()
            .find(|c| c.key() == s)
            .copied()
            .ok_or_else(|| format!("unknown cost category '{s}'"))
    }
}
