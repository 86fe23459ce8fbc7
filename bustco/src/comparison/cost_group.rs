use bustco_core::CostCategory;
use serde::Serialize;
use std::fmt::Display;

/// section of the comparison table. each cost category belongs to exactly
/// one group.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CostGroup {
    OperatingPerKm,
    FixedPerPeriod,
    OneTimeAllocated,
    Personnel,
    Administrative,
    Autonomous,
}

impl CostGroup {
    /// groups in table order.
    pub const ALL: [CostGroup; 6] = [
        CostGroup::OperatingPerKm,
        CostGroup::FixedPerPeriod,
        CostGroup::OneTimeAllocated,
        CostGroup::Personnel,
        CostGroup::Administrative,
        CostGroup::Autonomous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostGroup::OperatingPerKm => "Operating Costs per km",
            CostGroup::FixedPerPeriod => "Fixed Vehicle Costs per Period",
            CostGroup::OneTimeAllocated => "One-time Costs (Allocated)",
            CostGroup::Personnel => "Personnel Costs",
            CostGroup::Administrative => "Administrative Costs",
            CostGroup::Autonomous => "Autonomous Costs",
        }
    }

    /// member categories in row order.
    pub fn categories(&self) -> &'static [CostCategory] {
        use CostCategory as C;
        match self {
            CostGroup::OperatingPerKm => &[C::Fuel, C::Adblue, C::Tires, C::Lubricant, C::Toll],
            CostGroup::FixedPerPeriod => &[
                C::Leasing,
                C::VehicleTax,
                C::Insurance,
                C::Inspection,
                C::Maintenance,
                C::Repairs,
                C::SmallParts,
                C::Cleaning,
                C::Garage,
                C::OnboardSystem,
            ],
            CostGroup::OneTimeAllocated => {
                &[C::Transfer, C::Registration, C::Commissioning, C::Return]
            }
            CostGroup::Personnel => &[C::Driver],
            CostGroup::Administrative => &[C::AdminPartial, C::AdminGeneral],
            CostGroup::Autonomous => &[C::AdLicense, C::Steward, C::TechSupervision],
        }
    }
}

impl Display for CostGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::CostGroup;
    use bustco_core::CostCategory;
    use itertools::Itertools;

    #[test]
    fn test_groups_cover_every_category_once_in_canonical_order() {
        let listed = CostGroup::ALL
            .iter()
            .flat_map(|g| g.categories().iter().copied())
            .collect_vec();
        assert_eq!(listed, CostCategory::ALL.to_vec());
    }
}
