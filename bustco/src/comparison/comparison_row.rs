use super::RowHighlight;
use bustco_core::{CostBreakdown, CostCategory, Variant};
use serde::Serialize;

/// one value per variant, in comparison column order.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct VariantValues {
    pub ice: f64,
    pub bev: f64,
    pub bev_ad: f64,
}

impl VariantValues {
    pub fn get(&self, variant: Variant) -> f64 {
        match variant {
            Variant::Ice => self.ice,
            Variant::Bev => self.bev,
            Variant::BevAd => self.bev_ad,
        }
    }
}

/// a category row of the comparison table.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub category: CostCategory,
    pub label: &'static str,
    pub values: VariantValues,
    pub highlight: RowHighlight,
}

impl ComparisonRow {
    pub fn new(
        category: CostCategory,
        ice: &CostBreakdown,
        bev: &CostBreakdown,
        bev_ad: &CostBreakdown,
    ) -> ComparisonRow {
        let values = VariantValues {
            ice: ice.get(category),
            bev: bev.get(category),
            bev_ad: bev_ad.get(category),
        };
        ComparisonRow {
            category,
            label: category.label(),
            highlight: RowHighlight::classify(values.ice, values.bev, values.bev_ad),
            values,
        }
    }
}

/// the closing row of the table, carrying each variant's total. not highlighted.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TotalRow {
    pub label: &'static str,
    pub values: VariantValues,
}

impl TotalRow {
    pub const LABEL: &'static str = "Total Cost per Cycle";

    pub fn new(ice: &CostBreakdown, bev: &CostBreakdown, bev_ad: &CostBreakdown) -> TotalRow {
        TotalRow {
            label: TotalRow::LABEL,
            values: VariantValues {
                ice: ice.total(),
                bev: bev.total(),
                bev_ad: bev_ad.total(),
            },
        }
    }
}
