use bustco_core::{CostBreakdown, Variant};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// fill colors assigned to chart segments, repeating once exhausted.
pub const CHART_PALETTE: [&str; 10] = [
    "#4F81BD", "#C0504D", "#9BBB59", "#8064A2", "#4BACC6", "#F79646", "#92A9CF", "#D99694",
    "#8DB3E2", "#E6B8B7",
];

/// whether zero-valued categories appear in a composition series.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPolicy {
    #[default]
    Keep,
    Exclude,
}

/// the cost composition of one variant as parallel label/value arrays, as
/// consumed by a pie chart. never contains the total.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CompositionSeries {
    pub variant: Variant,
    pub title: &'static str,
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl CompositionSeries {
    pub fn new(variant: Variant, breakdown: &CostBreakdown, policy: ZeroPolicy) -> Self {
        let (labels, values): (Vec<_>, Vec<_>) = breakdown
            .iter()
            .filter(|(_, value)| policy == ZeroPolicy::Keep || *value != 0.0)
            .map(|(category, value)| (category.key(), value))
            .unzip();
        let colors = CHART_PALETTE.iter().copied().cycle().take(labels.len()).collect();
        CompositionSeries {
            variant,
            title: variant.display_name(),
            labels,
            values,
            colors,
        }
    }

    /// true when every category was excluded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CompositionSeries, ZeroPolicy, CHART_PALETTE};
    use bustco_core::{CostBreakdown, CostCategory, Variant};

    fn sample() -> CostBreakdown {
        CostBreakdown::from_values([
            (CostCategory::Fuel, 4.752),
            (CostCategory::Tires, 0.54),
            (CostCategory::Driver, 21.08),
        ])
    }

    #[test]
    fn test_keep_lists_every_category_without_total() {
        let series = CompositionSeries::new(Variant::Bev, &sample(), ZeroPolicy::Keep);
        assert_eq!(series.values.len(), CostCategory::COUNT);
        assert!(!series.labels.contains(&"total"));
        assert_eq!(series.labels[0], "fuel");
        assert_eq!(series.title, "BEV");
    }

    #[test]
    fn test_exclude_drops_zero_categories() {
        let series = CompositionSeries::new(Variant::Bev, &sample(), ZeroPolicy::Exclude);
        assert_eq!(series.labels, vec!["fuel", "tires", "driver"]);
        assert_eq!(series.values, vec![4.752, 0.54, 21.08]);
    }

    #[test]
    fn test_palette_cycles() {
        let series = CompositionSeries::new(Variant::Ice, &sample(), ZeroPolicy::Keep);
        assert_eq!(series.colors.len(), series.values.len());
        assert_eq!(series.colors[0], CHART_PALETTE[0]);
        assert_eq!(series.colors[10], CHART_PALETTE[0]);
        assert_eq!(series.colors[13], CHART_PALETTE[3]);
    }
}
