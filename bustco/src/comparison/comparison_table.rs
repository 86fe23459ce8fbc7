use super::{ComparisonRow, CompositionSeries, CostGroup, TotalRow, ZeroPolicy};
use crate::session::ResultStore;
use bustco_core::{CostBreakdown, TcoError, Variant};
use serde::Serialize;

/// a titled section of the comparison table.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ComparisonGroup {
    pub group: CostGroup,
    pub label: &'static str,
    pub rows: Vec<ComparisonRow>,
}

/// the comparison of all three variants.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Comparison {
    pub groups: Vec<ComparisonGroup>,
    pub total: TotalRow,
    /// one composition per variant, in column order
    pub series: Vec<CompositionSeries>,
}

impl Comparison {
    /// builds the comparison from the stored results. fails with
    /// [`TcoError::MissingData`] naming every variant without a result.
    pub fn from_store(
        store: &ResultStore,
        zero_policy: ZeroPolicy,
    ) -> Result<Comparison, TcoError> {
        match (
            store.get(Variant::Ice),
            store.get(Variant::Bev),
            store.get(Variant::BevAd),
        ) {
            (Some(ice), Some(bev), Some(bev_ad)) => {
                Ok(Comparison::new(ice, bev, bev_ad, zero_policy))
            }
            _ => Err(TcoError::MissingData {
                missing: store.missing(),
            }),
        }
    }

    pub fn new(
        ice: &CostBreakdown,
        bev: &CostBreakdown,
        bev_ad: &CostBreakdown,
        zero_policy: ZeroPolicy,
    ) -> Comparison {
        let groups = CostGroup::ALL
            .into_iter()
            .map(|group| ComparisonGroup {
                group,
                label: group.label(),
                rows: group
                    .categories()
                    .iter()
                    .map(|c| ComparisonRow::new(*c, ice, bev, bev_ad))
                    .collect(),
            })
            .collect();
        let series = vec![
            CompositionSeries::new(Variant::Ice, ice, zero_policy),
            CompositionSeries::new(Variant::Bev, bev, zero_policy),
            CompositionSeries::new(Variant::BevAd, bev_ad, zero_policy),
        ];
        Comparison {
            groups,
            total: TotalRow::new(ice, bev, bev_ad),
            series,
        }
    }

    /// all category rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::Comparison;
    use crate::comparison::{CostGroup, ZeroPolicy};
    use crate::session::ResultStore;
    use bustco_core::{CostBreakdown, CostCategory, TcoError, Variant};

    fn store_with(values: [(Variant, f64); 3]) -> ResultStore {
        let mut store = ResultStore::new();
        for (variant, fuel) in values {
            store.put(
                variant,
                CostBreakdown::from_values([
                    (CostCategory::Fuel, fuel),
                    (CostCategory::Garage, 1.0),
                ]),
            );
        }
        store
    }

    #[test]
    fn test_missing_results_are_named() {
        let mut store = ResultStore::new();
        store.put(Variant::Bev, CostBreakdown::from_values(std::iter::empty()));
        match Comparison::from_store(&store, ZeroPolicy::Keep) {
            Err(e @ TcoError::MissingData { .. }) => {
                assert_eq!(e.to_string(), "please calculate ICE, BEV-AD TCO first");
            }
            other => panic!("expected MissingData, found {other:?}"),
        }
    }

    #[test]
    fn test_rows_follow_group_taxonomy() {
        let store = store_with([(Variant::Ice, 10.0), (Variant::Bev, 12.0), (Variant::BevAd, 8.0)]);
        let comparison =
            Comparison::from_store(&store, ZeroPolicy::Keep).expect("test invariant failed");
        let labels: Vec<&str> = comparison.groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, CostGroup::ALL.map(|g| g.label()).to_vec());
        assert_eq!(comparison.rows().count(), CostCategory::COUNT);

        let fuel = comparison
            .rows()
            .find(|r| r.category == CostCategory::Fuel)
            .expect("test invariant failed");
        assert!(fuel.highlight.bev_higher);
        assert!(fuel.highlight.ice_higher);
        assert!(!fuel.highlight.bev_ad_higher);

        let garage = comparison
            .rows()
            .find(|r| r.category == CostCategory::Garage)
            .expect("test invariant failed");
        assert!(garage.highlight.all_equal);

        assert_eq!(comparison.total.values.ice, 11.0);
        assert_eq!(comparison.total.values.bev, 13.0);
        assert_eq!(comparison.total.values.bev_ad, 9.0);
    }

    #[test]
    fn test_series_respect_zero_policy() {
        let store = store_with([(Variant::Ice, 10.0), (Variant::Bev, 0.0), (Variant::BevAd, 8.0)]);
        let comparison =
            Comparison::from_store(&store, ZeroPolicy::Exclude).expect("test invariant failed");
        let variants: Vec<Variant> = comparison.series.iter().map(|s| s.variant).collect();
        assert_eq!(variants, Variant::ALL.to_vec());
        assert_eq!(comparison.series[0].labels, vec!["fuel", "garage"]);
        assert_eq!(comparison.series[1].labels, vec!["garage"]);
    }
}
