use super::cost_category::{CostCategory, TOTAL_KEY};
use crate::model::TcoError;
use serde::{ser::SerializeMap, Deserialize, Serialize};
use std::collections::HashMap;

/// per-cycle cost of one variant, split into every [`CostCategory`].
///
/// serializes as a flat `key -> number` object with one entry per category
/// followed by `total`, e.g. `{"fuel": 6.57, ..., "tech_supervision": 0.0, "total": 40.02}`.
/// this is the shape exchanged through session storage.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "HashMap<String, f64>")]
pub struct CostBreakdown {
    values: [f64; CostCategory::COUNT],
    total: f64,
}

impl CostBreakdown {
    /// builds a breakdown from (category, value) pairs. categories not listed
    /// are zero; a category listed twice keeps its last value.
    pub fn from_values<I>(values: I) -> CostBreakdown
    where
        I: IntoIterator<Item = (CostCategory, f64)>,
    {
        let mut result = [0.0; CostCategory::COUNT];
        for (category, value) in values {
            result[category.index()] = value;
        }
        let total = result.iter().sum();
        CostBreakdown {
            values: result,
            total,
        }
    }

    pub fn get(&self, category: CostCategory) -> f64 {
        self.values[category.index()]
    }

    /// sum of all category values.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// (category, value) pairs in canonical order, `total` excluded.
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        CostCategory::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    /// the flat serialized form as ordered (key, value) pairs, `total` last.
    pub fn to_flat(&self) -> Vec<(&'static str, f64)> {
        self.iter()
            .map(|(c, v)| (c.key(), v))
            .chain(std::iter::once((TOTAL_KEY, self.total)))
            .collect()
    }

    /// true if every category value and the total are finite.
    pub fn is_finite(&self) -> bool {
        self.total.is_finite() && self.values.iter().all(|v| v.is_finite())
    }
}

impl Serialize for CostBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(CostCategory::COUNT + 1))?;
        for (key, value) in self.to_flat() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

impl TryFrom<HashMap<String, f64>> for CostBreakdown {
    type Error = TcoError;

    /// reads a flat key -> number map. missing categories are read as zero and
    /// unknown keys are ignored, both with a warning. a map holding none of the
    /// categories is rejected. the total is recomputed from the categories.
    fn try_from(flat: HashMap<String, f64>) -> Result<Self, Self::Error> {
        let mut values = Vec::with_capacity(CostCategory::COUNT);
        for category in CostCategory::ALL {
            match flat.get(category.key()) {
                Some(v) if v.is_finite() => values.push((category, *v)),
                Some(v) => {
                    return Err(TcoError::StorageError {
                        key: category.key().to_string(),
                        msg: format!("stored value {v} is not a finite number"),
                    })
                }
                None => log::warn!(
                    "stored breakdown is missing category '{}', reading as 0",
                    category.key()
                ),
            }
        }
        if values.is_empty() {
            return Err(TcoError::StorageError {
                key: String::from(TOTAL_KEY),
                msg: format!(
                    "stored breakdown has none of the {} cost categories",
                    CostCategory::COUNT
                ),
            });
        }
        for key in flat.keys() {
            if key != TOTAL_KEY && key.parse::<CostCategory>().is_err() {
                log::warn!("ignoring unknown key '{key}' in stored breakdown");
            }
        }
        let breakdown = CostBreakdown::from_values(values);
        if let Some(stored_total) = flat.get(TOTAL_KEY) {
            let tolerance = 1e-6 * breakdown.total.abs().max(1.0);
            if (stored_total - breakdown.total).abs() > tolerance {
                log::warn!(
                    "stored total {} does not match sum of categories {}, using the sum",
                    stored_total,
                    breakdown.total
                );
            }
        }
        Ok(breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::CostBreakdown;
    use crate::model::{cost::CostCategory, TcoError};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_unlisted_categories_are_zero() {
        let breakdown = CostBreakdown::from_values([
            (CostCategory::Fuel, 6.5),
            (CostCategory::Steward, 0.5),
        ]);
        assert_eq!(breakdown.get(CostCategory::Driver), 0.0);
        assert_eq!(breakdown.total(), 7.0);
        assert_eq!(breakdown.iter().count(), CostCategory::COUNT);
    }

    #[test]
    fn test_serializes_flat_with_total() {
        let breakdown = CostBreakdown::from_values([(CostCategory::Return, 1.25)]);
        let value = serde_json::to_value(&breakdown).expect("test invariant failed");
        let obj = value.as_object().expect("test invariant failed");
        assert_eq!(obj.len(), CostCategory::COUNT + 1);
        assert_eq!(obj["return"], json!(1.25));
        assert_eq!(obj["total"], json!(1.25));
        assert_eq!(obj["tech_supervision"], json!(0.0));
    }

    #[test]
    fn test_deserialize_tolerates_partial_maps() {
        let input = json!({ "fuel": 2.0, "driver": 3.0, "total": 5.0, "co2": 9.0 });
        let breakdown: CostBreakdown =
            serde_json::from_value(input).expect("test invariant failed");
        assert_eq!(breakdown.get(CostCategory::Fuel), 2.0);
        assert_eq!(breakdown.get(CostCategory::Leasing), 0.0);
        assert_eq!(breakdown.total(), 5.0);
    }

    #[test]
    fn test_deserialize_recomputes_total() {
        let input = json!({ "fuel": 2.0, "toll": 1.0, "total": 100.0 });
        let breakdown: CostBreakdown =
            serde_json::from_value(input).expect("test invariant failed");
        assert_eq!(breakdown.total(), 3.0);
    }

    #[test]
    fn test_deserialize_rejects_non_numbers() {
        let input = json!({ "fuel": "cheap" });
        let result = serde_json::from_value::<CostBreakdown>(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_maps_without_categories() {
        for input in [json!({}), json!({ "total": 38.1 }), json!({ "co2": 1.0 })] {
            let result = serde_json::from_value::<CostBreakdown>(input);
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_non_finite_value_is_storage_error() {
        let flat = HashMap::from([(String::from("fuel"), f64::NAN)]);
        match CostBreakdown::try_from(flat) {
            Err(TcoError::StorageError { key, .. }) => assert_eq!(key, "fuel"),
            other => panic!("expected StorageError, found {other:?}"),
        }
    }
}
