use bustco_core::{CostBreakdown, TcoError, Variant};
use chrono::{DateTime, Local};
use std::collections::{hash_map::Entry, BTreeMap, HashMap};

/// a breakdown held by the [`ResultStore`] along with the time it was
/// computed. entries imported from storage carry no timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredBreakdown {
    pub breakdown: CostBreakdown,
    pub computed_at: Option<DateTime<Local>>,
}

/// session-scoped store of the most recent breakdown per variant.
///
/// entries are overwritten on every put and never removed. the storage form
/// maps `tco_ice`, `tco_bev` and `tco_bev_ad` to the breakdown serialized as a
/// flat JSON object.
#[derive(Clone, Debug, Default)]
pub struct ResultStore {
    entries: HashMap<Variant, StoredBreakdown>,
}

impl ResultStore {
    pub fn new() -> ResultStore {
        ResultStore::default()
    }

    /// stores a freshly computed breakdown, replacing any previous one.
    pub fn put(&mut self, variant: Variant, breakdown: CostBreakdown) -> &CostBreakdown {
        log::info!(
            "storing {} breakdown under '{}' (total {:.4})",
            variant.display_name(),
            variant.storage_key(),
            breakdown.total()
        );
        let entry = StoredBreakdown {
            breakdown,
            computed_at: Some(Local::now()),
        };
        match self.entries.entry(variant) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(entry);
                &occupied.into_mut().breakdown
            }
            Entry::Vacant(vacant) => &vacant.insert(entry).breakdown,
        }
    }

    pub fn get(&self, variant: Variant) -> Option<&CostBreakdown> {
        self.entries.get(&variant).map(|e| &e.breakdown)
    }

    pub fn get_entry(&self, variant: Variant) -> Option<&StoredBreakdown> {
        self.entries.get(&variant)
    }

    pub fn contains(&self, variant: Variant) -> bool {
        self.entries.contains_key(&variant)
    }

    /// variants with no stored breakdown, in comparison column order.
    pub fn missing(&self) -> Vec<Variant> {
        Variant::ALL
            .into_iter()
            .filter(|v| !self.contains(*v))
            .collect()
    }

    /// encodes every stored breakdown as a JSON string under its storage key.
    pub fn to_storage(&self) -> Result<BTreeMap<String, String>, TcoError> {
        let mut storage = BTreeMap::new();
        for variant in Variant::ALL {
            if let Some(entry) = self.entries.get(&variant) {
                let key = variant.storage_key();
                let encoded = serde_json::to_string(&entry.breakdown).map_err(|e| {
                    TcoError::StorageError {
                        key: key.clone(),
                        msg: e.to_string(),
                    }
                })?;
                storage.insert(key, encoded);
            }
        }
        Ok(storage)
    }

    /// decodes a storage map. keys that are not variant storage keys are
    /// skipped with a warning; a value that does not decode is a
    /// [`TcoError::StorageError`].
    pub fn from_storage(storage: &HashMap<String, String>) -> Result<ResultStore, TcoError> {
        let mut store = ResultStore::new();
        for (key, value) in storage.iter() {
            let Some(variant) = Variant::from_storage_key(key) else {
                log::warn!("ignoring unknown session storage key '{key}'");
                continue;
            };
            let breakdown = serde_json::from_str::<CostBreakdown>(value).map_err(|e| {
                TcoError::StorageError {
                    key: key.clone(),
                    msg: e.to_string(),
                }
            })?;
            log::debug!("loaded '{key}' from session storage");
            store.entries.insert(
                variant,
                StoredBreakdown {
                    breakdown,
                    computed_at: None,
                },
            );
        }
        Ok(store)
    }
}
