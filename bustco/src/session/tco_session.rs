use super::ResultStore;
use crate::comparison::{Comparison, ZeroPolicy};
use bustco_core::{compute_breakdown, CostBreakdown, ParameterSet, TcoError, Variant};
use std::collections::HashMap;

/// one calculator session: the live parameter set of each opened variant plus
/// the results computed from them.
///
/// editing a parameter does not touch the stored breakdown of that variant.
/// results stay as they were until the variant is calculated again.
#[derive(Clone, Debug)]
pub struct TcoSession {
    parameters: HashMap<Variant, ParameterSet>,
    results: ResultStore,
}

impl Default for TcoSession {
    fn default() -> Self {
        TcoSession::new()
    }
}

impl TcoSession {
    /// a new session with an empty result store.
    pub fn new() -> TcoSession {
        TcoSession::with_results(ResultStore::new())
    }

    /// a new session resuming a result store, such as one decoded from
    /// session storage.
    pub fn with_results(results: ResultStore) -> TcoSession {
        TcoSession {
            parameters: HashMap::new(),
            results,
        }
    }

    /// the live parameter set of a variant, as a form would be populated.
    /// a variant opened for the first time starts from its defaults.
    pub fn open(&mut self, variant: Variant) -> &ParameterSet {
        self.parameters_mut(variant)
    }

    /// edits one field the way the input widget commits it. returns the
    /// committed value.
    pub fn edit(&mut self, variant: Variant, key: &str, value: f64) -> Result<f64, TcoError> {
        let committed = self.parameters_mut(variant).commit(key, value)?;
        log::debug!("{variant}: committed {key} = {committed}");
        Ok(committed)
    }

    /// overwrites one field with the value as given, skipping widget rules.
    pub fn override_field(
        &mut self,
        variant: Variant,
        key: &str,
        value: f64,
    ) -> Result<(), TcoError> {
        self.parameters_mut(variant).set(key, value)?;
        log::debug!("{variant}: set {key} = {value}");
        Ok(())
    }

    /// runs the cost model on the live parameters of a variant and stores the
    /// result. on error the previously stored breakdown is left in place.
    pub fn calculate(&mut self, variant: Variant) -> Result<&CostBreakdown, TcoError> {
        let breakdown = compute_breakdown(self.parameters_mut(variant))?;
        Ok(self.results.put(variant, breakdown))
    }

    pub fn results(&self) -> &ResultStore {
        &self.results
    }

    /// compares the stored results of all variants.
    pub fn compare(&self, zero_policy: ZeroPolicy) -> Result<Comparison, TcoError> {
        Comparison::from_store(&self.results, zero_policy)
    }

    fn parameters_mut(&mut self, variant: Variant) -> &mut ParameterSet {
        self.parameters.entry(variant).or_insert_with(|| {
            log::debug!("opening {variant} with default parameters");
            ParameterSet::default_for(variant)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TcoSession;
    use crate::comparison::ZeroPolicy;
    use bustco_core::{CostCategory, TcoError, Variant};

    #[test]
    fn test_open_returns_defaults() {
        let mut session = TcoSession::new();
        let params = session.open(Variant::Bev);
        assert_eq!(params.get("electricity_consumption"), Ok(0.55));
        assert_eq!(session.results().missing(), Variant::ALL.to_vec());
    }

    #[test]
    fn test_compare_before_calculating_names_missing_variants() {
        let mut session = TcoSession::new();
        session
            .calculate(Variant::Ice)
            .expect("test invariant failed");
        match session.compare(ZeroPolicy::Keep) {
            Err(TcoError::MissingData { missing }) => {
                assert_eq!(missing, vec![Variant::Bev, Variant::BevAd])
            }
            other => panic!("expected MissingData, found {other:?}"),
        }
    }

    #[test]
    fn test_edit_does_not_invalidate_stored_result() {
        let mut session = TcoSession::new();
        let before = session
            .calculate(Variant::Ice)
            .expect("test invariant failed")
            .total();
        session
            .edit(Variant::Ice, "fuel_price", 2.0)
            .expect("test invariant failed");
        let stored = session
            .results()
            .get(Variant::Ice)
            .expect("test invariant failed");
        assert_eq!(stored.total(), before);

        let after = session
            .calculate(Variant::Ice)
            .expect("test invariant failed");
        // 0.4 €/L more at 28.5 L/100km over 14.4 km
        let expected = before + 0.4 * 0.285 * 14.4;
        assert!((after.total() - expected).abs() < 1e-9);
        assert!(after.get(CostCategory::Fuel) > 6.5664);
    }

    #[test]
    fn test_failed_calculation_keeps_previous_result() {
        let mut session = TcoSession::new();
        session
            .calculate(Variant::Bev)
            .expect("test invariant failed");
        session
            .override_field(Variant::Bev, "weeks_per_year", 0.0)
            .expect("test invariant failed");
        let result = session.calculate(Variant::Bev);
        assert!(matches!(result, Err(TcoError::InvalidInput { .. })));
        assert!(session.results().contains(Variant::Bev));
    }

    #[test]
    fn test_edit_rejects_fields_of_other_variants() {
        let mut session = TcoSession::new();
        let result = session.edit(Variant::Ice, "steward_salary_month", 3000.0);
        assert!(matches!(result, Err(TcoError::UnknownField { .. })));
    }

    #[test]
    fn test_full_session_compares_all_variants() {
        let mut session = TcoSession::new();
        for variant in Variant::ALL {
            session.calculate(variant).expect("test invariant failed");
        }
        let comparison = session
            .compare(ZeroPolicy::Keep)
            .expect("test invariant failed");
        assert!((comparison.total.values.ice - 40.016541).abs() < 1e-5);
        assert!((comparison.total.values.bev - 42.551928).abs() < 1e-5);
        assert!((comparison.total.values.bev_ad - 38.107333).abs() < 1e-5);
    }
}
