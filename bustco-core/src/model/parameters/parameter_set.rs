use super::{
    field_spec, AdministrationParameters, AnnualFixedCosts, Drivetrain, LeasingParameters,
    OperatingParameters, RouteParameters,
};
use crate::model::{TcoError, Variant};
use serde::{Deserialize, Serialize};

/// the full set of operating and financial inputs for one variant.
///
/// fields are addressable by their schema key (see [`field_spec::PARAMETER_FIELDS`])
/// so that a form or a flat override file can bind to them. keys that belong to
/// a different variant are rejected with [`TcoError::UnknownField`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParameterSet {
    pub route: RouteParameters,
    pub operating: OperatingParameters,
    pub leasing: LeasingParameters,
    pub fixed_costs: AnnualFixedCosts,
    pub administration: AdministrationParameters,
    pub drivetrain: Drivetrain,
}

impl ParameterSet {
    pub fn variant(&self) -> Variant {
        self.drivetrain.variant()
    }

    /// reads a field by schema key.
    pub fn get(&self, key: &str) -> Result<f64, TcoError> {
        self.ensure_applies(key)?;
        let value = match key {
            "one_way_distance_km" => Some(self.route.one_way_distance_km),
            "rounds_per_shift" => Some(self.route.rounds_per_shift),
            "shifts_per_day" => Some(self.route.shifts_per_day),
            "workdays_per_week" => Some(self.route.workdays_per_week),
            "weeks_per_year" => Some(self.route.weeks_per_year),
            "adblue_consumption" => Some(self.operating.adblue_consumption),
            "adblue_price" => Some(self.operating.adblue_price),
            "lubricant_consumption" => Some(self.operating.lubricant_consumption),
            "lubricant_price" => Some(self.operating.lubricant_price),
            "toll_rate" => Some(self.operating.toll_rate),
            "leasing_monthly" => Some(self.leasing.leasing_monthly),
            "leasing_years" => Some(self.leasing.leasing_years),
            "transfer_cost" => Some(self.leasing.transfer_cost),
            "registration_cost" => Some(self.leasing.registration_cost),
            "commissioning_cost" => Some(self.leasing.commissioning_cost),
            "return_cost" => Some(self.leasing.return_cost),
            "vehicle_tax" => Some(self.fixed_costs.vehicle_tax),
            "insurance" => Some(self.fixed_costs.insurance),
            "inspection" => Some(self.fixed_costs.inspection),
            "maintenance" => Some(self.fixed_costs.maintenance),
            "repairs" => Some(self.fixed_costs.repairs),
            "small_parts" => Some(self.fixed_costs.small_parts),
            "cleaning" => Some(self.fixed_costs.cleaning),
            "garage" => Some(self.fixed_costs.garage),
            "onboard_system" => Some(self.fixed_costs.onboard_system),
            "admin_salary_month" => Some(self.administration.admin_salary_month),
            "admin_share" => Some(self.administration.admin_share),
            "general_admin_cost" => Some(self.administration.general_admin_cost),
            _ => self.drivetrain.get(key),
        };
        value.ok_or_else(|| unknown_field(self.variant(), key))
    }

    /// overwrites a field by schema key with the value as given.
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), TcoError> {
        self.ensure_applies(key)?;
        let variant = self.variant();
        let field = self
            .field_mut(key)
            .ok_or_else(|| unknown_field(variant, key))?;
        *field = value;
        Ok(())
    }

    /// overwrites a field with the value the input widget would commit for
    /// `value` (clamped, snapped to step). returns the committed value.
    pub fn commit(&mut self, key: &str, value: f64) -> Result<f64, TcoError> {
        self.ensure_applies(key)?;
        let spec = field_spec::find(key).ok_or_else(|| unknown_field(self.variant(), key))?;
        let committed = spec.commit(value);
        self.set(key, committed)?;
        Ok(committed)
    }

    /// all fields applicable to this variant as (key, value) pairs in form order.
    pub fn to_flat(&self) -> Result<Vec<(&'static str, f64)>, TcoError> {
        field_spec::fields_for(self.variant())
            .map(|f| self.get(f.key).map(|v| (f.key, v)))
            .collect()
    }

    /// keys outside the schema fall through to the lookups, which reject them.
    fn ensure_applies(&self, key: &str) -> Result<(), TcoError> {
        match field_spec::find(key) {
            Some(spec) if !spec.applies(self.variant()) => Err(unknown_field(self.variant(), key)),
            _ => Ok(()),
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut f64> {
        let field = match key {
            "one_way_distance_km" => &mut self.route.one_way_distance_km,
            "rounds_per_shift" => &mut self.route.rounds_per_shift,
            "shifts_per_day" => &mut self.route.shifts_per_day,
            "workdays_per_week" => &mut self.route.workdays_per_week,
            "weeks_per_year" => &mut self.route.weeks_per_year,
            "adblue_consumption" => &mut self.operating.adblue_consumption,
            "adblue_price" => &mut self.operating.adblue_price,
            "lubricant_consumption" => &mut self.operating.lubricant_consumption,
            "lubricant_price" => &mut self.operating.lubricant_price,
            "toll_rate" => &mut self.operating.toll_rate,
            "leasing_monthly" => &mut self.leasing.leasing_monthly,
            "leasing_years" => &mut self.leasing.leasing_years,
            "transfer_cost" => &mut self.leasing.transfer_cost,
            "registration_cost" => &mut self.leasing.registration_cost,
            "commissioning_cost" => &mut self.leasing.commissioning_cost,
            "return_cost" => &mut self.leasing.return_cost,
            "vehicle_tax" => &mut self.fixed_costs.vehicle_tax,
            "insurance" => &mut self.fixed_costs.insurance,
            "inspection" => &mut self.fixed_costs.inspection,
            "maintenance" => &mut self.fixed_costs.maintenance,
            "repairs" => &mut self.fixed_costs.repairs,
            "small_parts" => &mut self.fixed_costs.small_parts,
            "cleaning" => &mut self.fixed_costs.cleaning,
            "garage" => &mut self.fixed_costs.garage,
            "onboard_system" => &mut self.fixed_costs.onboard_system,
            "admin_salary_month" => &mut self.administration.admin_salary_month,
            "admin_share" => &mut self.administration.admin_share,
            "general_admin_cost" => &mut self.administration.general_admin_cost,
            _ => return self.drivetrain.field_mut(key),
        };
        Some(field)
    }
}

fn unknown_field(variant: Variant, key: &str) -> TcoError {
    TcoError::UnknownField {
        variant,
        key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        parameters::{ParameterSet, PARAMETER_FIELDS},
        TcoError, Variant,
    };

    #[test]
    fn test_every_schema_field_is_addressable() {
        for variant in Variant::ALL {
            let params = ParameterSet::default_for(variant);
            for spec in PARAMETER_FIELDS.iter() {
                let result = params.get(spec.key);
                assert_eq!(
                    result.is_ok(),
                    spec.applies(variant),
                    "field '{}' addressability mismatch for {}",
                    spec.key,
                    variant
                );
            }
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut params = ParameterSet::default_for(Variant::Bev);
        params
            .set("electricity_price", 0.42)
            .expect("test invariant failed");
        assert_eq!(params.get("electricity_price"), Ok(0.42));
        params.set("garage", 1234.5).expect("test invariant failed");
        assert_eq!(params.fixed_costs.garage, 1234.5);
    }

    #[test]
    fn test_set_rejects_other_variant_fields() {
        let mut params = ParameterSet::default_for(Variant::BevAd);
        let result = params.set("driver_salary_month", 3000.0);
        assert_eq!(
            result,
            Err(TcoError::UnknownField {
                variant: Variant::BevAd,
                key: String::from("driver_salary_month")
            })
        );
        assert!(params.set("not_a_field", 1.0).is_err());
    }

    #[test]
    fn test_commit_uses_widget_rules() {
        let mut params = ParameterSet::default_for(Variant::Ice);
        let committed = params
            .commit("admin_share", 0.123)
            .expect("test invariant failed");
        assert_eq!(committed, 0.12);
        assert_eq!(params.administration.admin_share, 0.12);
        assert!(params.commit("tire_cost", 100.0).is_err());
    }

    #[test]
    fn test_to_flat_follows_schema_order() {
        let params = ParameterSet::default_for(Variant::Ice);
        let flat = params.to_flat().expect("test invariant failed");
        let keys: Vec<&str> = flat.iter().map(|(k, _)| *k).collect();
        let expected: Vec<&str> = PARAMETER_FIELDS
            .iter()
            .filter(|f| f.applies(Variant::Ice))
            .map(|f| f.key)
            .collect();
        assert_eq!(keys, expected);
        assert_eq!(flat[0], ("one_way_distance_km", 7.2));
    }

    #[test]
    fn test_vehicle_tax_is_not_a_bev_ad_field() {
        let mut params = ParameterSet::default_for(Variant::BevAd);
        assert!(matches!(
            params.set("vehicle_tax", 5250.0),
            Err(TcoError::UnknownField { .. })
        ));
        assert!(params.get("vehicle_tax").is_err());
        assert_eq!(params.fixed_costs.vehicle_tax, 0.0);

        let mut params = ParameterSet::default_for(Variant::Bev);
        params.set("vehicle_tax", 5250.0).expect("test invariant failed");
        assert_eq!(params.get("vehicle_tax"), Ok(5250.0));
    }
}
