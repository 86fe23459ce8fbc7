//! the parameter schema bound by the input form. each [`FieldSpec`] names a
//! numeric field of a [`super::ParameterSet`] by key, the variants it applies
//! to, and the widget configuration used when committing user input.
use super::ParameterGroup;
use crate::model::Variant;
use serde::Serialize;

const ALL: &[Variant] = &[Variant::Ice, Variant::Bev, Variant::BevAd];
const ICE: &[Variant] = &[Variant::Ice];
const ELECTRIC: &[Variant] = &[Variant::Bev, Variant::BevAd];
const DRIVEN: &[Variant] = &[Variant::Ice, Variant::Bev];
const TAXED: &[Variant] = &[Variant::Ice, Variant::Bev];
const AUTONOMOUS: &[Variant] = &[Variant::BevAd];

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub group: ParameterGroup,
    /// increment applied by the -/+ buttons, also the rounding grid
    pub step: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// display precision. when absent, inferred from the number of
    /// fractional digits in `step`.
    pub decimals: Option<u32>,
    pub applies_to: &'static [Variant],
}

/// widget increment when a field configures none.
pub const DEFAULT_STEP: f64 = 0.01;

/// an unbounded field on the default step grid.
const fn field(
    key: &'static str,
    label: &'static str,
    group: ParameterGroup,
    applies_to: &'static [Variant],
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        group,
        step: DEFAULT_STEP,
        min: None,
        max: None,
        decimals: None,
        applies_to,
    }
}

impl FieldSpec {
    pub fn applies(&self, variant: Variant) -> bool {
        self.applies_to.contains(&variant)
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
            .unwrap_or_else(|| decimals_from_step(self.step))
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let mut v = value;
        if let Some(min) = self.min {
            v = v.max(min);
        }
        if let Some(max) = self.max {
            v = v.min(max);
        }
        v
    }

    /// resolves a candidate value the way the input widget does on commit:
    /// clamp to [min, max], snap to the step grid, round to the display precision.
    pub fn commit(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        round_to_step(clamped, self.step, self.decimals())
    }

    /// moves `value` by `steps` increments (negative for decrement) and commits.
    pub fn increment(&self, value: f64, steps: i32) -> f64 {
        self.commit(value + self.step * f64::from(steps))
    }

    /// commits raw text input. text that does not parse to a finite number
    /// falls back to the current value.
    pub fn parse_commit(&self, raw: &str, current: f64) -> f64 {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => self.commit(v),
            _ => current,
        }
    }
}

fn decimals_from_step(step: f64) -> u32 {
    let s = format!("{step}");
    match s.split_once('.') {
        Some((_, fraction)) => fraction.len() as u32,
        None => 0,
    }
}

fn round_to_step(value: f64, step: f64, decimals: u32) -> f64 {
    let scaled = if step > 0.0 {
        (value / step).round() * step
    } else {
        value
    };
    let factor = 10f64.powi(decimals as i32);
    (scaled * factor).round() / factor
}

/// looks up the schema entry for a field key.
pub fn find(key: &str) -> Option<&'static FieldSpec> {
    PARAMETER_FIELDS.iter().find(|f| f.key == key)
}

/// schema entries applicable to a variant, in form order.
pub fn fields_for(variant: Variant) -> impl Iterator<Item = &'static FieldSpec> {
    PARAMETER_FIELDS.iter().filter(move |f| f.applies(variant))
}

use ParameterGroup as G;

/// every parameter field across all variants, in form order.
pub static PARAMETER_FIELDS: &[FieldSpec] = &[
    // route
    field("one_way_distance_km", "One-way distance (km)", G::Route, ALL),
    field("rounds_per_shift", "Rounds / shift", G::Route, ALL),
    field("shifts_per_day", "Shifts / day", G::Route, ALL),
    field("workdays_per_week", "Workdays / week", G::Route, ALL),
    field("weeks_per_year", "Weeks / year", G::Route, ALL),
    // consumption
    field("fuel_consumption", "Fuel (L/100 km)", G::Consumption, ICE),
    field("electricity_consumption", "Electricity (kWh/km)", G::Consumption, ELECTRIC),
    field("adblue_consumption", "AdBlue (L/100 km)", G::Consumption, ALL),
    field("lubricant_consumption", "Lubricant (L/1000 km)", G::Consumption, ALL),
    field("toll_rate", "Toll rate (€/km)", G::Consumption, ALL),
    field("front_tire_life", "Front tire life (km)", G::Consumption, ICE),
    field("rear_tire_life", "Rear tire life (km)", G::Consumption, ICE),
    field("tire_life", "Tire life (km)", G::Consumption, ELECTRIC),
    // leasing and acquisition
    field("leasing_monthly", "Leasing (€/month)", G::Leasing, ALL),
    field("leasing_years", "Leasing (years)", G::Leasing, ALL),
    field("transfer_cost", "Transfer cost (€)", G::Leasing, ALL),
    field("registration_cost", "Registration (€)", G::Leasing, ALL),
    field("commissioning_cost", "Commissioning (€)", G::Leasing, ALL),
    field("return_cost", "Return (€)", G::Leasing, ALL),
    // annual fixed costs
    field("vehicle_tax", "Vehicle tax (€)", G::FixedCosts, TAXED),
    field("insurance", "Insurance (€)", G::FixedCosts, ALL),
    field("inspection", "Inspection (€)", G::FixedCosts, ALL),
    field("maintenance", "Maintenance (€)", G::FixedCosts, ALL),
    field("repairs", "Repairs (€)", G::FixedCosts, ALL),
    field("small_parts", "Small parts (€)", G::FixedCosts, ALL),
    field("cleaning", "Cleaning (€)", G::FixedCosts, ALL),
    field("garage", "Garage (€)", G::FixedCosts, ALL),
    field("onboard_system", "Onboard (€)", G::FixedCosts, ALL),
    // market prices
    field("fuel_price", "Fuel price (€/L)", G::MarketPrices, ICE),
    field("electricity_price", "Electricity price (€/kWh)", G::MarketPrices, ELECTRIC),
    field("adblue_price", "AdBlue price (€/L)", G::MarketPrices, ALL),
    field("lubricant_price", "Lubricant price (€/L)", G::MarketPrices, ALL),
    field("front_tire_cost", "Front tire (€)", G::MarketPrices, ICE),
    field("rear_tire_cost", "Rear tire (€)", G::MarketPrices, ICE),
    field("tire_cost", "Tire (€)", G::MarketPrices, ELECTRIC),
    // personnel
    field("driver_salary_month", "Driver salary (€/month)", G::Personnel, DRIVEN),
    field("driver_shifts", "Shifts", G::Personnel, DRIVEN),
    // administration
    field("admin_salary_month", "Admin salary (€/month)", G::Administration, ALL),
    field("admin_share", "Admin share", G::Administration, ALL),
    field("general_admin_cost", "Admin cost (€/year)", G::Administration, ALL),
    // autonomous operation
    field("ad_license_month", "AD license (€/month)", G::Autonomous, AUTONOMOUS),
    field("steward_salary_month", "Steward salary (€/month)", G::Autonomous, AUTONOMOUS),
    field("vehicles_per_steward", "Vehicles / steward", G::Autonomous, AUTONOMOUS),
    field("tech_salary_month", "Technician salary (€/month)", G::Autonomous, AUTONOMOUS),
    field("vehicles_per_tech", "Vehicles / technician", G::Autonomous, AUTONOMOUS),
    field("tech_shifts", "Technician shifts", G::Autonomous, AUTONOMOUS),
];

#[cfg(test)]
mod tests {
    use super::{fields_for, find, FieldSpec, DEFAULT_STEP, PARAMETER_FIELDS};
    use crate::model::Variant;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = PARAMETER_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), PARAMETER_FIELDS.len());
    }

    #[test]
    fn test_decimals_inferred_from_step() {
        for spec in PARAMETER_FIELDS.iter() {
            assert_eq!(spec.step, DEFAULT_STEP);
            assert_eq!(spec.decimals(), 2, "{}", spec.key);
        }
        let coarse = FieldSpec {
            step: 0.1,
            ..find("one_way_distance_km").expect("test invariant failed").clone()
        };
        assert_eq!(coarse.decimals(), 1);
    }

    #[test]
    fn test_commit_rounds_to_cents_without_bounds() {
        let share = find("admin_share").expect("test invariant failed");
        assert_eq!(share.commit(1.7), 1.7);
        assert_eq!(share.commit(-0.2), -0.2);
        assert_eq!(share.commit(0.054), 0.05);
        let tire_life = find("tire_life").expect("test invariant failed");
        assert_eq!(tire_life.commit(150500.0), 150500.0);
        let leasing_years = find("leasing_years").expect("test invariant failed");
        assert_eq!(leasing_years.commit(0.5), 0.5);
    }

    #[test]
    fn test_commit_clamps_configured_bounds() {
        let bounded = FieldSpec {
            min: Some(0.0),
            max: Some(1.0),
            ..find("admin_share").expect("test invariant failed").clone()
        };
        assert_eq!(bounded.commit(1.7), 1.0);
        assert_eq!(bounded.commit(-0.2), 0.0);
        assert_eq!(bounded.increment(1.0, 1), 1.0);
    }

    #[test]
    fn test_increment_avoids_float_drift() {
        let distance = find("one_way_distance_km").expect("test invariant failed");
        let mut v = 0.0;
        for _ in 0..3 {
            v = distance.increment(v, 1);
        }
        assert_eq!(v, 0.03);
        assert_eq!(distance.increment(7.2, -1), 7.19);
    }

    #[test]
    fn test_parse_commit_falls_back_on_garbage() {
        let salary = find("driver_salary_month").expect("test invariant failed");
        assert_eq!(salary.parse_commit("8.", 3074.17), 8.0);
        assert_eq!(salary.parse_commit("", 3074.17), 3074.17);
        assert_eq!(salary.parse_commit("-", 3074.17), 3074.17);
        assert_eq!(salary.parse_commit("inf", 3074.17), 3074.17);
        assert_eq!(salary.parse_commit(" 3100.456 ", 3074.17), 3100.46);
    }

    #[test]
    fn test_variant_applicability() {
        let ice: Vec<&str> = fields_for(Variant::Ice).map(|f| f.key).collect();
        assert!(ice.contains(&"front_tire_life"));
        assert!(ice.contains(&"driver_salary_month"));
        assert!(!ice.contains(&"tire_life"));
        assert!(!ice.contains(&"steward_salary_month"));

        let bev_ad: Vec<&str> = fields_for(Variant::BevAd).map(|f| f.key).collect();
        assert!(bev_ad.contains(&"vehicles_per_tech"));
        assert!(!bev_ad.contains(&"driver_salary_month"));
        assert!(!bev_ad.contains(&"fuel_consumption"));
        assert!(!bev_ad.contains(&"vehicle_tax"));
    }
}
