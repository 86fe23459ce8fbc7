use crate::model::Variant;
use serde::{Deserialize, Serialize};

/// wear parameters for one tire position.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TireParameters {
    /// distance until replacement, in km
    pub life_km: f64,
    /// unit cost of a replacement set
    pub cost: f64,
}

impl TireParameters {
    pub fn cost_per_km(&self) -> f64 {
        self.cost / self.life_km
    }
}

/// driver staffing for variants that run with a driver.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonnelParameters {
    pub driver_salary_month: f64,
    /// drivers needed per vehicle per day
    pub driver_shifts: f64,
}

/// licensing and supervision staff for autonomous operation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AutonomousParameters {
    pub ad_license_month: f64,
    pub steward_salary_month: f64,
    /// number of vehicles one steward looks after
    pub vehicles_per_steward: f64,
    pub tech_salary_month: f64,
    /// number of vehicles one technician supervises
    pub vehicles_per_tech: f64,
    pub tech_shifts: f64,
}

/// the variant-shaped part of a [`super::ParameterSet`]. ICE buses burn fuel
/// metered per 100 km and wear front and rear tires independently; the electric
/// variants draw electricity per km on a single tire term. only BEV-AD carries
/// autonomous staffing instead of drivers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "variant")]
pub enum Drivetrain {
    Ice {
        /// liters per 100 km
        fuel_consumption: f64,
        /// price per liter
        fuel_price: f64,
        front_tire: TireParameters,
        rear_tire: TireParameters,
        personnel: PersonnelParameters,
    },
    Bev {
        /// kWh per km
        electricity_consumption: f64,
        /// price per kWh
        electricity_price: f64,
        tire: TireParameters,
        personnel: PersonnelParameters,
    },
    BevAd {
        /// kWh per km
        electricity_consumption: f64,
        /// price per kWh
        electricity_price: f64,
        tire: TireParameters,
        autonomous: AutonomousParameters,
    },
}

impl Drivetrain {
    pub fn variant(&self) -> Variant {
        match self {
            Drivetrain::Ice { .. } => Variant::Ice,
            Drivetrain::Bev { .. } => Variant::Bev,
            Drivetrain::BevAd { .. } => Variant::BevAd,
        }
    }

    /// tire wear cost per km, summed over all tire positions.
    pub fn tire_cost_per_km(&self) -> f64 {
        match self {
            Drivetrain::Ice {
                front_tire,
                rear_tire,
                ..
            } => front_tire.cost_per_km() + rear_tire.cost_per_km(),
            Drivetrain::Bev { tire, .. } => tire.cost_per_km(),
            Drivetrain::BevAd { tire, .. } => tire.cost_per_km(),
        }
    }

    pub fn personnel(&self) -> Option<&PersonnelParameters> {
        match self {
            Drivetrain::Ice { personnel, .. } => Some(personnel),
            Drivetrain::Bev { personnel, .. } => Some(personnel),
            Drivetrain::BevAd { .. } => None,
        }
    }

    pub fn autonomous(&self) -> Option<&AutonomousParameters> {
        match self {
            Drivetrain::BevAd { autonomous, .. } => Some(autonomous),
            _ => None,
        }
    }

    /// reads a variant-specific field by its schema key.
    pub fn get(&self, key: &str) -> Option<f64> {
        match self {
            Drivetrain::Ice {
                fuel_consumption,
                fuel_price,
                front_tire,
                rear_tire,
                personnel,
            } => match key {
                "fuel_consumption" => Some(*fuel_consumption),
                "fuel_price" => Some(*fuel_price),
                "front_tire_life" => Some(front_tire.life_km),
                "front_tire_cost" => Some(front_tire.cost),
                "rear_tire_life" => Some(rear_tire.life_km),
                "rear_tire_cost" => Some(rear_tire.cost),
                _ => personnel_get(personnel, key),
            },
            Drivetrain::Bev {
                electricity_consumption,
                electricity_price,
                tire,
                personnel,
            } => match key {
                "electricity_consumption" => Some(*electricity_consumption),
                "electricity_price" => Some(*electricity_price),
                "tire_life" => Some(tire.life_km),
                "tire_cost" => Some(tire.cost),
                _ => personnel_get(personnel, key),
            },
            Drivetrain::BevAd {
                electricity_consumption,
                electricity_price,
                tire,
                autonomous,
            } => match key {
                "electricity_consumption" => Some(*electricity_consumption),
                "electricity_price" => Some(*electricity_price),
                "tire_life" => Some(tire.life_km),
                "tire_cost" => Some(tire.cost),
                "ad_license_month" => Some(autonomous.ad_license_month),
                "steward_salary_month" => Some(autonomous.steward_salary_month),
                "vehicles_per_steward" => Some(autonomous.vehicles_per_steward),
                "tech_salary_month" => Some(autonomous.tech_salary_month),
                "vehicles_per_tech" => Some(autonomous.vehicles_per_tech),
                "tech_shifts" => Some(autonomous.tech_shifts),
                _ => None,
            },
        }
    }

    /// mutable access to a variant-specific field by its schema key.
    pub fn field_mut(&mut self, key: &str) -> Option<&mut f64> {
        match self {
            Drivetrain::Ice {
                fuel_consumption,
                fuel_price,
                front_tire,
                rear_tire,
                personnel,
            } => match key {
                "fuel_consumption" => Some(fuel_consumption),
                "fuel_price" => Some(fuel_price),
                "front_tire_life" => Some(&mut front_tire.life_km),
                "front_tire_cost" => Some(&mut front_tire.cost),
                "rear_tire_life" => Some(&mut rear_tire.life_km),
                "rear_tire_cost" => Some(&mut rear_tire.cost),
                _ => personnel_field_mut(personnel, key),
            },
            Drivetrain::Bev {
                electricity_consumption,
                electricity_price,
                tire,
                personnel,
            } => match key {
                "electricity_consumption" => Some(electricity_consumption),
                "electricity_price" => Some(electricity_price),
                "tire_life" => Some(&mut tire.life_km),
                "tire_cost" => Some(&mut tire.cost),
                _ => personnel_field_mut(personnel, key),
            },
            Drivetrain::BevAd {
                electricity_consumption,
                electricity_price,
                tire,
                autonomous,
            } => match key {
                "electricity_consumption" => Some(electricity_consumption),
                "electricity_price" => Some(electricity_price),
                "tire_life" => Some(&mut tire.life_km),
                "tire_cost" => Some(&mut tire.cost),
                "ad_license_month" => Some(&mut autonomous.ad_license_month),
                "steward_salary_month" => Some(&mut autonomous.steward_salary_month),
                "vehicles_per_steward" => Some(&mut autonomous.vehicles_per_steward),
                "tech_salary_month" => Some(&mut autonomous.tech_salary_month),
                "vehicles_per_tech" => Some(&mut autonomous.vehicles_per_tech),
                "tech_shifts" => Some(&mut autonomous.tech_shifts),
                _ => None,
            },
        }
    }
}

fn personnel_get(personnel: &PersonnelParameters, key: &str) -> Option<f64> {
    match key {
        "driver_salary_month" => Some(personnel.driver_salary_month),
        "driver_shifts" => Some(personnel.driver_shifts),
        _ => None,
    }
}

fn personnel_field_mut<'a>(
    personnel: &'a mut PersonnelParameters,
    key: &str,
) -> Option<&'a mut f64> {
    match key {
        "driver_salary_month" => Some(&mut personnel.driver_salary_month),
        "driver_shifts" => Some(&mut personnel.driver_shifts),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Drivetrain, PersonnelParameters, TireParameters};

    fn ice() -> Drivetrain {
        Drivetrain::Ice {
            fuel_consumption: 28.5,
            fuel_price: 1.6,
            front_tire: TireParameters {
                life_km: 150000.0,
                cost: 1000.0,
            },
            rear_tire: TireParameters {
                life_km: 100000.0,
                cost: 2200.0,
            },
            personnel: PersonnelParameters {
                driver_salary_month: 3074.17,
                driver_shifts: 3.0,
            },
        }
    }

    #[test]
    fn test_ice_tire_terms_are_summed() {
        let expected = 1000.0 / 150000.0 + 2200.0 / 100000.0;
        assert_eq!(ice().tire_cost_per_km(), expected);
    }

    #[test]
    fn test_field_mut_roundtrips_through_get() {
        let mut drivetrain = ice();
        if let Some(v) = drivetrain.field_mut("rear_tire_cost") {
            *v = 2500.0;
        }
        assert_eq!(drivetrain.get("rear_tire_cost"), Some(2500.0));
        assert_eq!(drivetrain.get("driver_shifts"), Some(3.0));
    }

    #[test]
    fn test_inapplicable_keys_are_absent() {
        let mut drivetrain = ice();
        assert_eq!(drivetrain.get("tire_life"), None);
        assert_eq!(drivetrain.get("steward_salary_month"), None);
        assert!(drivetrain.field_mut("electricity_price").is_none());
    }

    #[test]
    fn test_serialized_with_variant_tag() {
        let json = serde_json::to_value(ice()).expect("test invariant failed");
        assert_eq!(json["variant"], serde_json::json!("ice"));
        assert_eq!(json["front_tire"]["life_km"], serde_json::json!(150000.0));
    }
}
