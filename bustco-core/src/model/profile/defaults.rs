use crate::model::{
    parameters::{
        AdministrationParameters, AnnualFixedCosts, AutonomousParameters, Drivetrain,
        LeasingParameters, OperatingParameters, ParameterSet, PersonnelParameters,
        RouteParameters, TireParameters,
    },
    Variant,
};

impl ParameterSet {
    /// default parameters for a variant. the shared route yields 5250 cycles
    /// per year for every variant.
    pub fn default_for(variant: Variant) -> ParameterSet {
        match variant {
            Variant::Ice => ParameterSet {
                route: default_route(),
                operating: OperatingParameters {
                    adblue_consumption: 1.2,
                    adblue_price: 1.1,
                    lubricant_consumption: 2.0,
                    lubricant_price: 2.5,
                    toll_rate: 0.0,
                },
                leasing: default_leasing(3500.0),
                fixed_costs: AnnualFixedCosts {
                    vehicle_tax: 0.0,
                    insurance: 2300.0,
                    inspection: 285.0,
                    maintenance: 400.0,
                    repairs: 500.0,
                    small_parts: 500.0,
                    cleaning: 500.0,
                    garage: 4000.0,
                    onboard_system: 1500.0,
                },
                administration: default_administration(),
                drivetrain: Drivetrain::Ice {
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
                    personnel: default_personnel(),
                },
            },
            Variant::Bev => ParameterSet {
                route: default_route(),
                operating: electric_operating(),
                leasing: default_leasing(5000.0),
                fixed_costs: electric_fixed_costs(),
                administration: default_administration(),
                drivetrain: Drivetrain::Bev {
                    electricity_consumption: 0.55,
                    electricity_price: 0.60,
                    tire: electric_tire(),
                    personnel: default_personnel(),
                },
            },
            Variant::BevAd => ParameterSet {
                route: default_route(),
                operating: electric_operating(),
                leasing: default_leasing(6000.0),
                fixed_costs: electric_fixed_costs(),
                administration: default_administration(),
                drivetrain: Drivetrain::BevAd {
                    electricity_consumption: 0.65,
                    electricity_price: 0.60,
                    tire: electric_tire(),
                    autonomous: AutonomousParameters {
                        ad_license_month: 3000.0,
                        steward_salary_month: 3000.0,
                        vehicles_per_steward: 15.0,
                        tech_salary_month: 4500.0,
                        vehicles_per_tech: 5.0,
                        tech_shifts: 3.0,
                    },
                },
            },
        }
    }
}

fn default_route() -> RouteParameters {
    RouteParameters {
        one_way_distance_km: 7.2,
        rounds_per_shift: 7.0,
        shifts_per_day: 3.0,
        workdays_per_week: 5.0,
        weeks_per_year: 50.0,
    }
}

fn default_leasing(leasing_monthly: f64) -> LeasingParameters {
    LeasingParameters {
        leasing_monthly,
        leasing_years: 10.0,
        transfer_cost: 5000.0,
        registration_cost: 150.0,
        commissioning_cost: 9500.0,
        return_cost: 2500.0,
    }
}

fn default_administration() -> AdministrationParameters {
    AdministrationParameters {
        admin_salary_month: 4500.0,
        admin_share: 0.05,
        general_admin_cost: 5000.0,
    }
}

fn default_personnel() -> PersonnelParameters {
    PersonnelParameters {
        driver_salary_month: 3074.17,
        driver_shifts: 3.0,
    }
}

fn electric_operating() -> OperatingParameters {
    OperatingParameters {
        adblue_consumption: 0.0,
        adblue_price: 1.1,
        lubricant_consumption: 0.5,
        lubricant_price: 2.5,
        toll_rate: 0.0,
    }
}

fn electric_fixed_costs() -> AnnualFixedCosts {
    AnnualFixedCosts {
        vehicle_tax: 0.0,
        insurance: 8000.0,
        inspection: 285.0,
        maintenance: 400.0,
        repairs: 500.0,
        small_parts: 250.0,
        cleaning: 500.0,
        garage: 4000.0,
        onboard_system: 1500.0,
    }
}

fn electric_tire() -> TireParameters {
    TireParameters {
        life_km: 80000.0,
        cost: 3000.0,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{parameters::ParameterSet, Variant};

    #[test]
    fn test_default_route_has_positive_cycles() {
        for variant in Variant::ALL {
            let params = ParameterSet::default_for(variant);
            assert_eq!(params.route.annual_cycles(), 5250.0);
            assert!(params.leasing.leasing_years > 0.0);
        }
    }

    #[test]
    fn test_defaults_respect_schema_bounds() {
        for variant in Variant::ALL {
            let params = ParameterSet::default_for(variant);
            for (key, value) in params.to_flat().expect("test invariant failed") {
                let spec = crate::model::parameters::field_spec::find(key)
                    .expect("test invariant failed: flat key missing from schema");
                assert_eq!(
                    spec.clamp(value),
                    value,
                    "default for '{key}' on {variant} is outside the schema bounds"
                );
            }
        }
    }
}
