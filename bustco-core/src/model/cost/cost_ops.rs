//! the cost model: converts a [`ParameterSet`] into a per-cycle [`CostBreakdown`].
//!
//! distance-based costs are priced per km and multiplied by the round-trip
//! distance. annual costs are divided by the annual cycle count, and one-time
//! acquisition costs are first spread over the leasing duration.
use super::{ConsumptionBase, CostBreakdown, CostCategory};
use crate::model::{
    parameters::{Drivetrain, ParameterSet},
    TcoError,
};
use uom::si::length::kilometer;

const MONTHS_PER_YEAR: f64 = 12.0;

/// computes the per-cycle cost breakdown for a parameter set.
///
/// # Arguments
///
/// * `params` - inputs for one variant
///
/// # Returns
///
/// * a breakdown carrying every [`CostCategory`], with categories that do not
///   apply to the variant pinned to 0, or an [`TcoError::InvalidInput`] if a
///   parameter is not finite or a divisor (annual cycles, leasing years, tire
///   life, staffing ratio) is not positive.
pub fn compute_breakdown(params: &ParameterSet) -> Result<CostBreakdown, TcoError> {
    validate(params)?;

    let annual_cycles = params.route.annual_cycles();
    let distance_km = params.route.distance_per_cycle().get::<kilometer>();
    let leasing_years = params.leasing.leasing_years;
    log::debug!(
        "{}: {distance_km} km per cycle, {annual_cycles} cycles per year",
        params.variant()
    );

    let per_cycle = |annual: f64| annual / annual_cycles;
    let amortized = |one_time: f64| one_time / leasing_years / annual_cycles;
    let per_distance = |cost_per_km: f64| cost_per_km * distance_km;

    let operating = &params.operating;
    let fixed = &params.fixed_costs;
    let leasing = &params.leasing;
    let admin = &params.administration;

    let adblue_km = ConsumptionBase::PerHundredKilometers
        .cost_per_km(operating.adblue_consumption, operating.adblue_price);
    let lubricant_km = ConsumptionBase::PerThousandKilometers
        .cost_per_km(operating.lubricant_consumption, operating.lubricant_price);

    // autonomous operation is not charged vehicle tax
    let vehicle_tax = match params.drivetrain.autonomous() {
        Some(_) => 0.0,
        None => fixed.vehicle_tax,
    };

    let mut values = vec![
        (CostCategory::Fuel, per_distance(energy_cost_per_km(&params.drivetrain))),
        (CostCategory::Adblue, per_distance(adblue_km)),
        (CostCategory::Tires, per_distance(params.drivetrain.tire_cost_per_km())),
        (CostCategory::Lubricant, per_distance(lubricant_km)),
        (CostCategory::Toll, per_distance(operating.toll_rate)),
        (CostCategory::Leasing, per_cycle(leasing.leasing_monthly * MONTHS_PER_YEAR)),
        (CostCategory::VehicleTax, per_cycle(vehicle_tax)),
        (CostCategory::Insurance, per_cycle(fixed.insurance)),
        (CostCategory::Inspection, per_cycle(fixed.inspection)),
        (CostCategory::Maintenance, per_cycle(fixed.maintenance)),
        (CostCategory::Repairs, per_cycle(fixed.repairs)),
        (CostCategory::SmallParts, per_cycle(fixed.small_parts)),
        (CostCategory::Cleaning, per_cycle(fixed.cleaning)),
        (CostCategory::Garage, per_cycle(fixed.garage)),
        (CostCategory::OnboardSystem, per_cycle(fixed.onboard_system)),
        (CostCategory::Transfer, amortized(leasing.transfer_cost)),
        (CostCategory::Registration, amortized(leasing.registration_cost)),
        (CostCategory::Commissioning, amortized(leasing.commissioning_cost)),
        (CostCategory::Return, amortized(leasing.return_cost)),
        (
            CostCategory::AdminPartial,
            per_cycle(admin.admin_salary_month * MONTHS_PER_YEAR * admin.admin_share),
        ),
        (CostCategory::AdminGeneral, per_cycle(admin.general_admin_cost)),
    ];

    if let Some(personnel) = params.drivetrain.personnel() {
        let driver_annual =
            personnel.driver_salary_month * MONTHS_PER_YEAR * personnel.driver_shifts;
        values.push((CostCategory::Driver, per_cycle(driver_annual)));
    }

    if let Some(autonomous) = params.drivetrain.autonomous() {
        let license_annual = autonomous.ad_license_month * MONTHS_PER_YEAR;
        let steward_annual =
            autonomous.steward_salary_month / autonomous.vehicles_per_steward * MONTHS_PER_YEAR;
        let tech_annual = autonomous.tech_salary_month * autonomous.tech_shifts
            / autonomous.vehicles_per_tech
            * MONTHS_PER_YEAR;
        values.push((CostCategory::AdLicense, per_cycle(license_annual)));
        values.push((CostCategory::Steward, per_cycle(steward_annual)));
        values.push((CostCategory::TechSupervision, per_cycle(tech_annual)));
    }

    let breakdown = CostBreakdown::from_values(values);
    if !breakdown.is_finite() {
        return Err(TcoError::invalid_input(
            "total",
            String::from("parameters produce a non-finite cost"),
        ));
    }
    log::debug!(
        "{}: total cost per cycle {:.4}",
        params.variant(),
        breakdown.total()
    );
    Ok(breakdown)
}

/// fuel (ICE) or electricity (BEV, BEV-AD) cost per km.
fn energy_cost_per_km(drivetrain: &Drivetrain) -> f64 {
    match drivetrain {
        Drivetrain::Ice {
            fuel_consumption,
            fuel_price,
            ..
        } => ConsumptionBase::PerHundredKilometers.cost_per_km(*fuel_consumption, *fuel_price),
        Drivetrain::Bev {
            electricity_consumption,
            electricity_price,
            ..
        }
        | Drivetrain::BevAd {
            electricity_consumption,
            electricity_price,
            ..
        } => ConsumptionBase::PerKilometer
            .cost_per_km(*electricity_consumption, *electricity_price),
    }
}

/// rejects non-finite inputs and non-positive divisors.
fn validate(params: &ParameterSet) -> Result<(), TcoError> {
    for (key, value) in params.to_flat()? {
        if !value.is_finite() {
            return Err(TcoError::invalid_input(
                key,
                format!("value must be a finite number, found {value}"),
            ));
        }
    }

    let annual_cycles = params.route.annual_cycles();
    if annual_cycles <= 0.0 {
        return Err(TcoError::invalid_input(
            "annual_cycles",
            format!(
                "rounds per shift × shifts per day × workdays per week × weeks per year must be positive, found {annual_cycles}"
            ),
        ));
    }
    ensure_positive("leasing_years", params.leasing.leasing_years)?;

    match &params.drivetrain {
        Drivetrain::Ice {
            front_tire,
            rear_tire,
            ..
        } => {
            ensure_positive("front_tire_life", front_tire.life_km)?;
            ensure_positive("rear_tire_life", rear_tire.life_km)?;
        }
        Drivetrain::Bev { tire, .. } => ensure_positive("tire_life", tire.life_km)?,
        Drivetrain::BevAd {
            tire, autonomous, ..
        } => {
            ensure_positive("tire_life", tire.life_km)?;
            ensure_positive("vehicles_per_steward", autonomous.vehicles_per_steward)?;
            ensure_positive("vehicles_per_tech", autonomous.vehicles_per_tech)?;
        }
    }
    Ok(())
}

fn ensure_positive(field: &str, value: f64) -> Result<(), TcoError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TcoError::invalid_input(
            field,
            format!("value is used as a divisor and must be positive, found {value}"),
        ))
    }
}
