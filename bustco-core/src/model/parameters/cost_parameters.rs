use serde::{Deserialize, Serialize};

/// consumables and road charges shared by every variant. the energy
/// source itself is variant-specific, see [`super::Drivetrain`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OperatingParameters {
    /// liters per 100 km
    pub adblue_consumption: f64,
    /// price per liter
    pub adblue_price: f64,
    /// liters per 1000 km
    pub lubricant_consumption: f64,
    /// price per liter
    pub lubricant_price: f64,
    /// toll charged per km
    pub toll_rate: f64,
}

/// leasing contract and the one-time costs allocated across its duration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LeasingParameters {
    pub leasing_monthly: f64,
    /// contract duration, the amortization period for one-time costs
    pub leasing_years: f64,
    pub transfer_cost: f64,
    pub registration_cost: f64,
    pub commissioning_cost: f64,
    pub return_cost: f64,
}

/// annual fixed costs of keeping one vehicle in service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnnualFixedCosts {
    pub vehicle_tax: f64,
    pub insurance: f64,
    pub inspection: f64,
    pub maintenance: f64,
    pub repairs: f64,
    pub small_parts: f64,
    pub cleaning: f64,
    pub garage: f64,
    pub onboard_system: f64,
}

/// share of the back-office attributed to one vehicle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdministrationParameters {
    pub admin_salary_month: f64,
    /// fraction of one administrator's salary charged to this vehicle
    pub admin_share: f64,
    /// flat annual administration cost
    pub general_admin_cost: f64,
}
