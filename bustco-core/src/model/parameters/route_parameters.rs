use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::kilometer};

/// describes the served route and how often a single vehicle runs it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RouteParameters {
    /// length of the route in one direction, in kilometers
    pub one_way_distance_km: f64,
    pub rounds_per_shift: f64,
    pub shifts_per_day: f64,
    pub workdays_per_week: f64,
    pub weeks_per_year: f64,
}

impl RouteParameters {
    /// distance of one full round trip (one cycle, or "Umlauf").
    pub fn distance_per_cycle(&self) -> Length {
        Length::new::<kilometer>(self.one_way_distance_km) * 2.0
    }

    /// number of cycles a vehicle runs per year. every recurring cost
    /// is normalized against this value.
    pub fn annual_cycles(&self) -> f64 {
        self.rounds_per_shift * self.shifts_per_day * self.workdays_per_week * self.weeks_per_year
    }
}
