use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::kilometer};

/// the distance a consumption figure is metered against.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionBase {
    /// e.g. kWh/km
    PerKilometer,
    /// e.g. L/100 km
    PerHundredKilometers,
    /// e.g. L/1000 km
    PerThousandKilometers,
}

impl ConsumptionBase {
    pub fn distance(&self) -> Length {
        match self {
            ConsumptionBase::PerKilometer => Length::new::<kilometer>(1.0),
            ConsumptionBase::PerHundredKilometers => Length::new::<kilometer>(100.0),
            ConsumptionBase::PerThousandKilometers => Length::new::<kilometer>(1000.0),
        }
    }

    /// cost per km of a consumable metered against this base at `unit_price`.
    pub fn cost_per_km(&self, consumption: f64, unit_price: f64) -> f64 {
        consumption / self.distance().get::<kilometer>() * unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::ConsumptionBase;

    #[test]
    fn test_fuel_per_hundred_km() {
        let cost = ConsumptionBase::PerHundredKilometers.cost_per_km(28.5, 1.6);
        assert!((cost - 0.456).abs() < 1e-12, "expected 0.456, found {cost}");
    }

    #[test]
    fn test_lubricant_per_thousand_km() {
        let cost = ConsumptionBase::PerThousandKilometers.cost_per_km(2.0, 2.5);
        assert!((cost - 0.005).abs() < 1e-12, "expected 0.005, found {cost}");
    }

    #[test]
    fn test_electricity_per_km() {
        let cost = ConsumptionBase::PerKilometer.cost_per_km(0.55, 0.6);
        assert!((cost - 0.33).abs() < 1e-12, "expected 0.33, found {cost}");
    }
}
