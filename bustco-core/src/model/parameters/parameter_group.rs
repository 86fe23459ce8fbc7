use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// sections of the parameter input form.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ParameterGroup {
    Route,
    Consumption,
    Leasing,
    FixedCosts,
    MarketPrices,
    Personnel,
    Administration,
    Autonomous,
}

impl ParameterGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ParameterGroup::Route => "Route",
            ParameterGroup::Consumption => "Consumption",
            ParameterGroup::Leasing => "Leasing",
            ParameterGroup::FixedCosts => "Fixed Costs",
            ParameterGroup::MarketPrices => "Market Prices",
            ParameterGroup::Personnel => "Personnel",
            ParameterGroup::Administration => "Administration",
            ParameterGroup::Autonomous => "Autonomous Operation",
        }
    }
}

impl Display for ParameterGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
