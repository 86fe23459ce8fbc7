mod cost_parameters;
mod drivetrain;
pub mod field_spec;
mod parameter_group;
mod parameter_set;
mod route_parameters;

pub use cost_parameters::{
    AdministrationParameters, AnnualFixedCosts, LeasingParameters, OperatingParameters,
};
pub use drivetrain::{AutonomousParameters, Drivetrain, PersonnelParameters, TireParameters};
pub use field_spec::{FieldSpec, PARAMETER_FIELDS};
pub use parameter_group::ParameterGroup;
pub use parameter_set::ParameterSet;
pub use route_parameters::RouteParameters;
