pub mod app;
pub mod comparison;
pub mod session;
