mod app_config;
mod output_format;
pub mod render_ops;
pub mod session_file;
mod tco_app;
mod tco_app_error;
mod tco_operation;

pub use app_config::TcoAppConfig;
pub use output_format::{DefaultsFormat, OutputFormat};
pub use tco_app::TcoApp;
pub use tco_app_error::TcoAppError;
pub use tco_operation::TcoOperation;
