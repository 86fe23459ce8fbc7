use super::Variant;
use itertools::Itertools;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TcoError {
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("parameter '{key}' does not exist for variant {variant}")]
    UnknownField { variant: Variant, key: String },
    #[error("please calculate {} TCO first", .missing.iter().map(|v| v.display_name()).join(", "))]
    MissingData { missing: Vec<Variant> },
    #[error("failure decoding stored breakdown '{key}': {msg}")]
    StorageError { key: String, msg: String },
}

impl TcoError {
    pub fn invalid_input(field: &str, reason: String) -> TcoError {
        TcoError::InvalidInput {
            field: field.to_string(),
            reason,
        }
    }
}
