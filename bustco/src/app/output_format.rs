use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// output of the `calculate` and `compare` operations.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// aligned plain-text table
    #[default]
    Table,
    /// comma-separated rows with a header
    Csv,
    /// pretty-printed JSON
    Json,
}

/// output of the `defaults` operation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DefaultsFormat {
    #[default]
    Json,
    Toml,
}
