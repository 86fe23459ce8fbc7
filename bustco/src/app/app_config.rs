use super::TcoAppError;
use crate::session::TcoSession;
use bustco_core::Variant;
use config::{Config, FileFormat};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// parameter overrides read from a scenario file. each table holds
/// `key = number` entries for one variant, addressed by schema key:
///
/// ```toml
/// [ice]
/// fuel_price = 1.75
///
/// [bev_ad]
/// vehicles_per_steward = 10
/// ```
///
/// every table is optional. values are applied as given, without widget
/// rounding, and keys that do not apply to the variant are rejected.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TcoAppConfig {
    #[serde(default)]
    pub ice: HashMap<String, f64>,
    #[serde(default)]
    pub bev: HashMap<String, f64>,
    #[serde(default)]
    pub bev_ad: HashMap<String, f64>,
}

impl TcoAppConfig {
    /// reads a scenario file, choosing the format by file extension.
    pub fn from_file(filepath: &str) -> Result<TcoAppConfig, TcoAppError> {
        let format = if filepath.ends_with(".toml") {
            FileFormat::Toml
        } else if filepath.ends_with(".json") {
            FileFormat::Json
        } else {
            return Err(TcoAppError::ConfigurationError(format!(
                "unsupported file type: {filepath}"
            )));
        };
        let source = config::File::new(filepath, format);
        Self::build(Config::builder().add_source(source), filepath)
    }

    /// reads scenario overrides from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<TcoAppConfig, TcoAppError> {
        let source = config::File::from_str(contents, FileFormat::Toml);
        Self::build(Config::builder().add_source(source), "<inline>")
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        name: &str,
    ) -> Result<TcoAppConfig, TcoAppError> {
        let config = builder
            .build()
            .map_err(|e| TcoAppError::ConfigReadError {
                msg: format!("failed reading '{name}'"),
                source: e,
            })?;
        config
            .try_deserialize::<TcoAppConfig>()
            .map_err(|e| TcoAppError::ConfigReadError {
                msg: format!("failed decoding overrides in '{name}'"),
                source: e,
            })
    }

    pub fn overrides(&self, variant: Variant) -> &HashMap<String, f64> {
        match variant {
            Variant::Ice => &self.ice,
            Variant::Bev => &self.bev,
            Variant::BevAd => &self.bev_ad,
        }
    }

    pub fn is_empty(&self) -> bool {
        Variant::ALL.iter().all(|v| self.overrides(*v).is_empty())
    }

    /// writes every override into the live parameters of the session, in key
    /// order.
    pub fn apply(&self, session: &mut TcoSession) -> Result<(), TcoAppError> {
        for variant in Variant::ALL {
            let overrides = self.overrides(variant);
            for (key, value) in overrides.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
                session.override_field(variant, key, *value)?;
            }
            if !overrides.is_empty() {
                log::info!(
                    "applied {} override(s) to {}",
                    overrides.len(),
                    variant.display_name()
                );
            }
        }
        Ok(())
    }
}
