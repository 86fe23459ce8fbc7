use super::{render_ops, session_file, DefaultsFormat, OutputFormat, TcoAppConfig, TcoAppError};
use crate::{comparison::ZeroPolicy, session::TcoSession};
use bustco_core::{ParameterSet, Variant, VariantProfile};
use clap::Subcommand;
use std::path::Path;

#[derive(Debug, Clone, Subcommand)]
pub enum TcoOperation {
    /// print the default parameters of a variant as a flat key/value document
    Defaults {
        #[arg(long, value_enum)]
        variant: Variant,
        #[arg(long, value_enum, default_value_t = DefaultsFormat::Json)]
        format: DefaultsFormat,
    },
    /// print the parameter schema with widget configuration
    Schema {
        /// only list fields that apply to this variant
        #[arg(long, value_enum)]
        variant: Option<Variant>,
    },
    /// compute the cost breakdown per cycle of one variant
    Calculate {
        #[arg(long, value_enum)]
        variant: Variant,
        /// TOML or JSON file with [ice], [bev] and [bev_ad] override tables
        #[arg(long)]
        config_file: Option<String>,
        /// override a single parameter, applied after the config file
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        overrides: Vec<(String, f64)>,
        /// session storage JSON file; the result is written under tco_<variant>
        #[arg(long)]
        session_file: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// compare the three variants. with a session file, compares its stored
    /// results; otherwise calculates every variant first.
    Compare {
        /// TOML or JSON file with [ice], [bev] and [bev_ad] override tables
        #[arg(long)]
        config_file: Option<String>,
        /// session storage JSON file holding tco_ice, tco_bev and tco_bev_ad
        #[arg(long)]
        session_file: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// leave zero-cost categories out of the composition series
        #[arg(long, default_value_t = false)]
        exclude_zero: bool,
    },
}

impl TcoOperation {
    /// runs the operation, returning the text to print.
    pub fn run(&self) -> Result<String, TcoAppError> {
        match self {
            TcoOperation::Defaults { variant, format } => {
                render_ops::render_parameters(&ParameterSet::default_for(*variant), *format)
            }
            TcoOperation::Schema { variant } => Ok(render_ops::render_schema(*variant)),
            TcoOperation::Calculate {
                variant,
                config_file,
                overrides,
                session_file,
                format,
            } => run_calculate(
                *variant,
                config_file.as_deref(),
                overrides,
                session_file.as_deref(),
                *format,
            ),
            TcoOperation::Compare {
                config_file,
                session_file,
                format,
                exclude_zero,
            } => {
                let zero_policy = if *exclude_zero {
                    ZeroPolicy::Exclude
                } else {
                    ZeroPolicy::Keep
                };
                run_compare(
                    config_file.as_deref(),
                    session_file.as_deref(),
                    *format,
                    zero_policy,
                )
            }
        }
    }
}

fn run_calculate(
    variant: Variant,
    config_file: Option<&str>,
    overrides: &[(String, f64)],
    session_file: Option<&str>,
    format: OutputFormat,
) -> Result<String, TcoAppError> {
    let mut session = open_session(session_file)?;
    if let Some(f) = config_file {
        load_config(f)?.apply(&mut session)?;
    }
    for (key, value) in overrides.iter() {
        session.override_field(variant, key, *value)?;
    }
    let breakdown = session.calculate(variant)?.clone();
    if let Some(f) = session_file {
        session_file::write_session_file(Path::new(f), session.results())?;
    }
    render_ops::render_breakdown(&VariantProfile::new(variant), &breakdown, format)
}

fn run_compare(
    config_file: Option<&str>,
    session_file: Option<&str>,
    format: OutputFormat,
    zero_policy: ZeroPolicy,
) -> Result<String, TcoAppError> {
    let session = match session_file {
        Some(f) => {
            if config_file.is_some() {
                log::warn!("comparing stored results from {f}, ignoring --config-file");
            }
            open_session(Some(f))?
        }
        None => {
            let mut session = TcoSession::new();
            if let Some(f) = config_file {
                load_config(f)?.apply(&mut session)?;
            }
            for variant in Variant::ALL {
                session.calculate(variant)?;
            }
            session
        }
    };
    let comparison = session.compare(zero_policy)?;
    render_ops::render_comparison(&comparison, format)
}

fn load_config(config_file: &str) -> Result<TcoAppConfig, TcoAppError> {
    let config = TcoAppConfig::from_file(config_file)?;
    if config.is_empty() {
        log::warn!("{config_file} holds no parameter overrides, using defaults");
    }
    Ok(config)
}

fn open_session(session_file: Option<&str>) -> Result<TcoSession, TcoAppError> {
    match session_file {
        Some(f) => {
            let results = session_file::read_session_file(Path::new(f))?;
            Ok(TcoSession::with_results(results))
        }
        None => Ok(TcoSession::new()),
    }
}

/// parses a `key=value` parameter override.
fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter key in '{s}'"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number for '{key}': {e}"))?;
    Ok((key.to_string(), value))
}
