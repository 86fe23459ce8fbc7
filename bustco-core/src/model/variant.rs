use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the three vehicle/operation configurations compared by the calculator.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// internal-combustion (diesel) bus with a driver
    Ice,
    /// battery-electric bus with a driver
    Bev,
    /// autonomous battery-electric bus, supervised by stewards and technicians
    #[value(name = "bev_ad", alias = "bev-ad")]
    BevAd,
}

/// prefix of the session storage keys, as in `tco_bev_ad`.
const STORAGE_KEY_PREFIX: &str = "tco_";

impl Variant {
    /// all variants in comparison column order.
    pub const ALL: [Variant; 3] = [Variant::Ice, Variant::Bev, Variant::BevAd];

    /// canonical identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Ice => "ice",
            Variant::Bev => "bev",
            Variant::BevAd => "bev_ad",
        }
    }

    /// human-readable column title.
    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::Ice => "ICE",
            Variant::Bev => "BEV",
            Variant::BevAd => "BEV-AD",
        }
    }

    /// key used for this variant's breakdown in session storage.
    pub fn storage_key(&self) -> String {
        format!("{STORAGE_KEY_PREFIX}{}", self.as_str())
    }

    /// inverse of [`Variant::storage_key`].
    pub fn from_storage_key(key: &str) -> Option<Variant> {
        let id = key.strip_prefix(STORAGE_KEY_PREFIX)?;
        id.parse::<Variant>().ok()
    }

    /// true for variants that employ a driver per shift.
    pub fn has_driver(&self) -> bool {
        !matches!(self, Variant::BevAd)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ice" => Ok(Variant::Ice),
            "bev" => Ok(Variant::Bev),
            "bev_ad" | "bev-ad" => Ok(Variant::BevAd),
            other => Err(format!(
                "unknown variant '{other}', expected one of 'ice', 'bev', 'bev_ad'"
            )),
        }
    }
}
