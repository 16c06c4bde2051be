//! Domain Models
//!
//! Core data types for the advisor. Attributes are strongly typed enums so
//! that invalid states (e.g. a trend of "sideways") cannot be represented.
//! Every attribute is optional: a missing value scores as a neutral term.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recent price direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

impl PriceTrend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Falling => "falling",
        }
    }
}

/// Coarse market capitalization bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCap {
    Low,
    Medium,
    High,
}

impl MarketCap {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Energy consumption of the network's consensus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUse {
    Low,
    Medium,
    High,
}

impl EnergyUse {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MarketCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EnergyUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked cryptocurrency
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Full name (e.g., "Bitcoin"), unique within a catalog
    pub name: String,

    /// Ticker symbol (e.g., "BTC"), unique within a catalog
    pub symbol: String,

    #[serde(default)]
    pub price_trend: Option<PriceTrend>,

    #[serde(default)]
    pub market_cap: Option<MarketCap>,

    #[serde(default)]
    pub energy_use: Option<EnergyUse>,

    /// Fraction in 0.0..=1.0 (1 = most sustainable)
    #[serde(default)]
    pub sustainability_score: Option<f64>,
}

impl Asset {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into().to_uppercase(),
            price_trend: None,
            market_cap: None,
            energy_use: None,
            sustainability_score: None,
        }
    }

    #[must_use]
    pub fn with_trend(mut self, trend: PriceTrend) -> Self {
        self.price_trend = Some(trend);
        self
    }

    #[must_use]
    pub fn with_market_cap(mut self, cap: MarketCap) -> Self {
        self.market_cap = Some(cap);
        self
    }

    #[must_use]
    pub fn with_energy_use(mut self, energy: EnergyUse) -> Self {
        self.energy_use = Some(energy);
        self
    }

    #[must_use]
    pub fn with_sustainability(mut self, score: f64) -> Self {
        self.sustainability_score = Some(score);
        self
    }

    /// True if `normalized` (already lower-cased) contains the name or symbol
    pub fn matches(&self, normalized: &str) -> bool {
        normalized.contains(&self.name.to_lowercase())
            || normalized.contains(&self.symbol.to_lowercase())
    }

    /// Case-insensitive exact match on name or symbol
    pub fn is_called(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.name.to_lowercase() == key || self.symbol.to_lowercase() == key
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_matches_name_or_symbol() {
        let ada = Asset::new("Cardano", "ada");
        assert_eq!(ada.symbol, "ADA");
        assert!(ada.matches("tell me about ada"));
        assert!(ada.matches("is cardano any good"));
        assert!(!ada.matches("what about bitcoin"));
        assert!(ada.is_called("CARDANO"));
        assert!(ada.is_called("Ada"));
        assert!(Asset::new("Ärger", "ÄRG").is_called("äRGER"));
    }

    #[test]
    fn test_missing_attributes_deserialize_as_none() {
        let asset: Asset =
            serde_json::from_str(r#"{"name": "Mystery", "symbol": "MYS", "price_trend": "rising"}"#)
                .unwrap();
        assert_eq!(asset.price_trend, Some(PriceTrend::Rising));
        assert_eq!(asset.market_cap, None);
        assert_eq!(asset.energy_use, None);
        assert_eq!(asset.sustainability_score, None);
    }

    #[test]
    fn test_invalid_enum_value_is_rejected() {
        let result: Result<Asset, _> =
            serde_json::from_str(r#"{"name": "X", "symbol": "X", "price_trend": "sideways"}"#);
        assert!(result.is_err());
    }
}
