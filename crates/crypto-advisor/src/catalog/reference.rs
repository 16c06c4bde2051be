//! Reference Catalog
//!
//! The built-in five-coin dataset. Static values, for demos and tests.

use super::{Catalog, CatalogSource};
use crate::error::Result;
use crate::model::{Asset, EnergyUse, MarketCap, PriceTrend};

/// Built-in catalog: Bitcoin, Ethereum, Cardano, Polkadot, Algorand
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceCatalog;

impl ReferenceCatalog {
    pub const fn new() -> Self {
        Self
    }

    /// The reference assets, in catalog order
    pub fn assets() -> Vec<Asset> {
        // (name, symbol, trend, market cap, energy, sustainability in tenths)
        let rows = [
            ("Bitcoin", "BTC", PriceTrend::Rising, MarketCap::High, EnergyUse::High, 3_u8),
            ("Ethereum", "ETH", PriceTrend::Stable, MarketCap::High, EnergyUse::Medium, 6),
            ("Cardano", "ADA", PriceTrend::Rising, MarketCap::Medium, EnergyUse::Low, 8),
            ("Polkadot", "DOT", PriceTrend::Falling, MarketCap::Medium, EnergyUse::Low, 7),
            ("Algorand", "ALGO", PriceTrend::Stable, MarketCap::Low, EnergyUse::Low, 9),
        ];

        rows.into_iter()
            .map(|(name, symbol, trend, cap, energy, tenths)| {
                Asset::new(name, symbol)
                    .with_trend(trend)
                    .with_market_cap(cap)
                    .with_energy_use(energy)
                    .with_sustainability(f64::from(tenths) / 10.0)
            })
            .collect()
    }
}

impl CatalogSource for ReferenceCatalog {
    fn load(&self) -> Result<Catalog> {
        Catalog::new(Self::assets())
    }

    fn name(&self) -> &str {
        "reference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog() {
        let catalog = ReferenceCatalog::new().load().unwrap();
        let names: Vec<_> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Bitcoin", "Ethereum", "Cardano", "Polkadot", "Algorand"]);

        let ada = catalog.get("ADA").unwrap();
        assert_eq!(ada.price_trend, Some(PriceTrend::Rising));
        assert_eq!(ada.market_cap, Some(MarketCap::Medium));
        assert_eq!(ada.energy_use, Some(EnergyUse::Low));
        assert_eq!(ada.sustainability_score, Some(0.8));
    }
}
