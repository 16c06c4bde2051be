//! Sustainability Rubric
//!
//! Greenness on a roughly 0..10 scale, adjusted for energy use.

use crate::model::{Asset, EnergyUse};

/// Rescales the stored 0..1 fraction
pub const SCALE: f64 = 10.0;

const fn energy_points(energy: Option<EnergyUse>) -> f64 {
    match energy {
        Some(EnergyUse::Low) => 2.0,
        Some(EnergyUse::High) => -2.0,
        Some(EnergyUse::Medium) | None => 0.0,
    }
}

/// Sustainability score (higher = greener)
pub fn sustainability(asset: &Asset) -> f64 {
    asset.sustainability_score.unwrap_or(0.0) * SCALE + energy_points(asset.energy_use)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MarketCap, PriceTrend};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cardano_sustainability() {
        let ada = Asset::new("Cardano", "ADA")
            .with_trend(PriceTrend::Rising)
            .with_market_cap(MarketCap::Medium)
            .with_energy_use(EnergyUse::Low)
            .with_sustainability(0.8);
        assert!(close(sustainability(&ada), 10.0));
    }

    #[test]
    fn test_energy_adjustment() {
        let asset = Asset::new("A", "A").with_sustainability(0.5);
        assert!(close(sustainability(&asset.clone().with_energy_use(EnergyUse::High)), 3.0));
        assert!(close(sustainability(&asset.clone().with_energy_use(EnergyUse::Medium)), 5.0));
        assert!(close(sustainability(&asset.with_energy_use(EnergyUse::Low)), 7.0));
    }

    #[test]
    fn test_missing_attributes_are_neutral() {
        assert!(close(sustainability(&Asset::new("Bare", "BARE")), 0.0));
    }
}
