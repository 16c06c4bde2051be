//! Profitability Rubric
//!
//! Growth-oriented score: price trend and market cap carry most of the
//! weight, sustainability nudges it.

use crate::model::{Asset, MarketCap, PriceTrend};

/// Weight of the 0..1 sustainability fraction in the profitability score
pub const SUSTAINABILITY_WEIGHT: f64 = 1.5;

const fn trend_points(trend: Option<PriceTrend>) -> f64 {
    match trend {
        Some(PriceTrend::Rising) => 3.0,
        Some(PriceTrend::Stable) => 1.0,
        Some(PriceTrend::Falling) => -2.0,
        None => 0.0,
    }
}

const fn market_cap_points(cap: Option<MarketCap>) -> f64 {
    match cap {
        Some(MarketCap::High) => 2.0,
        Some(MarketCap::Medium) => 1.0,
        Some(MarketCap::Low) => -1.0,
        None => 0.0,
    }
}

/// Profitability score (higher = more attractive for growth)
pub fn profitability(asset: &Asset) -> f64 {
    trend_points(asset.price_trend)
        + market_cap_points(asset.market_cap)
        + asset.sustainability_score.unwrap_or(0.0) * SUSTAINABILITY_WEIGHT
}
