//! Response Composer
//!
//! Turns a classified [`Intent`] into the bot's reply, querying the ranking
//! service and catalog as needed. Errors never reach the user raw: they are
//! rendered through [`AdvisorError::user_message`].

use std::fmt::Write as _;

use crate::catalog::Catalog;
use crate::error::{AdvisorError, Result};
use crate::intent::Intent;
use crate::model::Asset;
use crate::ranking::top;
use crate::scoring::{Rubric, profitability, sustainability};

pub const DEFAULT_BOT_NAME: &str = "CryptoBuddy";

pub const DISCLAIMER: &str = "Disclaimer: This bot uses simple, hard-coded rules and a tiny sample dataset. \
This is educational only - crypto is risky. Always do your own research (DYOR).";

pub const FAREWELL: &str = "Bye - trade safely!";

const GUIDANCE: &str = "I didn't catch that. Try questions about 'sustainability', 'trending', \
'compare', or ask 'Explain <coin>'.";

const EXPLAIN_PROMPT: &str = "Ask 'Explain <coin>' or name a coin from the list.";

const UNKNOWN_VALUE: &str = "unknown";

/// Builds replies against one catalog
#[derive(Clone, Debug)]
pub struct ResponseComposer<'a> {
    catalog: &'a Catalog,
    bot_name: String,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            bot_name: DEFAULT_BOT_NAME.into(),
        }
    }

    #[must_use]
    pub fn with_bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = name.into();
        self
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Reply to `intent`
    pub fn respond(&self, intent: &Intent<'_>) -> String {
        let reply = match intent {
            Intent::Sustainability => self.sustainability_pick(),
            Intent::Profitability => self.profitability_pick(),
            Intent::Compare => self.compare(),
            Intent::List => Ok(self.list()),
            Intent::Explain(Some(asset)) | Intent::CoinQuery(asset) => Ok(self.explain(asset)),
            Intent::Explain(None) => Ok(EXPLAIN_PROMPT.into()),
            Intent::Help => Ok(self.welcome()),
            Intent::Quit => Ok(FAREWELL.into()),
            Intent::Unknown => Ok(GUIDANCE.into()),
        };

        reply.unwrap_or_else(|e| {
            tracing::warn!(error = %e, kind = %intent.kind(), "Could not compose reply");
            e.user_message()
        })
    }

    /// Greeting shown at start-up and on `help`
    pub fn welcome(&self) -> String {
        format!(
            "Hey! I'm {}, your friendly crypto sidekick.\n\
             I can give simple, rule-based suggestions about profitability and sustainability for a small crypto dataset.\n\
             Type questions like:\n\
             \x20 - \"Which crypto is trending up?\"\n\
             \x20 - \"What's the most sustainable coin?\"\n\
             \x20 - \"Explain Cardano\"\n\
             \x20 - \"List coins\"\n\
             Type 'quit' to exit.",
            self.bot_name
        )
    }

    /// Full attribute dump and both scores for one asset
    pub fn explain(&self, asset: &Asset) -> String {
        let trend = asset.price_trend.map_or(UNKNOWN_VALUE, |t| t.as_str());
        let cap = asset.market_cap.map_or(UNKNOWN_VALUE, |c| c.as_str());
        let energy = asset.energy_use.map_or(UNKNOWN_VALUE, |e| e.as_str());
        let fraction = asset
            .sustainability_score
            .map_or_else(|| UNKNOWN_VALUE.to_string(), |s| format!("{s:.1}"));

        let mut out = String::new();
        let _ = writeln!(out, "{asset}:");
        let _ = writeln!(out, "  - Price trend: {trend}");
        let _ = writeln!(out, "  - Market cap: {cap}");
        let _ = writeln!(out, "  - Energy use: {energy}");
        let _ = writeln!(out, "  - Sustainability score: {fraction}/1.0");
        let _ = write!(
            out,
            "Rule-based conclusion: Profitability score = {:.2}, Sustainability = {:.2}",
            profitability(asset),
            sustainability(asset)
        );
        out
    }

    /// Explain an asset looked up by name or symbol
    pub fn explain_by_name(&self, key: &str) -> String {
        self.catalog
            .require(key)
            .map_or_else(|e| e.user_message(), |asset| self.explain(asset))
    }

    fn sustainability_pick(&self) -> Result<String> {
        let pick = top(self.catalog, Rubric::Sustainability)?;
        Ok(format!(
            "The most sustainable coin in my list is {}.\n  Sustainability score (rule-based) = {:.2}. {DISCLAIMER}",
            pick.asset, pick.score
        ))
    }

    fn profitability_pick(&self) -> Result<String> {
        let pick = top(self.catalog, Rubric::Profitability)?;
        let trend = pick.asset.price_trend.map_or(UNKNOWN_VALUE, |t| t.as_str());
        let cap = pick.asset.market_cap.map_or(UNKNOWN_VALUE, |c| c.as_str());
        Ok(format!(
            "For potential long-term growth, my top pick is {}.\n  \
             Why: price trend = {trend}, market cap = {cap}.\n  \
             Note: This is rule-based - score {:.2}. {DISCLAIMER}",
            pick.asset, pick.score
        ))
    }

    fn compare(&self) -> Result<String> {
        let profit = top(self.catalog, Rubric::Profitability)?;
        let green = top(self.catalog, Rubric::Sustainability)?;
        Ok(format!(
            "Profit-focused pick: {} (score {:.2}).\n\
             Sustainability-focused pick: {} (score {:.2}).\n\
             If you want both, look for coins that rank well on each or ask me to explain a specific coin.",
            profit.asset, profit.score, green.asset, green.score
        ))
    }

    fn list(&self) -> String {
        if self.catalog.is_empty() {
            return AdvisorError::EmptyCatalog.user_message();
        }
        let names: Vec<String> = self.catalog.iter().map(ToString::to_string).collect();
        format!("Available coins in my tiny dataset: {}", names.join(", "))
    }
}
