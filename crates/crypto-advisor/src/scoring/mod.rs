//! Scoring Engine
//!
//! Pure functions scoring a single asset against one rubric. Scores depend
//! only on the asset's attributes; a missing attribute contributes zero.

mod profitability;
mod sustainability;

pub use profitability::profitability;
pub use sustainability::sustainability;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdvisorError;
use crate::model::Asset;

/// A scoring dimension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rubric {
    Profitability,
    Sustainability,
}

impl Rubric {
    pub const ALL: [Self; 2] = [Self::Profitability, Self::Sustainability];

    /// Score `asset` under this rubric
    pub fn score(self, asset: &Asset) -> f64 {
        match self {
            Self::Profitability => profitability(asset),
            Self::Sustainability => sustainability(asset),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profitability => "profitability",
            Self::Sustainability => "sustainability",
        }
    }
}

impl fmt::Display for Rubric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rubric {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profit" | "profitability" | "growth" => Ok(Self::Profitability),
            "sustainability" | "sustainable" | "green" => Ok(Self::Sustainability),
            other => Err(AdvisorError::UnknownRubric(other.to_string())),
        }
    }
}
