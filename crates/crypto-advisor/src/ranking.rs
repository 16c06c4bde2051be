//! Ranking Service
//!
//! Scores every asset in a catalog under one rubric and orders them best
//! first. Nothing is cached: each call rescores the catalog it is given.

use serde::Serialize;
use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::error::{AdvisorError, Result};
use crate::model::Asset;
use crate::scoring::Rubric;

/// An asset paired with its score under one rubric
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoredAsset<'a> {
    pub asset: &'a Asset,
    pub rubric: Rubric,
    pub score: f64,
}

/// Score and order every asset, highest score first.
///
/// The sort is stable, so assets with equal scores keep their catalog order.
pub fn rank(catalog: &Catalog, rubric: Rubric) -> Result<Vec<ScoredAsset<'_>>> {
    if catalog.is_empty() {
        return Err(AdvisorError::EmptyCatalog);
    }

    let mut scored: Vec<ScoredAsset<'_>> = catalog
        .iter()
        .map(|asset| ScoredAsset {
            asset,
            rubric,
            score: rubric.score(asset),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    tracing::debug!(
        %rubric,
        assets = scored.len(),
        top = %scored[0].asset.name,
        "Ranked catalog"
    );

    Ok(scored)
}

/// The best asset under `rubric`
pub fn top(catalog: &Catalog, rubric: Rubric) -> Result<ScoredAsset<'_>> {
    rank(catalog, rubric)?
        .into_iter()
        .next()
        .ok_or(AdvisorError::EmptyCatalog)
}
