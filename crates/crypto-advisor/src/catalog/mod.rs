//! Asset Catalog
//!
//! An ordered, validated, read-only table of assets, and the sources that
//! can supply one. Insertion order is significant: it is the tie-break for
//! ranking and decides which asset wins when a question names several.

mod json;
mod reference;

pub use json::JsonFileCatalog;
pub use reference::ReferenceCatalog;

use std::collections::HashSet;

use crate::error::{AdvisorError, Result};
use crate::model::Asset;

/// Catalog source trait (Strategy pattern)
///
/// Implement this for each place a catalog can come from.
pub trait CatalogSource: Send + Sync {
    /// Build a validated catalog
    fn load(&self) -> Result<Catalog>;

    /// Source name, for logs
    fn name(&self) -> &str;
}

/// Immutable, ordered asset table
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    assets: Vec<Asset>,
}

impl Catalog {
    /// Validate and wrap `assets`, keeping their order.
    ///
    /// Names and symbols must be non-blank and unique (case-insensitive),
    /// and every present sustainability score must lie in `0.0..=1.0`.
    /// An empty list is allowed.
    pub fn new(assets: Vec<Asset>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut symbols = HashSet::new();

        for asset in &assets {
            if asset.name.trim().is_empty() {
                return Err(AdvisorError::EmptyIdentifier { field: "name" });
            }
            if asset.symbol.trim().is_empty() {
                return Err(AdvisorError::EmptyIdentifier { field: "symbol" });
            }
            if !names.insert(asset.name.to_lowercase()) {
                return Err(AdvisorError::DuplicateAsset {
                    field: "name",
                    value: asset.name.clone(),
                });
            }
            if !symbols.insert(asset.symbol.to_lowercase()) {
                return Err(AdvisorError::DuplicateAsset {
                    field: "symbol",
                    value: asset.symbol.clone(),
                });
            }
            if let Some(score) = asset.sustainability_score {
                if !(0.0..=1.0).contains(&score) {
                    return Err(AdvisorError::ScoreOutOfRange {
                        asset: asset.name.clone(),
                        score,
                    });
                }
            }
        }

        Ok(Self { assets })
    }

    /// Parse a JSON array of assets
    pub fn from_json_str(json: &str) -> Result<Self> {
        let assets: Vec<Asset> = serde_json::from_str(json)?;
        Self::new(assets)
    }

    /// Assets in insertion order
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Exact, case-insensitive lookup by name or symbol
    pub fn get(&self, key: &str) -> Option<&Asset> {
        let key = key.trim();
        self.assets.iter().find(|a| a.is_called(key))
    }

    /// Like [`Catalog::get`], but a miss is an [`AdvisorError::UnknownAsset`]
    pub fn require(&self, key: &str) -> Result<&Asset> {
        self.get(key)
            .ok_or_else(|| AdvisorError::UnknownAsset(key.trim().to_string()))
    }

    /// First asset, in catalog order, whose name or symbol occurs in `text`
    pub fn find_in_text(&self, text: &str) -> Option<&Asset> {
        let normalized = text.to_lowercase();
        self.assets.iter().find(|a| a.matches(&normalized))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceTrend;

    #[test]
    fn test_duplicate_names_rejected_case_insensitively() {
        let result = Catalog::new(vec![
            Asset::new("Bitcoin", "BTC"),
            Asset::new("bitcoin", "XBT"),
        ]);
        assert!(matches!(
            result,
            Err(AdvisorError::DuplicateAsset { field: "name", .. })
        ));
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let mut second = Asset::new("Other", "BTC");
        second.symbol = "btc".into();
        let result = Catalog::new(vec![Asset::new("Bitcoin", "BTC"), second]);
        assert!(matches!(
            result,
            Err(AdvisorError::DuplicateAsset { field: "symbol", .. })
        ));
    }

    #[test]
    fn test_blank_identifiers_rejected() {
        let result = Catalog::from_json_str(
            r#"[{"name": "Bitcoin", "symbol": "BTC"}, {"name": "Ghost", "symbol": ""}]"#,
        );
        assert!(matches!(
            result,
            Err(AdvisorError::EmptyIdentifier { field: "symbol" })
        ));

        let result = Catalog::new(vec![Asset::new("   ", "GHO")]);
        assert!(matches!(
            result,
            Err(AdvisorError::EmptyIdentifier { field: "name" })
        ));
    }

    #[test]
    fn test_lookup_folds_case_like_validation() {
        let catalog = Catalog::new(vec![Asset::new("Ärger", "ÄRG")]).unwrap();
        assert_eq!(catalog.get("ärger").map(|a| a.symbol.as_str()), Some("ÄRG"));
        assert_eq!(catalog.get("ärg").map(|a| a.name.as_str()), Some("Ärger"));

        let result = Catalog::new(vec![Asset::new("Ärger", "ÄRG"), Asset::new("ärger", "XYZ")]);
        assert!(matches!(
            result,
            Err(AdvisorError::DuplicateAsset { field: "name", .. })
        ));
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let result = Catalog::new(vec![Asset::new("Bad", "BAD").with_sustainability(1.5)]);
        assert!(matches!(result, Err(AdvisorError::ScoreOutOfRange { .. })));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_lookup_by_name_or_symbol() {
        let catalog = Catalog::new(vec![
            Asset::new("Bitcoin", "BTC").with_trend(PriceTrend::Rising),
            Asset::new("Cardano", "ADA"),
        ])
        .unwrap();

        assert_eq!(catalog.get("btc").map(|a| a.name.as_str()), Some("Bitcoin"));
        assert_eq!(catalog.get(" cardano ").map(|a| a.symbol.as_str()), Some("ADA"));
        assert!(catalog.get("Dogecoin").is_none());
        assert!(matches!(
            catalog.require("Dogecoin"),
            Err(AdvisorError::UnknownAsset(name)) if name == "Dogecoin"
        ));
    }

    #[test]
    fn test_find_in_text_uses_catalog_order() {
        let catalog = Catalog::new(vec![
            Asset::new("Bitcoin", "BTC"),
            Asset::new("Cardano", "ADA"),
        ])
        .unwrap();

        let found = catalog.find_in_text("Cardano or Bitcoin?").unwrap();
        assert_eq!(found.name, "Bitcoin");
        assert!(catalog.find_in_text("nothing here").is_none());
    }
}
