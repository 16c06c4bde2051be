//! JSON File Catalog
//!
//! Loads a catalog from a JSON array of assets:
//!
//! ```json
//! [
//!   {"name": "Cardano", "symbol": "ADA", "price_trend": "rising",
//!    "market_cap": "medium", "energy_use": "low", "sustainability_score": 0.8}
//! ]
//! ```

use std::path::{Path, PathBuf};

use super::{Catalog, CatalogSource};
use crate::error::Result;

/// Catalog read from a file on disk
#[derive(Clone, Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
    label: String,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Catalog> {
        let raw = std::fs::read_to_string(&self.path)?;
        let catalog = Catalog::from_json_str(&raw)?;
        tracing::info!(path = %self.label, assets = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    fn name(&self) -> &str {
        &self.label
    }
}
