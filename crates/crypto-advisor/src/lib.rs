//! # crypto-advisor
//!
//! Rule-based cryptocurrency advisor. Given a free-form question about a
//! small catalog of coins, it classifies the intent, scores the coins on
//! profitability and sustainability, and composes a reply.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌──────────────────┐   ┌───────────────────┐
//! │ question │──▶│ IntentClassifier │──▶│ ResponseComposer  │──▶ reply
//! └──────────┘   └──────────────────┘   └─────────┬─────────┘
//!                         │                       │
//!                         ▼                       ▼
//!                  ┌────────────┐         ┌───────────────┐
//!                  │  Catalog   │◀────────│ rank / top    │
//!                  └────────────┘         │ (scoring)     │
//!                                         └───────────────┘
//! ```
//!
//! ## Scores (reference catalog)
//!
//! ```text
//!  Coin       Profitability   Sustainability
//!  Bitcoin        5.45             1.00
//!  Ethereum       3.90             6.00
//!  Cardano        5.20            10.00
//!  Polkadot       0.05             9.00
//!  Algorand       1.35            11.00
//! ```
//!
//! Everything here is synchronous and pure over an immutable [`Catalog`], so
//! a catalog can be shared read-only across threads without locking.

pub mod catalog;
pub mod compose;
pub mod error;
pub mod intent;
pub mod model;
pub mod ranking;
pub mod scoring;

pub use catalog::{Catalog, CatalogSource, JsonFileCatalog, ReferenceCatalog};
pub use compose::{DISCLAIMER, ResponseComposer};
pub use error::{AdvisorError, Result};
pub use intent::{Intent, IntentClassifier, IntentKind, classify};
pub use model::{Asset, EnergyUse, MarketCap, PriceTrend};
pub use ranking::{ScoredAsset, rank, top};
pub use scoring::{Rubric, profitability, sustainability};
