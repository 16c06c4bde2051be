//! Error Types for Crypto Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Ranking was requested against a catalog with no assets
    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Asset not found: {0}")]
    UnknownAsset(String),

    #[error("Unknown rubric: {0}")]
    UnknownRubric(String),

    #[error("Asset {field} must not be empty")]
    EmptyIdentifier {
        field: &'static str,
    },

    #[error("Duplicate asset {field}: {value}")]
    DuplicateAsset {
        field: &'static str,
        value: String,
    },

    #[error("Sustainability score for {asset} is {score}, expected 0.0..=1.0")]
    ScoreOutOfRange {
        asset: String,
        score: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdvisorError {
    /// Whether the error stems from what the user asked for rather than the data
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UnknownAsset(_) | Self::UnknownRubric(_))
    }

    /// Convert to a message that is safe to show in the chat
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyCatalog => {
                "I don't have any coins to look at right now. Please try again later.".into()
            }
            Self::UnknownAsset(name) => format!("I don't have data for {name}."),
            Self::UnknownRubric(name) => format!(
                "I can rank by 'profitability' or 'sustainability', not '{name}'."
            ),
            _ => "Something went wrong while reading my coin data.".into(),
        }
    }
}
