//! Intent Classifier
//!
//! Maps a free-form question to an [`Intent`] with ordered keyword rules.
//! Matching is case-insensitive substring search and the first rule with a
//! hit wins, so the order of [`RULES`] decides ambiguous questions:
//! "why is Cardano green" is a sustainability question, not an explanation.
//!
//! When no rule fires, the catalog is scanned in order for a coin name or
//! symbol, and anything else is [`Intent::Unknown`].

use std::fmt;

use crate::catalog::Catalog;
use crate::model::Asset;

/// What the user is asking for
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent<'a> {
    Sustainability,
    Profitability,
    Compare,
    List,
    /// Explain a coin; `None` when the question names no known coin
    Explain(Option<&'a Asset>),
    Help,
    Quit,
    /// Question that only names a coin
    CoinQuery(&'a Asset),
    Unknown,
}

/// Fieldless tag for an [`Intent`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Sustainability,
    Profitability,
    Compare,
    List,
    Explain,
    Help,
    Quit,
    CoinQuery,
    Unknown,
}

impl IntentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sustainability => "sustainability",
            Self::Profitability => "profitability",
            Self::Compare => "compare",
            Self::List => "list",
            Self::Explain => "explain",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::CoinQuery => "coin_query",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Intent<'_> {
    pub const fn kind(&self) -> IntentKind {
        match self {
            Self::Sustainability => IntentKind::Sustainability,
            Self::Profitability => IntentKind::Profitability,
            Self::Compare => IntentKind::Compare,
            Self::List => IntentKind::List,
            Self::Explain(_) => IntentKind::Explain,
            Self::Help => IntentKind::Help,
            Self::Quit => IntentKind::Quit,
            Self::CoinQuery(_) => IntentKind::CoinQuery,
            Self::Unknown => IntentKind::Unknown,
        }
    }

    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

/// Intents reachable through a keyword rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Sustainability,
    Profitability,
    Compare,
    List,
    Explain,
    Quit,
}

impl Rule {
    pub const fn kind(self) -> IntentKind {
        match self {
            Self::Sustainability => IntentKind::Sustainability,
            Self::Profitability => IntentKind::Profitability,
            Self::Compare => IntentKind::Compare,
            Self::List => IntentKind::List,
            Self::Explain => IntentKind::Explain,
            Self::Quit => IntentKind::Quit,
        }
    }
}

/// Keyword rules in priority order. Do not reorder.
pub const RULES: [(Rule, &[&str]); 6] = [
    (
        Rule::Sustainability,
        &["sustainab", "green", "eco", "energy", "low energy", "environment"],
    ),
    (
        Rule::Profitability,
        &["trend", "trending", "rising", "buy for long", "long-term", "growth"],
    ),
    (Rule::Compare, &["compare", "vs", "which is better", "best of"]),
    (Rule::List, &["list", "show", "available", "what coins"]),
    (Rule::Explain, &["explain", "how", "why"]),
    (Rule::Quit, &["quit", "exit", "bye"]),
];

/// Whole-input commands that ask for the help text
const HELP_COMMANDS: [&str; 2] = ["help", "?"];

/// Rule-based classifier bound to a catalog
#[derive(Clone, Copy, Debug)]
pub struct IntentClassifier<'a> {
    catalog: &'a Catalog,
}

impl<'a> IntentClassifier<'a> {
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Classify one question.
    ///
    /// `text` must be non-empty after trimming; callers re-prompt on blank
    /// input instead of classifying it.
    pub fn classify(&self, text: &str) -> Intent<'a> {
        debug_assert!(!text.trim().is_empty(), "blank input reached the classifier");

        let normalized = text.to_lowercase();
        let intent = self.classify_normalized(&normalized);
        tracing::debug!(kind = %intent.kind(), "Classified question");
        intent
    }

    fn classify_normalized(&self, normalized: &str) -> Intent<'a> {
        let hit = RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)));

        if let Some((rule, _)) = hit {
            return match rule {
                Rule::Sustainability => Intent::Sustainability,
                Rule::Profitability => Intent::Profitability,
                Rule::Compare => Intent::Compare,
                Rule::List => Intent::List,
                Rule::Explain => Intent::Explain(self.catalog.find_in_text(normalized)),
                Rule::Quit => Intent::Quit,
            };
        }

        if HELP_COMMANDS.contains(&normalized.trim()) {
            return Intent::Help;
        }

        self.catalog
            .find_in_text(normalized)
            .map_or(Intent::Unknown, Intent::CoinQuery)
    }
}

/// Classify `text` against `catalog`
pub fn classify<'a>(catalog: &'a Catalog, text: &str) -> Intent<'a> {
    IntentClassifier::new(catalog).classify(text)
}
