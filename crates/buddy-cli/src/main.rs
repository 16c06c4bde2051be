//! cryptobuddy
//!
//! Console front-end for the rule-based crypto advisor.
//!
//! ```text
//! cryptobuddy                       # interactive chat (default)
//! cryptobuddy demo                  # canned sample answers
//! cryptobuddy ask "Explain Cardano" # one question, one answer
//! cryptobuddy rank green --json     # full ranking for a rubric
//! ```

mod chat;
mod config;
mod telemetry;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crypto_advisor::{
    Catalog, CatalogSource, JsonFileCatalog, ReferenceCatalog, Rubric, ScoredAsset, rank,
};

use crate::chat::ChatSession;
use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "cryptobuddy",
    about = "Rule-based advice on crypto profitability and sustainability",
    version
)]
struct Cli {
    /// JSON catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive chat (default command)
    Chat,
    /// Print sample answers to the headline questions
    Demo,
    /// Answer a single question and exit
    Ask {
        /// The question, e.g. "Which crypto is trending up?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Print every coin ranked under a rubric
    Rank {
        /// profitability (profit, growth) or sustainability (green)
        rubric: Rubric,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct RankRow<'a> {
    position: usize,
    name: &'a str,
    symbol: &'a str,
    score: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()
        .context("Failed to read configuration")?
        .with_overrides(cli.catalog, cli.log_level);

    telemetry::init(&config.log_level).context("Failed to initialise logging")?;
    config.validate()?;

    let catalog = load_catalog(&config)?;
    let stdout = io::stdout();

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let session = ChatSession::new(&catalog, &config.bot_name);
            session.run(io::stdin().lock(), stdout.lock())?;
        }
        Command::Demo => chat::demo(&catalog, stdout.lock())?,
        Command::Ask { question } => {
            let session = ChatSession::new(&catalog, &config.bot_name);
            let question = question.join(" ");
            match session.answer(&question) {
                Some(reply) => writeln!(stdout.lock(), "{}: {reply}", config.bot_name)?,
                None => anyhow::bail!("Question must not be blank"),
            }
        }
        Command::Rank { rubric, json } => {
            print_ranking(&rank(&catalog, rubric)?, json, stdout.lock())?;
        }
    }

    Ok(())
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(ReferenceCatalog::new()),
    };

    let catalog = source
        .load()
        .with_context(|| format!("Failed to load catalog from {}", source.name()))?;

    if catalog.is_empty() {
        tracing::warn!(source = source.name(), "Catalog has no assets");
    }
    tracing::debug!(source = source.name(), assets = catalog.len(), "Catalog ready");
    Ok(catalog)
}

fn print_ranking<W: Write>(ranked: &[ScoredAsset<'_>], json: bool, mut out: W) -> anyhow::Result<()> {
    let rows: Vec<RankRow<'_>> = ranked
        .iter()
        .enumerate()
        .map(|(i, s)| RankRow {
            position: i + 1,
            name: &s.asset.name,
            symbol: &s.asset.symbol,
            score: s.score,
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(first) = ranked.first() {
        writeln!(out, "Ranking by {}:", first.rubric)?;
    }
    for row in &rows {
        writeln!(
            out,
            "  {:>2}. {:<10} {:<5} {:>6.2}",
            row.position, row.name, row.symbol, row.score
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Catalog {
        ReferenceCatalog::new().load().unwrap()
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["cryptobuddy", "rank", "green", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Rank { rubric: Rubric::Sustainability, json: true })
        ));

        let cli = Cli::try_parse_from(["cryptobuddy", "ask", "Explain", "Cardano"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Ask { ref question }) if question.len() == 2));

        let cli = Cli::try_parse_from(["cryptobuddy"]).unwrap();
        assert!(cli.command.is_none());

        assert!(Cli::try_parse_from(["cryptobuddy", "rank", "vibes"]).is_err());
    }

    #[test]
    fn test_print_ranking_table() {
        let catalog = reference();
        let mut out = Vec::new();
        print_ranking(&rank(&catalog, Rubric::Sustainability).unwrap(), false, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Ranking by sustainability:");
        assert!(lines[1].contains("Algorand") && lines[1].contains("11.00"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_print_ranking_json() {
        let catalog = reference();
        let mut out = Vec::new();
        print_ranking(&rank(&catalog, Rubric::Profitability).unwrap(), true, &mut out).unwrap();

        let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows[0]["name"], "Bitcoin");
        assert_eq!(rows[0]["position"], 1);
        assert_eq!(rows.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_load_default_catalog() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(load_catalog(&config).unwrap().len(), 5);
    }
}
