//! Console Chat
//!
//! The read loop around the advisor: prompt, reject blank input, classify,
//! reply, and stop on `quit` or end of input. Generic over reader and
//! writer so it can be driven from tests.

use std::io::{BufRead, Write};

use crypto_advisor::{Catalog, IntentClassifier, ResponseComposer, Rubric, top};

const BLANK_PROMPT: &str = "Say something - e.g., 'Which is most sustainable?'";

/// Interactive session over one catalog
pub struct ChatSession<'a> {
    classifier: IntentClassifier<'a>,
    composer: ResponseComposer<'a>,
}

impl<'a> ChatSession<'a> {
    pub fn new(catalog: &'a Catalog, bot_name: &str) -> Self {
        Self {
            classifier: IntentClassifier::new(catalog),
            composer: ResponseComposer::new(catalog).with_bot_name(bot_name),
        }
    }

    /// Answer a single question; `None` for blank input
    pub fn answer(&self, question: &str) -> Option<String> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        let intent = self.classifier.classify(question);
        Some(self.composer.respond(&intent))
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> std::io::Result<()> {
        let name = self.composer.bot_name();
        writeln!(output, "{}\n", self.composer.welcome())?;
        writeln!(output, "Type a question (or 'help'):")?;

        let mut lines = input.lines();
        loop {
            write!(output, "\nYou: ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output, "\nGoodbye!")?;
                return Ok(());
            };
            let line = line?;
            let question = line.trim();

            if question.is_empty() {
                writeln!(output, "{name}: {BLANK_PROMPT}")?;
                continue;
            }

            let intent = self.classifier.classify(question);
            writeln!(output, "{name}: {}", self.composer.respond(&intent))?;

            if intent.is_quit() {
                tracing::debug!("Session ended by user");
                return Ok(());
            }
        }
    }
}

/// Canned walkthrough of the three headline questions
pub fn demo<W: Write>(catalog: &Catalog, mut output: W) -> anyhow::Result<()> {
    let composer = ResponseComposer::new(catalog);

    writeln!(output, "=== Demo: sample outputs ===\n")?;

    let growth = top(catalog, Rubric::Profitability)?;
    writeln!(output, "Q: Which crypto is trending up?")?;
    writeln!(output, "A: For growth: {} - score {:.2}\n", growth.asset, growth.score)?;

    let green = top(catalog, Rubric::Sustainability)?;
    writeln!(output, "Q: Most sustainable coin?")?;
    writeln!(output, "A: {} - sustainability {:.2}\n", green.asset, green.score)?;

    writeln!(output, "Q: Explain Cardano")?;
    writeln!(output, "A:\n{}", composer.explain_by_name("Cardano"))?;
    writeln!(output, "\n=== End demo ===")?;
    Ok(())
}
