use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_domain::{Answer, AttributeName, ClassTable, QuestionBank, QuestionCategory};
use charforge_engine::{CharacterEngine, ScoringConfig};

const USAGE: &str = "Usage: cargo xtask <command>

Commands:
  bank-check [questions.json] [classes.json]   Validate a question bank and class table
  score <answers.json>                          Score an answer list with the bundled data";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xtask=info,charforge_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("bank-check") => bank_check(args.next(), args.next()),
        Some("score") => {
            let path = args.next().context("score needs an answers file")?;
            score(Path::new(&path))
        }
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!("{USAGE}"),
    }
}

fn bank_check(questions: Option<String>, classes: Option<String>) -> anyhow::Result<()> {
    let bank = match questions {
        Some(path) => {
            let json = read(Path::new(&path))?;
            Arc::new(
                QuestionBank::from_json(&json)
                    .with_context(|| format!("validating question bank {path}"))?,
            )
        }
        None => QuestionBank::standard(),
    };
    let table = match classes {
        Some(path) => {
            let json = read(Path::new(&path))?;
            Arc::new(
                ClassTable::from_json(&json)
                    .with_context(|| format!("validating class table {path}"))?,
            )
        }
        None => ClassTable::standard(),
    };

    tracing::info!(version = %bank.version(), questions = bank.len(), "Question bank OK");
    for attr in AttributeName::ALL {
        let ceiling: u32 = bank
            .attribute_questions(attr)
            .filter_map(|q| q.options.iter().filter_map(|o| o.score).max())
            .map(u32::from)
            .sum();
        tracing::info!(attribute = %attr, reachable_raw = ceiling, "Attribute ceiling");
    }
    tracing::info!(
        alignment = bank.questions_in(QuestionCategory::Alignment).count(),
        race = bank.questions_in(QuestionCategory::Race).count(),
        "Section sizes"
    );
    tracing::info!(
        version = %table.version(),
        classes = table.classes().count(),
        "Class table OK"
    );

    // Every bank question answered with its first option must resolve.
    let engine = CharacterEngine::try_new(bank, table, ScoringConfig::from_env())
        .context("invalid scoring configuration")?;
    let answers: Vec<Answer> = engine
        .bank()
        .questions()
        .iter()
        .filter_map(|q| {
            q.options
                .first()
                .map(|o| Answer::new(q.id.clone(), o.id.clone()))
        })
        .collect();
    let result = engine.resolve_character(&answers);
    tracing::info!(title = %result.display_title(), "Smoke resolution");

    Ok(())
}

fn score(path: &Path) -> anyhow::Result<()> {
    let json = read(path)?;
    let answers: Vec<Answer> = serde_json::from_str(&json)
        .with_context(|| format!("parsing answers from {}", path.display()))?;

    let engine = CharacterEngine::try_new(
        QuestionBank::standard(),
        ClassTable::standard(),
        ScoringConfig::from_env(),
    )
    .context("invalid scoring configuration")?;

    let validation = engine.validate_answers(&answers);
    if !validation.valid {
        tracing::warn!(
            missing = validation.missing_questions.len(),
            invalid = validation.invalid_answers.len(),
            "Answer set is incomplete; scoring anyway"
        );
    }

    let result = engine.resolve_character(&answers);
    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("serializing result")?
    );
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
