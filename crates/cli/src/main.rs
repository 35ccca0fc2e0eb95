//! Tactica - scenario file tool.

use std::io::Write;

use anyhow::Context;
use tactica_domain::SelectionVerdict;
use tactica_shared::DecodeWarning;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod commands;
mod infrastructure;
mod use_cases;

use app::App;
use commands::{Command, USAGE};
use infrastructure::settings::ToolSettings;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    // Logs go to stderr so command output stays clean on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tactica_cli=info,tactica_shared=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => anyhow::bail!("{e}\n\n{USAGE}"),
    };

    let settings = ToolSettings::from_env();
    tracing::debug!(?settings, "Loaded settings");

    let app = App::new(&settings);
    run(&app, command, &mut std::io::stdout().lock())
}

fn run(app: &App, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    let use_cases = &app.use_cases;
    match command {
        Command::New { path, title } => {
            let mut scenario = use_cases.open_for_editing.execute(None);
            if let Some(title) = title {
                scenario.set_title(title);
            }
            use_cases
                .save
                .execute(&scenario, &path)
                .context("writing new scenario")?;
            writeln!(out, "Created {}", path.display())?;
        }
        Command::Validate { path } => {
            let report = use_cases
                .validate
                .execute(&path)
                .context("validating scenario")?;
            write!(out, "{report}")?;
            if report.is_clean() {
                writeln!(out, "  ok")?;
            }
        }
        Command::Normalize {
            path,
            out: target,
            force,
        } => {
            let decoded = use_cases
                .normalize
                .execute(&path, target.as_deref(), force)
                .context("normalizing scenario")?;
            print_warnings(out, &decoded.warnings)?;
            writeln!(out, "Wrote {}", target.as_deref().unwrap_or(path.as_path()).display())?;
        }
        Command::MarkCorrect { path, team, force } => {
            let decoded = use_cases
                .mark_correct
                .execute(&path, team, force)
                .context("marking correct team")?;
            print_warnings(out, &decoded.warnings)?;
            writeln!(
                out,
                "Team {} ({}) is now the correct answer",
                team,
                decoded.scenario.teams()[team].color()
            )?;
        }
        Command::Play {
            path,
            team,
            result_path,
        } => {
            let scenario = use_cases
                .open_for_play
                .execute(&path)
                .context("opening scenario")?;
            let evaluation = use_cases
                .evaluate
                .execute(&scenario, team, result_path.as_deref())
                .context("evaluating choice")?;
            let heading = if evaluation.verdict.is_correct() {
                "Correct!"
            } else {
                "Incorrect"
            };
            writeln!(out, "{heading}\n\n{}", evaluation.record.message)?;
        }
        Command::Session { choices } => {
            let report = use_cases
                .session
                .execute(&choices)
                .context("playing session")?;
            for ((path, _), round) in choices.iter().zip(&report.rounds) {
                let outcome = match &round.verdict {
                    SelectionVerdict::Correct { .. } => "correct",
                    SelectionVerdict::Incorrect { .. } => "incorrect",
                    SelectionVerdict::NoCorrectAnswer { .. } => "not scored",
                };
                writeln!(out, "{}: {outcome}", path.display())?;
            }
            let score = report.score;
            writeln!(
                out,
                "Score: {} of {} ({}%)",
                score.right(),
                score.total(),
                score.score_percent()
            )?;
        }
    }
    Ok(())
}

/// Lossy-read warnings go to stdout as well as the log, so they are seen.
fn print_warnings(out: &mut impl Write, warnings: &[DecodeWarning]) -> std::io::Result<()> {
    for warning in warnings {
        writeln!(out, "warning: {warning}")?;
    }
    Ok(())
}
