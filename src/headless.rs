// Headless mode - one summarization without the TUI
//
// Runs the same Summarizer lifecycle the TUI uses, once. The summary goes to
// stdout so it can be piped; errors and notices go to stderr.

use crate::summarizer::{Notice, RequestOutcome, Summarizer, SummaryOutcome};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Read the text to summarize from `file`, or stdin for `None` / "-"
pub async fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Summarize `text` and report the outcome
///
/// Returns true when a summary was printed.
pub async fn summarize_once(
    summarizer: &mut Summarizer,
    text: String,
    copy: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    summarizer.set_input(text);

    if summarizer.request_summary() == RequestOutcome::EmptyInput {
        writeln!(err, "Nothing to summarize: input is empty")?;
        return Ok(false);
    }
    while summarizer.is_pending() {
        summarizer.settle().await;
    }

    match summarizer.outcome() {
        SummaryOutcome::Success(summary) => writeln!(out, "{}", summary)?,
        SummaryOutcome::Failure(_) => {
            if let Some(text) = summarizer.display_text() {
                writeln!(err, "{}", text)?;
            }
            return Ok(false);
        }
        SummaryOutcome::Empty => {
            writeln!(err, "Summarization failed unexpectedly (see logs)")?;
            return Ok(false);
        }
    }

    if copy && summarizer.copy_summary_to_clipboard() {
        match summarizer.settle().await {
            Some(Notice::Copied) => writeln!(err, "Copied to clipboard!")?,
            None => writeln!(err, "Could not copy to clipboard (see logs)")?,
        }
    }

    Ok(true)
}

/// Entry point for `precis summarize`
pub async fn run(
    mut summarizer: Summarizer,
    file: Option<PathBuf>,
    copy: bool,
) -> anyhow::Result<bool> {
    let text = read_input(file.as_deref()).await?;
    tracing::debug!(engine = summarizer.engine_name(), "Running headless summary");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    summarize_once(
        &mut summarizer,
        text,
        copy,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .await
}
