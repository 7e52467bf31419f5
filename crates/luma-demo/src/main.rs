//! Luma Demo — headless host for the contrast engine.
//!
//! Stands in for the presentation layer: takes a foreground and background
//! color from the environment or command line and prints the evaluation, or
//! runs a line-based JSON bridge on stdin/stdout.

mod config;
mod error;
mod ipc;

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use luma_core::{ContrastReport, parse_hex};

use crate::config::{AppConfig, OutputMode};
use crate::error::DemoError;
use crate::ipc::{CoreToUi, Session};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let args = std::env::args().skip(1);
    let config = AppConfig::from_env()?.with_args(args);
    tracing::debug!(?config, "loaded configuration");

    let foreground = parse_hex(&config.foreground)?;
    let background = parse_hex(&config.background)?;
    let session = Session::new(foreground, background);

    match config.output {
        OutputMode::Text => print_summary(&session.report(), io::stdout().lock())?,
        OutputMode::Json => {
            let reply = CoreToUi::Evaluated {
                report: session.report(),
            };
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        OutputMode::Bridge => run_bridge(session, io::stdin().lock(), io::stdout().lock())?,
    }
    Ok(())
}

/// Write the ratio line and one row per WCAG check.
fn print_summary<W: Write>(report: &ContrastReport, mut out: W) -> io::Result<()> {
    tracing::info!(
        foreground = %report.foreground_hex,
        background = %report.background_hex,
        ratio = report.ratio,
        level = report.level.label(),
        "contrast evaluated"
    );

    let (fg, bg) = (&report.foreground_hex, &report.background_hex);
    let ratio = report.ratio_text();
    let level = report.level.label();
    writeln!(out, "{fg} on {bg}: {ratio} ({level})")?;

    for (check, passes) in report.compliance().checks() {
        let title = check.title();
        let subtitle = check.subtitle();
        let req = check.requirement();
        let verdict = if passes { "pass" } else { "fail" };
        writeln!(out, "  {title:<8} {subtitle:<11} {req:>5}  {verdict}")?;
    }
    Ok(())
}

/// Answer each `UiToCore` line on `input` with a `CoreToUi` line on `output`.
fn run_bridge<R, W>(mut session: Session, input: R, mut output: W) -> Result<(), DemoError>
where
    R: BufRead,
    W: Write,
{
    tracing::info!("bridge ready");
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = session.handle_json(&line)?;
        writeln!(output, "{reply}")?;
        output.flush()?;
    }
    tracing::info!("bridge input closed");
    Ok(())
}
