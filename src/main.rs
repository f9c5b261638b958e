use std::time::Instant;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use tracing::{error, info};

use plagiarism_checker::{report, Checker};

mod cli;

use cli::Cli;

/// Shown in place of any failure; the cause goes to the log
const GENERIC_FAILURE: &str = "系统正在升级中...........";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .init();

    let program_start = Instant::now();
    match run() {
        Ok(()) => println!("程序执行时间: {:.2}秒", program_start.elapsed().as_secs_f64()),
        Err(err) => {
            error!("similarity check failed: {err:#}");
            println!("{GENERIC_FAILURE}");
        }
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => return Err(err).context("invalid command line"),
    };

    let checker = Checker::from_config(&cli.checker_config()).context("failed to set up tokenizer")?;
    let similarity = checker
        .calculate_similarity(&cli.original, &cli.suspect)
        .with_context(|| {
            format!(
                "failed to compare {} with {}",
                cli.original.display(),
                cli.suspect.display()
            )
        })?;

    let line = report::format_line(
        &cli.original.display().to_string(),
        &cli.suspect.display().to_string(),
        similarity,
    );
    report::append_line(&cli.output, &line)?;
    info!(
        original = %cli.original.display(),
        suspect = %cli.suspect.display(),
        similarity,
        "appended result to {}",
        cli.output.display()
    );
    Ok(())
}
