//! # jsonmeta CLI entry point
//!
//! Reads a schema from stdin, prints the generated conversion class to
//! stdout. Failures print a single `ERROR: ...` line and exit with code 1.

mod cli;

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use jsonmeta_schema::MetaError;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the generated code, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => {
            println!("{code}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("ERROR: {}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let (direction, options) = cli.config()?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read schema from stdin")?;

    let schema: serde_json::Value = serde_json::from_str(&input)?;
    tracing::debug!(%direction, bytes = input.len(), "schema parsed");

    let code = jsonmeta_codegen::generate(&schema, direction, &options)?;
    Ok(code)
}

/// Schema errors print their bare kind; everything else its message chain.
fn error_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<MetaError>() {
        Some(meta) => meta.kind_name().to_string(),
        None => format!("{err:#}"),
    }
}
