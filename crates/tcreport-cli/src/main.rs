//! CLI entry point for tcreport.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All protocol logic lives in the `tcreport-teamcity` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use tcreport_settings::{Overrides, Settings};
use tcreport_teamcity::TeamCityReporter;
use tcreport_types::{Diagnostic, DiagnosticDescription, Reporter};

#[derive(Parser, Debug)]
#[command(
    name = "tcreport",
    version,
    about = "TeamCity service-message reporter for static analysis findings"
)]
struct Cli {
    /// Path to tcreport config TOML.
    #[arg(long, default_value = "tcreport.toml")]
    config: Utf8PathBuf,

    /// Report the verbose diagnostic message instead of the short one.
    #[arg(long)]
    verbose: bool,

    /// Base directory for rewriting absolute file paths (repeatable,
    /// tried before any configured base paths).
    #[arg(long = "base-path")]
    base_paths: Vec<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Emit service messages for diagnostics read as JSON Lines.
    Emit {
        /// Input file with one JSON diagnostic per line; `-` reads stdin.
        #[arg(default_value = "-")]
        input: Utf8PathBuf,
    },

    /// Emit the inspectionType catalog from a JSON array of descriptions.
    Types {
        /// Input file with a JSON array of diagnostic descriptions.
        input: Utf8PathBuf,
    },

    /// Print the JSON Schema for the JSONL diagnostic input.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    match cli.cmd {
        Commands::Emit { ref input } => cmd_emit(settings, input),
        Commands::Types { ref input } => cmd_types(settings, input),
        Commands::Schema => cmd_schema(),
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let cfg = if cli.config.is_file() {
        let text = fs::read_to_string(&cli.config)
            .with_context(|| format!("read config {}", cli.config))?;
        tcreport_settings::parse_config_toml(&text)
            .with_context(|| format!("parse config {}", cli.config))?
    } else {
        Default::default()
    };

    let overrides = Overrides {
        verbose: cli.verbose.then_some(true),
        base_paths: cli.base_paths.clone(),
    };
    Ok(tcreport_settings::resolve_config(cfg, overrides))
}

fn open_input(path: &Utf8PathBuf) -> anyhow::Result<Box<dyn BufRead>> {
    if path.as_str() == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        let file = fs::File::open(path).with_context(|| format!("open input {path}"))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

fn cmd_emit(settings: Settings, input: &Utf8PathBuf) -> anyhow::Result<()> {
    let reader = open_input(input)?;
    let stdout = io::stdout().lock();
    let mut reporter = TeamCityReporter::new(settings, stdout);

    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read {input}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let diagnostic: Diagnostic = serde_json::from_str(&line)
            .with_context(|| format!("parse diagnostic at {input}:{}", number + 1))?;
        reporter
            .report_diagnostic(&diagnostic)
            .context("write service message")?;
    }
    Ok(())
}

fn cmd_types(settings: Settings, input: &Utf8PathBuf) -> anyhow::Result<()> {
    let text = fs::read_to_string(input).with_context(|| format!("read catalog {input}"))?;
    let descriptions: Vec<DiagnosticDescription> =
        serde_json::from_str(&text).with_context(|| format!("parse catalog {input}"))?;

    let stdout = io::stdout().lock();
    let mut reporter = TeamCityReporter::new(settings, stdout);
    reporter
        .report_inspection_types(&[&descriptions])
        .context("write inspectionType messages")?;
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Diagnostic);
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}
