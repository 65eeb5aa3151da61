// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Regenerates the Cognon capacity tables as LaTeX rows.
//!
//! ```text
//! cognon-tables table21 --seed 1
//! cognon-tables table23 --workers 8
//! cognon-tables run --config cognon_configuration.toml --set w=60 --debug-cognon-experiment
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cognon::config::{load_config, validate_config, CognonConfig};
use cognon::experiment::{run_configuration, Configuration, RunOptions};
use cognon::observability::{
    debug_flags_help, init_logging, parse_debug_flags, CrateDebugFlags, LoggingConfig,
    LoggingGuard,
};
use cognon::report::{
    format_summary, table_header, MIDRULE, TABLE21_ROWS, TABLE23_ROWS, TABLE_TEST_WORDS,
};

/// Cognon capacity tables
#[derive(Parser, Debug)]
#[command(name = "cognon-tables", version, long_about = None, after_help = debug_flags_help())]
struct Cli {
    /// Configuration file (searched for when omitted by `run`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Minimum trials per row
    #[arg(short, long, global = true)]
    repetitions: Option<usize>,

    /// Worker threads (0 = one per logical CPU)
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// Base seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Table 2.1: fixed word size N, swept over H, S0, w and G
    Table21 {
        /// Test words per trial
        #[arg(long, default_value_t = TABLE_TEST_WORDS)]
        test_words: usize,
    },
    /// Table 2.3: density-driven words, swept over H, G, S0, R and w
    Table23 {
        /// Test words per trial
        #[arg(long, default_value_t = TABLE_TEST_WORDS)]
        test_words: usize,
    },
    /// Run the configuration from the configuration file and print its summary
    Run {
        /// Override a configuration key, e.g. `--set w=60` (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
}

fn main() -> Result<()> {
    let debug_flags = parse_debug_flags();
    // Debug flags are consumed above; clap never sees them
    let cli = Cli::parse_from(std::env::args().filter(|arg| !arg.starts_with("--debug-")));

    match &cli.command {
        Command::Table21 { test_words } => {
            let file = load_optional_config(&cli)?;
            let _guard = start_logging(&debug_flags, file.as_ref())?;
            let options = table_options(&cli, file.as_ref());

            print!("{}", table_header("Table 2.1"));
            println!();
            for (group, rows) in TABLE21_ROWS.iter().enumerate() {
                if group > 0 {
                    println!("{}", MIDRULE);
                }
                for row in rows.iter() {
                    println!("{}", row.run(*test_words, &options)?);
                }
            }
        }
        Command::Table23 { test_words } => {
            let file = load_optional_config(&cli)?;
            let _guard = start_logging(&debug_flags, file.as_ref())?;
            let options = table_options(&cli, file.as_ref());

            print!("{}", table_header("Table 2.3"));
            println!();
            for (group, rows) in TABLE23_ROWS.iter().enumerate() {
                if group > 0 {
                    println!("{}", MIDRULE);
                }
                for row in rows.iter() {
                    println!("{}", row.run(*test_words, &options)?);
                }
            }
        }
        Command::Run { overrides } => {
            let cli_overrides = collect_overrides(&cli, overrides)?;
            let file = load_config(cli.config.as_deref(), Some(&cli_overrides))
                .context("Failed to load configuration")?;
            validate_config(&file)?;
            let _guard = start_logging(&debug_flags, Some(&file))?;

            let config = Configuration::from_config(&file);
            let options = RunOptions::from_config(&file);
            info!(target: "cognon-tables", "Running configuration with S0={}", config.s0());

            let results = run_configuration(&config, &options)?;
            println!("{}", format_summary(&config, results.len(), &results.summary()));
        }
    }

    Ok(())
}

/// Tables only read the file when `--config` names one
fn load_optional_config(cli: &Cli) -> Result<Option<CognonConfig>> {
    match &cli.config {
        Some(path) => {
            let file = load_config(Some(path.as_path()), None)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            validate_config(&file)?;
            Ok(Some(file))
        }
        None => Ok(None),
    }
}

fn table_options(cli: &Cli, file: Option<&CognonConfig>) -> RunOptions {
    let mut options = file.map(RunOptions::from_config).unwrap_or_default();
    if let Some(repetitions) = cli.repetitions {
        options.repetitions = repetitions;
    }
    if let Some(workers) = cli.workers {
        options.workers = workers;
    }
    if cli.seed.is_some() {
        options.seed = cli.seed;
    }
    options
}

fn collect_overrides(cli: &Cli, overrides: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    if let Some(repetitions) = cli.repetitions {
        map.insert("repetitions".to_string(), repetitions.to_string());
    }
    if let Some(workers) = cli.workers {
        map.insert("workers".to_string(), workers.to_string());
    }
    if let Some(seed) = cli.seed {
        map.insert("seed".to_string(), seed.to_string());
    }
    for entry in overrides {
        let Some((key, value)) = entry.split_once('=') else {
            bail!("Expected KEY=VALUE, got '{}'", entry);
        };
        map.insert(key.trim().to_lowercase(), value.trim().to_string());
    }
    Ok(map)
}

fn start_logging(debug_flags: &CrateDebugFlags, file: Option<&CognonConfig>) -> Result<LoggingGuard> {
    let logging = match file {
        Some(file) => LoggingConfig::from_parts(
            &file.logging.level,
            &file.logging.format,
            file.logging.file.clone(),
        ),
        None => LoggingConfig::default(),
    };
    init_logging(debug_flags, &logging)
}
