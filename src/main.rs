// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Huaolelo - Main entrypoint.
//!
//! Loads a word list into a trie and answers queries against it from the
//! command line.

use clap::{Parser, Subcommand};
use huaolelo_lib::config::{self, ConfigLoader, HuaoleloConfig};
use huaolelo_lib::error::{
    report_error, set_error_reporter, ErrorContext, HuaoleloError, HuaoleloResult,
    TracingErrorReporter,
};
use huaolelo_lib::{load_trie, word_list};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Huaolelo.
#[derive(Parser, Debug)]
#[clap(name = "huaolelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every word of a word list in sorted order
    Dump {
        /// Word list to load
        words: PathBuf,

        /// Write to this file instead of standard output
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,
    },

    /// List the words that start with a prefix
    Complete {
        /// Word list to load
        words: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Print only the remaining suffixes
        #[clap(long)]
        suffix: bool,
    },

    /// Check whether a word is in a word list
    Contains {
        /// Word list to load
        words: PathBuf,

        /// Word to look up
        word: String,
    },

    /// Count the distinct words of a word list
    Count {
        /// Word list to load
        words: PathBuf,
    },

    /// Print the trie outline of a word list
    Display {
        /// Word list to load
        words: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &config::LogConfig) -> HuaoleloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.with_target(false).finish())
    };

    result.map_err(|e| HuaoleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Executes `command`, returning the exit status on success.
///
/// `contains` exits with failure when the word is absent.
fn run(command: Command, settings: &HuaoleloConfig) -> HuaoleloResult<ExitCode> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Dump { words, output } => {
            let trie = load_trie(&words, settings)?;
            let written = match output {
                Some(path) => word_list::dump_to_path(&trie, &path)?,
                None => word_list::dump_to_writer(&trie, &mut out)?,
            };
            info!(written, "Dumped word list");
        }
        Command::Complete {
            words,
            prefix,
            suffix,
        } => {
            let trie = load_trie(&words, settings)?;
            let completions = if suffix {
                trie.postfixes(&prefix)
            } else {
                trie.complete(&prefix)
            };
            for completion in completions {
                writeln!(out, "{completion}")?;
            }
        }
        Command::Contains { words, word } => {
            let trie = load_trie(&words, settings)?;
            let found = trie.contains(&word);
            writeln!(out, "{found}")?;
            if !found {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Count { words } => {
            let trie = load_trie(&words, settings)?;
            writeln!(out, "{}", trie.len())?;
        }
        Command::Display { words } => {
            let trie = load_trie(&words, settings)?;
            write!(out, "{trie}")?;
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let toml = config::to_toml_string(&HuaoleloConfig::default())?;
            std::fs::write(&output, toml)?;
            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = config_loader.load();

    let log = loaded
        .as_ref()
        .map(|settings| settings.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config"));
            return ExitCode::FAILURE;
        }
    };
    config::init_global_config(settings);

    let global = config::get_global_config();
    match run(args.command, global.get()) {
        Ok(code) => code,
        Err(e) => {
            report_error(ErrorContext::new(e, "cli"));
            ExitCode::FAILURE
        }
    }
}
