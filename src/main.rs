//! Niihau - Main entrypoint.
//!
//! Command-line front end for the Niihau Byte Trie. It loads configuration,
//! initializes logging, builds a trie from a key/value dataset and runs one
//! query against it.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use niihau_lib::config::{dataset::DatasetConfig, ConfigLoader, LogConfig, NiihauConfig, ENV_PREFIX};
use niihau_lib::data_structures::NiihauTrie;
use niihau_lib::error::{
    report_error, set_error_reporter, ErrorContext, NiihauError, NiihauResult,
    TracingErrorReporter,
};
use niihau_lib::utils::{load_trie, Renderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Niihau.
#[derive(Parser, Debug)]
#[clap(name = "niihau", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to a key/value dataset (reads standard input when omitted)
    #[clap(short, long, value_parser)]
    data: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the built-in walkthrough on a small trie
    Demo,

    /// Look up the value stored under a key
    Get {
        /// Key to look up
        key: String,
    },

    /// List every stored key
    Keys,

    /// List every stored value
    Values,

    /// List the keys starting with a prefix
    PrefixKeys {
        /// Prefix to match
        prefix: String,
    },

    /// List the values whose keys start with a prefix
    PrefixValues {
        /// Prefix to match
        prefix: String,
    },

    /// Print the trie's node counter
    Size,

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
/// `RUST_LOG` takes precedence over the configured level. Logs go to standard
/// error so command output stays clean.
fn init_logging(log: &LogConfig) -> NiihauResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| NiihauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Build the trie from the dataset file or standard input.
fn load_dataset(path: Option<&Path>, config: &DatasetConfig) -> NiihauResult<NiihauTrie> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading dataset");
            load_trie(BufReader::new(File::open(path)?), config)
        }
        None => {
            info!("Loading dataset from standard input");
            load_trie(io::stdin().lock(), config)
        }
    }
}

/// Walk through every trie operation on a one-entry trie.
fn run_demo(renderer: &Renderer) -> NiihauResult<()> {
    let trie = NiihauTrie::new();
    trie.insert("someKey", "someValue");

    let value = trie.search("someKey");
    println!("{}", renderer.render_lookup(b"someKey", value.as_deref())?);
    println!("{}", renderer.render_list(trie.get_all_keys())?);
    println!("{}", renderer.render_list(trie.get_all_values())?);
    println!("{}", renderer.render_list(trie.get_prefix_keys("someKey"))?);
    println!("{}", renderer.render_list(trie.get_prefix_values("someValue"))?);
    println!("{}", renderer.render_size(trie.size())?);
    Ok(())
}

/// Execute one command.
fn run(command: Command, data: Option<&Path>, config: &NiihauConfig) -> NiihauResult<()> {
    let renderer = Renderer::new(config.output.clone());

    let output = match command {
        Command::Demo => return run_demo(&renderer),
        Command::Validate => {
            info!("Configuration validated successfully");
            return Ok(());
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&NiihauConfig::default())
                .map_err(|e| NiihauError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            return Ok(());
        }
        Command::Get { key } => {
            let trie = load_dataset(data, &config.dataset)?;
            let value = trie.search(&key);
            renderer.render_lookup(key.as_bytes(), value.as_deref())?
        }
        Command::Keys => renderer.render_list(load_dataset(data, &config.dataset)?.get_all_keys())?,
        Command::Values => {
            renderer.render_list(load_dataset(data, &config.dataset)?.get_all_values())?
        }
        Command::PrefixKeys { prefix } => renderer
            .render_list(load_dataset(data, &config.dataset)?.get_prefix_keys(&prefix))?,
        Command::PrefixValues { prefix } => renderer
            .render_list(load_dataset(data, &config.dataset)?.get_prefix_values(&prefix))?,
        Command::Size => renderer.render_size(load_dataset(data, &config.dataset)?.size())?,
    };

    println!("{output}");
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            report_error(&ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        report_error(&ErrorContext::new(e, "logging"));
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Demo);
    let command_name = format!("{command:?}");
    if let Err(e) = run(command, args.data.as_deref(), &config) {
        report_error(&ErrorContext::new(e, "cli").with_details(command_name));
        process::exit(1);
    }
}
