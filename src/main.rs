//! mconditions - inspect and set status conditions on Machine API manifests
//!
//! Reads Machine and MachineHealthCheck manifests (YAML or JSON), applies
//! the condition upsert rules from the library and prints the result.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::{ConfigSubcommand, SetArgs};
use machine_conditions::config::{Config, ConfigLoader, OutputFormat};
use std::path::PathBuf;

/// mconditions - inspect and set status conditions on Machine API manifests
#[derive(Parser, Debug)]
#[command(name = "mconditions")]
#[command(about = "Inspect and set status conditions on Machine API manifests", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Output format (yaml or json); overrides the configured default
    #[arg(long, short = 'o', global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the conditions of a manifest
    Get {
        /// Manifest file (YAML or JSON), or '-' for stdin
        file: PathBuf,
        /// Only print the condition with this type
        #[arg(long = "type", short = 't')]
        condition_type: Option<String>,
        /// Refuse manifests of any other kind (kind name or alias, e.g. "mhc")
        #[arg(long, short = 'k')]
        kind: Option<String>,
    },
    /// Set a condition on a manifest
    Set(SetArgs),
    /// Check that the conditions of two documents match, ignoring transition times
    Match {
        /// Manifest or condition list under test
        actual: PathBuf,
        /// Manifest or condition list with the expected conditions
        expected: PathBuf,
        /// Only compare the condition with this type
        #[arg(long = "type", short = 't')]
        condition_type: Option<String>,
    },
    /// List the resource kinds that carry conditions
    Kinds,
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
}

/// Load configuration and initialize logging for the document commands
fn load_runtime(debug: bool, output: Option<OutputFormat>) -> (Config, OutputFormat) {
    let config = ConfigLoader::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {:#}", e);
        ConfigLoader::load_defaults()
    });
    cli::init_logging(debug, &config.logger.level);
    tracing::debug!(
        "Configuration loaded: output={}, defaultSeverity={}",
        config.output,
        config.default_severity
    );

    let output = output.unwrap_or(config.output);
    (config, output)
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        // Config subcommands handle their own loading and errors
        Command::Config { subcommand } => cli::handle_config_command(subcommand),
        Command::Version => {
            cli::display_version();
            Ok(())
        }
        Command::Get {
            file,
            condition_type,
            kind,
        } => {
            let (_, output) = load_runtime(args.debug, args.output);
            cli::handle_get(&file, condition_type.as_deref(), kind.as_deref(), output)
        }
        Command::Set(set_args) => {
            let (config, output) = load_runtime(args.debug, args.output);
            cli::handle_set(set_args, &config, output)
        }
        Command::Match {
            actual,
            expected,
            condition_type,
        } => {
            load_runtime(args.debug, args.output);
            if !cli::handle_match(&actual, &expected, condition_type.as_deref())? {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Kinds => {
            cli::handle_kinds();
            Ok(())
        }
    }
}
