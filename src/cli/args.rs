use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for dnp.
#[derive(Parser, Debug)]
#[command(name = "dnp", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project directory.
    Create(CreateArgs),
    /// Print every project recorded in the registry.
    List(ListArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct CreateArgs {
    /// Project type tag; falls back to the configured default.
    #[arg(value_name = "TYPE")]
    pub project_type: Option<String>,

    /// Project domain tag; falls back to the configured default.
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Codename prefix; picked at random when omitted.
    #[arg(long, value_name = "NAME")]
    pub prefix: Option<String>,

    /// Free-text description embedded in the readme and the remote repository.
    #[arg(long, value_name = "TEXT")]
    pub desc: Option<String>,

    /// Root directory override for this invocation.
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments, printing usage instead of a bare error
/// when the subcommand is missing or unrecognized.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(e.kind(), ErrorKind::MissingSubcommand | ErrorKind::InvalidSubcommand) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
