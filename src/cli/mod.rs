//! Command-line interface for repo-dump
//!
//! Provides `dump` (the default), `tree`, `config`, and `completions` subcommands.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, LogLevel};

mod dump;
mod tree;

/// Dump a repository into a single LLM-ready prompt document
#[derive(Parser)]
#[command(name = "repo-dump")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments for the default `dump` command
    #[command(flatten)]
    dump: dump::DumpArgs,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args)]
struct GlobalArgs {
    /// Path to config file (defaults to ./repo-dump.toml when present)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write README, tree, and file contents to {repo}_contents.txt (default)
    Dump(dump::DumpArgs),

    /// Print the repository tree listing without reading file contents
    Tree(tree::TreeArgs),

    /// Print the effective configuration as TOML
    Config,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Dump(cli.dump)) {
        Commands::Dump(args) => dump::run(args, &cli.global),
        Commands::Tree(args) => tree::run(args, &cli.global).map(|()| ExitCode::SUCCESS),
        Commands::Config => {
            let config = resolve_config(&cli.global, CliOverrides::default())?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "repo-dump", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load file and environment config, then apply global and command flags.
fn resolve_config(global: &GlobalArgs, mut overrides: CliOverrides) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, global.config.as_deref())?;

    // --verbose / --quiet win over any configured level.
    if global.verbose {
        overrides.log_level = Some(LogLevel::Debug);
    } else if global.quiet {
        overrides.log_level = Some(LogLevel::Warn);
    }
    if global.no_color {
        overrides.color = Some(false);
    }

    Ok(merge_cli_with_config(file_config, overrides))
}
