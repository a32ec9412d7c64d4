//! Dump command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Term};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use super::{resolve_config, GlobalArgs};
use crate::analyze::{analyze_repo, build_subscriber};
use crate::config::CliOverrides;
use crate::domain::Config;
use crate::render::write_document;

#[derive(Args)]
pub struct DumpArgs {
    /// Repository folder to dump (prompted for when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Ignore list file, one relative path per line
    #[arg(short = 'i', long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Directory for the output file
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// Run the dump. Failures after configuration is resolved are logged once
/// and reported through the exit code, after the optional pause.
pub fn run(args: DumpArgs, global: &GlobalArgs) -> Result<ExitCode> {
    let overrides = CliOverrides {
        path: args.path,
        ignore_file: args.ignore_file,
        output_dir: args.output_dir,
        pause_on_exit: if args.no_pause { Some(false) } else { None },
        show_progress: if args.no_progress { Some(false) } else { None },
        ..CliOverrides::default()
    };
    let config = resolve_config(global, overrides)?;

    tracing::subscriber::with_default(build_subscriber(&config.log), || {
        let code = match execute(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("An error occurred: {:#}", err);
                ExitCode::FAILURE
            }
        };
        if config.pause_on_exit && io::stdin().is_terminal() {
            wait_for_enter();
        }
        Ok(code)
    })
}

fn execute(config: &Config) -> Result<()> {
    let root = match &config.path {
        Some(path) => path.clone(),
        None => prompt_for_root(&mut io::stdin().lock(), &Term::stderr())?,
    };

    let analysis = analyze_repo(&root, config)?;
    let output_path = write_document(&analysis, &config.output_dir)?;
    info!("Repository contents saved to '{}'", output_path.display());
    println!("{}", output_path.display());
    Ok(())
}

/// Ask for a repository folder until an existing directory is entered.
fn prompt_for_root<R: BufRead>(input: &mut R, term: &Term) -> Result<PathBuf> {
    loop {
        term.write_str(&format!("{} ", style("Enter the path to the repository folder:").bold()))?;
        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read repository path")?;
        if read == 0 {
            anyhow::bail!("No repository path entered");
        }

        let candidate = line.trim();
        if !candidate.is_empty() && PathBuf::from(candidate).is_dir() {
            return Ok(PathBuf::from(candidate));
        }
        error!("Invalid repository path. Please enter a valid path.");
    }
}

fn wait_for_enter() {
    let term = Term::stderr();
    let _ = term.write_str("Press Enter to close...");
    let _ = term.read_line();
}
