//! Tree command: print the walker's listing to stdout

use anyhow::Result;
use clap::Args;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::{resolve_config, GlobalArgs};
use crate::analyze::{build_subscriber, structure_header};
use crate::config::CliOverrides;
use crate::error::DumpError;
use crate::scan::walk;
use crate::utils::repo_display_name;

#[derive(Args)]
pub struct TreeArgs {
    /// Repository folder to list
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Ignore list file, one relative path per line
    #[arg(short = 'i', long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,
}

pub fn run(args: TreeArgs, global: &GlobalArgs) -> Result<()> {
    let overrides = CliOverrides {
        ignore_file: args.ignore_file,
        ..CliOverrides::default()
    };
    let config = resolve_config(global, overrides)?;

    tracing::subscriber::with_default(build_subscriber(&config.log), || -> Result<()> {
        if !args.path.is_dir() {
            return Err(DumpError::InvalidRoot(args.path.clone()).into());
        }
        let walker = walk(&args.path, &config.ignore_file)?;

        let mut out = BufWriter::new(io::stdout().lock());
        out.write_all(structure_header(&repo_display_name(&args.path)).as_bytes())?;
        for path in walker {
            writeln!(out, "{path}")?;
        }
        out.flush()?;
        Ok(())
    })
}
