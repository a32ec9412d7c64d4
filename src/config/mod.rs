//! Configuration loading
//!
//! Layers, lowest to highest precedence: built-in defaults, a TOML file,
//! `REPO_DUMP_*` environment variables, then command-line flags
//! (see [`merge_cli_with_config`]).

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use crate::domain::Config;
use crate::error::{DumpError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::Path;

/// Config file picked up from the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "repo-dump.toml";

/// Environment prefix; nested keys are separated by `__` (`REPO_DUMP_LOG__LEVEL`).
pub const ENV_PREFIX: &str = "REPO_DUMP_";

pub fn load_config(anchor: &Path, explicit: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    match explicit {
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { anchor.join(path) };
            if !path.is_file() {
                let message = format!("config file not found: {}", path.display());
                return Err(DumpError::Config(Box::new(figment::Error::from(message))));
            }
            figment = figment.merge(Toml::file(path));
        }
        None => {
            let default_path = anchor.join(CONFIG_FILE_NAME);
            if default_path.is_file() {
                figment = figment.merge(Toml::file(default_path));
            }
        }
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|err| DumpError::Config(Box::new(err)))
}
