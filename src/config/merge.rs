//! CLI argument merging with config

use crate::domain::{Config, LogLevel};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub path: Option<PathBuf>,
    pub ignore_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub pause_on_exit: Option<bool>,
    pub show_progress: Option<bool>,
    pub log_level: Option<LogLevel>,
    pub color: Option<bool>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(path) = cli.path {
        base_config.path = Some(path);
    }
    if let Some(ignore_file) = cli.ignore_file {
        base_config.ignore_file = ignore_file;
    }
    if let Some(output_dir) = cli.output_dir {
        base_config.output_dir = output_dir;
    }

    if let Some(pause_on_exit) = cli.pause_on_exit {
        base_config.pause_on_exit = pause_on_exit;
    }
    if let Some(show_progress) = cli.show_progress {
        base_config.show_progress = show_progress;
    }

    if let Some(level) = cli.log_level {
        base_config.log.level = level;
    }
    if let Some(color) = cli.color {
        base_config.log.color = color;
    }

    base_config
}
