//! Utility functions

pub mod binary;
pub mod encoding;
pub mod paths;

pub use binary::{extension_of, is_binary_extension};
pub use encoding::read_text_file;
pub use paths::{join_relative, repo_display_name};
