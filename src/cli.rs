//! CLI definition and parsing.
//! Defines Args/Command and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Global flags override values loaded from the XML config.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Browse and manage files on a configured storage disk.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Browse and manage files on a storage disk")]
pub struct Args {
    /// Explicit config file (overrides MEDIA_MANAGER_CONFIG and the default location).
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Disk to operate on (overrides <active_disk>).
    #[arg(long, global = true, value_name = "NAME")]
    pub disk: Option<String>,

    /// Application base URL (overrides <app_url>).
    #[arg(long, global = true, value_name = "URL")]
    pub app_url: Option<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List a folder: breadcrumbs, subfolders and files.
    Ls {
        #[arg(default_value = "/")]
        folder: String,
    },
    /// Print every folder as an indented tree.
    Tree,
    /// Create a folder.
    Mkdir { folder: String },
    /// Delete an empty folder.
    Rmdir { folder: String },
    /// Delete a file.
    Rm { path: String },
    /// Rename an entry inside a folder.
    Rename {
        folder: String,
        original_name: String,
        new_name: String,
    },
    /// Move a file to a new path.
    MvFile { from: String, to: String },
    /// Move a folder to a new path.
    MvFolder { from: String, to: String },
    /// Upload local files into a folder.
    Upload {
        /// Destination folder on the disk.
        #[arg(long, default_value = "/")]
        to: String,
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        files: Vec<PathBuf>,
    },
    /// Print the MIME type for a path's extension.
    Mime { path: String },
    /// Print the config file location and exit.
    PrintConfig,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(disk) = &self.disk {
            cfg.active_disk = disk.clone();
        }
        if let Some(url) = &self.app_url {
            cfg.app_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
