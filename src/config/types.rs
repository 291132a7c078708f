//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - DiskConfig describes one named storage disk.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;
use super::{APP_URL_DEFAULT, DISK_DEFAULT};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// One named storage disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskConfig {
    pub name: String,
    /// Directory holding the disk's files
    pub root: PathBuf,
    /// Public URL prefix the web server exposes `root` under
    pub url: Option<String>,
}

impl DiskConfig {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            url,
        }
    }
}

/// Runtime configuration used by the file manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the disk operations run against
    pub active_disk: String,
    /// Application base URL, stripped from web paths to form relative paths
    pub app_url: String,
    /// Configured disks
    pub disks: Vec<DiskConfig>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_disk: DISK_DEFAULT.to_string(),
            app_url: APP_URL_DEFAULT.to_string(),
            disks: vec![DiskConfig::new(
                DISK_DEFAULT,
                paths::default_disk_root(),
                Some(format!("{APP_URL_DEFAULT}/storage")),
            )],
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path(),
        }
    }
}

impl Config {
    /// Construct a Config with a single disk made active; other fields use defaults.
    pub fn new(disk: DiskConfig, app_url: impl Into<String>) -> Self {
        Self {
            active_disk: disk.name.clone(),
            app_url: app_url.into(),
            disks: vec![disk],
            ..Default::default()
        }
    }

    /// The configured disk named by `active_disk`, if any.
    pub fn active(&self) -> Option<&DiskConfig> {
        self.disks.iter().find(|d| d.name == self.active_disk)
    }
}
