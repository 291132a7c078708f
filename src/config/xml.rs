//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a secure template if missing (unless MEDIA_MANAGER_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the config file; validation happens elsewhere.
//! - Unknown XML fields are rejected so misconfigurations surface early.
//! - `<disk>` elements must be written next to each other.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{default_config_path, default_disk_root, default_log_path, path_has_symlink_ancestor};
use super::{APP_URL_DEFAULT, CONFIG_ENV, DISK_DEFAULT};

use crate::config::types::{Config, DiskConfig, LogLevel};
use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    active_disk: Option<String>,
    app_url: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(rename = "disk", default)]
    disks: Vec<XmlDisk>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlDisk {
    #[serde(rename = "@name")]
    name: String,
    root: String,
    url: Option<String>,
}

/// Outcome of looking for a config file at startup.
#[derive(Debug)]
pub enum LoadResult {
    /// A config file was found and parsed
    Loaded(Config),
    /// No config existed at the default location; a template was written there
    CreatedTemplate(PathBuf),
}

fn trimmed(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    let disks: Vec<DiskConfig> = parsed
        .disks
        .into_iter()
        .map(|d| {
            DiskConfig::new(
                d.name.trim(),
                PathBuf::from(d.root.trim()),
                trimmed(d.url),
            )
        })
        .collect();
    if !disks.is_empty() {
        cfg.active_disk = disks[0].name.clone();
        cfg.disks = disks;
    }

    if let Some(name) = trimmed(parsed.active_disk) {
        cfg.active_disk = name;
    }
    if let Some(url) = trimmed(parsed.app_url) {
        cfg.app_url = url.trim_end_matches('/').to_string();
    }
    if let Some(level) = trimmed(parsed.log_level).and_then(|s| s.parse::<LogLevel>().ok()) {
        cfg.log_level = level;
    }
    if let Some(file) = trimmed(parsed.log_file) {
        cfg.log_file = Some(PathBuf::from(file));
    }

    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Resolve the config file and load it, writing a template on first run.
///
/// - `explicit` (the `--config` flag) wins over `MEDIA_MANAGER_CONFIG`, which
///   wins over the OS default location.
/// - A missing explicit or env-provided file is an error; a missing default
///   file gets a template.
pub fn load_or_init(explicit: Option<&Path>) -> Result<LoadResult> {
    if let Some(p) = explicit {
        return load_config_from_xml_path(p).map(LoadResult::Loaded);
    }

    let env_set = env::var_os(CONFIG_ENV).is_some();
    let cfg_path = default_config_path().context("resolve default config path")?;

    if !cfg_path.exists() {
        if env_set {
            bail!(
                "{CONFIG_ENV} points at a missing file: {}",
                cfg_path.display()
            );
        }
        create_template_config(&cfg_path)?;
        return Ok(LoadResult::CreatedTemplate(cfg_path));
    }

    load_config_from_xml_path(&cfg_path).map(LoadResult::Loaded)
}

/// Create default template config file and parent directory (best-effort permissions).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        let _ = set_dir_mode_0700(parent);
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/media_manager.log".into());

    let content = format!(
        "<!--\n  media_manager configuration (XML)\n\n    active_disk  -> name of the disk commands operate on\n    app_url      -> application base URL; stripped from web paths to build relative paths\n    log_level    -> quiet | normal | info | debug\n    log_file     -> path to log file (optional; stdout/stderr still used)\n    disk         -> one element per disk: name attribute, <root> directory, optional public <url>\n\n  Notes:\n    - CLI flags override XML values.\n    - Keep all <disk> elements next to each other.\n-->\n<config>\n  <active_disk>{disk}</active_disk>\n  <app_url>{app}</app_url>\n  <log_level>normal</log_level>\n  <log_file>{log}</log_file>\n  <disk name=\"{disk}\">\n    <root>{root}</root>\n    <url>{app}/storage</url>\n  </disk>\n</config>\n",
        disk = DISK_DEFAULT,
        app = APP_URL_DEFAULT,
        log = suggested_log,
        root = default_disk_root().display(),
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}
