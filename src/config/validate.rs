//! Config validation logic.
//! Verifies the active disk is defined, disk names are unique, disk roots are
//! usable directories and the application URL is present.

use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use super::types::Config;

impl Config {
    /// Validate disks, the active disk selection and the application URL.
    pub fn validate(&self) -> Result<()> {
        if self.app_url.trim().is_empty() {
            bail!("app_url cannot be empty");
        }

        let mut seen = HashSet::new();
        for disk in &self.disks {
            if disk.name.trim().is_empty() {
                bail!("disk with root '{}' has an empty name", disk.root.display());
            }
            if !seen.insert(disk.name.as_str()) {
                bail!("disk '{}' is defined more than once", disk.name);
            }
        }

        let Some(active) = self.active() else {
            error!(disk = %self.active_disk, "Active disk is not defined");
            bail!(
                "active disk '{}' is not defined; known disks: {}",
                self.active_disk,
                self.disks
                    .iter()
                    .map(|d| d.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        };

        ensure_dir_if_exists(&active.root, &active.name)?;

        info!(
            "Config validated: disk='{}' root='{}' app_url='{}' log_file='{}'",
            active.name,
            active.root.display(),
            self.app_url,
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into())
        );
        Ok(())
    }
}

/// An existing root must be a readable directory; a missing one is created later.
fn ensure_dir_if_exists(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        debug!("root of disk '{name}' does not exist yet: {}", path.display());
        return Ok(());
    }
    if !path.is_dir() {
        error!("root of disk '{name}' is not a directory: {}", path.display());
        bail!("root of disk '{name}' is not a directory: {}", path.display());
    }
    fs::read_dir(path).with_context(|| {
        format!("Cannot read root of disk '{name}' '{}'; check permissions", path.display())
    })?;
    Ok(())
}
