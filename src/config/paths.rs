//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log/disk paths and detects symlinked ancestors for safety.

use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

const APP_DIR: &str = "media_manager";

/// Config path: `$MEDIA_MANAGER_CONFIG` when set, else the OS config dir.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    if let Some(mut base) = config_dir() {
        base.push(APP_DIR);
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join(APP_DIR)
                .join("config.xml")
        })
    }
}

/// Log path: next to an env-provided config, else the OS data dir.
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let cfg = PathBuf::from(p);
        let parent = cfg.parent().map(Path::to_path_buf).unwrap_or_default();
        return Some(parent.join("media_manager.log"));
    }
    if let Some(mut base) = data_dir() {
        base.push(APP_DIR);
        base.push("media_manager.log");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join(APP_DIR)
                .join("media_manager.log")
        })
    }
}

/// Root for the default "public" disk under the OS data dir.
pub fn default_disk_root() -> PathBuf {
    data_dir()
        .map(|d| d.join(APP_DIR).join("public"))
        .unwrap_or_else(|| PathBuf::from("storage").join("public"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
