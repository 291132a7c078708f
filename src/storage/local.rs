//! Local filesystem disk.
//! Maps cleaned absolute disk paths onto a root directory and builds public
//! URLs from a configured prefix (the web server's view of that root).
//!
//! Notes:
//! - Missing directories list as empty, matching what the manager expects.
//! - Uploads are staged in a hidden sibling and renamed into place.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Component, Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::Disk;
use super::helpers::{io_error_with_help, tmp_upload_sibling};
use crate::config::types::DiskConfig;
use crate::errors::{DiskError, DiskResult};

#[derive(Debug, Clone)]
pub struct LocalDisk {
    name: String,
    root: PathBuf,
    url: Option<String>,
}

impl LocalDisk {
    /// Construct a disk over `root`. The root is used as given.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            url: url.map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    /// Build from configuration, creating the root when missing and resolving
    /// it to a canonical path.
    pub fn from_config(cfg: &DiskConfig) -> Result<Self> {
        if !cfg.root.exists() {
            fs::create_dir_all(&cfg.root)
                .with_context(|| format!("create root of disk '{}': {}", cfg.name, cfg.root.display()))?;
            info!(disk = %cfg.name, root = %cfg.root.display(), "Created disk root");
        }
        let root = dunce::canonicalize(&cfg.root)
            .with_context(|| format!("resolve root of disk '{}': {}", cfg.name, cfg.root.display()))?;
        Ok(Self::new(cfg.name.clone(), root, cfg.url.clone()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Real location of a disk path. Only normal components survive, so the
    /// result can never climb above the root.
    fn resolve(&self, path: &str) -> PathBuf {
        let mut real = self.root.clone();
        for comp in Path::new(path.trim_start_matches('/')).components() {
            if let Component::Normal(part) = comp {
                real.push(part);
            }
        }
        real
    }

    /// Disk-relative form of a real path (`a/b.txt`).
    fn relative(&self, real: &Path) -> Option<String> {
        let rel = real.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(p) => Some(p.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }

    fn list(&self, path: &str, want_dirs: bool) -> DiskResult<Vec<String>> {
        let real = self.resolve(path);
        let entries = match fs::read_dir(&real) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(disk = %self.name, path, "Listing a missing directory");
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_error_with_help("list", path)(e)),
        };

        let mut out = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error_with_help("list", path))?;
            let ftype = entry.file_type().map_err(io_error_with_help("list", path))?;
            // Symlinks list under their target's kind; anything that is not a
            // directory (broken links, FIFOs, sockets) lists as a file.
            let is_dir = if ftype.is_symlink() {
                fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
            } else {
                ftype.is_dir()
            };
            if is_dir == want_dirs && let Some(rel) = self.relative(&entry.path()) {
                out.push(rel);
            }
        }
        out.sort();
        Ok(out)
    }
}

impl Disk for LocalDisk {
    fn name(&self) -> &str {
        &self.name
    }

    fn directories(&self, path: &str) -> DiskResult<Vec<String>> {
        self.list(path, true)
    }

    fn files(&self, path: &str) -> DiskResult<Vec<String>> {
        self.list(path, false)
    }

    fn all_directories(&self, path: &str) -> DiskResult<Vec<String>> {
        let real = self.resolve(path);
        if !real.is_dir() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for entry in WalkDir::new(&real).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let err = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                io_error_with_help("walk", path)(err)
            })?;
            if entry.file_type().is_dir()
                && let Some(rel) = self.relative(entry.path())
            {
                out.push(rel);
            }
        }
        Ok(out)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn make_directory(&self, path: &str) -> DiskResult<()> {
        fs::create_dir_all(self.resolve(path)).map_err(io_error_with_help("create directory", path))
    }

    fn delete(&self, path: &str) -> DiskResult<()> {
        fs::remove_file(self.resolve(path)).map_err(io_error_with_help("delete", path))
    }

    fn delete_directory(&self, path: &str) -> DiskResult<()> {
        let real = self.resolve(path);
        if real == self.root {
            return Err(DiskError::Io {
                op: "delete directory",
                path: path.to_string(),
                message: "refusing to delete the disk root".into(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        fs::remove_dir_all(real).map_err(io_error_with_help("delete directory", path))
    }

    fn rename(&self, from: &str, to: &str) -> DiskResult<()> {
        let src = self.resolve(from);
        let dest = self.resolve(to);
        if !src.exists() {
            return Err(DiskError::NotFound(from.to_string()));
        }
        if dest.exists() {
            return Err(DiskError::AlreadyExists(to.to_string()));
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(io_error_with_help("create directory", to))?;
        }
        fs::rename(&src, &dest).map_err(io_error_with_help("rename", from))
    }

    fn size(&self, path: &str) -> DiskResult<u64> {
        fs::metadata(self.resolve(path))
            .map(|m| m.len())
            .map_err(io_error_with_help("stat", path))
    }

    fn last_modified(&self, path: &str) -> DiskResult<i64> {
        let modified = fs::metadata(self.resolve(path))
            .and_then(|m| m.modified())
            .map_err(io_error_with_help("read modification time", path))?;
        let secs = match modified.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(before) => -(before.duration().as_secs() as i64),
        };
        Ok(secs)
    }

    fn url(&self, path: &str) -> String {
        let rel = path.trim_start_matches('/');
        match &self.url {
            Some(base) => format!("{base}/{rel}"),
            None => format!("/{rel}"),
        }
    }

    fn put_stream(&self, path: &str, reader: &mut dyn Read) -> DiskResult<()> {
        let dest = self.resolve(path);
        if dest.exists() {
            return Err(DiskError::AlreadyExists(path.to_string()));
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(io_error_with_help("create directory", path))?;
        }

        let tmp = tmp_upload_sibling(&dest);
        let staged = (|| -> io::Result<()> {
            let mut f = File::options().write(true).create_new(true).open(&tmp)?;
            io::copy(reader, &mut f)?;
            f.flush()?;
            f.sync_all()?;
            fs::rename(&tmp, &dest)
        })();

        if let Err(e) = staged {
            let _ = fs::remove_file(&tmp);
            return Err(io_error_with_help("store upload", path)(e));
        }
        debug!(disk = %self.name, path, "Stored upload");
        Ok(())
    }
}
