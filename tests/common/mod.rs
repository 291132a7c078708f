//! In-memory disk shared by the manager integration tests.
//! Records every mutating call so tests can assert the provider was not touched.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use media_manager::{Disk, DiskError, DiskResult};

pub const MTIME: i64 = 1_700_000_000;

#[derive(Default)]
pub struct MemoryDisk {
    dirs: RefCell<BTreeSet<String>>,
    files: RefCell<BTreeMap<String, Vec<u8>>>,
    calls: RefCell<Vec<String>>,
    broken_stat: bool,
    broken_listing: bool,
    read_only: bool,
}

fn rel(path: &str) -> String {
    path.trim_matches('/').to_string()
}

fn parent(rel: &str) -> &str {
    rel.rsplit_once('/').map(|(p, _)| p).unwrap_or("")
}

impl MemoryDisk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp and size lookups fail.
    pub fn broken_stat(mut self) -> Self {
        self.broken_stat = true;
        self
    }

    /// Directory and file listings fail.
    pub fn broken_listing(mut self) -> Self {
        self.broken_listing = true;
        self
    }

    /// Every mutating call is recorded, then fails.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        let mut cur = String::new();
        for seg in rel(path).split('/').filter(|s| !s.is_empty()) {
            if !cur.is_empty() {
                cur.push('/');
            }
            cur.push_str(seg);
            self.dirs.borrow_mut().insert(cur.clone());
        }
        self
    }

    pub fn with_file(self, path: &str, bytes: &[u8]) -> Self {
        let r = rel(path);
        let this = self.with_dir(&format!("/{}", parent(&r)));
        this.files.borrow_mut().insert(r, bytes.to_vec());
        this
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.files.borrow().contains_key(&rel(path))
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.dirs.borrow().contains(&rel(path))
    }

    pub fn file_bytes(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(&rel(path)).cloned()
    }

    fn listing(&self) -> DiskResult<()> {
        if self.broken_listing {
            return Err(DiskError::Unsupported {
                disk: "memory".into(),
                op: "list",
            });
        }
        Ok(())
    }

    fn record(&self, call: String) -> DiskResult<()> {
        self.calls.borrow_mut().push(call);
        if self.read_only {
            return Err(DiskError::Unsupported {
                disk: "memory".into(),
                op: "write",
            });
        }
        Ok(())
    }
}

impl Disk for MemoryDisk {
    fn name(&self) -> &str {
        "memory"
    }

    fn directories(&self, path: &str) -> DiskResult<Vec<String>> {
        self.listing()?;
        let r = rel(path);
        Ok(self
            .dirs
            .borrow()
            .iter()
            .filter(|d| parent(d) == r)
            .cloned()
            .collect())
    }

    fn files(&self, path: &str) -> DiskResult<Vec<String>> {
        self.listing()?;
        let r = rel(path);
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|f| parent(f) == r)
            .cloned()
            .collect())
    }

    fn all_directories(&self, _path: &str) -> DiskResult<Vec<String>> {
        Ok(self.dirs.borrow().iter().cloned().collect())
    }

    fn exists(&self, path: &str) -> bool {
        let r = rel(path);
        r.is_empty() || self.dirs.borrow().contains(&r) || self.files.borrow().contains_key(&r)
    }

    fn make_directory(&self, path: &str) -> DiskResult<()> {
        self.record(format!("make_directory {path}"))?;
        let r = rel(path);
        let mut cur = String::new();
        for seg in r.split('/') {
            if !cur.is_empty() {
                cur.push('/');
            }
            cur.push_str(seg);
            self.dirs.borrow_mut().insert(cur.clone());
        }
        Ok(())
    }

    fn delete(&self, path: &str) -> DiskResult<()> {
        self.record(format!("delete {path}"))?;
        self.files
            .borrow_mut()
            .remove(&rel(path))
            .map(|_| ())
            .ok_or_else(|| DiskError::NotFound(path.to_string()))
    }

    fn delete_directory(&self, path: &str) -> DiskResult<()> {
        self.record(format!("delete_directory {path}"))?;
        let r = rel(path);
        let prefix = format!("{r}/");
        self.dirs
            .borrow_mut()
            .retain(|d| d != &r && !d.starts_with(&prefix));
        self.files.borrow_mut().retain(|f, _| !f.starts_with(&prefix));
        Ok(())
    }

    fn rename(&self, from: &str, to: &str) -> DiskResult<()> {
        self.record(format!("rename {from} -> {to}"))?;
        let (src, dest) = (rel(from), rel(to));
        let prefix = format!("{src}/");
        let moved = |p: &String| -> Option<String> {
            if *p == src {
                Some(dest.clone())
            } else {
                p.strip_prefix(&prefix).map(|rest| format!("{dest}/{rest}"))
            }
        };

        let mut files = self.files.borrow_mut();
        let renamed: Vec<(String, String)> = files
            .keys()
            .filter_map(|k| moved(k).map(|n| (k.clone(), n)))
            .collect();
        for (old, new) in renamed {
            if let Some(bytes) = files.remove(&old) {
                files.insert(new, bytes);
            }
        }

        let mut dirs = self.dirs.borrow_mut();
        let renamed: Vec<(String, String)> = dirs
            .iter()
            .filter_map(|d| moved(d).map(|n| (d.clone(), n)))
            .collect();
        for (old, new) in renamed {
            dirs.remove(&old);
            dirs.insert(new);
        }
        Ok(())
    }

    fn size(&self, path: &str) -> DiskResult<u64> {
        if self.broken_stat {
            return Err(DiskError::NotFound(path.to_string()));
        }
        self.files
            .borrow()
            .get(&rel(path))
            .map(|b| b.len() as u64)
            .ok_or_else(|| DiskError::NotFound(path.to_string()))
    }

    fn last_modified(&self, path: &str) -> DiskResult<i64> {
        if self.broken_stat {
            return Err(DiskError::NotFound(path.to_string()));
        }
        Ok(MTIME)
    }

    fn url(&self, path: &str) -> String {
        format!("http://localhost/storage/{}", path.trim_start_matches('/'))
    }

    fn put_stream(&self, path: &str, reader: &mut dyn Read) -> DiskResult<()> {
        self.record(format!("put_stream {path}"))?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| DiskError::Io {
            op: "read upload",
            path: path.to_string(),
            message: e.to_string(),
            source: e,
        })?;
        self.files.borrow_mut().insert(rel(path), bytes);
        Ok(())
    }
}
