//! Read-side operations: folder listings, entry details and the folder picker.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::mime::{FOLDER_MIME, file_mime_type};
use super::path::{ROOT_LABEL, basename, breadcrumbs, clean_folder, is_hidden};
use super::types::{DirectoryOption, FileEntry, FolderEntry, FolderInfo};
use super::FileManager;
use crate::errors::{DiskError, DiskResult};

/// Repeated slashes after anything but the `:` of a scheme separator.
static REPEATED_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^:]/)/+").expect("static regex"));

const INDENT: &str = "\u{a0}\u{a0}\u{a0}\u{a0}";

impl FileManager<'_> {
    /// Listing of one folder: breadcrumbs, visible subfolders and files.
    ///
    /// The deepest breadcrumb is popped off to become `folder_name`, so root
    /// reports "Root" with an empty trail. Listing failures read as empty.
    pub fn folder_info(&self, folder: &str) -> FolderInfo {
        let folder = clean_folder(folder);

        let mut crumbs = breadcrumbs(&folder);
        let folder_name = crumbs
            .pop()
            .map(|c| c.label)
            .unwrap_or_else(|| ROOT_LABEL.to_string());

        let sub_folders: Vec<FolderEntry> = self
            .visible(self.disk.directories(&folder), &folder, "directories")
            .iter()
            .map(|p| self.folder_details(p))
            .collect();
        let files: Vec<FileEntry> = self
            .visible(self.disk.files(&folder), &folder, "files")
            .iter()
            .map(|p| self.file_details(p))
            .collect();

        let items_count = sub_folders.len() + files.len();
        debug!(folder = %folder, items_count, "Listed folder");

        FolderInfo {
            folder,
            folder_name,
            bread_crumbs: crumbs,
            sub_folders,
            files,
            items_count,
        }
    }

    fn visible(&self, listed: DiskResult<Vec<String>>, folder: &str, what: &str) -> Vec<String> {
        match listed {
            Ok(paths) => paths.into_iter().filter(|p| !is_hidden(p)).collect(),
            Err(e) => {
                warn!(disk = %self.disk.name(), folder, what, code = e.code(), error = %e, "Listing failed; treating as empty");
                Vec::new()
            }
        }
    }

    /// Every directory on the disk as picker rows, indented four non-breaking
    /// spaces per level, after a leading `/` -> "Root" row.
    pub fn all_directories(&self) -> Vec<DirectoryOption> {
        let mut options = vec![DirectoryOption {
            path: "/".to_string(),
            label: ROOT_LABEL.to_string(),
        }];

        let dirs = self.disk.all_directories("/").unwrap_or_else(|e| {
            warn!(disk = %self.disk.name(), code = e.code(), error = %e, "Directory walk failed");
            Vec::new()
        });

        for dir in dirs.iter().filter(|d| !d.starts_with('.')) {
            let depth = dir.split('/').filter(|s| !s.is_empty()).count();
            options.push(DirectoryOption {
                path: format!("/{dir}"),
                label: format!("{}{}", INDENT.repeat(depth), basename(dir)),
            });
        }
        options
    }

    pub fn folder_details(&self, path: &str) -> FolderEntry {
        let full_path = clean_folder(path);
        FolderEntry {
            name: basename(&full_path).to_string(),
            mime_type: FOLDER_MIME.to_string(),
            modified: self.file_modified(&full_path),
            full_path,
        }
    }

    pub fn file_details(&self, path: &str) -> FileEntry {
        let full_path = clean_folder(path);
        let size = self.disk.size(&full_path).unwrap_or_else(|e| {
            warn!(path = %full_path, code = e.code(), error = %e, "Size lookup failed; reporting 0");
            0
        });
        FileEntry {
            name: basename(&full_path).to_string(),
            web_path: self.file_web_path(&full_path),
            mime_type: file_mime_type(&full_path),
            size,
            modified: self.file_modified(&full_path),
            relative_path: self.file_relative_path(&full_path),
            full_path,
        }
    }

    /// Public URL of `path` with repeated slashes collapsed (`://` kept).
    pub fn file_web_path(&self, path: &str) -> String {
        let url = self.disk.url(&clean_folder(path));
        REPEATED_SLASHES.replace_all(&url, "$1").into_owned()
    }

    /// Web path without the application base URL, spaces encoded as `%20`.
    pub fn file_relative_path(&self, path: &str) -> String {
        let web = self.file_web_path(path);
        let relative = web.strip_prefix(self.app_url.as_str()).unwrap_or(&web);
        relative.replace(' ', "%20")
    }

    /// Last modification time reported by the disk.
    pub fn try_file_modified(&self, path: &str) -> DiskResult<DateTime<Utc>> {
        let path = clean_folder(path);
        let secs = self.disk.last_modified(&path)?;
        DateTime::from_timestamp(secs, 0).ok_or(DiskError::InvalidTimestamp(secs))
    }

    /// Like `try_file_modified`, but any failure degrades to the current time.
    pub fn file_modified(&self, path: &str) -> DateTime<Utc> {
        match self.try_file_modified(path) {
            Ok(ts) => ts,
            Err(e) => {
                debug!(path, code = e.code(), error = %e, "Modified time unavailable; using now");
                Utc::now()
            }
        }
    }
}
