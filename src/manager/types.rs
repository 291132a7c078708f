//! Result structures handed to callers and templates.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::path::Breadcrumbs;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderInfo {
    pub folder: String,
    pub folder_name: String,
    pub bread_crumbs: Breadcrumbs,
    pub sub_folders: Vec<FolderEntry>,
    pub files: Vec<FileEntry>,
    pub items_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderEntry {
    pub name: String,
    pub mime_type: String,
    pub full_path: String,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    pub full_path: String,
    pub web_path: String,
    pub mime_type: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub relative_path: String,
}

/// One row of the indented folder picker built by `all_directories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryOption {
    pub path: String,
    pub label: String,
}
