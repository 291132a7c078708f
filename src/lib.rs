//! Core library for `media_manager`.
//!
//! A browser-style file manager over a storage disk: folder listings with
//! breadcrumbs, an indented folder picker, create/delete/rename/move, and upload
//! ingestion. The `FileManager` service talks to any `Disk`; `LocalDisk` serves a
//! local directory. Configuration is read from XML and drives the CLI.

pub mod cli;
pub mod config;
pub mod errors;
pub mod manager;
pub mod output;
pub mod platform;
pub mod storage;

pub use config::{
    Config, DiskConfig, LoadResult, LogLevel, default_config_path, default_log_path,
    load_config_from_xml_path, load_or_init, path_has_symlink_ancestor,
};
pub use errors::{DiskError, DiskResult};
pub use manager::{
    BytesUpload, DirectoryOption, ErrorLog, FileEntry, FileManager, FolderEntry, FolderInfo,
    Outcome, PathUpload, UploadReport, UploadedFile, breadcrumbs, clean_folder, file_mime_type,
};
pub use storage::{Disk, LocalDisk};

/// Common imports for embedding the manager.
pub mod prelude {
    pub use crate::config::{Config, DiskConfig, LogLevel, load_or_init};
    pub use crate::errors::{DiskError, DiskResult};
    pub use crate::manager::{
        BytesUpload, ErrorLog, FileManager, FolderInfo, Outcome, PathUpload, UploadReport,
        UploadedFile,
    };
    pub use crate::storage::{Disk, LocalDisk};
}
