//! The file manager service.
//!
//! `FileManager` borrows a `Disk` and turns caller requests into cleaned disk
//! calls: listings with breadcrumbs, an indented folder picker, directory and
//! file mutations, and upload ingestion. It keeps no state between calls.

mod listing;
mod mime;
mod ops;
mod outcome;
pub mod path;
mod types;
mod upload;

pub use mime::{FOLDER_MIME, UNKNOWN_MIME, file_mime_type};
pub use outcome::{ErrorLog, Outcome, UploadReport};
pub use path::{Breadcrumb, Breadcrumbs, breadcrumbs, clean_folder};
pub use types::{DirectoryOption, FileEntry, FolderEntry, FolderInfo};
pub use upload::{BytesUpload, PathUpload, UploadedFile};

use crate::storage::Disk;

pub struct FileManager<'a> {
    disk: &'a dyn Disk,
    app_url: String,
}

impl<'a> FileManager<'a> {
    /// `app_url` is the application base URL stripped from web paths when
    /// building relative paths.
    pub fn new(disk: &'a dyn Disk, app_url: impl Into<String>) -> Self {
        Self {
            disk,
            app_url: app_url.into(),
        }
    }

    pub fn disk_name(&self) -> &str {
        self.disk.name()
    }

    pub fn app_url(&self) -> &str {
        &self.app_url
    }
}
