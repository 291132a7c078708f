//! Upload ingestion.
//!
//! The existence check and the store are separate disk calls, so two callers
//! uploading the same name at once can both pass the check.

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;
use tracing::{info, warn};

use super::outcome::UploadReport;
use super::path::{clean_folder, join_path};
use super::FileManager;

/// An uploaded file: the name the client sent plus a way to read its bytes.
pub trait UploadedFile {
    fn client_original_name(&self) -> &str;

    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// Upload already spooled to a local file (e.g. a temp file from a web server).
#[derive(Debug, Clone)]
pub struct PathUpload {
    path: PathBuf,
    client_name: String,
}

impl PathUpload {
    pub fn new(path: impl Into<PathBuf>, client_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            client_name: client_name.into(),
        }
    }

    /// Use the file's own name as the client name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let client_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, client_name }
    }
}

impl UploadedFile for PathUpload {
    fn client_original_name(&self) -> &str {
        &self.client_name
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// Upload held in memory.
#[derive(Debug, Clone)]
pub struct BytesUpload {
    client_name: String,
    bytes: Vec<u8>,
}

impl BytesUpload {
    pub fn new(client_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            client_name: client_name.into(),
            bytes: bytes.into(),
        }
    }
}

impl UploadedFile for BytesUpload {
    fn client_original_name(&self) -> &str {
        &self.client_name
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.bytes.as_slice())))
    }
}

/// Final component of a client-supplied name with `..` removed.
fn storable_name(client_name: &str) -> Option<String> {
    let last = client_name.rsplit(['/', '\\']).next().unwrap_or("");
    let name = last.replace("..", "");
    if name.is_empty() { None } else { Some(name) }
}

impl FileManager<'_> {
    /// Store each upload under its client name inside `folder`, in order.
    /// Name collisions and store failures are reported and skipped.
    pub fn save_uploaded_files<U: UploadedFile>(&self, files: &[U], folder: &str) -> UploadReport {
        let folder = clean_folder(folder);
        let mut report = UploadReport::default();

        for file in files {
            let client_name = file.client_original_name();
            let Some(name) = storable_name(client_name) else {
                warn!(client_name, "Upload rejected: unusable file name");
                report.messages.push(format!("Error uploading \"{client_name}\"."));
                continue;
            };
            let dest = join_path(&folder, &name);

            if self.disk.exists(&dest) {
                warn!(dest = %dest, "Upload rejected: file exists");
                report.messages.push(format!("File \"{dest}\" already exists."));
                continue;
            }

            let stored = file
                .open()
                .map_err(|e| e.to_string())
                .and_then(|mut reader| {
                    self.disk
                        .put_stream(&dest, &mut *reader)
                        .map_err(|e| e.to_string())
                });
            match stored {
                Ok(()) => {
                    info!(disk = %self.disk.name(), dest = %dest, "Stored upload");
                    report.stored += 1;
                }
                Err(error) => {
                    warn!(dest = %dest, %error, "Upload failed");
                    report.messages.push(format!("Error uploading \"{name}\"."));
                }
            }
        }
        report
    }
}
