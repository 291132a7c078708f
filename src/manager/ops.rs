//! Mutating operations.
//!
//! Each one cleans its paths, checks for a name collision or invalid target,
//! and only then calls the disk. Conflicts come back as a rejected `Outcome`
//! with a message; disk failures come back as a bare `false`.

use tracing::{error, info, warn};

use super::outcome::Outcome;
use super::path::{clean_folder, is_within, join_path};
use super::FileManager;
use crate::errors::DiskResult;

impl FileManager<'_> {
    pub fn create_directory(&self, folder: &str) -> Outcome {
        let folder = clean_folder(folder);
        if self.disk.exists(&folder) {
            warn!(folder = %folder, "Create rejected: already exists");
            return Outcome::rejected(format!("Folder \"{folder}\" already exists."));
        }
        self.finish("create directory", &folder, self.disk.make_directory(&folder))
    }

    /// Delete an empty folder. Hidden entries count as content, and a folder
    /// whose contents cannot be listed is never deleted.
    pub fn delete_directory(&self, folder: &str) -> Outcome {
        let folder = clean_folder(folder);
        let listed = self
            .disk
            .directories(&folder)
            .and_then(|dirs| Ok(dirs.is_empty() && self.disk.files(&folder)?.is_empty()));
        let is_empty = match listed {
            Ok(empty) => empty,
            Err(e) => {
                error!(disk = %self.disk.name(), folder = %folder, code = e.code(), error = %e, "Delete refused: cannot check folder contents");
                return Outcome::failed();
            }
        };
        if !is_empty {
            warn!(folder = %folder, "Delete rejected: folder not empty");
            return Outcome::rejected(format!(
                "Folder \"{folder}\" must be empty before it can be deleted."
            ));
        }
        self.finish("delete directory", &folder, self.disk.delete_directory(&folder))
    }

    pub fn delete_file(&self, path: &str) -> Outcome {
        let path = clean_folder(path);
        if !self.disk.exists(&path) {
            warn!(path = %path, "Delete rejected: file missing");
            return Outcome::rejected(format!("File \"{path}\" does not exist."));
        }
        self.finish("delete file", &path, self.disk.delete(&path))
    }

    /// Rename `original_name` to `new_name` inside `folder`.
    pub fn rename(&self, folder: &str, original_name: &str, new_name: &str) -> Outcome {
        let folder = clean_folder(folder);
        let from = join_path(&folder, original_name);
        let to = join_path(&folder, new_name);
        if self.disk.exists(&to) {
            warn!(from = %from, to = %to, "Rename rejected: target exists");
            return Outcome::rejected(format!("\"{to}\" already exists."));
        }
        self.finish("rename", &from, self.disk.rename(&from, &to))
    }

    pub fn move_file(&self, current_file: &str, new_file: &str) -> Outcome {
        let from = clean_folder(current_file);
        let to = clean_folder(new_file);
        if self.disk.exists(&to) {
            warn!(from = %from, to = %to, "Move rejected: target exists");
            return Outcome::rejected(format!("File \"{to}\" already exists."));
        }
        self.finish("move file", &from, self.disk.rename(&from, &to))
    }

    /// Move a folder somewhere that is neither itself nor one of its descendants.
    pub fn move_folder(&self, current_folder: &str, new_folder: &str) -> Outcome {
        let from = clean_folder(current_folder);
        let to = clean_folder(new_folder);
        if from == to {
            warn!(folder = %from, "Move rejected: same folder");
            return Outcome::rejected(format!(
                "Please select another folder to move \"{from}\" to."
            ));
        }
        if is_within(&to, &from) {
            warn!(from = %from, to = %to, "Move rejected: target inside source");
            return Outcome::rejected(format!(
                "Folder \"{from}\" cannot be moved inside itself."
            ));
        }
        if self.disk.exists(&to) {
            warn!(from = %from, to = %to, "Move rejected: target exists");
            return Outcome::rejected(format!("Folder \"{to}\" already exists."));
        }
        self.finish("move folder", &from, self.disk.rename(&from, &to))
    }

    fn finish(&self, op: &'static str, path: &str, result: DiskResult<()>) -> Outcome {
        match result {
            Ok(()) => {
                info!(disk = %self.disk.name(), op, path, "Completed");
                Outcome::ok()
            }
            Err(e) => {
                error!(disk = %self.disk.name(), op, path, code = e.code(), error = %e, "Disk operation failed");
                Outcome::failed()
            }
        }
    }
}
