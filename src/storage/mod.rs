//! Storage providers.
//!
//! `Disk` is the seam between the file manager and whatever actually holds the
//! bytes. Paths handed to a disk are absolute and already cleaned (`/a/b.txt`);
//! listings come back disk-relative without a leading separator (`a/b.txt`).

mod helpers;
mod local;

pub use local::LocalDisk;

use std::io::Read;

use crate::errors::DiskResult;

pub trait Disk {
    /// Name of the disk as configured (e.g. "public").
    fn name(&self) -> &str;

    /// Immediate subdirectories of `path`.
    fn directories(&self, path: &str) -> DiskResult<Vec<String>>;

    /// Immediate files of `path`.
    fn files(&self, path: &str) -> DiskResult<Vec<String>>;

    /// Every directory below `path`, recursively.
    fn all_directories(&self, path: &str) -> DiskResult<Vec<String>>;

    fn exists(&self, path: &str) -> bool;

    fn make_directory(&self, path: &str) -> DiskResult<()>;

    fn delete(&self, path: &str) -> DiskResult<()>;

    fn delete_directory(&self, path: &str) -> DiskResult<()>;

    /// Rename or move `from` to `to`.
    fn rename(&self, from: &str, to: &str) -> DiskResult<()>;

    fn size(&self, path: &str) -> DiskResult<u64>;

    /// Last modification time as Unix seconds.
    fn last_modified(&self, path: &str) -> DiskResult<i64>;

    /// Public URL for `path`.
    fn url(&self, path: &str) -> String;

    /// Store the bytes of `reader` at `path`.
    fn put_stream(&self, path: &str, reader: &mut dyn Read) -> DiskResult<()>;
}
