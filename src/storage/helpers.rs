//! I/O helper utilities.
//!
//! Turns io::Error into `DiskError` with the failing operation, the disk-relative
//! path and a platform-aware hint, usable with map_err:
//!
//!   fs::create_dir_all(&real).map_err(io_error_with_help("create directory", path))?;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::DiskError;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Append a hint for well-known OS errors; fall back to ErrorKind hints.
fn hint_for(e: &io::Error) -> String {
    let mut msg = e.to_string();

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership of the disk root");
                }
                libc::EXDEV => msg.push_str("; cross-filesystem rename is not possible"),
                libc::ENOTEMPTY => msg.push_str("; directory is not empty"),
                libc::EEXIST => msg.push_str("; target already exists"),
                libc::ENOSPC => msg.push_str("; insufficient space on device"),
                libc::EROFS => msg.push_str("; read-only filesystem"),
                libc::ENAMETOOLONG => msg.push_str("; name too long"),
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied"),
                17 => msg.push_str("; not same device"),
                32 => msg.push_str("; file is in use"),
                80 => msg.push_str("; target already exists"),
                112 => msg.push_str("; insufficient disk space"),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {code}]"));
    } else if e.kind() == io::ErrorKind::PermissionDenied {
        msg.push_str("; permission denied");
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)`.
/// `NotFound` becomes `DiskError::NotFound`; everything else keeps the io source.
pub(crate) fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a str,
) -> impl FnOnce(io::Error) -> DiskError + 'a {
    move |e: io::Error| {
        if e.kind() == io::ErrorKind::NotFound {
            return DiskError::NotFound(path.to_string());
        }
        DiskError::Io {
            op,
            path: path.to_string(),
            message: hint_for(&e),
            source: e,
        }
    }
}

/// Hidden sibling used to stage uploads before the final rename.
/// Pattern: .media_manager.upload.<pid>.<nanos>.<seq>
pub(crate) fn tmp_upload_sibling(target: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!(".media_manager.upload.{pid}.{nanos}.{seq}");
    target.parent().unwrap_or_else(|| Path::new(".")).join(name)
}
