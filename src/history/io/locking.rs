use crate::error::{LinksError, Result};
use crate::project_identity;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exclusive run lock; released and removed on drop.
pub struct HistoryLock {
    _file: std::fs::File,
    path: PathBuf,
}

impl HistoryLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for HistoryLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub fn acquire_lock(lock_path: &Path) -> Result<HistoryLock> {
    let mut lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)
        .map_err(|e| LinksError::IoError {
            path: lock_path.to_path_buf(),
            source: e,
        })?;

    if lock_file.try_lock_exclusive().is_err() {
        return Err(LinksError::LockError(format!(
            "Another {} process is currently running.\n\
             Lock file: {}\n\
             Wait for it to complete, or delete the lock file if you're sure no other process is running.",
            project_identity::BINARY_NAME,
            lock_path.display()
        )));
    }

    lock_file.set_len(0)?;
    let _ = writeln!(lock_file, "{}", std::process::id());

    Ok(HistoryLock {
        _file: lock_file,
        path: lock_path.to_path_buf(),
    })
}
