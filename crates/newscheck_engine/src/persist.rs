use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state directory {path:?} unusable: {reason}")]
    StateDir { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn state_dir_error(dir: &Path, reason: impl ToString) -> PersistError {
    PersistError::StateDir {
        path: dir.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Ensure the state directory exists and accepts new files.
pub fn ensure_state_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| state_dir_error(dir, e))?;
        if !meta.is_dir() {
            return Err(state_dir_error(dir, "path is not a directory"));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| state_dir_error(dir, e))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| state_dir_error(dir, e))?;
    Ok(())
}

/// Reads `{dir}/{filename}`, treating a missing file as `None`.
pub fn read_if_exists(dir: &Path, filename: &str) -> Result<Option<String>, PersistError> {
    match fs::read_to_string(dir.join(filename)) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Writes `{dir}/{filename}` through a temp file and rename, so readers never
/// observe a half-written file.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_state_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
