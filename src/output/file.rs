//! Append-only file output.

use super::Output;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Appends each record to a single file.
///
/// The file is opened per write in append mode, so external tools may move or truncate it at
/// any time without confusing the logger. Parent directories are created on demand.
#[derive(Debug, Clone)]
pub struct FileOutput {
    /// May start with `~`; expanded at write time.
    path: PathBuf,
}

impl FileOutput {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured path, before `~` expansion.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Config values use `~` for portability; the OS needs the expanded path.
    fn resolve_path(&self) -> PathBuf {
        let path_str = self.path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.as_ref())
    }
}

impl Output for FileOutput {
    fn write(&self, bytes: &[u8]) -> Result<(), crate::Error> {
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        // Single write_all per record keeps lines whole for concurrent appenders.
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(bytes)?;
        Ok(())
    }
}
