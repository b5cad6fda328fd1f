use crate::domain::ports::Storage;
use crate::utils::error::{EmbedError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The process working directory, the only input the binary reads.
    pub fn current() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Storage for LocalDirectory {
    fn list_entries(&self) -> Result<Vec<OsString>> {
        let scan_error = |source| EmbedError::DirectoryScan {
            path: self.root.clone(),
            source,
        };

        fs::read_dir(&self.root)
            .map_err(scan_error)?
            .map(|entry| entry.map(|e| e.file_name()).map_err(scan_error))
            .collect()
    }

    fn read_file(&self, file_name: &str) -> Result<Vec<u8>> {
        // fs::read closes the handle before returning.
        fs::read(self.root.join(file_name)).map_err(|source| EmbedError::FileRead {
            file: file_name.to_string(),
            source,
        })
    }
}
