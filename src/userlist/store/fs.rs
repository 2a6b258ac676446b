use super::RecordStore;
use crate::collection::Collection;
use crate::error::{Result, UserlistError};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// A collection stored as a single JSON array in one file.
pub struct FileStore {
    path: PathBuf,
    file_mode: u32,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file_mode: DEFAULT_FILE_MODE,
        }
    }

    /// Permission bits applied when the file has to be created. Ignored on
    /// platforms without Unix permissions.
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    fn open(&self) -> Result<File> {
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.file_mode);
        }
        options.open(&self.path).map_err(UserlistError::OpenFile)
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Collection> {
        let mut file = self.open()?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(UserlistError::ReadFile)?;

        let collection = Collection::from_json_bytes(&data)?;
        debug!(
            path = %self.path.display(),
            bytes = data.len(),
            records = collection.len(),
            "loaded collection"
        );
        Ok(collection)
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        let mut file = self.open()?;
        let data = collection.to_json_bytes()?;

        // Truncate first so a shorter array never leaves stale bytes behind.
        file.set_len(0).map_err(UserlistError::WriteFile)?;
        file.seek(SeekFrom::Start(0))
            .map_err(UserlistError::WriteFile)?;
        file.write_all(&data).map_err(UserlistError::WriteFile)?;

        debug!(
            path = %self.path.display(),
            bytes = data.len(),
            records = collection.len(),
            "saved collection"
        );
        Ok(())
    }
}
