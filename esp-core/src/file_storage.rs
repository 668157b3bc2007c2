//! Datei-basierter Settings-Speicher (nur mit Feature `std`)
//!
//! Für Host-Builds und Tests: der Datensatz liegt als Textdatei auf der Platte.

extern crate std;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::settings::SETTINGS_FILE_NAME;
use crate::traits::{SettingsStorage, StorageError};

/// Settings-Speicher als Textdatei
#[derive(Debug, Clone)]
pub struct FileSettingsStorage {
    path: PathBuf,
}

impl FileSettingsStorage {
    /// Speicher unter einem beliebigen Pfad
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Speicher unter `argb_settings.db` in einem Verzeichnis
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSettingsStorage {
    /// `argb_settings.db` im aktuellen Arbeitsverzeichnis
    fn default() -> Self {
        Self::new(SETTINGS_FILE_NAME)
    }
}

impl SettingsStorage for FileSettingsStorage {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError> {
        let data = fs::read(&self.path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::ReadFailed,
        })?;
        let target = buf.get_mut(..data.len()).ok_or(StorageError::TooLarge)?;
        target.copy_from_slice(&data);
        Ok(data.len())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), StorageError> {
        fs::write(&self.path, data).map_err(|_| StorageError::WriteFailed)
    }
}
