//! Settings-Persistenz
//!
//! Textformat, drei Zeilen in fester Reihenfolge:
//!
//! ```text
//! true      <- power_on
//! 2         <- color_index
//! false     <- breathing
//! ```
//!
//! Leerzeichen am Zeilenrand und Leerzeilen werden ignoriert, weitere Zeilen
//! nach der dritten ebenso.
//!
//! Booleans müssen `true` oder `false` lauten (Groß-/Kleinschreibung egal).
//! Ältere Geräte-Dateien, die z.B. `1`/`0` enthalten, lasen dort jeden anderen
//! Wert als `false`; hier gelten sie als ungültig und es greifen die Defaults.

use core::fmt::Write;

use heapless::String;

use crate::logic::N_COLORS;
use crate::traits::{SettingsStorage, StorageError};
use crate::types::Settings;

/// Name der Settings-Datei (bzw. des Flash-Datensatzes)
pub const SETTINGS_FILE_NAME: &str = "argb_settings.db";

/// Maximale Größe eines Settings-Datensatzes in Bytes
pub const SETTINGS_MAX_LEN: usize = 64;

/// Fehler beim Laden oder Speichern der Settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Der Speicher selbst hat einen Fehler gemeldet
    Storage(StorageError),
    /// Inhalt ist kein gültiges UTF-8 bzw. passt nicht in den Puffer
    Encoding,
    /// Weniger als drei nicht-leere Zeilen
    MissingLines,
    /// Zeile ist weder `true` noch `false`
    InvalidBool,
    /// Farb-Index ist keine Zahl oder liegt außerhalb der Palette
    InvalidIndex,
}

impl From<StorageError> for SettingsError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

/// Formatiert die Settings als Text (`"true\n2\nfalse\n"`)
pub fn format_settings(settings: &Settings) -> Result<String<SETTINGS_MAX_LEN>, SettingsError> {
    let mut text = String::new();
    write!(
        text,
        "{}\n{}\n{}\n",
        settings.power_on, settings.color_index, settings.breathing
    )
    .map_err(|_| SettingsError::Encoding)?;
    Ok(text)
}

/// Liest Settings aus dem Textformat
pub fn parse_settings(text: &str) -> Result<Settings, SettingsError> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let mut next_line = || lines.next().ok_or(SettingsError::MissingLines);

    let power_on = parse_bool(next_line()?)?;
    let color_index: usize = next_line()?
        .parse()
        .map_err(|_| SettingsError::InvalidIndex)?;
    let breathing = parse_bool(next_line()?)?;

    if color_index >= N_COLORS {
        return Err(SettingsError::InvalidIndex);
    }

    Ok(Settings {
        power_on,
        color_index,
        breathing,
    })
}

fn parse_bool(line: &str) -> Result<bool, SettingsError> {
    if line.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if line.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(SettingsError::InvalidBool)
    }
}

/// Settings-Store über einem beliebigen Speicher
///
/// # Fehlerbehandlung
/// - `load()` schlägt nie fehl: bei jedem Fehler gelten die Default-Settings.
/// - `save()` meldet Fehler an den Aufrufer, der sie nur loggt. Der nächste
///   erfolgreiche Speichervorgang schreibt wieder den aktuellen Zustand.
pub struct SettingsStore<S: SettingsStorage> {
    storage: S,
}

impl<S: SettingsStorage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Lädt die Settings oder fällt auf `Settings::default()` zurück
    pub fn load(&mut self) -> Settings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(_error) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Settings: load failed ({}), using defaults", _error);
                Settings::default()
            }
        }
    }

    /// Lädt die Settings und gibt Fehler zurück
    pub fn try_load(&mut self) -> Result<Settings, SettingsError> {
        let mut buffer = [0u8; SETTINGS_MAX_LEN];
        let len = self.storage.read(&mut buffer)?;
        let bytes = buffer.get(..len).ok_or(SettingsError::Encoding)?;
        let text = core::str::from_utf8(bytes).map_err(|_| SettingsError::Encoding)?;
        parse_settings(text)
    }

    /// Speichert die Settings
    pub fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        let text = format_settings(settings)?;
        self.storage.write(text.as_bytes())?;
        Ok(())
    }

    /// Zugriff auf den darunterliegenden Speicher (z.B. für Tests)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
