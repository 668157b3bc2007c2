//! Settings-Speicher in einem Flash-Sektor (Feature `flash`)
//!
//! Der Settings-Text liegt an einem festen Offset, eingerahmt von
//! Magic-Wert, Länge und CRC32:
//!
//! ```text
//! | magic u32 LE | len u16 LE | payload (len Bytes) | crc32 LE | 0xFF ... |
//! ```
//!
//! Die CRC läuft über magic + len + payload. Fehlt der Magic-Wert (frischer
//! oder gelöschter Flash), gilt der Datensatz als nicht vorhanden.

use embedded_storage::Storage;

use crate::settings::SETTINGS_MAX_LEN;
use crate::traits::{SettingsStorage, StorageError};

const HEADER_SIZE: usize = 6;
const CRC_SIZE: usize = 4;

/// Größe eines Datensatzes im Flash (auf 4 Bytes aufgerundet)
pub const FRAME_SIZE: usize = (HEADER_SIZE + SETTINGS_MAX_LEN + CRC_SIZE).div_ceil(4) * 4;

/// Rahmt den Settings-Text für den Flash ein
pub fn encode_frame(magic: u32, payload: &[u8]) -> Result<[u8; FRAME_SIZE], StorageError> {
    if payload.len() > SETTINGS_MAX_LEN {
        return Err(StorageError::TooLarge);
    }

    let mut frame = [0xFFu8; FRAME_SIZE];
    let crc_offset = HEADER_SIZE + payload.len();
    frame[0..4].copy_from_slice(&magic.to_le_bytes());
    frame[4..6].copy_from_slice(&(payload.len() as u16).to_le_bytes());
    frame[HEADER_SIZE..crc_offset].copy_from_slice(payload);

    let crc = compute_crc(&frame[..crc_offset]);
    frame[crc_offset..crc_offset + CRC_SIZE].copy_from_slice(&crc.to_le_bytes());
    Ok(frame)
}

/// Prüft einen Datensatz aus dem Flash und liefert den Settings-Text
pub fn decode_frame(magic: u32, frame: &[u8; FRAME_SIZE]) -> Result<&[u8], StorageError> {
    if u32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]) != magic {
        return Err(StorageError::NotFound);
    }

    let len = usize::from(u16::from_le_bytes([frame[4], frame[5]]));
    if len > SETTINGS_MAX_LEN {
        return Err(StorageError::ReadFailed);
    }

    let crc_offset = HEADER_SIZE + len;
    let stored_crc = u32::from_le_bytes([
        frame[crc_offset],
        frame[crc_offset + 1],
        frame[crc_offset + 2],
        frame[crc_offset + 3],
    ]);
    if stored_crc != compute_crc(&frame[..crc_offset]) {
        return Err(StorageError::ReadFailed);
    }

    Ok(&frame[HEADER_SIZE..crc_offset])
}

fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Settings-Speicher über einem Flash mit `embedded_storage::Storage`
///
/// # Implementierungen von `F`
/// - **Production:** `esp_storage::FlashStorage`
/// - **Testing:** beliebiger RAM-Speicher
pub struct FlashSettingsStorage<F: Storage> {
    flash: F,
    offset: u32,
    magic: u32,
}

impl<F: Storage> FlashSettingsStorage<F> {
    /// # Parameter
    /// - `flash`: Flash-Treiber
    /// - `offset`: Start des reservierten Sektors
    /// - `magic`: Kennung gültiger Datensätze
    pub fn new(flash: F, offset: u32, magic: u32) -> Self {
        Self {
            flash,
            offset,
            magic,
        }
    }

    pub fn flash(&self) -> &F {
        &self.flash
    }
}

impl<F: Storage> SettingsStorage for FlashSettingsStorage<F> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError> {
        let mut frame = [0u8; FRAME_SIZE];
        self.flash
            .read(self.offset, &mut frame)
            .map_err(|_| StorageError::ReadFailed)?;

        let payload = decode_frame(self.magic, &frame)?;
        let target = buf
            .get_mut(..payload.len())
            .ok_or(StorageError::TooLarge)?;
        target.copy_from_slice(payload);
        Ok(payload.len())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), StorageError> {
        let frame = encode_frame(self.magic, data)?;
        // Storage::write erledigt das Löschen des Sektors (read-modify-write)
        self.flash
            .write(self.offset, &frame)
            .map_err(|_| StorageError::WriteFailed)
    }
}
