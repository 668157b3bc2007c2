//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen zu den externen Kollaborateuren
//! (Taster, LED-Strips, Settings-Speicher) ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für den rohen Settings-Speicher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Es wurde noch nie etwas gespeichert
    NotFound,
    /// Lesen fehlgeschlagen oder Daten beschädigt
    ReadFailed,
    /// Schreiben fehlgeschlagen (z.B. Speicher voll)
    WriteFailed,
    /// Datensatz passt nicht in den Puffer
    TooLarge,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert einen adressierbaren LED-Strip (WS2812/Neopixel).
/// Pixel werden zuerst gepuffert und erst mit `flush()` übertragen.
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockStrip (in-memory Mock in esp-tests)
pub trait SmartLedWriter: Send {
    /// Anzahl der Pixel im Strip
    fn pixel_count(&self) -> usize;

    /// Setzt die Farbe eines Pixels im Puffer
    ///
    /// Indizes außerhalb von `0..pixel_count()` werden ignoriert.
    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Überträgt den Puffer auf die LEDs
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn flush(&mut self) -> Result<(), LedError>;
}

/// Trait für den Taster-Eingang
///
/// Ein einzelner Pin mit Pull-Up; gedrückt entspricht Logic-Low.
pub trait ButtonInput {
    /// Liefert `true` solange der Taster gedrückt ist (roher Pegel, nicht entprellt)
    fn is_pressed(&mut self) -> bool;
}

/// Trait für den Settings-Speicher
///
/// Speichert genau einen Datensatz als Byte-Folge (Datei, Flash-Sektor, RAM).
pub trait SettingsStorage {
    /// Liest den gespeicherten Datensatz in `buf` und gibt die Länge zurück
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Ersetzt den gespeicherten Datensatz durch `data`
    fn write(&mut self, data: &[u8]) -> Result<(), StorageError>;
}
