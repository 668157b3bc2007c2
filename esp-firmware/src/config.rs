// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Timing-Konstanten (Poll-Takt, LongPress, Doppelklick, Atem-Pause) liegen
// in esp-core, weil die Gesten-Logik dort getestet wird.

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Pin für den Taster (BOOT-Taster des DevKits)
/// Interner Pull-Up, gedrückt = Low
pub const BUTTON_GPIO_PIN: u8 = 9;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Onboard RGB LED (WS2812)
pub const ONBOARD_LED_GPIO_PIN: u8 = 8;

/// Anzahl der Onboard-LEDs
pub const ONBOARD_LED_COUNT: usize = 1;

/// GPIO-Pin für den externen ARGB-Strip
pub const STRIP_GPIO_PIN: u8 = 4;

/// Anzahl der LEDs im ARGB-Strip
pub const STRIP_LED_COUNT: usize = 38;

/// RMT-Buffer-Größe pro Strip (24 Pulse pro LED + 1 Reset)
pub const ONBOARD_RMT_BUFFER_SIZE: usize = ONBOARD_LED_COUNT * 24 + 1;
pub const STRIP_RMT_BUFFER_SIZE: usize = STRIP_LED_COUNT * 24 + 1;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Settings Konfiguration
// ============================================================================

/// Flash-Offset des Settings-Sektors
/// Erster Sektor der Standard-NVS-Partition (0x9000, 24 KB)
pub const SETTINGS_FLASH_OFFSET: u32 = 0x9000;

/// Magic-Wert am Anfang eines gültigen Settings-Datensatzes ("ARGB")
pub const SETTINGS_MAGIC: u32 = 0x4247_5241;
