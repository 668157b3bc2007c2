//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Gesten-Erkennung, das LED-Rendering und das
//! Settings-Format als Pure Logic (auf dem Host testbar).

#![no_std]

pub mod breath;
pub mod gesture;
pub mod logic;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod traits;
pub mod types;

#[cfg(feature = "std")]
pub mod file_storage;

#[cfg(feature = "flash")]
pub mod flash_storage;

// Re-exports für einfachen Zugriff
pub use breath::{BREATH_FRAME_DELAY, BREATH_MIDPOINT, BREATH_SCALE, BREATH_TABLE_SIZE, BreathTable};
pub use gesture::{DOUBLE_CLICK_WINDOW, GestureRecognizer, LONG_PRESS_THRESHOLD, POLL_INTERVAL};
pub use logic::{N_COLORS, PALETTE, next_color_index, palette_color, palette_name, scale_color};
pub use renderer::{Frame, LED_OFF, Renderer};
pub use runner::{ButtonRunner, ButtonTick, LedRunner, LedTick};
pub use settings::{SETTINGS_FILE_NAME, SettingsError, SettingsStore};
pub use traits::{ButtonInput, LedError, SettingsStorage, SmartLedWriter, StorageError};
pub use types::{DisplayState, Gesture, Settings, SharedDisplayState};

#[cfg(feature = "std")]
pub use file_storage::FileSettingsStorage;

#[cfg(feature = "flash")]
pub use flash_storage::FlashSettingsStorage;
