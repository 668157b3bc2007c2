// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    ButtonRunner, DisplayState, FlashSettingsStorage, Gesture, LedError, LedRunner, Renderer,
    Settings, SettingsStore, SharedDisplayState, SmartLedWriter,
};

// ============================================================================
// Type-Aliase
// ============================================================================

/// Flash-Treiber für den Settings-Sektor
pub type SettingsFlash = esp_storage::FlashStorage<'static>;

/// Settings-Store im internen Flash
pub type FlashSettingsStore = SettingsStore<FlashSettingsStorage<SettingsFlash>>;

// ============================================================================
// Nebenläufigkeit
// ============================================================================
//
// Beide Tasks (Taster, LEDs) laufen im selben Embassy-Executor auf einem Kern.
// Ein Task gibt die CPU nur an seinen `.await`-Punkten ab (Timer::after),
// nie mitten in einer Zustandsänderung. Der DisplayState liegt deshalb in
// einem blocking Mutex mit NoopRawMutex (siehe esp_core::SharedDisplayState):
// kein echtes Sperren, aber jeder Zugriff ist auf einen `lock()`-Block begrenzt.
//
// Feld-Besitz:
// - Taster-Task schreibt power_on, color_index, breathing
//   (und setzt phase_step beim Ausschalten des Atmens auf die Mitte)
// - LED-Task zählt phase_step pro Atem-Frame weiter
//
// Sollte der LED-Task auf den zweiten Kern oder in einen Interrupt-Executor
// wandern, muss der Mutex auf CriticalSectionRawMutex umgestellt werden.
