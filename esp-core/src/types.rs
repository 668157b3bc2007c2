//! Core Types für die ARGB-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use crate::breath::BREATH_MIDPOINT;
use crate::logic::next_color_index;

/// Vom Taster erkannte Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Einzelklick: nächste Farbe
    SingleClick,
    /// Doppelklick: Atmen an/aus
    DoubleClick,
    /// Langer Druck (≥ 0.5 s): LEDs an/aus
    LongPress,
}

/// Persistente Einstellungen (Spiegel der Settings-Datei)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub power_on: bool,
    pub color_index: usize,
    pub breathing: bool,
}

impl Default for Settings {
    /// Fallback wenn die Settings nicht gelesen werden können
    fn default() -> Self {
        Self {
            power_on: true,
            color_index: 0,
            breathing: false,
        }
    }
}

/// Gemeinsamer Modus-Zustand von Taster-Task und LED-Task
///
/// # Feld-Besitz
/// - `power_on`, `color_index`, `breathing`: nur der Taster-Task schreibt
///   (über [`DisplayState::apply`]).
/// - `phase_step`: gehört dem LED-Task, der ihn pro Atem-Frame weiterzählt.
///   Einzige Ausnahme: [`DisplayState::apply`] setzt ihn beim Ausschalten des
///   Atmens auf die Tabellenmitte zurück. Deshalb wird der Zustand nur unter
///   dem Lock von [`SharedDisplayState`] verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub power_on: bool,
    pub color_index: usize,
    pub breathing: bool,
    pub phase_step: usize,
}

impl DisplayState {
    /// Startzustand aus geladenen Settings; das Atmen beginnt in der Tabellenmitte
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            power_on: settings.power_on,
            color_index: settings.color_index,
            breathing: settings.breathing,
            phase_step: BREATH_MIDPOINT,
        }
    }

    /// Wendet eine erkannte Geste an und liefert die zu speichernden Settings
    ///
    /// Bei ausgeschalteten LEDs ändern Klicks weder Farbe noch Atem-Modus,
    /// die Settings werden trotzdem zurückgegeben (und gespeichert).
    pub fn apply(&mut self, gesture: Gesture) -> Settings {
        match gesture {
            Gesture::LongPress => {
                self.power_on = !self.power_on;
            }
            Gesture::DoubleClick => {
                if self.power_on {
                    self.breathing = !self.breathing;
                    // Nächste Atem-Session startet bei voller Helligkeit (fade out)
                    if !self.breathing {
                        self.phase_step = BREATH_MIDPOINT;
                    }
                }
            }
            Gesture::SingleClick => {
                if self.power_on {
                    self.color_index = next_color_index(self.color_index);
                }
            }
        }
        self.settings()
    }

    /// Persistenter Teil des Zustands
    pub fn settings(&self) -> Settings {
        Settings {
            power_on: self.power_on,
            color_index: self.color_index,
            breathing: self.breathing,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

/// Geteilter Zustand für beide Tasks
///
/// `NoopRawMutex` reicht, solange beide Tasks im selben Executor laufen
/// (kooperativ, keine Preemption). Bei echten Threads oder mehreren Kernen
/// stattdessen `Mutex<CriticalSectionRawMutex, _>` verwenden.
pub type SharedDisplayState = Mutex<NoopRawMutex, RefCell<DisplayState>>;

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Gesture {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Gesture::SingleClick => defmt::write!(fmt, "SingleClick"),
            Gesture::DoubleClick => defmt::write!(fmt, "DoubleClick"),
            Gesture::LongPress => defmt::write!(fmt, "LongPress"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Settings {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Settings {{ power: {}, color: {} ({}), breathing: {} }}",
            self.power_on,
            self.color_index,
            crate::logic::palette_name(self.color_index),
            self.breathing
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "DisplayState {{ power: {}, color: {}, breathing: {}, phase: {} }}",
            self.power_on,
            crate::logic::palette_name(self.color_index),
            self.breathing,
            self.phase_step
        )
    }
}
