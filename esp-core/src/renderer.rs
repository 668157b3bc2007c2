//! LED-Rendering: berechnet pro Tick die Farbe für beide Strips
//!
//! Aus: alle Pixel (0,0,0). An ohne Atmen: Palette-Farbe. Atmen: Palette-Farbe
//! skaliert mit der Atem-Hüllkurve, danach wird `phase_step` weitergezählt.

use embassy_time::Duration;
use rgb::RGB8;

use crate::breath::{BREATH_FRAME_DELAY, BREATH_SCALE, BreathTable};
use crate::logic::{palette_color, scale_color};
use crate::traits::{LedError, SmartLedWriter};
use crate::types::DisplayState;

/// Farbe für "alles aus"
pub const LED_OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Ein berechneter Frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Farbe für jedes Pixel beider Strips
    pub color: RGB8,
    /// Zusätzliche Pause nach diesem Frame (nur beim Atmen)
    pub hold: Duration,
}

/// Renderer mit der einmal berechneten Atem-Tabelle
pub struct Renderer {
    table: BreathTable,
}

impl Renderer {
    /// Erstellt den Renderer und berechnet dabei die Atem-Tabelle
    pub fn new() -> Self {
        Self {
            table: BreathTable::new(),
        }
    }

    pub fn table(&self) -> &BreathTable {
        &self.table
    }

    /// Berechnet den nächsten Frame
    ///
    /// Beim Atmen wird `state.phase_step` nach dem Frame weitergezählt
    /// (modulo Tabellengröße); sonst bleibt der Zustand unverändert.
    pub fn next_frame(&self, state: &mut DisplayState) -> Frame {
        if !state.power_on {
            return Frame {
                color: LED_OFF,
                hold: Duration::from_millis(0),
            };
        }

        let color = palette_color(state.color_index);
        if !state.breathing {
            return Frame {
                color,
                hold: Duration::from_millis(0),
            };
        }

        let factor = self.table.factor(state.phase_step);
        state.phase_step = BreathTable::next_step(state.phase_step);
        Frame {
            color: scale_color(color, factor, BREATH_SCALE),
            hold: BREATH_FRAME_DELAY,
        }
    }

    /// Schreibt einen Frame auf alle Pixel eines Strips und überträgt ihn
    ///
    /// Auch unveränderte Frames werden übertragen (kontinuierlicher Refresh).
    pub fn show<W: SmartLedWriter>(frame: &Frame, led: &mut W) -> Result<(), LedError> {
        for index in 0..led.pixel_count() {
            led.set_pixel(index, frame.color);
        }
        led.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
