//! Atem-Hüllkurve (Breathing)
//!
//! Lookup-Tabelle mit `sin(i / SCALE · π)²`, einmal beim Start berechnet.
//! Ein kompletter Durchlauf ergibt eine weiche Helligkeitskurve 0 → 1 → 0.

use embassy_time::Duration;

/// Wertebereich der Tabelle: `0..=BREATH_SCALE`
pub const BREATH_SCALE: u16 = 256;

/// Höchster Phasen-Index; die Tabelle hat `BREATH_TABLE_SIZE + 1` Einträge
pub const BREATH_TABLE_SIZE: usize = 256;

/// Tabellenmitte (volle Helligkeit)
pub const BREATH_MIDPOINT: usize = BREATH_TABLE_SIZE / 2;

/// Pause zwischen zwei Atem-Frames (bestimmt die Animationsgeschwindigkeit)
pub const BREATH_FRAME_DELAY: Duration = Duration::from_millis(20);

/// Vorberechnete Atem-Hüllkurve
#[derive(Clone)]
pub struct BreathTable {
    entries: [u16; BREATH_TABLE_SIZE + 1],
}

impl BreathTable {
    /// Berechnet die Tabelle (einmal beim Start aufrufen)
    pub fn new() -> Self {
        let mut entries = [0u16; BREATH_TABLE_SIZE + 1];
        for (i, entry) in entries.iter_mut().enumerate() {
            let phase = i as f64 / f64::from(BREATH_SCALE) * core::f64::consts::PI;
            let sine = libm::sin(phase);
            let value = libm::floor(sine * sine * f64::from(BREATH_SCALE));
            *entry = (value as u16).min(BREATH_SCALE);
        }
        Self { entries }
    }

    /// Skalierungsfaktor für einen Phasen-Index
    ///
    /// Indizes jenseits von `BREATH_TABLE_SIZE` werden modulo umgebrochen.
    pub fn factor(&self, phase_step: usize) -> u16 {
        self.entries[phase_step % (BREATH_TABLE_SIZE + 1)]
    }

    /// Nächster Phasen-Index (zyklisch über alle Tabelleneinträge)
    pub fn next_step(phase_step: usize) -> usize {
        (phase_step + 1) % (BREATH_TABLE_SIZE + 1)
    }
}

impl Default for BreathTable {
    fn default() -> Self {
        Self::new()
    }
}
