//! Gesten-Erkennung für den einzelnen Taster
//!
//! Der Taster wird im festen Takt abgefragt (`POLL_INTERVAL`). Aus der Folge
//! von Drücken/Loslassen wird genau eine von drei Gesten:
//!
//! - **LongPress**: gedrückt ≥ `LONG_PRESS_THRESHOLD`. Feuert noch während
//!   der Taster gehalten wird; danach wird bis zum Loslassen nichts mehr erkannt.
//! - **DoubleClick**: zweites Loslassen ≤ `DOUBLE_CLICK_WINDOW` nach dem ersten.
//! - **SingleClick**: nach dem ersten Loslassen kommt innerhalb des Fensters
//!   kein zweites; wird beim ersten Poll nach Ablauf des Fensters gemeldet.

use embassy_time::{Duration, Instant};

use crate::types::Gesture;

/// Abfrage-Takt des Tasters
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Ab dieser Haltedauer gilt ein Druck als LongPress
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

/// Maximaler Abstand zwischen zwei Loslass-Zeitpunkten für einen DoubleClick
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(200);

/// Zustand des physischen Tasters innerhalb eines Druck-Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonPhase {
    Released,
    Pressed { since: Instant },
    /// LongPress wurde gemeldet, Taster ist noch unten
    HeldAfterLongPress,
}

/// Zeitbasierte State-Machine für Einzelklick, Doppelklick und langen Druck
///
/// Ein offener Klick wird als Zeitstempel des Loslassens gespeichert
/// (`pending_click`). Beide Auflösungen messen gegen denselben Zeitstempel:
/// zweites Loslassen mit Abstand `<= DOUBLE_CLICK_WINDOW` ergibt DoubleClick,
/// ein Poll mit Abstand `> DOUBLE_CLICK_WINDOW` ergibt SingleClick.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    phase: ButtonPhase,
    pending_click: Option<Instant>,
}

impl GestureRecognizer {
    pub const fn new() -> Self {
        Self {
            phase: ButtonPhase::Released,
            pending_click: None,
        }
    }

    /// Verarbeitet einen Abtastwert des Tasters
    ///
    /// # Parameter
    /// - `now`: Zeitpunkt der Abtastung (monoton steigend)
    /// - `pressed`: roher Pegel, `true` = gedrückt
    ///
    /// Gibt höchstens eine Geste pro Aufruf zurück.
    pub fn poll(&mut self, now: Instant, pressed: bool) -> Option<Gesture> {
        match self.phase {
            // Nach LongPress nur auf das Loslassen warten
            ButtonPhase::HeldAfterLongPress => {
                if !pressed {
                    self.phase = ButtonPhase::Released;
                }
                return None;
            }
            ButtonPhase::Released if pressed => {
                self.phase = ButtonPhase::Pressed { since: now };
            }
            _ => {}
        }

        if let ButtonPhase::Pressed { since } = self.phase {
            if now.saturating_duration_since(since) >= LONG_PRESS_THRESHOLD {
                self.phase = if pressed {
                    ButtonPhase::HeldAfterLongPress
                } else {
                    ButtonPhase::Released
                };
                return Some(Gesture::LongPress);
            }

            if !pressed {
                self.phase = ButtonPhase::Released;
                match self.pending_click {
                    Some(first_release)
                        if now.saturating_duration_since(first_release) <= DOUBLE_CLICK_WINDOW =>
                    {
                        self.pending_click = None;
                        return Some(Gesture::DoubleClick);
                    }
                    // Alter Klick abgelaufen, dieses Loslassen startet den nächsten
                    Some(_) => {
                        self.pending_click = Some(now);
                        return Some(Gesture::SingleClick);
                    }
                    None => self.pending_click = Some(now),
                }
            }
        }

        if let Some(first_release) = self.pending_click {
            if now.saturating_duration_since(first_release) > DOUBLE_CLICK_WINDOW {
                self.pending_click = None;
                return Some(Gesture::SingleClick);
            }
        }

        None
    }

    /// `true` wenn kein Druck läuft und kein Klick offen ist
    pub fn is_idle(&self) -> bool {
        self.phase == ButtonPhase::Released && self.pending_click.is_none()
    }

    /// `true` solange nach einem LongPress auf das Loslassen gewartet wird
    pub fn is_awaiting_release(&self) -> bool {
        self.phase == ButtonPhase::HeldAfterLongPress
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
