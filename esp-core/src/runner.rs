//! Lauffähige Einheiten für den kooperativen Scheduler
//!
//! Jede Einheit erledigt pro `poll()` genau einen Tick und gibt zurück, wie
//! lange sie danach schlafen will. Der Aufrufer (Embassy-Task auf dem ESP32,
//! virtuelle Uhr im Host-Test) übernimmt das Warten.
//!
//! Zugriffe auf den geteilten `DisplayState` passieren nur innerhalb von
//! `lock()`; LED-Übertragung und Flash-Schreiben laufen außerhalb des Locks.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Instant};

use crate::gesture::{GestureRecognizer, POLL_INTERVAL};
use crate::renderer::{Frame, Renderer};
use crate::settings::{SettingsError, SettingsStore};
use crate::traits::{ButtonInput, LedError, SettingsStorage, SmartLedWriter};
use crate::types::{DisplayState, Gesture};

/// Ergebnis eines Taster-Ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTick {
    /// Erkannte Geste, falls eine aufgelöst wurde
    pub gesture: Option<Gesture>,
    /// Ergebnis des Speicherns (nur wenn eine Geste aufgelöst wurde)
    pub saved: Option<Result<(), SettingsError>>,
    /// Pause bis zum nächsten Tick
    pub sleep: Duration,
}

/// Taster-Einheit: Abtasten, Gesten erkennen, Zustand ändern, speichern
pub struct ButtonRunner<B: ButtonInput, S: SettingsStorage> {
    button: B,
    recognizer: GestureRecognizer,
    store: SettingsStore<S>,
}

impl<B: ButtonInput, S: SettingsStorage> ButtonRunner<B, S> {
    pub fn new(button: B, store: SettingsStore<S>) -> Self {
        Self {
            button,
            recognizer: GestureRecognizer::new(),
            store,
        }
    }

    /// Ein Tick: Taster lesen und eine aufgelöste Geste anwenden
    ///
    /// Gespeichert wird bei jeder aufgelösten Geste, auch wenn sich der
    /// Zustand nicht geändert hat (z.B. Klick bei ausgeschalteten LEDs).
    pub fn poll<M: RawMutex>(
        &mut self,
        now: Instant,
        state: &Mutex<M, RefCell<DisplayState>>,
    ) -> ButtonTick {
        let pressed = self.button.is_pressed();
        let gesture = self.recognizer.poll(now, pressed);

        let saved = gesture.map(|gesture| {
            let settings = state.lock(|state| state.borrow_mut().apply(gesture));
            #[cfg(feature = "defmt")]
            defmt::info!("Gesture: {} -> {}", gesture, settings);
            self.store.save(&settings)
        });

        ButtonTick {
            gesture,
            saved,
            sleep: POLL_INTERVAL,
        }
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }
}

/// Ergebnis eines LED-Ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedTick {
    pub frame: Frame,
    /// Übertragung auf die Onboard-LED
    pub onboard: Result<(), LedError>,
    /// Übertragung auf den Haupt-Strip
    pub strip: Result<(), LedError>,
    /// Pause bis zum nächsten Tick (Atem-Pause + Takt)
    pub sleep: Duration,
}

/// LED-Einheit: Frame berechnen und auf beide Strips schreiben
pub struct LedRunner<A: SmartLedWriter, B: SmartLedWriter> {
    renderer: Renderer,
    onboard: A,
    strip: B,
}

impl<A: SmartLedWriter, B: SmartLedWriter> LedRunner<A, B> {
    pub fn new(renderer: Renderer, onboard: A, strip: B) -> Self {
        Self {
            renderer,
            onboard,
            strip,
        }
    }

    /// Ein Tick: Frame berechnen (zählt beim Atmen `phase_step` weiter)
    /// und auf beide Strips übertragen
    ///
    /// Braucht keine Uhrzeit: das Tempo ergibt sich allein aus `sleep`.
    pub fn poll<M: RawMutex>(&mut self, state: &Mutex<M, RefCell<DisplayState>>) -> LedTick {
        let frame = state.lock(|state| self.renderer.next_frame(&mut state.borrow_mut()));

        let onboard = Renderer::show(&frame, &mut self.onboard);
        let strip = Renderer::show(&frame, &mut self.strip);

        LedTick {
            frame,
            onboard,
            strip,
            sleep: frame.hold + POLL_INTERVAL,
        }
    }

    pub fn onboard(&self) -> &A {
        &self.onboard
    }

    pub fn strip(&self) -> &B {
        &self.strip
    }
}
