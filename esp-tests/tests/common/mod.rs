//! Gemeinsame Mocks und Simulations-Treiber für die Host-Tests
//!
//! Ersetzt die Hardware (Taster, zwei Strips, Flash) und den Embassy-Executor:
//! `Simulation` lässt Taster- und LED-Einheit auf einer virtuellen Uhr laufen.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Instant;
use esp_core::{
    ButtonInput, ButtonRunner, DisplayState, Frame, Gesture, LedError, LedRunner, Renderer,
    Settings, SettingsError, SettingsStorage, SettingsStore, SharedDisplayState, SmartLedWriter,
    StorageError,
};
use rgb::RGB8;

/// Pixel-Anzahl der Onboard-LED
pub const ONBOARD_LEDS: usize = 1;
/// Pixel-Anzahl des Haupt-Strips
pub const STRIP_LEDS: usize = 38;

// ============================================================================
// Mock Strip
// ============================================================================

/// Strip im RAM, merkt sich jeden übertragenen Frame
pub struct MockStrip<const LEDS: usize> {
    pub pixels: [RGB8; LEDS],
    pub frames: Vec<[RGB8; LEDS]>,
    pub fail_next_flush: bool,
}

impl<const LEDS: usize> MockStrip<LEDS> {
    pub fn new() -> Self {
        Self {
            pixels: [RGB8::default(); LEDS],
            frames: Vec::new(),
            fail_next_flush: false,
        }
    }

    pub fn last_frame(&self) -> Option<&[RGB8; LEDS]> {
        self.frames.last()
    }
}

impl<const LEDS: usize> SmartLedWriter for MockStrip<LEDS> {
    fn pixel_count(&self) -> usize {
        LEDS
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) -> Result<(), LedError> {
        if self.fail_next_flush {
            self.fail_next_flush = false;
            return Err(LedError::WriteFailed);
        }
        self.frames.push(self.pixels);
        Ok(())
    }
}

// ============================================================================
// Scripted Button
// ============================================================================

/// Tastendruck als (Start, Ende) in Millisekunden, Ende exklusiv
pub type Press = (u64, u64);

/// Taster, dessen Pegel sich aus der virtuellen Uhr und einem Skript ergibt
pub struct ScriptedButton {
    clock: Rc<Cell<u64>>,
    presses: Vec<Press>,
}

impl ScriptedButton {
    pub fn new(clock: Rc<Cell<u64>>, presses: &[Press]) -> Self {
        Self {
            clock,
            presses: presses.to_vec(),
        }
    }
}

impl ButtonInput for ScriptedButton {
    fn is_pressed(&mut self) -> bool {
        let now = self.clock.get();
        self.presses
            .iter()
            .any(|&(start, end)| now >= start && now < end)
    }
}

// ============================================================================
// Memory Storage
// ============================================================================

/// Settings-Speicher im RAM
///
/// Klone teilen sich denselben Inhalt, damit der Test nach dem Verschieben
/// in den `SettingsStore` noch hineinsehen kann.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    data: Rc<RefCell<Option<Vec<u8>>>>,
    fail_writes: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let storage = Self::new();
        *storage.data.borrow_mut() = Some(text.as_bytes().to_vec());
        storage
    }

    pub fn text(&self) -> Option<String> {
        self.data
            .borrow()
            .as_ref()
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Anzahl der erfolgreichen Schreibvorgänge
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError> {
        let data = self.data.borrow();
        let data = data.as_ref().ok_or(StorageError::NotFound)?;
        let target = buf.get_mut(..data.len()).ok_or(StorageError::TooLarge)?;
        target.copy_from_slice(data);
        Ok(data.len())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::WriteFailed);
        }
        *self.data.borrow_mut() = Some(data.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// ============================================================================
// Simulation
// ============================================================================

/// Geteilter Zustand wie auf dem ESP32
pub fn shared_state(settings: Settings) -> SharedDisplayState {
    Mutex::new(RefCell::new(DisplayState::from_settings(settings)))
}

/// Kooperativer Scheduler auf einer virtuellen Uhr
///
/// Beide Einheiten werden zu ihren Weckzeiten gepollt; bei gleicher Weckzeit
/// läuft der Taster zuerst. Alle Ergebnisse werden mit Zeitstempel gesammelt.
pub struct Simulation {
    pub clock: Rc<Cell<u64>>,
    pub state: SharedDisplayState,
    pub storage: MemoryStorage,
    pub button: ButtonRunner<ScriptedButton, MemoryStorage>,
    pub leds: LedRunner<MockStrip<ONBOARD_LEDS>, MockStrip<STRIP_LEDS>>,
    pub gestures: Vec<(u64, Gesture)>,
    pub saves: Vec<Result<(), SettingsError>>,
    pub frames: Vec<(u64, Frame)>,
    next_button: u64,
    next_leds: u64,
}

impl Simulation {
    /// Startet wie die Firmware: Settings laden, Zustand daraus aufbauen
    pub fn new(storage: MemoryStorage, presses: &[Press]) -> Self {
        let clock = Rc::new(Cell::new(0));
        let mut store = SettingsStore::new(storage.clone());
        let settings = store.load();

        Self {
            button: ButtonRunner::new(ScriptedButton::new(clock.clone(), presses), store),
            leds: LedRunner::new(Renderer::new(), MockStrip::new(), MockStrip::new()),
            clock,
            state: shared_state(settings),
            storage,
            gestures: Vec::new(),
            saves: Vec::new(),
            frames: Vec::new(),
            next_button: 0,
            next_leds: 0,
        }
    }

    /// Lässt die Simulation bis einschließlich `end_ms` laufen
    pub fn run_until(&mut self, end_ms: u64) {
        loop {
            let now = self.next_button.min(self.next_leds);
            if now > end_ms {
                break;
            }
            self.clock.set(now);

            if self.next_button == now {
                let tick = self.button.poll(Instant::from_millis(now), &self.state);
                if let Some(gesture) = tick.gesture {
                    self.gestures.push((now, gesture));
                }
                if let Some(saved) = tick.saved {
                    self.saves.push(saved);
                }
                self.next_button = now + tick.sleep.as_millis();
            }

            if self.next_leds == now {
                let tick = self.leds.poll(&self.state);
                self.frames.push((now, tick.frame));
                self.next_leds = now + tick.sleep.as_millis();
            }
        }
    }

    pub fn display(&self) -> DisplayState {
        self.state.lock(|state| *state.borrow())
    }

    pub fn gesture_kinds(&self) -> Vec<Gesture> {
        self.gestures.iter().map(|&(_, gesture)| gesture).collect()
    }

    /// Frames ab einem Zeitpunkt (einschließlich)
    pub fn frames_since(&self, from_ms: u64) -> Vec<(u64, Frame)> {
        self.frames
            .iter()
            .copied()
            .filter(|&(t, _)| t >= from_ms)
            .collect()
    }

    pub fn onboard(&self) -> &MockStrip<ONBOARD_LEDS> {
        self.leds.onboard()
    }

    pub fn strip(&self) -> &MockStrip<STRIP_LEDS> {
        self.leds.strip()
    }
}
