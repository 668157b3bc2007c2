// Taster-Eingang über GPIO
//
// Der Taster zieht den Pin gegen GND; der interne Pull-Up hält ihn sonst High.
// Es wird nur der rohe Pegel gelesen, die Gesten-Logik in esp-core arbeitet
// mit dem 10ms-Abtasttakt und braucht keine eigene Entprellung.

use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};

pub use esp_core::ButtonInput;

/// Taster an einem GPIO mit Pull-Up (gedrückt = Low)
pub struct GpioButton<'a> {
    input: Input<'a>,
}

impl<'a> GpioButton<'a> {
    /// Konfiguriert den Pin als Eingang mit internem Pull-Up
    pub fn new(pin: impl InputPin + 'a) -> Self {
        let config = InputConfig::default().with_pull(Pull::Up);
        Self {
            input: Input::new(pin, config),
        }
    }
}

impl ButtonInput for GpioButton<'_> {
    fn is_pressed(&mut self) -> bool {
        self.input.is_low()
    }
}
