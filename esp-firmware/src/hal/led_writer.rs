// SmartLED Writer über das RMT Peripheral
//
// RmtLedWriter puffert alle Pixel eines Strips und überträgt sie bei flush()
// über einen RMT-Kanal. Für Host-Tests gibt es MockStrip in esp-tests.

use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

pub use esp_core::{LedError, SmartLedWriter};

/// Real Hardware LED Writer
///
/// Nutzt einen Kanal des ESP32 RMT Peripherals um einen WS2812-Strip
/// mit `LEDS` Pixeln anzusteuern.
///
/// Hinweis: Der RMT-Buffer (`smart_led_buffer!(LEDS)`) wird im Task erstellt,
/// weil er länger leben muss als der Adapter.
pub struct RmtLedWriter<'a, const LEDS: usize, const BUFFER_SIZE: usize> {
    adapter: SmartLedsAdapter<'a, BUFFER_SIZE>,
    pixels: [RGB8; LEDS],
}

impl<'a, const LEDS: usize, const BUFFER_SIZE: usize> RmtLedWriter<'a, LEDS, BUFFER_SIZE> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `adapter`: SmartLED Adapter (RMT-Kanal + GPIO + Buffer)
    pub fn new(adapter: SmartLedsAdapter<'a, BUFFER_SIZE>) -> Self {
        Self {
            adapter,
            pixels: [RGB8::default(); LEDS],
        }
    }
}

impl<const LEDS: usize, const BUFFER_SIZE: usize> SmartLedWriter
    for RmtLedWriter<'_, LEDS, BUFFER_SIZE>
{
    fn pixel_count(&self) -> usize {
        LEDS
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) -> Result<(), LedError> {
        self.adapter
            .write(self.pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
