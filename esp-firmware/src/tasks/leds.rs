// LED Task - Steuert Onboard-LED und ARGB-Strip über das RMT Peripheral
use defmt::{error, info};
use embassy_time::Timer;
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::{SmartLedsAdapter, smart_led_buffer};

use crate::config::{
    ONBOARD_LED_COUNT, ONBOARD_RMT_BUFFER_SIZE, RMT_CLOCK_MHZ, STRIP_LED_COUNT,
    STRIP_RMT_BUFFER_SIZE,
};
use crate::hal::RmtLedWriter;
use crate::{LedRunner, Renderer, SharedDisplayState, SmartLedWriter};

/// LED Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Kontinuierlicher Refresh: jeder Tick schreibt einen Frame auf beide
/// Strips, auch wenn sich nichts geändert hat. Beim Atmen kommt nach jedem
/// Frame die Atem-Pause dazu.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter `A, B: SmartLedWriter` ermöglichen:
/// - Real Hardware (RmtLedWriter) im Production-Code
/// - Mock Implementation (MockStrip) in den Host-Tests von esp-tests
pub async fn led_logic<A, B>(mut runner: LedRunner<A, B>, state: &SharedDisplayState)
where
    A: SmartLedWriter,
    B: SmartLedWriter,
{
    loop {
        let tick = runner.poll(state);

        if let Err(e) = tick.onboard {
            error!("Failed to write onboard LED: {}", e);
        }
        if let Err(e) = tick.strip {
            error!("Failed to write LED strip: {}", e);
        }

        // Async Delay: gibt CPU an den Taster-Task zurück
        Timer::after(tick.sleep).await;
    }
}

/// LED Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung (RMT + zwei Kanäle) und ruft
/// dann `led_logic()` auf.
///
/// # Parameter
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `onboard_pin`: GPIO8 für die Onboard-LED
/// - `strip_pin`: GPIO4 für den ARGB-Strip
/// - `state`: geteilter Modus-Zustand
#[embassy_executor::task]
pub async fn led_task(
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    onboard_pin: esp_hal::peripherals::GPIO8<'static>,
    strip_pin: esp_hal::peripherals::GPIO4<'static>,
    state: &'static SharedDisplayState,
) {
    let rmt: Rmt<'static, Blocking> =
        match Rmt::new(rmt_peripheral, Rate::from_mhz(RMT_CLOCK_MHZ)) {
            Ok(rmt) => rmt,
            Err(e) => {
                error!("Failed to initialize RMT: {}", e);
                return;
            }
        };

    // Buffer für SmartLED Daten (24 Pulse pro LED + Reset)
    let mut onboard_buffer = smart_led_buffer!(ONBOARD_LED_COUNT);
    let mut strip_buffer = smart_led_buffer!(STRIP_LED_COUNT);

    let onboard_adapter = SmartLedsAdapter::new(rmt.channel0, onboard_pin, &mut onboard_buffer);
    let onboard = RmtLedWriter::<ONBOARD_LED_COUNT, ONBOARD_RMT_BUFFER_SIZE>::new(onboard_adapter);
    let strip_adapter = SmartLedsAdapter::new(rmt.channel1, strip_pin, &mut strip_buffer);
    let strip = RmtLedWriter::<STRIP_LED_COUNT, STRIP_RMT_BUFFER_SIZE>::new(strip_adapter);
    info!(
        "LEDs ready: {} onboard, {} on strip",
        ONBOARD_LED_COUNT, STRIP_LED_COUNT
    );

    // Atem-Tabelle wird hier einmalig berechnet
    led_logic(LedRunner::new(Renderer::new(), onboard, strip), state).await
}
