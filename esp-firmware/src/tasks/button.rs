// Taster Task - Gesten erkennen, Modus ändern, Settings speichern
use defmt::{error, info};
use embassy_time::{Instant, Timer};

use crate::hal::GpioButton;
use crate::{ButtonRunner, FlashSettingsStore, SharedDisplayState};

/// Taster Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Tastet den Taster im 10ms-Takt ab. Jede erkannte Geste wird auf den
/// geteilten Zustand angewendet und danach gespeichert. Ein fehlgeschlagenes
/// Speichern wird nur geloggt; die nächste Geste speichert erneut.
pub async fn button_logic<B, S>(mut runner: ButtonRunner<B, S>, state: &SharedDisplayState)
where
    B: esp_core::ButtonInput,
    S: esp_core::SettingsStorage,
{
    loop {
        let tick = runner.poll(Instant::now(), state);

        if let Some(gesture) = tick.gesture {
            match tick.saved {
                Some(Err(e)) => error!("Failed to save settings after {}: {}", gesture, e),
                _ => info!("Settings saved after {}", gesture),
            }
        }

        // Async Delay: gibt CPU an den LED-Task zurück
        Timer::after(tick.sleep).await;
    }
}

/// Taster Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `button`: Taster-Eingang (GPIO mit Pull-Up)
/// - `store`: Settings-Store (beim Start bereits geladen)
/// - `state`: geteilter Modus-Zustand
#[embassy_executor::task]
pub async fn button_task(
    button: GpioButton<'static>,
    store: FlashSettingsStore,
    state: &'static SharedDisplayState,
) {
    button_logic(ButtonRunner::new(button, store), state).await
}
