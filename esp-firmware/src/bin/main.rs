// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use core::cell::RefCell;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;

// Projekt-Module und Konfiguration
use esp_argb_steuerung::config::{
    BUTTON_GPIO_PIN, ONBOARD_LED_GPIO_PIN, SETTINGS_FLASH_OFFSET, SETTINGS_MAGIC, STRIP_GPIO_PIN,
};
use esp_argb_steuerung::hal::GpioButton;
use esp_argb_steuerung::tasks::{button_task, led_task};
use esp_argb_steuerung::{DisplayState, FlashSettingsStorage, SettingsStore, SharedDisplayState};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, lädt die Settings aus dem Flash und startet
/// Taster-Task und LED-Task. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Settings laden (bei Fehler: Defaults, siehe SettingsStore::load)
    let flash = esp_storage::FlashStorage::new(peripherals.FLASH);
    let storage = FlashSettingsStorage::new(flash, SETTINGS_FLASH_OFFSET, SETTINGS_MAGIC);
    let mut store = SettingsStore::new(storage);
    let settings = store.load();
    info!("Loaded {}", settings);

    // Geteilter Zustand muss 'static sein für Tasks
    static STATE: static_cell::StaticCell<SharedDisplayState> = static_cell::StaticCell::new();
    let state = &*STATE.init(Mutex::new(RefCell::new(DisplayState::from_settings(
        settings,
    ))));

    // Spawn Taster Task (GPIO9 = BOOT-Taster)
    info!("Button on GPIO{}", BUTTON_GPIO_PIN);
    let button = GpioButton::new(peripherals.GPIO9);
    spawner.spawn(button_task(button, store, state)).unwrap();

    // Spawn LED Task (Onboard-LED + ARGB-Strip teilen sich das RMT Peripheral)
    info!(
        "Onboard LED on GPIO{}, strip on GPIO{}",
        ONBOARD_LED_GPIO_PIN, STRIP_GPIO_PIN
    );
    spawner
        .spawn(led_task(
            peripherals.RMT,
            peripherals.GPIO8,
            peripherals.GPIO4,
            state,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
