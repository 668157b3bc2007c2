// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus esp-core,
// um Testbarkeit und Wartbarkeit zu verbessern. Der Flash-Speicher für die
// Settings liegt hardware-unabhängig in esp-core (Feature `flash`).

pub mod button;
pub mod led_writer;

pub use button::GpioButton;
pub use led_writer::{LedError, RmtLedWriter, SmartLedWriter};
