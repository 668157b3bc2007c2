// Task-Modul: Enthält alle Embassy Tasks
//
// Beide Tasks laufen im selben Executor und teilen sich den DisplayState.
// Der Taster-Task ändert Power/Farbe/Atmen, der LED-Task zählt phase_step.

pub mod button;
pub mod leds;

// Re-export Tasks für einfachen Import
pub use button::button_task;
pub use leds::led_task;
