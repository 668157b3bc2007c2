//! Integration Tests für das LED-Rendering
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockStrip

mod common;

use std::cell::RefCell;

use common::{MockStrip, STRIP_LEDS, shared_state};
use embassy_time::Duration;
use esp_core::{
    BREATH_FRAME_DELAY, DisplayState, Frame, LED_OFF, LedError, LedRunner, PALETTE, POLL_INTERVAL,
    Renderer, Settings, SmartLedWriter, palette_name, scale_color,
};
use rgb::RGB8;

// ============================================================================
// Tests: MockStrip
// ============================================================================

#[test]
fn test_mock_strip_flush() {
    let mut mock = MockStrip::<3>::new();
    let color = RGB8 { r: 10, g: 0, b: 0 };

    assert!(mock.frames.is_empty());

    mock.set_pixel(1, color);
    mock.flush().unwrap();

    assert_eq!(mock.frames, [[RGB8::default(), color, RGB8::default()]]);
}

#[test]
fn test_mock_strip_recovers_after_fail() {
    let mut mock = MockStrip::<1>::new();
    mock.fail_next_flush = true;

    // Erster flush schlägt fehl
    assert_eq!(mock.flush(), Err(LedError::WriteFailed));
    assert!(mock.frames.is_empty());

    // Zweiter klappt wieder
    assert_eq!(mock.flush(), Ok(()));
    assert_eq!(mock.frames.len(), 1);
}

// ============================================================================
// Tests: Renderer
// ============================================================================

#[test]
fn test_show_fills_every_pixel() {
    let mut strip = MockStrip::<STRIP_LEDS>::new();
    let frame = Frame {
        color: PALETTE[2],
        hold: Duration::from_millis(0),
    };

    Renderer::show(&frame, &mut strip).unwrap();

    assert_eq!(strip.last_frame(), Some(&[PALETTE[2]; STRIP_LEDS]));
}

#[test]
fn test_off_wins_over_breathing() {
    let renderer = Renderer::new();
    let mut state = DisplayState::from_settings(Settings {
        power_on: false,
        color_index: 1,
        breathing: true,
    });
    let phase_before = state.phase_step;

    let frame = renderer.next_frame(&mut state);

    assert_eq!(frame.color, LED_OFF);
    // Phase läuft im ausgeschalteten Zustand nicht weiter
    assert_eq!(state.phase_step, phase_before);
}

#[test]
fn test_every_palette_color_renders_solid() {
    let renderer = Renderer::new();
    for (index, color) in PALETTE.iter().enumerate() {
        let mut state = DisplayState::from_settings(Settings {
            power_on: true,
            color_index: index,
            breathing: false,
        });
        assert_eq!(renderer.next_frame(&mut state).color, *color, "{}", palette_name(index));
    }
}

#[test]
fn test_breathing_frame_matches_table() {
    let renderer = Renderer::new();
    let mut state = DisplayState::default();
    state.breathing = true;
    state.phase_step = 40;

    let frame = renderer.next_frame(&mut state);

    let expected = scale_color(PALETTE[0], renderer.table().factor(40), 256);
    assert_eq!(frame.color, expected);
    assert_eq!(frame.hold, BREATH_FRAME_DELAY);
    assert_eq!(state.phase_step, 41);
}

// ============================================================================
// Tests: LedRunner
// ============================================================================

#[test]
fn test_led_runner_writes_both_strips() {
    let state = shared_state(Settings::default());
    let mut runner = LedRunner::new(
        Renderer::new(),
        MockStrip::<1>::new(),
        MockStrip::<STRIP_LEDS>::new(),
    );

    let tick = runner.poll(&state);

    assert_eq!(tick.onboard, Ok(()));
    assert_eq!(tick.strip, Ok(()));
    assert_eq!(tick.sleep, POLL_INTERVAL);
    assert_eq!(runner.onboard().last_frame(), Some(&[PALETTE[0]; 1]));
    assert_eq!(runner.strip().last_frame(), Some(&[PALETTE[0]; STRIP_LEDS]));
}

#[test]
fn test_led_runner_onboard_failure_does_not_block_strip() {
    let state = shared_state(Settings::default());
    let mut onboard = MockStrip::<1>::new();
    onboard.fail_next_flush = true;
    let mut runner = LedRunner::new(Renderer::new(), onboard, MockStrip::<STRIP_LEDS>::new());

    let tick = runner.poll(&state);

    assert_eq!(tick.onboard, Err(LedError::WriteFailed));
    assert_eq!(tick.strip, Ok(()));
    assert!(runner.onboard().frames.is_empty());
    assert_eq!(runner.strip().frames.len(), 1);

    // Nächster Tick überträgt wieder auf beide
    let tick = runner.poll(&state);
    assert_eq!(tick.onboard, Ok(()));
    assert_eq!(runner.onboard().frames.len(), 1);
}

#[test]
fn test_led_runner_breathing_sleep_includes_frame_delay() {
    let state = shared_state(Settings {
        power_on: true,
        color_index: 0,
        breathing: true,
    });
    let mut runner = LedRunner::new(
        Renderer::new(),
        MockStrip::<1>::new(),
        MockStrip::<STRIP_LEDS>::new(),
    );

    let tick = runner.poll(&state);

    assert_eq!(tick.sleep, BREATH_FRAME_DELAY + POLL_INTERVAL);
    let phase = state.lock(|state: &RefCell<DisplayState>| state.borrow().phase_step);
    assert_eq!(phase, 129);
}
