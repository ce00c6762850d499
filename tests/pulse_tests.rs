// Host-side tests for the click pulse and hover state machines.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod pulse {
    include!("../src/pulse.rs");
}

use constants::PULSE_DURATION_MS;
use pulse::*;

// Minimal stand-in for the browser timer queue: tickets fire at a deadline,
// and a superseded timer is cleared the way the view clears it.
#[derive(Default)]
struct FakeTimers {
    now_ms: i32,
    pending: Option<(i32, PulseTicket)>,
}

impl FakeTimers {
    fn click(&mut self, pulse: &mut ClickPulse) {
        let ticket = pulse.trigger();
        self.pending = Some((self.now_ms + PULSE_DURATION_MS, ticket));
    }

    fn advance(&mut self, ms: i32, pulse: &mut ClickPulse) {
        self.now_ms += ms;
        if let Some((due, ticket)) = self.pending {
            if due <= self.now_ms {
                self.pending = None;
                pulse.settle(ticket);
            }
        }
    }
}

#[test]
fn click_pulses_immediately_and_settles_after_window() {
    let mut pulse = ClickPulse::default();
    let mut timers = FakeTimers::default();
    assert!(!pulse.is_pulsing());

    timers.click(&mut pulse);
    assert!(pulse.is_pulsing());
    assert_eq!(pulse.logo_image_class(), "logo-img pulsing");

    timers.advance(PULSE_DURATION_MS - 1, &mut pulse);
    assert!(pulse.is_pulsing());

    timers.advance(1, &mut pulse);
    assert!(!pulse.is_pulsing());
    assert_eq!(pulse.logo_image_class(), "logo-img");
}

#[test]
fn second_click_extends_the_window() {
    let mut pulse = ClickPulse::default();
    let mut timers = FakeTimers::default();
    timers.click(&mut pulse);
    timers.advance(300, &mut pulse);
    timers.click(&mut pulse);

    // The first click's deadline passes without ending the pulse.
    timers.advance(300, &mut pulse);
    assert!(pulse.is_pulsing());

    timers.advance(200, &mut pulse);
    assert!(!pulse.is_pulsing());
}

#[test]
fn stale_ticket_cannot_end_a_newer_pulse() {
    let mut pulse = ClickPulse::default();
    let first = pulse.trigger();
    let second = pulse.trigger();
    assert!(!pulse.settle(first));
    assert!(pulse.is_pulsing());
    assert!(pulse.settle(second));
    assert!(!pulse.is_pulsing());
    // Settling twice is a no-op.
    assert!(!pulse.settle(second));
}

#[test]
fn hover_tracks_single_segment() {
    let mut hover = HoverSegment::default();
    assert_eq!(hover.active(), None);

    assert!(hover.enter(1));
    assert_eq!(hover.active(), Some(1));

    assert!(hover.leave(1));
    assert_eq!(hover.active(), None);
}

#[test]
fn hover_moves_between_segments() {
    let mut hover = HoverSegment::default();
    hover.enter(0);
    hover.enter(2);
    assert_eq!(hover.active(), Some(2));
    // A late leave from the previous satellite does not clear the new one.
    assert!(!hover.leave(0));
    assert_eq!(hover.active(), Some(2));
    assert_eq!((0..3).filter(|&i| hover.active() == Some(i)).count(), 1);
}

#[test]
fn hover_ignores_unknown_segments() {
    let mut hover = HoverSegment::default();
    assert!(!hover.enter(3));
    assert_eq!(hover.active(), None);
    assert!(hover.enter(0));
    assert!(!hover.enter(0));
}
