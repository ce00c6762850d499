use crate::constants::SATELLITES;

/// Identifies the timer that may end a pulse. Only the newest ticket
/// settles; older ones are stale once a later click restarts the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseTicket(u64);

/// Click feedback: idle or pulsing for a fixed window after a click.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickPulse {
    pulsing: bool,
    generation: u64,
}

impl ClickPulse {
    #[inline]
    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    /// Enter (or re-enter) the pulsing state. The caller schedules the
    /// returned ticket to settle after the pulse window.
    pub fn trigger(&mut self) -> PulseTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pulsing = true;
        PulseTicket(self.generation)
    }

    /// Class for the logo image: brightened and enlarged while pulsing.
    pub fn logo_image_class(&self) -> &'static str {
        if self.pulsing {
            "logo-img pulsing"
        } else {
            "logo-img"
        }
    }

    /// Returns true when this ticket ended the pulse.
    pub fn settle(&mut self, ticket: PulseTicket) -> bool {
        if self.pulsing && ticket.0 == self.generation {
            self.pulsing = false;
            true
        } else {
            false
        }
    }
}

/// Satellite under the pointer, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverSegment(Option<usize>);

impl HoverSegment {
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.0
    }

    pub fn enter(&mut self, index: usize) -> bool {
        if index >= SATELLITES.len() || self.0 == Some(index) {
            return false;
        }
        self.0 = Some(index);
        true
    }

    /// Only the active satellite can clear the hover.
    pub fn leave(&mut self, index: usize) -> bool {
        if self.0 == Some(index) {
            self.0 = None;
            true
        } else {
            false
        }
    }
}
