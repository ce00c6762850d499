use crate::constants::{LANDING_OFFSET_SCALE, WIDGET_OFFSET_SCALE};
use glam::Vec2;

/// Pointer position relative to a container, origin at its center.
pub type PointerOffset = Vec2;

/// Client-space bounding box of the tracked container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect with no area cannot normalize anything.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveBehavior {
    Reset,
    Retain,
}

// ---------------- Normalization ----------------
#[inline]
pub fn normalized_offset(client: Vec2, rect: BoundingRect) -> Option<PointerOffset> {
    if rect.is_degenerate() {
        return None;
    }
    let x = (client.x - rect.left) / rect.width - 0.5;
    let y = (client.y - rect.top) / rect.height - 0.5;
    Some(Vec2::new(x, y))
}

/// Tracks the latest pointer offset over one container.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    offset: PointerOffset,
    scale: f32,
    leave: LeaveBehavior,
}

impl PointerTracker {
    pub fn new(scale: f32, leave: LeaveBehavior) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale,
            leave,
        }
    }

    pub fn landing() -> Self {
        Self::new(LANDING_OFFSET_SCALE, LeaveBehavior::Reset)
    }

    pub fn widget() -> Self {
        Self::new(WIDGET_OFFSET_SCALE, LeaveBehavior::Retain)
    }

    #[inline]
    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    /// Returns false when the container is not measurable; the prior
    /// offset is kept in that case.
    pub fn on_move(&mut self, client: Vec2, rect: Option<BoundingRect>) -> bool {
        match rect.and_then(|r| normalized_offset(client, r)) {
            Some(raw) => {
                self.offset = raw * self.scale;
                true
            }
            None => false,
        }
    }

    /// Returns true when the leave changed the offset.
    pub fn on_leave(&mut self) -> bool {
        match self.leave {
            LeaveBehavior::Reset => {
                let changed = self.offset != Vec2::ZERO;
                self.offset = Vec2::ZERO;
                changed
            }
            LeaveBehavior::Retain => false,
        }
    }
}
