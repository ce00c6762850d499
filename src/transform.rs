// Pointer offset → CSS transform parameters.
//
// Everything here is a pure linear map over the offset, so the views can
// call it on every event and the host tests can check it without a DOM.

use crate::constants::{
    Satellite, LANDING_GRADIENT_CENTER_PCT, LANDING_GRADIENT_SPAN_PCT, LANDING_PULSE_SCALE,
    LANDING_TILT_DEG, RING_BASE_DIAMETER_PX, RING_DIAMETER_STEP_PX, RING_SPIN_BASE_SEC,
    RING_SPIN_STEP_SEC, RING_TILT_X_STEP_DEG, RING_TILT_Y_STEP_DEG, SATELLITE_LIFT_PX,
    WIDGET_TILT_DEG,
};
use crate::pointer::PointerOffset;
use glam::Vec2;

// Browsers print -0 as "0"; adding +0.0 folds -0.0 into 0.0.
#[inline]
fn css(v: f32) -> f32 {
    v + 0.0
}

// ---------------- Landing ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
    pub gradient_focus_pct: Vec2,
}

pub fn landing_transform(offset: PointerOffset, pulsing: bool) -> LandingTransform {
    LandingTransform {
        rotate_x_deg: offset.y * -LANDING_TILT_DEG,
        rotate_y_deg: offset.x * LANDING_TILT_DEG,
        scale: if pulsing { LANDING_PULSE_SCALE } else { 1.0 },
        gradient_focus_pct: Vec2::splat(LANDING_GRADIENT_CENTER_PCT)
            + offset * LANDING_GRADIENT_SPAN_PCT,
    }
}

impl LandingTransform {
    pub fn logo_css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) scale({})",
            css(self.rotate_x_deg),
            css(self.rotate_y_deg),
            css(self.scale)
        )
    }

    pub fn background_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, #7c3aed, #000000 60%)",
            css(self.gradient_focus_pct.x),
            css(self.gradient_focus_pct.y)
        )
    }
}

// ---------------- Widget ----------------

/// Core rotation in degrees. `x` feeds rotateX, `y` feeds rotateY.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidgetRotation {
    pub x: f32,
    pub y: f32,
}

pub fn widget_rotation(offset: PointerOffset) -> WidgetRotation {
    WidgetRotation {
        x: offset.y * WIDGET_TILT_DEG,
        y: -offset.x * WIDGET_TILT_DEG,
    }
}

impl WidgetRotation {
    pub fn core_css(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", css(self.x), css(self.y))
    }

    /// Ring `index` is zero-based; its geometry uses `index + 1`.
    pub fn ring_css(&self, index: usize) -> String {
        let ring = (index + 1) as f32;
        format!(
            "rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
            css(ring * RING_TILT_X_STEP_DEG),
            css(ring * RING_TILT_Y_STEP_DEG),
            css(self.y * ring)
        )
    }

    /// Counter-rotates a satellite so it keeps facing the viewer.
    pub fn billboard_css(&self, satellite: &Satellite) -> String {
        format!(
            "translate({}px, {}px) translateZ({}px) rotateX({}deg) rotateY({}deg)",
            css(satellite.anchor.x),
            css(satellite.anchor.y),
            css(SATELLITE_LIFT_PX),
            css(-self.x),
            css(-self.y)
        )
    }

    pub fn hud_x(&self) -> String {
        format!("SYS.ROT.X: {:.2}", css(self.x))
    }

    pub fn hud_y(&self) -> String {
        format!("SYS.ROT.Y: {:.2}", css(self.y))
    }
}

#[inline]
pub fn ring_diameter_px(index: usize) -> f32 {
    RING_BASE_DIAMETER_PX + (index + 1) as f32 * RING_DIAMETER_STEP_PX
}

#[inline]
pub fn ring_spin_sec(index: usize) -> f32 {
    RING_SPIN_BASE_SEC + index as f32 * RING_SPIN_STEP_SEC
}
