// Host-side tests for pointer normalization.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod pointer {
    include!("../src/pointer.rs");
}

use glam::Vec2;
use pointer::*;

fn rect() -> BoundingRect {
    BoundingRect::new(100.0, 50.0, 400.0, 200.0)
}

#[test]
fn center_of_container_is_origin() {
    let off = normalized_offset(Vec2::new(300.0, 150.0), rect()).unwrap();
    assert_eq!(off, Vec2::ZERO);
}

#[test]
fn corners_map_to_half_extents() {
    let r = rect();
    let top_left = normalized_offset(Vec2::new(100.0, 50.0), r).unwrap();
    let bottom_right = normalized_offset(Vec2::new(500.0, 250.0), r).unwrap();
    assert_eq!(top_left, Vec2::new(-0.5, -0.5));
    assert_eq!(bottom_right, Vec2::new(0.5, 0.5));
}

#[test]
fn landing_offsets_stay_within_half_unit() {
    let r = rect();
    let mut t = PointerTracker::landing();
    for ix in 0..=20 {
        for iy in 0..=20 {
            let client = Vec2::new(
                r.left + r.width * ix as f32 / 20.0,
                r.top + r.height * iy as f32 / 20.0,
            );
            assert!(t.on_move(client, Some(r)));
            let o = t.offset();
            assert!((-0.5..=0.5).contains(&o.x), "x out of range: {}", o.x);
            assert!((-0.5..=0.5).contains(&o.y), "y out of range: {}", o.y);
        }
    }
}

#[test]
fn widget_offsets_are_doubled_and_within_unit() {
    let r = rect();
    let mut t = PointerTracker::widget();
    assert!(t.on_move(Vec2::new(400.0, 100.0), Some(r)));
    // raw (0.25, -0.25) doubled
    assert_eq!(t.offset(), Vec2::new(0.5, -0.5));

    for ix in 0..=10 {
        let client = Vec2::new(r.left + r.width * ix as f32 / 10.0, r.top + r.height);
        t.on_move(client, Some(r));
        let o = t.offset();
        assert!((-1.0..=1.0).contains(&o.x));
        assert!((-1.0..=1.0).contains(&o.y));
    }
}

#[test]
fn landing_resets_on_leave() {
    let mut t = PointerTracker::landing();
    t.on_move(Vec2::new(150.0, 60.0), Some(rect()));
    assert_ne!(t.offset(), Vec2::ZERO);
    assert!(t.on_leave());
    assert_eq!(t.offset(), Vec2::ZERO);
    // Already at rest: nothing to repaint
    assert!(!t.on_leave());
}

#[test]
fn widget_retains_offset_on_leave() {
    let mut t = PointerTracker::widget();
    t.on_move(Vec2::new(150.0, 60.0), Some(rect()));
    let before = t.offset();
    assert!(!t.on_leave());
    assert_eq!(t.offset(), before);
}

#[test]
fn missing_rect_keeps_prior_offset() {
    let mut t = PointerTracker::landing();
    t.on_move(Vec2::new(200.0, 100.0), Some(rect()));
    let before = t.offset();
    assert!(!t.on_move(Vec2::new(0.0, 0.0), None));
    assert_eq!(t.offset(), before);
}

#[test]
fn degenerate_rect_is_treated_as_unavailable() {
    let mut t = PointerTracker::widget();
    let flat = BoundingRect::new(0.0, 0.0, 0.0, 100.0);
    let nan = BoundingRect::new(0.0, 0.0, f32::NAN, 100.0);
    assert!(flat.is_degenerate());
    assert!(nan.is_degenerate());
    assert!(!t.on_move(Vec2::new(10.0, 10.0), Some(flat)));
    assert!(!t.on_move(Vec2::new(10.0, 10.0), Some(nan)));
    assert_eq!(t.offset(), Vec2::ZERO);
}

#[test]
fn pointer_outside_container_is_not_clamped() {
    // Leave events normally fire first; the mapping itself is unclamped.
    let off = normalized_offset(Vec2::new(700.0, 150.0), rect()).unwrap();
    assert!((off.x - 1.0).abs() < 1e-6);
}
