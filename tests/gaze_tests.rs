// Host-side tests for the pupil steering math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod gaze {
    include!("../src/core/gaze.rs");
}

use gaze::*;
use glam::Vec2;

#[test]
fn rect_center_is_the_box_midpoint() {
    let c = rect_center(10.0, 20.0, 100.0, 50.0);
    assert_eq!(c, Vec2::new(60.0, 45.0));
}

#[test]
fn near_pointer_moves_pupil_exactly() {
    // dist 10 is inside the 28px travel radius of a 100px eye.
    let center = Vec2::new(50.0, 50.0);
    let offset = pupil_offset(center, Vec2::new(60.0, 50.0), 100.0);
    assert!((offset.x - 10.0).abs() < 1e-4);
    assert!(offset.y.abs() < 1e-4);
}

#[test]
fn far_pointer_clamps_to_travel_radius() {
    let center = Vec2::new(50.0, 50.0);
    let offset = pupil_offset(center, Vec2::new(150.0, 50.0), 100.0);
    assert!((offset.x - 28.0).abs() < 1e-4, "offset {offset:?}");
    assert!(offset.y.abs() < 1e-4);
}

#[test]
fn clamped_offset_preserves_direction() {
    let center = Vec2::new(50.0, 50.0);
    let offset = pupil_offset(center, Vec2::new(150.0, 150.0), 100.0);
    // Diagonal pointer: clamped magnitude, equal components, signs kept.
    assert!((offset.length() - 28.0).abs() < 1e-3, "offset {offset:?}");
    assert!((offset.x - offset.y).abs() < 1e-4);

    let behind = pupil_offset(center, Vec2::new(-50.0, -50.0), 100.0);
    assert!(behind.x < 0.0 && behind.y < 0.0);
    assert!((behind.length() - 28.0).abs() < 1e-3);
}

#[test]
fn travel_radius_scales_with_eye_width() {
    let center = Vec2::new(50.0, 50.0);
    let offset = pupil_offset(center, Vec2::new(150.0, 50.0), 50.0);
    assert!((offset.x - 50.0 * PUPIL_TRAVEL_RATIO).abs() < 1e-4);
}

#[test]
fn pointer_on_center_keeps_pupil_centered() {
    let center = Vec2::new(50.0, 50.0);
    let offset = pupil_offset(center, center, 100.0);
    assert_eq!(offset, Vec2::ZERO);
}

#[test]
fn transform_string_embeds_both_offsets() {
    let s = pupil_transform(Vec2::new(28.0, -3.5));
    assert_eq!(s, "translate(calc(-50% + 28.00px), calc(-50% + -3.50px))");
}
