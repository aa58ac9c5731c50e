use glam::Vec2;

// Fraction of the eye's width the pupil may travel from center. Keeps the
// pupil inside the white at every pointer position.
pub const PUPIL_TRAVEL_RATIO: f32 = 0.28;

/// Center of a bounding box given in viewport coordinates.
#[inline]
pub fn rect_center(left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(left + width / 2.0, top + height / 2.0)
}

/// Displacement to apply to a pupil so it looks toward `pointer`.
///
/// The offset points from `center` to `pointer` and its magnitude is the
/// distance clamped to the travel radius for an eye of `eye_width`. A pointer
/// exactly on the center yields a zero offset rather than a division fault.
#[inline]
pub fn pupil_offset(center: Vec2, pointer: Vec2, eye_width: f32) -> Vec2 {
    let delta = pointer - center;
    let dist = delta.length();
    if dist == 0.0 {
        return Vec2::ZERO;
    }
    let max_travel = eye_width * PUPIL_TRAVEL_RATIO;
    delta / dist * dist.min(max_travel)
}

/// Inline CSS transform carrying the gaze offset. The `-50%` terms preserve
/// the pupil's own centering; the pixel terms are the offset on top of it.
#[inline]
pub fn pupil_transform(offset: Vec2) -> String {
    format!(
        "translate(calc(-50% + {:.2}px), calc(-50% + {:.2}px))",
        offset.x, offset.y
    )
}
