// Host-side tests for viewport band margins.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod band {
    include!("../src/core/band.rs");
}

use band::*;

#[test]
fn root_margin_formats_both_percentages() {
    assert_eq!(Band::new(-35, -60).root_margin(), "-35% 0px -60% 0px");
    assert_eq!(Band::new(10, 0).root_margin(), "10% 0px 0% 0px");
}

#[test]
fn section_band_is_the_viewport_midline() {
    assert_eq!(SECTION_BAND.root_margin(), "-50% 0px -50% 0px");
}

#[test]
fn note_band_is_biased_upward() {
    assert_eq!(NOTE_BAND.root_margin(), "-35% 0px -60% 0px");
}

#[test]
fn reveal_band_covers_the_middle_half() {
    assert_eq!(REVEAL_BAND.root_margin(), "-35% 0px -15% 0px");
}
