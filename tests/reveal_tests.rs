// Host-side tests for one-shot reveal tracking.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn first_sighting_reveals() {
    let mut tracker = RevealTracker::new(3);
    assert!(tracker.reveal(1));
    assert!(tracker.is_revealed(1));
}

#[test]
fn later_sightings_are_ignored() {
    let mut tracker = RevealTracker::new(3);
    assert!(tracker.reveal(1));
    assert!(!tracker.reveal(1));
    assert!(!tracker.reveal(1));
    assert!(tracker.is_revealed(1));
}

#[test]
fn indices_are_independent() {
    let mut tracker = RevealTracker::new(3);
    tracker.reveal(0);
    tracker.reveal(2);
    assert!(tracker.is_revealed(0));
    assert!(!tracker.is_revealed(1));
    assert!(tracker.is_revealed(2));
}

#[test]
fn out_of_range_index_is_a_no_op() {
    let mut tracker = RevealTracker::new(2);
    assert!(!tracker.reveal(5));
    assert!(!tracker.is_revealed(5));
    assert_eq!(tracker.len(), 2);
}

#[test]
fn empty_tracker_reveals_nothing() {
    let mut tracker = RevealTracker::new(0);
    assert!(tracker.is_empty());
    assert!(!tracker.reveal(0));
}
