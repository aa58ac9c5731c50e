// Host-side tests for TOC anchor parsing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod toc {
    include!("../src/core/toc.rs");
}

use toc::*;

#[test]
fn fragment_href_yields_the_id() {
    assert_eq!(anchor_id("#intro"), Some("intro"));
    assert_eq!(anchor_id("#a"), Some("a"));
}

#[test]
fn non_fragment_hrefs_are_rejected() {
    assert_eq!(anchor_id("https://example.com/#intro"), None);
    assert_eq!(anchor_id("/docs"), None);
    assert_eq!(anchor_id("intro"), None);
}

#[test]
fn degenerate_hrefs_are_rejected() {
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id(""), None);
}
