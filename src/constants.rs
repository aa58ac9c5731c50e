//! Markup contract: the selectors, attribute names, and class names that
//! bind each behavior to the host document.

// Eyes
pub const EYE_SELECTOR: &str = ".eye";
pub const PUPIL_SELECTOR: &str = ".pupil";

// Table of contents
pub const TOC_LINK_SELECTOR: &str = ".toc a";
pub const SECTION_SELECTOR: &str = ".section";

// Notes rail
pub const NOTE_SELECTOR: &str = ".right .note";
pub const NOTE_FOR_ATTR: &str = "data-for"; // panel side: the key that shows it
pub const NOTE_KEY_ATTR: &str = "data-note-key"; // waypoint side: the key it forces
pub const WAYPOINT_SELECTOR: &str = "[data-note-key]";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const STAGGER_SELECTOR: &str = "[data-stagger]";
pub const STAGGER_INDEX_PROP: &str = "--i"; // CSS derives per-child delays from this

// Shared class names
pub const ACTIVE_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "is-in";
