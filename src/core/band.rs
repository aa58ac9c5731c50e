/// Vertical slice of the viewport within which an element counts as visible.
///
/// Margins are percentages of the viewport height, expressed the way the
/// intersection-observer API takes them: negative values shrink the observed
/// area inward from the top and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub top_margin_pct: i32,
    pub bottom_margin_pct: i32,
}

impl Band {
    pub const fn new(top_margin_pct: i32, bottom_margin_pct: i32) -> Self {
        Self {
            top_margin_pct,
            bottom_margin_pct,
        }
    }

    /// Root margin string understood by the intersection-observer API.
    pub fn root_margin(&self) -> String {
        format!("{}% 0px {}% 0px", self.top_margin_pct, self.bottom_margin_pct)
    }
}

// Sections highlight their TOC entry only while crossing the exact viewport
// mid-line.
pub const SECTION_BAND: Band = Band::new(-50, -50);

// Wider band shared by note-driving sections and waypoints; biased upward so
// a note switches while its source is still comfortably on screen.
pub const NOTE_BAND: Band = Band::new(-35, -60);

// Reveals fire across roughly the middle half of the viewport.
pub const REVEAL_BAND: Band = Band::new(-35, -15);
