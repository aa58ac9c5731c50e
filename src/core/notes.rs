use instant::Instant;
use std::time::Duration;

/// How long section-driven selection stays suppressed after a waypoint
/// sighting, so the waypoint's note survives the scroll that brought it in.
pub const WAYPOINT_LOCK: Duration = Duration::from_millis(300);

/// Decides which note panel is shown.
///
/// Panels are registered up front by key, in document order. Waypoint
/// sightings select their panel and hold a lock for [`WAYPOINT_LOCK`];
/// repeated sightings overwrite the deadline rather than stacking timers.
/// Section sightings only apply while no lock is pending. Keys without a
/// registered panel never change anything; in particular they never blank
/// the currently shown note.
#[derive(Debug)]
pub struct NoteController {
    keys: Vec<String>,
    active: Option<usize>,
    lock_until: Option<Instant>,
}

impl NoteController {
    /// `keys` are the panel keys present in the document, in document order.
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys,
            active: None,
            lock_until: None,
        }
    }

    /// Key of the panel currently selected, if any.
    pub fn active_key(&self) -> Option<&str> {
        self.active.map(|i| self.keys[i].as_str())
    }

    /// True while a waypoint still holds selection authority.
    pub fn locked(&self, now: Instant) -> bool {
        self.lock_until.is_some_and(|until| now < until)
    }

    /// A waypoint scrolled into view. Returns the panel index to show, or
    /// `None` for an unknown key (in which case the lock is untouched too).
    pub fn waypoint_seen(&mut self, key: &str, now: Instant) -> Option<usize> {
        let idx = self.index_of(key)?;
        self.active = Some(idx);
        self.lock_until = Some(now + WAYPOINT_LOCK);
        Some(idx)
    }

    /// A linked section scrolled into view. Ignored while a waypoint lock is
    /// pending and for ids without a panel.
    pub fn section_seen(&mut self, key: &str, now: Instant) -> Option<usize> {
        if self.locked(now) {
            return None;
        }
        let idx = self.index_of(key)?;
        self.active = Some(idx);
        Some(idx)
    }

    /// Selection shown before any scrolling: the first waypoint's key wins,
    /// then the first section's id. No cascade; if the preferred key has no
    /// panel, nothing is selected.
    pub fn initial(
        &mut self,
        first_waypoint_key: Option<&str>,
        first_section_id: Option<&str>,
    ) -> Option<usize> {
        let key = first_waypoint_key.or(first_section_id)?;
        let idx = self.index_of(key)?;
        self.active = Some(idx);
        Some(idx)
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }
}
