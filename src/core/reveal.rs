/// Records which revealable elements have already fired.
///
/// Reveals are one-shot: the first mark for an index reports `true`, every
/// later mark (and any out-of-range index) reports `false`, and nothing ever
/// un-reveals. Callers stop watching an element once it reports `true`.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Marks `index` revealed; `true` exactly once per index.
    pub fn reveal(&mut self, index: usize) -> bool {
        if let Some(flag) = self.revealed.get_mut(index) {
            if !*flag {
                *flag = true;
                return true;
            }
        }
        false
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
