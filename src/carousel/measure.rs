//! When a reported container width should be applied.
//!
//! Widths reported right after the carousel is inserted are unreliable, so
//! nothing is applied until the settling delay has passed. After that a
//! width is applied when it differs from the last one, or unconditionally
//! once something (a resize, new slots, a config change) marked the
//! measurement stale.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureGate {
    settled: bool,
    stale: bool,
}

impl Default for MeasureGate {
    fn default() -> Self {
        Self {
            settled: false,
            stale: true,
        }
    }
}

impl MeasureGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The settling delay has elapsed; the next report is applied.
    pub fn settle(&mut self) {
        self.settled = true;
        self.stale = true;
    }

    /// Force the next report through even if the width is unchanged.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Decide whether `width` should be measured, given the width last
    /// applied. Accepting a report clears the stale flag.
    pub fn accept(&mut self, width: f32, applied_width: f32) -> bool {
        if !self.settled {
            return false;
        }
        if !self.stale && width == applied_width {
            return false;
        }
        self.stale = false;
        true
    }
}
