//! Ownership of the auto-advance timer.
//!
//! The timer must be re-armed whenever anything it depends on changes (the
//! interval, the current index, the slot count, the visible-slot count) and
//! released when auto-play is switched off or the carousel goes away. At
//! most one timer is ever alive: the previous handle is dropped before the
//! next one is armed.
//!
//! The handle type is generic so the scheduling rules can be tested without
//! a UI executor; the gpui view uses `gpui::Task<()>`, whose drop cancels
//! the task.

use std::time::Duration;

/// Everything the running timer depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceKey {
    pub interval_ms: u64,
    pub index: usize,
    pub slot_count: usize,
    pub visible_slots: usize,
}

impl AutoAdvanceKey {
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Holds the live timer handle and the key it was armed for.
#[derive(Debug)]
pub struct AutoAdvance<H> {
    armed: Option<(AutoAdvanceKey, H)>,
}

impl<H> Default for AutoAdvance<H> {
    fn default() -> Self {
        Self { armed: None }
    }
}

impl<H> AutoAdvance<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the timer in line with `key`.
    ///
    /// `None` means auto-play is off: any live timer is released. A changed
    /// key releases the old timer and then calls `arm` for a new one. An
    /// unchanged key leaves the running timer alone. Returns true if a new
    /// timer was armed.
    pub fn sync(&mut self, key: Option<AutoAdvanceKey>, arm: impl FnOnce(Duration) -> H) -> bool {
        let current = self.armed.as_ref().map(|(k, _)| *k);
        if current == key {
            return false;
        }

        // Release before arming so two timers never overlap
        self.armed = None;

        match key {
            Some(key) => {
                tracing::trace!(?key, "Arming auto-advance timer");
                let handle = arm(key.interval());
                self.armed = Some((key, handle));
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    #[inline]
    pub fn armed_key(&self) -> Option<AutoAdvanceKey> {
        self.armed.as_ref().map(|(k, _)| *k)
    }
}
