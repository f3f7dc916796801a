//! Timing instrumentation for the carousel hot paths.
//!
//! `profile_scope!` wraps measurement, drag moves and rendering in a
//! [`ScopedTimer`] that reports through `tracing` when the scope runs over
//! its budget. Without the `profiling` feature the macro expands to
//! nothing.
//!
//! ```ignore
//! fn measure(&mut self) {
//!     profile_scope!("carousel_measure");
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::debug;

/// Frame budget at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Budget for scopes that are a small slice of a frame
pub const SCOPE_BUDGET_MS: f64 = 1.0;

/// Time the enclosing scope. Takes an optional budget in milliseconds,
/// [`SCOPE_BUDGET_MS`] by default.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        $crate::profile_scope!($name, $crate::perf::SCOPE_BUDGET_MS)
    };
    ($name:expr, $budget_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $budget_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $budget_ms);
    };
}

pub use profile_scope;

/// Reports the scope's duration on drop if it exceeded `budget_ms`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    budget_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, budget_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            budget_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Whether the scope has run past its budget so far.
    pub fn over_budget(&self) -> bool {
        self.elapsed_ms() > self.budget_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if self.over_budget() {
            debug!(
                scope = self.name,
                elapsed_ms = self.elapsed_ms(),
                budget_ms = self.budget_ms,
                "[PERF] scope over budget"
            );
        }
    }
}
