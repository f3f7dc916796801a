//! Test helpers and builders for reducing boilerplate in tests.
//!
//! - `TestCarouselBuilder` - Builder for measured carousel states
//! - `simulate_drag()` - Feed a pointer gesture through the drag lifecycle

use folio::carousel::{CarouselState, DragOutcome};
use folio::config::CarouselConfig;
use std::time::{Duration, Instant};

/// Slot width used by most tests (the desktop card size)
pub const SLOT_WIDTH: f32 = 350.0;

/// Gap used by most tests
pub const GAP: f32 = 20.0;

/// Container width that fits exactly `n` slots at the default test dimensions
pub fn width_for(visible: usize) -> f32 {
    visible as f32 * (SLOT_WIDTH + GAP) + 10.0
}

/// Builder for carousel states.
///
/// # Example
/// ```ignore
/// let state = TestCarouselBuilder::new(5).visible(2).at_index(1).build();
/// ```
pub struct TestCarouselBuilder {
    slots: usize,
    config: CarouselConfig,
    width: Option<f32>,
    index: isize,
}

impl TestCarouselBuilder {
    pub fn new(slots: usize) -> Self {
        Self {
            slots,
            config: CarouselConfig {
                slot_width: SLOT_WIDTH,
                gap: GAP,
                ..CarouselConfig::default()
            },
            width: None,
            index: 0,
        }
    }

    /// Measure a container that shows `n` slots.
    pub fn visible(mut self, n: usize) -> Self {
        self.width = Some(width_for(n));
        self
    }

    /// Measure a container of an explicit width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    pub fn auto_play(mut self, interval_ms: u64) -> Self {
        self.config = self.config.with_auto_play(interval_ms);
        self
    }

    pub fn at_index(mut self, index: isize) -> Self {
        self.index = index;
        self
    }

    pub fn build(self) -> CarouselState {
        let mut state = CarouselState::new(self.config, self.slots);
        if let Some(width) = self.width {
            state.measure(width);
        }
        state.go_to_index(self.index);
        state
    }
}

/// Drag from `start_x` through `path` (one sample every `step`), then release.
pub fn simulate_drag(
    state: &mut CarouselState,
    start_x: f32,
    path: &[f32],
    step: Duration,
) -> Option<DragOutcome> {
    let t0 = Instant::now();
    let origin = state.strip_offset();
    state.begin_drag(start_x, t0, origin);
    let mut at = t0;
    for x in path {
        at += step;
        state.drag_to(*x, at);
    }
    state.end_drag(at)
}
