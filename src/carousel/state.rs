//! Carousel position state machine.
//!
//! Owns the current index and the drag state, and derives everything else
//! (layout, navigation availability, dots, strip offset) from the slot
//! count, the configuration and the last container measurement.
//!
//! ## Invariant
//!
//! After every mutating call `current_index <= layout().max_index`.
//!
//! ## Drag Transitions
//!
//! ```text
//! Idle -> Dragging   (begin_drag: pointer down on the strip)
//! Dragging -> Dragging (drag_to: pointer move)
//! Dragging -> Idle   (end_drag: pointer up, may page)
//! Dragging -> Idle   (cancel_drag: no paging)
//! ```

use super::auto_advance::AutoAdvanceKey;
use super::drag::{DragRelease, DragTracker};
use super::layout::CarouselLayout;
use crate::config::CarouselConfig;
use crate::constants::SWIPE_VELOCITY_THRESHOLD;
use std::time::Instant;
use tracing::debug;

/// Pointer interaction state.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No pointer interaction
    #[default]
    Idle,
    /// Pointer is down on the strip
    Dragging(DragTracker),
}

/// Which way a page change went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub release: DragRelease,
    /// Direction paged, or `None` when the strip snapped back
    pub paged: Option<PageDirection>,
    /// Index after the release (clamped)
    pub index: usize,
}

/// Position state for one mounted carousel.
#[derive(Debug, Clone)]
pub struct CarouselState {
    config: CarouselConfig,
    slot_count: usize,
    container_width: f32,
    current_index: usize,
    drag: DragState,
}

impl CarouselState {
    pub fn new(config: CarouselConfig, slot_count: usize) -> Self {
        Self {
            config: config.sanitized(),
            slot_count,
            container_width: 0.0,
            current_index: 0,
            drag: DragState::Idle,
        }
    }

    // ------------------------------------------------------------------
    // Accessors and derived values
    // ------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    #[inline]
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn layout(&self) -> CarouselLayout {
        CarouselLayout::compute(
            self.slot_count,
            self.config.slot_width,
            self.config.gap,
            self.container_width,
        )
    }

    #[inline]
    pub fn visible_slots(&self) -> usize {
        self.layout().visible_slots
    }

    #[inline]
    pub fn max_index(&self) -> usize {
        self.layout().max_index
    }

    #[inline]
    pub fn dot_count(&self) -> usize {
        self.layout().dot_count
    }

    #[inline]
    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    #[inline]
    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index()
    }

    #[inline]
    pub fn is_dot_active(&self, dot: usize) -> bool {
        dot == self.current_index
    }

    /// Whether the dot row should be drawn at all.
    pub fn shows_dots(&self) -> bool {
        self.config.show_dots && self.dot_count() > 1
    }

    /// Resting strip offset for the current index.
    pub fn strip_offset(&self) -> f32 {
        self.layout().offset_for(self.current_index)
    }

    /// Offset to draw right now: the live drag position while dragging,
    /// otherwise the resting offset.
    pub fn display_offset(&self) -> f32 {
        match &self.drag {
            DragState::Dragging(tracker) => tracker.live_offset(self.layout().min_offset()),
            DragState::Idle => self.strip_offset(),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Step back one slot. Returns true if the index changed.
    pub fn go_previous(&mut self) -> bool {
        self.set_index(self.current_index as isize - 1)
    }

    /// Step forward one slot. Returns true if the index changed.
    pub fn go_next(&mut self) -> bool {
        self.set_index(self.current_index as isize + 1)
    }

    /// Jump to `index`, clamped into the valid range.
    ///
    /// Stale dot counts can ask for indices past the end; those land on
    /// the last valid index rather than failing.
    pub fn go_to_index(&mut self, index: isize) -> bool {
        self.set_index(index)
    }

    /// What the auto-advance timer should be armed for, or `None` when it
    /// should not run (auto-play off, or a drag holding the strip).
    pub fn auto_advance_key(&self) -> Option<AutoAdvanceKey> {
        if !self.config.auto_play || self.is_dragging() {
            return None;
        }
        Some(AutoAdvanceKey {
            interval_ms: self.config.auto_play_interval_ms,
            index: self.current_index,
            slot_count: self.slot_count,
            visible_slots: self.visible_slots(),
        })
    }

    /// One auto-advance step: forward, or back to the start from the end.
    pub fn auto_advance_tick(&mut self) -> bool {
        if self.current_index < self.max_index() {
            self.go_next()
        } else {
            tracing::trace!("Auto-advance wrapping to start");
            self.set_index(0)
        }
    }

    fn set_index(&mut self, index: isize) -> bool {
        let next = self.layout().clamp_index(index);
        if next == self.current_index {
            return false;
        }
        debug!(from = self.current_index, to = next, "Carousel index changed");
        self.current_index = next;
        true
    }

    // ------------------------------------------------------------------
    // Measurement and configuration
    // ------------------------------------------------------------------

    /// Record a new container width and re-clamp the index.
    pub fn measure(&mut self, container_width: f32) {
        crate::profile_scope!("carousel_measure");

        let width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };
        if width != self.container_width {
            self.container_width = width;
            debug!(
                width,
                visible = self.visible_slots(),
                max_index = self.max_index(),
                "Carousel measured"
            );
        }
        self.reclamp();
    }

    /// Replace the slot count (e.g. a refreshed project list).
    pub fn set_slot_count(&mut self, slot_count: usize) {
        self.slot_count = slot_count;
        self.reclamp();
    }

    /// Replace the configuration (e.g. a breakpoint change).
    pub fn set_config(&mut self, config: CarouselConfig) {
        self.config = config.sanitized();
        self.reclamp();
    }

    fn reclamp(&mut self) {
        let max = self.max_index();
        if self.current_index > max {
            debug!(from = self.current_index, to = max, "Re-clamping carousel index");
            self.current_index = max;
        }
    }

    // ------------------------------------------------------------------
    // Drag
    // ------------------------------------------------------------------

    /// Start a drag at pointer `x`, grabbing the strip at `origin_offset`.
    ///
    /// The origin is wherever the strip is drawn at the moment of the
    /// press, which is mid-animation if a reposition is still running.
    pub fn begin_drag(&mut self, x: f32, at: Instant, origin_offset: f32) {
        self.drag = DragState::Dragging(DragTracker::new(x, at, origin_offset));
    }

    /// Feed a pointer move. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, x: f32, at: Instant) -> bool {
        crate::profile_scope!("carousel_drag_move");

        match &mut self.drag {
            DragState::Dragging(tracker) => {
                tracker.push(x, at);
                true
            }
            DragState::Idle => false,
        }
    }

    /// Finish the drag and apply the paging decision.
    pub fn end_drag(&mut self, at: Instant) -> Option<DragOutcome> {
        let DragState::Dragging(tracker) = std::mem::take(&mut self.drag) else {
            return None;
        };
        let release = tracker.release(at);
        debug!(
            offset = release.offset,
            velocity = release.velocity,
            held_ms = at.saturating_duration_since(tracker.started_at()).as_millis() as u64,
            "Drag released"
        );
        Some(self.on_drag_release(release.offset, release.velocity))
    }

    /// Abandon a drag without paging.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Decide whether a released drag pages.
    ///
    /// Pages when the release is fast (`|velocity| > 500` px/s) or far
    /// (`|offset| > slot_width / 4`). A rightward drag goes to the previous
    /// slot, anything else to the next one. Otherwise the strip snaps back.
    pub fn on_drag_release(&mut self, offset: f32, velocity: f32) -> DragOutcome {
        self.drag = DragState::Idle;
        let release = DragRelease { offset, velocity };

        let fast = velocity.abs() > SWIPE_VELOCITY_THRESHOLD;
        let far = offset.abs() > self.config.swipe_threshold();
        if !(fast || far) {
            return DragOutcome {
                release,
                paged: None,
                index: self.current_index,
            };
        }

        let direction = if offset > 0.0 {
            PageDirection::Previous
        } else {
            PageDirection::Next
        };
        let changed = match direction {
            PageDirection::Previous => self.go_previous(),
            PageDirection::Next => self.go_next(),
        };

        DragOutcome {
            release,
            paged: changed.then_some(direction),
            index: self.current_index,
        }
    }
}
