//! Pointer drag tracking for the card strip.
//!
//! A [`DragTracker`] is created on pointer down and fed every pointer move.
//! On release it reports the total horizontal offset and an estimate of the
//! release velocity taken over the most recent samples, which is what the
//! paging decision needs.

use crate::constants::{DRAG_ELASTICITY, VELOCITY_SAMPLE_WINDOW};
use std::collections::VecDeque;
use std::time::Instant;

/// Pointer samples kept for velocity estimation
const MAX_SAMPLES: usize = 16;

/// In-progress horizontal drag.
#[derive(Debug, Clone)]
pub struct DragTracker {
    start_x: f32,
    start_time: Instant,
    /// Strip offset when the drag began
    origin_offset: f32,
    samples: VecDeque<(f32, Instant)>,
}

/// Offset and velocity of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Horizontal distance from pointer down to release; negative is leftward
    pub offset: f32,
    /// Release velocity in px/s; negative is leftward
    pub velocity: f32,
}

impl DragTracker {
    pub fn new(x: f32, at: Instant, origin_offset: f32) -> Self {
        let mut samples = VecDeque::with_capacity(MAX_SAMPLES);
        samples.push_back((x, at));
        Self {
            start_x: x,
            start_time: at,
            origin_offset,
            samples,
        }
    }

    /// Record a pointer position.
    pub fn push(&mut self, x: f32, at: Instant) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((x, at));
    }

    #[inline]
    pub fn started_at(&self) -> Instant {
        self.start_time
    }

    /// Horizontal distance travelled since pointer down.
    pub fn offset(&self) -> f32 {
        self.samples
            .back()
            .map(|(x, _)| x - self.start_x)
            .unwrap_or(0.0)
    }

    /// Velocity over the samples inside the recent window, in px/s.
    ///
    /// `now` is the release time: a pointer that stopped moving before
    /// release has its older samples aged out, so a slow, deliberate drag
    /// does not inherit the speed of its opening flick.
    pub fn velocity(&self, now: Instant) -> f32 {
        let recent: Vec<&(f32, Instant)> = self
            .samples
            .iter()
            .filter(|(_, at)| now.saturating_duration_since(*at) <= VELOCITY_SAMPLE_WINDOW)
            .collect();

        let (Some(first), Some(last)) = (recent.first(), recent.last()) else {
            return 0.0;
        };
        let dt = last.1.saturating_duration_since(first.1).as_secs_f32();
        if dt <= f32::EPSILON {
            return 0.0;
        }
        (last.0 - first.0) / dt
    }

    pub fn release(&self, now: Instant) -> DragRelease {
        DragRelease {
            offset: self.offset(),
            velocity: self.velocity(now),
        }
    }

    /// Strip offset to draw while dragging.
    ///
    /// Inside `[min_offset, 0]` the strip follows the pointer exactly; past
    /// either end the excess is scaled down by the drag elasticity.
    pub fn live_offset(&self, min_offset: f32) -> f32 {
        let raw = self.origin_offset + self.offset();
        if raw > 0.0 {
            raw * DRAG_ELASTICITY
        } else if raw < min_offset {
            min_offset + (raw - min_offset) * DRAG_ELASTICITY
        } else {
            raw
        }
    }
}
