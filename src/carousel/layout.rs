//! Layout math for the card strip.
//!
//! Everything here is a pure function of the slot count, the slot
//! dimensions and the measured container width. Nothing is cached: callers
//! recompute a [`CarouselLayout`] whenever they need one.

/// Derived layout for one (slot count, dimensions, width) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    /// Number of slots that fit in the container, at least 1
    pub visible_slots: usize,
    /// Largest index the strip may rest at without overscrolling
    pub max_index: usize,
    /// Number of position dots, at least 1
    pub dot_count: usize,
    /// Distance between leading edges of adjacent slots (width + gap)
    pub pitch: f32,
}

impl CarouselLayout {
    pub fn compute(slot_count: usize, slot_width: f32, gap: f32, container_width: f32) -> Self {
        let pitch = slot_width + gap;
        let visible_slots = visible_slots(container_width, pitch);
        Self {
            visible_slots,
            max_index: max_index(slot_count, visible_slots),
            dot_count: dot_count(slot_count, visible_slots),
            pitch,
        }
    }

    /// Clamp an arbitrary (possibly negative) index into `[0, max_index]`.
    #[inline]
    pub fn clamp_index(&self, index: isize) -> usize {
        if index <= 0 {
            0
        } else {
            (index as usize).min(self.max_index)
        }
    }

    /// Horizontal strip offset for a resting index.
    #[inline]
    pub fn offset_for(&self, index: usize) -> f32 {
        -(index as f32) * self.pitch
    }

    /// Most negative offset a resting strip can have.
    #[inline]
    pub fn min_offset(&self) -> f32 {
        self.offset_for(self.max_index)
    }
}

/// `floor(container_width / pitch)`, never below 1.
///
/// A container that has not been laid out yet (zero width), a degenerate
/// pitch or a non-finite measurement all yield a single visible slot.
pub fn visible_slots(container_width: f32, pitch: f32) -> usize {
    if !container_width.is_finite() || !pitch.is_finite() || container_width <= 0.0 || pitch <= 0.0 {
        return 1;
    }
    ((container_width / pitch).floor() as usize).max(1)
}

/// `max(0, slot_count - visible_slots)`
#[inline]
pub fn max_index(slot_count: usize, visible_slots: usize) -> usize {
    slot_count.saturating_sub(visible_slots)
}

/// `max(1, slot_count - visible_slots + 1)`
#[inline]
pub fn dot_count(slot_count: usize, visible_slots: usize) -> usize {
    max_index(slot_count, visible_slots) + 1
}
