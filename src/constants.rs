//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values so the carousel math and
//! the views agree on them.

use std::time::Duration;

// ============================================================================
// Carousel Defaults
// ============================================================================

/// Default slot (card) width in pixels
pub const DEFAULT_SLOT_WIDTH: f32 = 280.0;

/// Default gap between slots in pixels
pub const DEFAULT_GAP: f32 = 16.0;

/// Default auto-advance interval in milliseconds
pub const DEFAULT_AUTO_PLAY_INTERVAL_MS: u64 = 3000;

/// Smallest slot width accepted; anything at or below zero is replaced by this
pub const MIN_SLOT_WIDTH: f32 = 1.0;

/// Shortest auto-advance interval accepted, in milliseconds
pub const MIN_AUTO_PLAY_INTERVAL_MS: u64 = 100;

// ============================================================================
// Drag & Swipe
// ============================================================================

/// Release velocity (px/s) above which a drag always pages
pub const SWIPE_VELOCITY_THRESHOLD: f32 = 500.0;

/// Fraction of the slot width a drag must travel to page
pub const SWIPE_DISTANCE_FRACTION: f32 = 0.25;

/// Resistance applied to drag movement past either end of the strip
pub const DRAG_ELASTICITY: f32 = 0.2;

/// Window of pointer samples used for the release velocity estimate
pub const VELOCITY_SAMPLE_WINDOW: Duration = Duration::from_millis(100);

// ============================================================================
// Animation & Timing
// ============================================================================

/// Delay after mount before the first reliable measurement
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Spring stiffness for strip repositioning
pub const SPRING_STIFFNESS: f32 = 200.0;

/// Spring damping for strip repositioning
pub const SPRING_DAMPING: f32 = 30.0;

/// Spring mass for strip repositioning
pub const SPRING_MASS: f32 = 0.5;

/// Distance and speed (px, px/s) under which the spring snaps to rest
pub const SPRING_REST_EPSILON: f32 = 0.5;

/// Simulated latency of the project list fetch
pub const MOCK_LOAD_DELAY: Duration = Duration::from_millis(500);

// ============================================================================
// Responsive Presets
// ============================================================================

/// Viewport width below which the mobile card size is used
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Card width on narrow viewports
pub const MOBILE_SLOT_WIDTH: f32 = 260.0;

/// Card gap on narrow viewports
pub const MOBILE_GAP: f32 = 12.0;

/// Card width on wide viewports
pub const DESKTOP_SLOT_WIDTH: f32 = 350.0;

/// Card gap on wide viewports
pub const DESKTOP_GAP: f32 = 20.0;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Diameter of the previous/next arrow buttons
pub const ARROW_BUTTON_SIZE: f32 = 40.0;

/// Height of a pagination dot
pub const DOT_SIZE: f32 = 8.0;

/// Width of the active pagination dot
pub const ACTIVE_DOT_WIDTH: f32 = 16.0;

/// Vertical padding around the card strip
pub const STRIP_PADDING_Y: f32 = 16.0;

/// Height of the project card
pub const CARD_HEIGHT: f32 = 320.0;

/// Border radius - Medium (cards)
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Border radius - Full (pills, round buttons)
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

/// Padding - Small
pub const PADDING_SM: f32 = 8.0;

/// Padding - Large
pub const PADDING_LG: f32 = 16.0;

/// Gap spacing - Small
pub const GAP_SM: f32 = 4.0;

/// Gap spacing - Medium
pub const GAP_MD: f32 = 8.0;
