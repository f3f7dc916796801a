//! Card carousel: a horizontally paged strip of fixed-width slots.
//!
//! ## Architecture
//!
//! The carousel is split into pure logic and a thin gpui view. All layout
//! math and position state live in [`CarouselState`], which has no UI
//! dependencies and can be driven directly from tests. The [`Carousel`]
//! view owns the pieces that need a window: the slot views, the resize
//! subscription, the settling delay, the auto-advance task and the spring
//! that animates the strip.
//!
//! ## Modules
//!
//! - `layout` - Visible-slot count, maximum index, dot count, offsets
//! - `state` - Current index, navigation, drag paging, re-clamping
//! - `drag` - Pointer sample tracking and release velocity
//! - `measure` - Settling and staleness gate for width reports
//! - `spring` - Closed-form damped spring for strip repositioning
//! - `auto_advance` - Single-timer ownership for automatic advance
//! - `view` - The gpui entity that renders and wires events

mod auto_advance;
mod drag;
mod layout;
mod measure;
mod spring;
mod state;
mod view;

pub use auto_advance::{AutoAdvance, AutoAdvanceKey};
pub use drag::{DragRelease, DragTracker};
pub use layout::{CarouselLayout, dot_count, max_index, visible_slots};
pub use measure::MeasureGate;
pub use spring::{Spring, SpringConfig, SpringMotion};
pub use state::{CarouselState, DragOutcome, DragState, PageDirection};
pub use view::Carousel;
