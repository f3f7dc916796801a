//! Unit tests for drag release paging.

use crate::helpers::{TestCarouselBuilder, simulate_drag};
use folio::carousel::PageDirection;
use std::time::Duration;

#[test]
fn test_far_drag_left_pages_forward() {
    // 100px > 350 / 4 = 87.5px
    let mut state = TestCarouselBuilder::new(5).visible(2).build();
    let outcome = state.on_drag_release(-100.0, 0.0);
    assert_eq!(outcome.paged, Some(PageDirection::Next));
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_short_slow_drag_snaps_back() {
    let mut state = TestCarouselBuilder::new(5).visible(2).at_index(1).build();
    let outcome = state.on_drag_release(30.0, 50.0);
    assert_eq!(outcome.paged, None);
    assert_eq!(outcome.index, 1);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_fast_flick_pages_by_offset_sign() {
    let mut state = TestCarouselBuilder::new(5).visible(2).at_index(1).build();
    state.on_drag_release(-5.0, 600.0);
    assert_eq!(state.current_index(), 2);

    state.on_drag_release(5.0, 600.0);
    assert_eq!(state.current_index(), 1);

    state.on_drag_release(5.0, -600.0);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn test_far_drag_right_pages_back() {
    let mut state = TestCarouselBuilder::new(5).visible(2).at_index(2).build();
    let outcome = state.on_drag_release(120.0, 10.0);
    assert_eq!(outcome.paged, Some(PageDirection::Previous));
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_threshold_is_exclusive() {
    let mut state = TestCarouselBuilder::new(5).visible(2).build();
    state.on_drag_release(-87.5, 500.0);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn test_paging_clamped_at_both_ends() {
    let mut state = TestCarouselBuilder::new(5).visible(2).build();
    state.on_drag_release(200.0, 0.0);
    assert_eq!(state.current_index(), 0);

    state.go_to_index(3);
    state.on_drag_release(-200.0, -900.0);
    assert_eq!(state.current_index(), 3);
}

#[test]
fn test_gesture_lifecycle_pages_on_long_drag() {
    let mut state = TestCarouselBuilder::new(5).visible(2).build();
    // Slow drag: 20px every 50ms, 120px total
    let path = [480.0, 460.0, 440.0, 420.0, 400.0, 380.0];
    let outcome = simulate_drag(&mut state, 500.0, &path, Duration::from_millis(50))
        .expect("drag in progress");

    assert!(!state.is_dragging());
    assert_eq!(outcome.release.offset, -120.0);
    assert!(outcome.release.velocity.abs() < 500.0);
    assert_eq!(outcome.paged, Some(PageDirection::Next));
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_gesture_lifecycle_fast_flick() {
    let mut state = TestCarouselBuilder::new(5).visible(2).at_index(2).build();
    // 40px in 32ms is 1250px/s
    let outcome = simulate_drag(&mut state, 300.0, &[320.0, 340.0], Duration::from_millis(16))
        .expect("drag in progress");

    assert!(outcome.release.velocity > 500.0);
    assert_eq!(outcome.paged, Some(PageDirection::Previous));
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_gesture_lifecycle_tap_does_not_page() {
    let mut state = TestCarouselBuilder::new(5).visible(2).at_index(1).build();
    let outcome = simulate_drag(&mut state, 300.0, &[], Duration::from_millis(16))
        .expect("drag in progress");
    assert_eq!(outcome.paged, None);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_cancelled_drag_keeps_index() {
    let mut state = TestCarouselBuilder::new(5).visible(2).at_index(1).build();
    let t0 = std::time::Instant::now();
    state.begin_drag(300.0, t0, state.strip_offset());
    state.drag_to(100.0, t0 + Duration::from_millis(20));
    state.cancel_drag();
    assert!(!state.is_dragging());
    assert!(state.end_drag(t0 + Duration::from_millis(40)).is_none());
    assert_eq!(state.current_index(), 1);
}
