//! Unit tests for layout math and derived display values.

use crate::helpers::{TestCarouselBuilder, width_for};
use folio::carousel::{CarouselLayout, CarouselState, dot_count, max_index};
use folio::config::CarouselConfig;

#[test]
fn test_max_index_formula_holds_for_all_sizes() {
    for slots in 0..12 {
        for visible in 1..6 {
            let state = TestCarouselBuilder::new(slots).visible(visible).build();
            assert_eq!(state.visible_slots(), visible);
            assert_eq!(state.max_index(), slots.saturating_sub(visible), "N={slots} V={visible}");
            assert_eq!(state.dot_count(), (slots + 1).saturating_sub(visible).max(1));
        }
    }
}

#[test]
fn test_dot_count_example() {
    let state = TestCarouselBuilder::new(5).visible(2).build();
    assert_eq!(state.dot_count(), 4);
    assert_eq!(dot_count(5, 2), 4);
    assert_eq!(max_index(5, 2), 3);
}

#[test]
fn test_zero_slots_edge_case() {
    let state = TestCarouselBuilder::new(0).visible(3).build();
    assert_eq!(state.visible_slots(), 3);
    assert_eq!(state.max_index(), 0);
    assert_eq!(state.dot_count(), 1);
    assert!(!state.can_go_previous());
    assert!(!state.can_go_next());
}

#[test]
fn test_zero_width_container_shows_one_slot() {
    let state = TestCarouselBuilder::new(4).width(0.0).build();
    assert_eq!(state.visible_slots(), 1);
    assert_eq!(state.max_index(), 3);
}

#[test]
fn test_narrow_container_still_shows_one_slot() {
    let state = TestCarouselBuilder::new(4).width(120.0).build();
    assert_eq!(state.visible_slots(), 1);
}

#[test]
fn test_non_positive_slot_width_is_sanitised() {
    let config = CarouselConfig {
        slot_width: 0.0,
        gap: 0.0,
        ..CarouselConfig::default()
    };
    let mut state = CarouselState::new(config, 10);
    state.measure(4.0);
    assert_eq!(state.config().slot_width, 1.0);
    assert_eq!(state.visible_slots(), 4);
    assert_eq!(state.max_index(), 6);
}

#[test]
fn test_navigation_flags() {
    let mut state = TestCarouselBuilder::new(5).visible(2).build();
    assert!(!state.can_go_previous());
    assert!(state.can_go_next());

    state.go_to_index(3);
    assert!(state.can_go_previous());
    assert!(!state.can_go_next());
}

#[test]
fn test_active_dot_tracks_index() {
    let state = TestCarouselBuilder::new(5).visible(2).at_index(2).build();
    let active: Vec<usize> = (0..state.dot_count()).filter(|d| state.is_dot_active(*d)).collect();
    assert_eq!(active, vec![2]);
}

#[test]
fn test_dots_hidden_when_everything_fits() {
    let state = TestCarouselBuilder::new(3).visible(3).build();
    assert_eq!(state.dot_count(), 1);
    assert!(!state.shows_dots());

    let state = TestCarouselBuilder::new(5).visible(2).build();
    assert!(state.shows_dots());

    let config = CarouselConfig {
        show_dots: false,
        ..CarouselConfig::default()
    };
    let state = TestCarouselBuilder::new(5).config(config).visible(2).build();
    assert!(!state.shows_dots());
}

#[test]
fn test_strip_offset_is_index_times_pitch() {
    let state = TestCarouselBuilder::new(5).visible(2).at_index(3).build();
    assert_eq!(state.strip_offset(), -3.0 * 370.0);
    assert_eq!(state.display_offset(), state.strip_offset());
}

#[test]
fn test_layout_compute_matches_state() {
    let state = TestCarouselBuilder::new(7).visible(3).build();
    let layout = CarouselLayout::compute(7, 350.0, 20.0, width_for(3));
    assert_eq!(state.layout(), layout);
    assert_eq!(layout.pitch, 370.0);
}
