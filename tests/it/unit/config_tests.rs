//! Unit tests for carousel configuration and gallery settings.

use folio::config::{CarouselConfig, ConfigError, GallerySettings, SlotDimensions};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_carousel_defaults() {
    let config = CarouselConfig::default();
    assert_eq!(config.slot_width, 280.0);
    assert_eq!(config.gap, 16.0);
    assert!(config.show_arrows);
    assert!(config.show_dots);
    assert!(!config.auto_play);
    assert_eq!(config.auto_play_interval_ms, 3000);
}

#[test]
fn test_sanitize_out_of_range_values() {
    let config = CarouselConfig {
        slot_width: -10.0,
        gap: -4.0,
        auto_play_interval_ms: 0,
        ..CarouselConfig::default()
    }
    .sanitized();
    assert_eq!(config.slot_width, 1.0);
    assert_eq!(config.gap, 0.0);
    assert_eq!(config.auto_play_interval_ms, 100);

    let config = CarouselConfig {
        slot_width: f32::NAN,
        gap: f32::INFINITY,
        ..CarouselConfig::default()
    }
    .sanitized();
    assert_eq!(config.slot_width, 1.0);
    assert_eq!(config.gap, 0.0);
}

#[test]
fn test_sanitize_leaves_valid_config_alone() {
    let config = CarouselConfig::default().with_auto_play(2000);
    assert_eq!(config.sanitized(), config);
}

#[test]
fn test_swipe_threshold_is_quarter_slot() {
    let config = CarouselConfig::default().with_dimensions(SlotDimensions::DESKTOP);
    assert_eq!(config.swipe_threshold(), 87.5);
}

#[test]
fn test_viewport_presets() {
    let settings = GallerySettings::default();

    let mobile = settings.config_for_viewport(500.0);
    assert_eq!((mobile.slot_width, mobile.gap), (260.0, 12.0));

    let desktop = settings.config_for_viewport(768.0);
    assert_eq!((desktop.slot_width, desktop.gap), (350.0, 20.0));

    assert_eq!(settings.dimensions_for_viewport(767.9), SlotDimensions::MOBILE);
}

#[test]
fn test_partial_settings_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "carousel": { "auto_play": true } }"#).unwrap();

    let settings = GallerySettings::load_from(&path).unwrap();
    assert!(settings.carousel.auto_play);
    assert_eq!(settings.carousel.auto_play_interval_ms, 3000);
    assert_eq!(settings.mobile_breakpoint, 768.0);
    assert_eq!(settings.desktop, SlotDimensions::DESKTOP);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = GallerySettings::default();
    settings.carousel = settings.carousel.with_auto_play(5000);
    settings.mobile_breakpoint = 640.0;
    settings.save_to(&path).unwrap();

    assert_eq!(GallerySettings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let err = GallerySettings::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = GallerySettings::load_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_negative_breakpoint_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "mobile_breakpoint": -1.0 }"#).unwrap();

    match GallerySettings::load_from(&path) {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "mobile_breakpoint"),
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_viewport_config_is_sanitised() {
    let settings = GallerySettings {
        mobile: SlotDimensions {
            slot_width: 0.0,
            gap: -3.0,
        },
        ..GallerySettings::default()
    };
    let config = settings.config_for_viewport(320.0);
    assert_eq!(config.slot_width, 1.0);
    assert_eq!(config.gap, 0.0);
}
