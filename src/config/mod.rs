//! Carousel configuration and gallery settings.
//!
//! `CarouselConfig` is the record a parent hands to the carousel. It may be
//! replaced at any time (e.g. when the viewport crosses the mobile
//! breakpoint) and is always sanitised before use so the widget stays
//! renderable whatever the caller passes in.
//!
//! `GallerySettings` is the on-disk form: a JSON file in the platform config
//! directory holding the carousel flags and the responsive card sizes.
//! Missing or malformed files fall back to defaults.

mod error;

pub use error::*;

use crate::constants::{
    DEFAULT_AUTO_PLAY_INTERVAL_MS, DEFAULT_GAP, DEFAULT_SLOT_WIDTH, DESKTOP_GAP,
    DESKTOP_SLOT_WIDTH, MIN_AUTO_PLAY_INTERVAL_MS, MIN_SLOT_WIDTH, MOBILE_BREAKPOINT, MOBILE_GAP,
    MOBILE_SLOT_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration supplied to a carousel by its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Width of each slot in pixels
    pub slot_width: f32,
    /// Gap between slots in pixels
    pub gap: f32,
    /// Render previous/next buttons
    pub show_arrows: bool,
    /// Render position dots
    pub show_dots: bool,
    /// Advance automatically on a timer
    pub auto_play: bool,
    /// Auto-advance interval in milliseconds
    pub auto_play_interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slot_width: DEFAULT_SLOT_WIDTH,
            gap: DEFAULT_GAP,
            show_arrows: true,
            show_dots: true,
            auto_play: false,
            auto_play_interval_ms: DEFAULT_AUTO_PLAY_INTERVAL_MS,
        }
    }
}

impl CarouselConfig {
    pub fn with_dimensions(mut self, dims: SlotDimensions) -> Self {
        self.slot_width = dims.slot_width;
        self.gap = dims.gap;
        self
    }

    pub fn with_auto_play(mut self, interval_ms: u64) -> Self {
        self.auto_play = true;
        self.auto_play_interval_ms = interval_ms;
        self
    }

    /// Replace out-of-contract values with the nearest safe ones.
    ///
    /// Non-positive or non-finite slot widths become 1px, negative or
    /// non-finite gaps become 0 and intervals are raised to the minimum.
    pub fn sanitized(self) -> Self {
        let mut config = self;

        if !config.slot_width.is_finite() || config.slot_width < MIN_SLOT_WIDTH {
            warn!(slot_width = config.slot_width, "Slot width out of range, using minimum");
            config.slot_width = MIN_SLOT_WIDTH;
        }
        if !config.gap.is_finite() || config.gap < 0.0 {
            warn!(gap = config.gap, "Gap out of range, using 0");
            config.gap = 0.0;
        }
        if config.auto_play_interval_ms < MIN_AUTO_PLAY_INTERVAL_MS {
            warn!(
                interval_ms = config.auto_play_interval_ms,
                "Auto-play interval too short, using minimum"
            );
            config.auto_play_interval_ms = MIN_AUTO_PLAY_INTERVAL_MS;
        }

        config
    }

    /// Drag distance beyond which a release pages.
    #[inline]
    pub fn swipe_threshold(&self) -> f32 {
        self.slot_width * crate::constants::SWIPE_DISTANCE_FRACTION
    }
}

/// Card width and gap for one side of the responsive breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotDimensions {
    pub slot_width: f32,
    pub gap: f32,
}

impl SlotDimensions {
    pub const MOBILE: Self = Self {
        slot_width: MOBILE_SLOT_WIDTH,
        gap: MOBILE_GAP,
    };

    pub const DESKTOP: Self = Self {
        slot_width: DESKTOP_SLOT_WIDTH,
        gap: DESKTOP_GAP,
    };
}

/// Persisted gallery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Flags and defaults for the project carousel
    pub carousel: CarouselConfig,
    /// Viewport width below which `mobile` dimensions apply
    pub mobile_breakpoint: f32,
    pub mobile: SlotDimensions,
    pub desktop: SlotDimensions,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            mobile_breakpoint: MOBILE_BREAKPOINT,
            mobile: SlotDimensions::MOBILE,
            desktop: SlotDimensions::DESKTOP,
        }
    }
}

impl GallerySettings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from an explicit path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "mobile_breakpoint",
                reason: format!("{} is not a usable width", self.mobile_breakpoint),
            });
        }
        Ok(())
    }

    /// Card dimensions for a viewport of the given width.
    pub fn dimensions_for_viewport(&self, viewport_width: f32) -> SlotDimensions {
        if viewport_width < self.mobile_breakpoint {
            self.mobile
        } else {
            self.desktop
        }
    }

    /// Carousel configuration for a viewport of the given width, sanitised.
    pub fn config_for_viewport(&self, viewport_width: f32) -> CarouselConfig {
        self.carousel
            .with_dimensions(self.dimensions_for_viewport(viewport_width))
            .sanitized()
    }
}

/// `<config dir>/folio/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("settings.json"))
}

