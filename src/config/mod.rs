// SPDX-License-Identifier: MPL-2.0
//! This module handles the preview configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Logging filter
//! - `[gestures]` - Drag budgets, dismissal threshold, zoom levels, double-tap window
//! - `[animation]` - Snap-back and default timing durations, easing curve
//! - `[projection]` - Fade control points and indicator ramp
//!
//! Every field is optional. Missing or invalid values fall back to the
//! constants in [`defaults`] when resolved through [`Config::preview_settings`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_GLANCE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_glance::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gestures.dismiss_threshold = Some(240.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{AnimationDuration, DoubleTapWindow, ZoomLimits};
use crate::error::{Error, Result};
use crate::ui::preview::animation::Easing;
use crate::ui::preview::settings::PreviewSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Tracing filter directive (e.g., "info", "iced_glance=debug").
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter", skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

/// Gesture thresholds and zoom levels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Horizontal drag budget at neutral zoom before a pan turns the page.
    #[serde(
        default = "default_max_x_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_x_offset: Option<f32>,

    /// Vertical drag distance that dismisses the overlay on release.
    #[serde(
        default = "default_dismiss_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_threshold: Option<f32>,

    /// Scale reached by a double tap.
    #[serde(
        default = "default_double_tap_zoom",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_zoom: Option<f32>,

    /// Pinch ceiling.
    #[serde(default = "default_max_zoom", skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f32>,

    /// Maximum delay between the two taps of a double tap.
    #[serde(
        default = "default_double_tap_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_window_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            max_x_offset: default_max_x_offset(),
            dismiss_threshold: default_dismiss_threshold(),
            double_tap_zoom: default_double_tap_zoom(),
            max_zoom: default_max_zoom(),
            double_tap_window_ms: default_double_tap_window_ms(),
        }
    }
}

/// Animation timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Duration of the snap-back to the origin at neutral zoom.
    #[serde(
        default = "default_snap_back_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub snap_back_ms: Option<u64>,

    /// Duration of animations without an explicit duration.
    #[serde(default = "default_timing_ms", skip_serializing_if = "Option::is_none")]
    pub timing_ms: Option<u64>,

    /// Easing curve shared by every animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            snap_back_ms: default_snap_back_ms(),
            timing_ms: default_timing_ms(),
            easing: Some(Easing::default()),
        }
    }
}

/// Render projection control points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionConfig {
    /// Vertical offset up to which the image stays fully opaque.
    #[serde(default = "default_fade_near", skip_serializing_if = "Option::is_none")]
    pub fade_near: Option<f32>,

    /// Vertical offset at which the image is three quarters opaque.
    #[serde(default = "default_fade_far", skip_serializing_if = "Option::is_none")]
    pub fade_far: Option<f32>,

    /// Horizontal offset at which the page indicators start to appear.
    #[serde(
        default = "default_indicator_ramp_start",
        skip_serializing_if = "Option::is_none"
    )]
    pub indicator_ramp_start: Option<f32>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fade_near: default_fade_near(),
            fade_far: default_fade_far(),
            indicator_ramp_start: default_indicator_ramp_start(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Preview configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gesture thresholds and zoom levels.
    #[serde(default)]
    pub gestures: GestureConfig,

    /// Animation timings.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Render projection control points.
    #[serde(default)]
    pub projection: ProjectionConfig,
}

impl Config {
    /// Resolves the optional fields into concrete, validated settings.
    ///
    /// Distances must be finite and strictly positive; anything else falls
    /// back to its default. The fade control points must stay ordered
    /// (`near < far`) and the indicator ramp must start before the drag budget.
    #[must_use]
    pub fn preview_settings(&self) -> PreviewSettings {
        let gestures = &self.gestures;
        let animation = &self.animation;
        let projection = &self.projection;

        let max_x_offset = positive_or(gestures.max_x_offset, DEFAULT_MAX_X_OFFSET);
        let dismiss_threshold = positive_or(gestures.dismiss_threshold, DEFAULT_DISMISS_THRESHOLD);
        let zoom = ZoomLimits::new(
            gestures.double_tap_zoom.unwrap_or(DEFAULT_DOUBLE_TAP_ZOOM),
            gestures.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM),
        );
        let double_tap_window = DoubleTapWindow::from_millis(
            gestures
                .double_tap_window_ms
                .unwrap_or(DEFAULT_DOUBLE_TAP_WINDOW_MS),
        );

        let mut fade_near = positive_or(projection.fade_near, DEFAULT_FADE_NEAR);
        let mut fade_far = positive_or(projection.fade_far, DEFAULT_FADE_FAR);
        if fade_far <= fade_near {
            fade_near = DEFAULT_FADE_NEAR;
            fade_far = DEFAULT_FADE_FAR;
        }

        let mut indicator_ramp_start =
            positive_or(projection.indicator_ramp_start, DEFAULT_INDICATOR_RAMP_START);
        if indicator_ramp_start >= max_x_offset {
            indicator_ramp_start = max_x_offset / 2.0;
        }

        PreviewSettings {
            max_x_offset,
            dismiss_threshold,
            zoom,
            double_tap_window,
            snap_back: AnimationDuration::from_millis(
                animation.snap_back_ms.unwrap_or(DEFAULT_SNAP_BACK_MS),
            ),
            timing: AnimationDuration::from_millis(
                animation.timing_ms.unwrap_or(DEFAULT_TIMING_MS),
            ),
            easing: animation.easing.unwrap_or_default(),
            fade_near,
            fade_far,
            indicator_ramp_start,
        }
    }

    /// Tracing filter directive from the config, or the default.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.general
            .log_filter
            .as_deref()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn positive_or(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_log_filter() -> Option<String> {
    Some(DEFAULT_LOG_FILTER.to_string())
}

fn default_max_x_offset() -> Option<f32> {
    Some(DEFAULT_MAX_X_OFFSET)
}

fn default_dismiss_threshold() -> Option<f32> {
    Some(DEFAULT_DISMISS_THRESHOLD)
}

fn default_double_tap_zoom() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_ZOOM)
}

fn default_max_zoom() -> Option<f32> {
    Some(DEFAULT_MAX_ZOOM)
}

fn default_double_tap_window_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_TAP_WINDOW_MS)
}

fn default_snap_back_ms() -> Option<u64> {
    Some(DEFAULT_SNAP_BACK_MS)
}

fn default_timing_ms() -> Option<u64> {
    Some(DEFAULT_TIMING_MS)
}

fn default_fade_near() -> Option<f32> {
    Some(DEFAULT_FADE_NEAR)
}

fn default_fade_far() -> Option<f32> {
    Some(DEFAULT_FADE_FAR)
}

fn default_indicator_ramp_start() -> Option<f32> {
    Some(DEFAULT_INDICATOR_RAMP_START)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// Does not log. A broken file yields defaults plus a warning naming the path,
/// which the caller reports once tracing is installed.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    let warning = format!("{}: {}", path.display(), err);
                    return (Config::default(), Some(warning));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
