// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the preview overlay. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Neutral, double-tap and pinch ceiling levels
//! - **Gestures**: Drag budgets and dismissal thresholds
//! - **Animation**: Snap-back and default timing durations
//! - **Projection**: Fade control points and indicator ramps

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale at which the image fits the overlay (no zoom).
pub const NEUTRAL_ZOOM: f32 = 1.0;

/// Scale reached by a double tap from neutral.
pub const DEFAULT_DOUBLE_TAP_ZOOM: f32 = 2.0;

/// Ceiling enforced continuously while pinching.
pub const DEFAULT_MAX_ZOOM: f32 = 3.0;

/// Upper bound accepted from the config file for the pinch ceiling.
pub const MAX_ZOOM_LIMIT: f32 = 10.0;

/// Tolerance used when comparing an animated scale against neutral.
pub const ZOOM_EPSILON: f32 = 1e-4;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal drag budget (logical units, at neutral zoom) before a pan is
/// treated as a page turn. Scaled by the current zoom while dragging.
pub const DEFAULT_MAX_X_OFFSET: f32 = 100.0;

/// Vertical drag distance beyond which releasing dismisses the overlay.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 200.0;

/// Maximum delay between two taps for them to count as a double tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 250;

/// Bounds accepted from the config file for the double-tap window.
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 50;
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1_000;

/// Pointer travel below which a press/release pair counts as a tap.
pub const TAP_SLOP: f32 = 8.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the snap-back to the origin at neutral zoom.
pub const DEFAULT_SNAP_BACK_MS: u64 = 100;

/// Duration used by animations that do not request a specific one
/// (page-turn recentering, zoom toggles).
pub const DEFAULT_TIMING_MS: u64 = 300;

/// Upper bound accepted from the config file for any animation duration.
pub const MAX_ANIMATION_MS: u64 = 2_000;

/// Interval between animation ticks while something is moving (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Projection Defaults
// ==========================================================================

/// Vertical offset up to which the image stays fully opaque.
pub const DEFAULT_FADE_NEAR: f32 = 100.0;

/// Vertical offset at which the image has faded to three quarters.
pub const DEFAULT_FADE_FAR: f32 = 200.0;

/// Opacity reached at `DEFAULT_FADE_FAR`.
pub const FADE_FAR_OPACITY: f32 = 0.75;

/// Horizontal offset at which the previous/next indicator starts to appear.
pub const DEFAULT_INDICATOR_RAMP_START: f32 = 50.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(NEUTRAL_ZOOM > 0.0);
    assert!(DEFAULT_DOUBLE_TAP_ZOOM > NEUTRAL_ZOOM);
    assert!(DEFAULT_MAX_ZOOM >= DEFAULT_DOUBLE_TAP_ZOOM);
    assert!(MAX_ZOOM_LIMIT >= DEFAULT_MAX_ZOOM);

    // Gesture validation
    assert!(DEFAULT_MAX_X_OFFSET > DEFAULT_INDICATOR_RAMP_START);
    assert!(DEFAULT_DISMISS_THRESHOLD > 0.0);
    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);

    // Animation validation
    assert!(DEFAULT_SNAP_BACK_MS > 0);
    assert!(DEFAULT_TIMING_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_SNAP_BACK_MS <= MAX_ANIMATION_MS);

    // Projection validation
    assert!(DEFAULT_FADE_NEAR > 0.0);
    assert!(DEFAULT_FADE_FAR > DEFAULT_FADE_NEAR);
    assert!(FADE_FAR_OPACITY > 0.0 && FADE_FAR_OPACITY < 1.0);
};
