// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for gesture and animation values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_DOUBLE_TAP_ZOOM, DEFAULT_MAX_ZOOM, MAX_ANIMATION_MS,
    MAX_DOUBLE_TAP_WINDOW_MS, MAX_ZOOM_LIMIT, MIN_DOUBLE_TAP_WINDOW_MS, NEUTRAL_ZOOM,
};
use std::time::Duration;

// =============================================================================
// PinchRatio
// =============================================================================

/// Scale ratio reported by a pinch gesture, relative to where it started.
///
/// Only finite, strictly positive ratios exist; anything else is rejected at
/// construction so a broken event can never poison the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchRatio(f32);

impl PinchRatio {
    /// Returns `None` for zero, negative or non-finite ratios.
    #[must_use]
    pub fn new(ratio: f32) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// ZoomLimits
// =============================================================================

/// Double-tap target and pinch ceiling, guaranteed to satisfy
/// `neutral < double_tap <= max <= MAX_ZOOM_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    double_tap: f32,
    max: f32,
}

impl ZoomLimits {
    /// Creates zoom limits, clamping both levels into a consistent range.
    ///
    /// Non-finite inputs fall back to the defaults.
    #[must_use]
    pub fn new(double_tap: f32, max: f32) -> Self {
        let max = if max.is_finite() { max } else { DEFAULT_MAX_ZOOM };
        let max = max.clamp(NEUTRAL_ZOOM + 0.1, MAX_ZOOM_LIMIT);
        let double_tap = if double_tap.is_finite() {
            double_tap
        } else {
            DEFAULT_DOUBLE_TAP_ZOOM
        };
        Self {
            double_tap: double_tap.clamp(NEUTRAL_ZOOM + 0.1, max),
            max,
        }
    }

    /// Scale reached by a double tap from neutral.
    #[must_use]
    pub fn double_tap(self) -> f32 {
        self.double_tap
    }

    /// Ceiling applied while pinching.
    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            double_tap: DEFAULT_DOUBLE_TAP_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Animation duration in milliseconds, capped at `MAX_ANIMATION_MS`.
///
/// Zero is allowed and means "jump to the target on the next tick".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.min(MAX_ANIMATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

// =============================================================================
// DoubleTapWindow
// =============================================================================

/// Maximum delay between two taps of a double tap (50–1000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapWindow(u64);

impl DoubleTapWindow {
    /// Creates a new window, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the window as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Whether two taps separated by `interval` form a double tap.
    #[must_use]
    pub fn contains(self, interval: Duration) -> bool {
        interval <= self.as_duration()
    }
}

impl Default for DoubleTapWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinch_ratio_rejects_degenerate_values() {
        assert!(PinchRatio::new(0.0).is_none());
        assert!(PinchRatio::new(-1.5).is_none());
        assert!(PinchRatio::new(f32::NAN).is_none());
        assert!(PinchRatio::new(f32::INFINITY).is_none());
        assert_eq!(PinchRatio::new(1.25).map(PinchRatio::value), Some(1.25));
    }

    #[test]
    fn zoom_limits_keep_double_tap_below_ceiling() {
        let limits = ZoomLimits::new(5.0, 3.0);
        assert_eq!(limits.max(), 3.0);
        assert_eq!(limits.double_tap(), 3.0);
    }

    #[test]
    fn zoom_limits_clamp_ceiling_to_hard_limit() {
        let limits = ZoomLimits::new(2.0, 100.0);
        assert_eq!(limits.max(), MAX_ZOOM_LIMIT);
        assert_eq!(limits.double_tap(), 2.0);
    }

    #[test]
    fn zoom_limits_fall_back_on_non_finite_input() {
        let limits = ZoomLimits::new(f32::NAN, f32::INFINITY);
        assert_eq!(limits, ZoomLimits::default());
    }

    #[test]
    fn zoom_limits_never_collapse_onto_neutral() {
        let limits = ZoomLimits::new(0.5, 0.5);
        assert!(limits.max() > NEUTRAL_ZOOM);
        assert!(limits.double_tap() > NEUTRAL_ZOOM);
    }

    #[test]
    fn animation_duration_is_capped() {
        assert_eq!(AnimationDuration::from_millis(100).millis(), 100);
        assert_eq!(
            AnimationDuration::from_millis(u64::MAX).millis(),
            MAX_ANIMATION_MS
        );
        assert_eq!(
            AnimationDuration::from_millis(250).as_duration(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn double_tap_window_clamps_and_contains() {
        assert_eq!(DoubleTapWindow::from_millis(0).millis(), MIN_DOUBLE_TAP_WINDOW_MS);
        assert_eq!(
            DoubleTapWindow::from_millis(60_000).millis(),
            MAX_DOUBLE_TAP_WINDOW_MS
        );

        let window = DoubleTapWindow::default();
        assert!(window.contains(Duration::from_millis(250)));
        assert!(!window.contains(Duration::from_millis(251)));
    }
}
