// SPDX-License-Identifier: MPL-2.0
//! Resolved preview settings.
//!
//! Built from [`crate::config::Config::preview_settings`]; every value here is
//! already validated, so the gesture handlers never re-check them.

use crate::config::{
    DEFAULT_DISMISS_THRESHOLD, DEFAULT_FADE_FAR, DEFAULT_FADE_NEAR, DEFAULT_INDICATOR_RAMP_START,
    DEFAULT_MAX_X_OFFSET, DEFAULT_SNAP_BACK_MS, DEFAULT_TIMING_MS,
};
use crate::domain::ui::{AnimationDuration, DoubleTapWindow, ZoomLimits};
use crate::ui::preview::animation::Easing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSettings {
    /// Horizontal drag budget at neutral zoom; scaled by zoom while dragging.
    pub max_x_offset: f32,
    /// Vertical distance past which releasing a drag dismisses the overlay.
    pub dismiss_threshold: f32,
    pub zoom: ZoomLimits,
    pub double_tap_window: DoubleTapWindow,
    /// Snap-back duration used at neutral zoom.
    pub snap_back: AnimationDuration,
    /// Duration for animations that do not ask for a specific one.
    pub timing: AnimationDuration,
    pub easing: Easing,
    pub fade_near: f32,
    pub fade_far: f32,
    pub indicator_ramp_start: f32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            max_x_offset: DEFAULT_MAX_X_OFFSET,
            dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
            zoom: ZoomLimits::default(),
            double_tap_window: DoubleTapWindow::default(),
            snap_back: AnimationDuration::from_millis(DEFAULT_SNAP_BACK_MS),
            timing: AnimationDuration::from_millis(DEFAULT_TIMING_MS),
            easing: Easing::default(),
            fade_near: DEFAULT_FADE_NEAR,
            fade_far: DEFAULT_FADE_FAR,
            indicator_ramp_start: DEFAULT_INDICATOR_RAMP_START,
        }
    }
}
