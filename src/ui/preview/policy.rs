// SPDX-License-Identifier: MPL-2.0
//! Transition policy.
//!
//! Pure rules deciding when a gesture turns the page, dismisses the overlay,
//! or only repositions the image, and when zoom snaps back to neutral. The
//! sub-components apply these decisions to the state; nothing here mutates.

use crate::config::NEUTRAL_ZOOM;
use crate::domain::ui::ZoomLimits;
use crate::ui::preview::state::transform::{is_neutral, is_zoomed};
use iced::Vector;

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    Previous,
    Next,
}

/// Thresholds and neighbourhood needed to judge a released drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseContext {
    /// Live scale when the finger lifted.
    pub scale: f32,
    pub has_previous: bool,
    pub has_next: bool,
    pub max_x_offset: f32,
    pub dismiss_threshold: f32,
}

/// Outcome of a released drag. The three checks are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleaseDecision {
    /// Return to the origin (neutral zoom) instead of committing the position.
    pub snap_back: bool,
    pub page_turn: Option<PageTurn>,
    pub dismiss: bool,
}

/// Half-width of the band the horizontal translation must stay inside.
///
/// The budget grows with zoom so a zoomed image can be panned further before
/// paging logic engages.
#[must_use]
pub fn horizontal_band(max_x_offset: f32, scale: f32) -> f32 {
    max_x_offset * scale
}

/// Whether a candidate horizontal position is strictly inside the band.
#[must_use]
pub fn within_band(x: f32, band: f32) -> bool {
    -band < x && x < band
}

/// Judges a released drag from its total translation.
#[must_use]
pub fn decide_release(translation: Vector, context: &ReleaseContext) -> ReleaseDecision {
    let zoomed = is_zoomed(context.scale);
    ReleaseDecision {
        snap_back: !zoomed,
        page_turn: page_turn(translation.x, context),
        dismiss: !zoomed && translation.y.abs() > context.dismiss_threshold,
    }
}

/// Page turns need neutral zoom (not merely "not zoomed in") and a horizontal
/// translation past the threshold, towards a neighbour that exists. Dragging
/// right reveals the previous image, dragging left the next one.
fn page_turn(dx: f32, context: &ReleaseContext) -> Option<PageTurn> {
    if !is_neutral(context.scale) {
        return None;
    }
    if dx > context.max_x_offset && context.has_previous {
        Some(PageTurn::Previous)
    } else if dx < -context.max_x_offset && context.has_next {
        Some(PageTurn::Next)
    } else {
        None
    }
}

/// Live scale for a pinch ratio, capped at the ceiling throughout the gesture.
#[must_use]
pub fn pinch_scale(saved_scale: f32, ratio: f32, limits: ZoomLimits) -> f32 {
    (saved_scale * ratio).min(limits.max())
}

/// Whether a pinch ended below neutral and must be forced back to it.
#[must_use]
pub fn pinch_needs_floor(scale: f32) -> bool {
    scale < NEUTRAL_ZOOM
}

/// Scale a double tap toggles to, given where the scale is heading.
#[must_use]
pub fn double_tap_target(heading_scale: f32, limits: ZoomLimits) -> f32 {
    if is_zoomed(heading_scale) {
        NEUTRAL_ZOOM
    } else {
        limits.double_tap()
    }
}
