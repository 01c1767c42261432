// SPDX-License-Identifier: MPL-2.0
//! Render projection.
//!
//! Maps the transform onto what the renderer needs each frame: the image
//! translation and scale, the image opacity, the backdrop colour, and the
//! opacity of the previous/next indicators. Dragging vertically fades both the
//! image and the backdrop, which is how a dismiss is previewed before release.

use crate::config::FADE_FAR_OPACITY;
use crate::ui::preview::settings::PreviewSettings;
use crate::ui::preview::state::{TransformState, ViewerState};
use iced::{Color, Vector};

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub translation: Vector,
    pub scale: f32,
    /// Image opacity in `[0, 1]`.
    pub opacity: f32,
    pub backdrop: Color,
    pub previous_indicator: f32,
    pub next_indicator: f32,
    pub image_index: usize,
    pub is_open: bool,
}

// ==========================================================================
// Interpolation
// ==========================================================================

/// Locates `value` on the piecewise-linear curve through `inputs`.
///
/// Returns the index of the segment's upper control point and the progress
/// inside it, or `Err(i)` when `value` is clamped to control point `i`.
fn locate(value: f32, inputs: &[f32]) -> Result<(usize, f32), usize> {
    let last = inputs.len().checked_sub(1).ok_or(0usize)?;
    // NaN lands on the first control point.
    if value.is_nan() || value <= inputs[0] {
        return Err(0);
    }
    if value >= inputs[last] {
        return Err(last);
    }
    let upper = inputs.iter().position(|x| value <= *x).unwrap_or(last);
    let (x0, x1) = (inputs[upper - 1], inputs[upper]);
    let span = x1 - x0;
    let t = if span > 0.0 { (value - x0) / span } else { 1.0 };
    Ok((upper, t))
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Piecewise-linear interpolation, clamped at both ends.
///
/// `inputs` must be increasing and as long as `outputs`; extra entries of the
/// longer slice are ignored. An empty curve yields `0.0`.
#[must_use]
pub fn interpolate(value: f32, inputs: &[f32], outputs: &[f32]) -> f32 {
    let len = inputs.len().min(outputs.len());
    if len == 0 {
        return 0.0;
    }
    match locate(value, &inputs[..len]) {
        Ok((upper, t)) => lerp(outputs[upper - 1], outputs[upper], t),
        Err(i) => outputs[i],
    }
}

/// Colour counterpart of [`interpolate`], blending RGBA channels linearly.
#[must_use]
pub fn interpolate_color(value: f32, inputs: &[f32], outputs: &[Color]) -> Color {
    let len = inputs.len().min(outputs.len());
    if len == 0 {
        return Color::TRANSPARENT;
    }
    match locate(value, &inputs[..len]) {
        Ok((upper, t)) => {
            let (a, b) = (outputs[upper - 1], outputs[upper]);
            Color {
                r: lerp(a.r, b.r, t),
                g: lerp(a.g, b.g, t),
                b: lerp(a.b, b.b, t),
                a: lerp(a.a, b.a, t),
            }
        }
        Err(i) => outputs[i],
    }
}

// ==========================================================================
// Fade curves
// ==========================================================================

const BACKDROP_GONE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.0,
};

const BACKDROP_FADED: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 191.0 / 255.0,
};

const OPACITY_CURVE: [f32; 7] = [0.0, FADE_FAR_OPACITY, 1.0, 1.0, 1.0, FADE_FAR_OPACITY, 0.0];

const BACKDROP_CURVE: [Color; 7] = [
    BACKDROP_GONE,
    BACKDROP_FADED,
    Color::BLACK,
    Color::BLACK,
    Color::BLACK,
    BACKDROP_FADED,
    BACKDROP_GONE,
];

/// Vertical control points shared by the opacity and backdrop curves.
///
/// The outer point sits at half the viewport height, pushed past `fade_far`
/// on short viewports so the points stay strictly increasing.
#[must_use]
pub fn fade_control_points(viewport_height: f32, fade_near: f32, fade_far: f32) -> [f32; 7] {
    let half = if viewport_height.is_finite() {
        viewport_height / 2.0
    } else {
        0.0
    };
    let outer = half.max(fade_far + 1.0);
    [-outer, -fade_far, -fade_near, 0.0, fade_near, fade_far, outer]
}

/// Image opacity for a vertical offset; fully opaque while zoomed in.
#[must_use]
pub fn image_opacity(pos_y: f32, zoomed: bool, control_points: &[f32; 7]) -> f32 {
    if zoomed {
        1.0
    } else {
        interpolate(pos_y, control_points, &OPACITY_CURVE)
    }
}

/// Backdrop colour for a vertical offset; opaque black while zoomed in.
#[must_use]
pub fn backdrop_color(pos_y: f32, zoomed: bool, control_points: &[f32; 7]) -> Color {
    if zoomed {
        Color::BLACK
    } else {
        interpolate_color(pos_y, control_points, &BACKDROP_CURVE)
    }
}

/// Opacity of a page indicator for an offset towards it.
fn indicator(offset: f32, enabled: bool, settings: &PreviewSettings) -> f32 {
    if !enabled {
        return 0.0;
    }
    interpolate(
        offset,
        &[settings.indicator_ramp_start, settings.max_x_offset],
        &[0.0, 1.0],
    )
}

/// Projects the current state onto a frame for a viewport of the given height.
#[must_use]
pub fn project(
    transform: &TransformState,
    viewer: &ViewerState,
    settings: &PreviewSettings,
    viewport_height: f32,
) -> RenderFrame {
    let zoomed = transform.is_zoomed();
    let points = fade_control_points(viewport_height, settings.fade_near, settings.fade_far);
    let neutral = transform.is_neutral();

    RenderFrame {
        translation: Vector::new(transform.pos_x, transform.pos_y),
        scale: transform.scale,
        opacity: image_opacity(transform.pos_y, zoomed, &points),
        backdrop: backdrop_color(transform.pos_y, zoomed, &points),
        previous_indicator: indicator(
            transform.pos_x,
            neutral && viewer.has_previous(),
            settings,
        ),
        next_indicator: indicator(-transform.pos_x, neutral && viewer.has_next(), settings),
        image_index: viewer.image_index(),
        is_open: viewer.is_open(),
    }
}
