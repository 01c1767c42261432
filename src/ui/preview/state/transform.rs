// SPDX-License-Identifier: MPL-2.0
//! Transform state management
//!
//! Holds the live translation and scale of the previewed image together with
//! their committed counterparts. Gestures are relative: a pan delta is added
//! to where the previous gesture left off and a pinch ratio multiplies the
//! previously committed scale, so the committed copies are the base of the
//! next gesture rather than a session-wide origin.

use crate::config::{NEUTRAL_ZOOM, ZOOM_EPSILON};

/// Continuously animatable scalars of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PosX,
    PosY,
    Scale,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::PosX, Field::PosY, Field::Scale];
}

/// Live and committed transform of the previewed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub pos_x: f32,
    pub pos_y: f32,
    pub scale: f32,

    /// Translation committed at the end of the last gesture (pan base).
    pub saved_pos_x: f32,
    pub saved_pos_y: f32,

    /// Scale committed at the end of the last gesture (pinch base).
    pub saved_scale: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            pos_x: 0.0,
            pos_y: 0.0,
            scale: NEUTRAL_ZOOM,
            saved_pos_x: 0.0,
            saved_pos_y: 0.0,
            saved_scale: NEUTRAL_ZOOM,
        }
    }
}

impl TransformState {
    /// Restores every value to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the live scale is above neutral.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        is_zoomed(self.scale)
    }

    /// Whether the live scale is neutral or below (zoomed out mid-pinch).
    #[must_use]
    pub fn is_at_or_below_neutral(&self) -> bool {
        !self.is_zoomed()
    }

    /// Whether the live scale is exactly neutral (within animation tolerance).
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        is_neutral(self.scale)
    }

    /// Commits the live translation as the base of the next pan.
    pub fn commit_position(&mut self) {
        self.saved_pos_x = self.pos_x;
        self.saved_pos_y = self.pos_y;
    }

    /// Zeroes the committed translation.
    pub fn clear_saved_position(&mut self) {
        self.saved_pos_x = 0.0;
        self.saved_pos_y = 0.0;
    }

    #[must_use]
    pub fn get(&self, field: Field) -> f32 {
        match field {
            Field::PosX => self.pos_x,
            Field::PosY => self.pos_y,
            Field::Scale => self.scale,
        }
    }

    pub fn set(&mut self, field: Field, value: f32) {
        match field {
            Field::PosX => self.pos_x = value,
            Field::PosY => self.pos_y = value,
            Field::Scale => self.scale = value,
        }
    }
}

/// Whether `scale` is above neutral, ignoring animation rounding.
#[must_use]
pub fn is_zoomed(scale: f32) -> bool {
    scale > NEUTRAL_ZOOM + ZOOM_EPSILON
}

/// Whether `scale` is neutral, ignoring animation rounding.
#[must_use]
pub fn is_neutral(scale: f32) -> bool {
    (scale - NEUTRAL_ZOOM).abs() <= ZOOM_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transform_is_neutral() {
        let state = TransformState::default();
        assert_eq!(state.pos_x, 0.0);
        assert_eq!(state.pos_y, 0.0);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.saved_scale, 1.0);
        assert!(state.is_neutral());
        assert!(!state.is_zoomed());
    }

    #[test]
    fn zoom_predicates_tolerate_animation_rounding() {
        let mut state = TransformState {
            scale: 1.000_01,
            ..TransformState::default()
        };
        assert!(state.is_neutral());
        assert!(state.is_at_or_below_neutral());

        state.scale = 0.8;
        assert!(!state.is_neutral());
        assert!(state.is_at_or_below_neutral());

        state.scale = 1.5;
        assert!(state.is_zoomed());
    }

    #[test]
    fn commit_and_clear_position() {
        let mut state = TransformState {
            pos_x: 40.0,
            pos_y: -12.0,
            ..TransformState::default()
        };
        state.commit_position();
        assert_eq!((state.saved_pos_x, state.saved_pos_y), (40.0, -12.0));

        state.clear_saved_position();
        assert_eq!((state.saved_pos_x, state.saved_pos_y), (0.0, 0.0));
        assert_eq!(state.pos_x, 40.0);
    }

    #[test]
    fn field_accessors_match_struct_fields() {
        let mut state = TransformState::default();
        state.set(Field::PosX, 3.0);
        state.set(Field::PosY, 4.0);
        state.set(Field::Scale, 2.0);
        assert_eq!(state.get(Field::PosX), state.pos_x);
        assert_eq!(state.get(Field::PosY), 4.0);
        assert_eq!(state.get(Field::Scale), 2.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = TransformState {
            pos_x: 1.0,
            pos_y: 2.0,
            scale: 2.5,
            saved_pos_x: 1.0,
            saved_pos_y: 2.0,
            saved_scale: 2.5,
        };
        state.reset();
        assert_eq!(state, TransformState::default());
    }
}
