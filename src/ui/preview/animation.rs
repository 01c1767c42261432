// SPDX-License-Identifier: MPL-2.0
//! Per-field scalar animations.
//!
//! Each animatable transform field owns at most one in-flight animation.
//! Starting a new animation on a field replaces the previous one, and a direct
//! write by a gesture cancels it, so the last writer always wins. Time is
//! passed in explicitly: nothing here reads the clock.

use crate::ui::preview::state::{Field, TransformState};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Easing curve applied to the animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out, the usual "timing" curve of touch UIs.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Applies the curve to a progress value, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A single scalar moving from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Animation {
    #[must_use]
    pub fn new(
        from: f32,
        to: f32,
        started_at: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Value at `now`; exactly `to` once the duration has elapsed.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.is_finished_at(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    #[must_use]
    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// One animation slot per transform field.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    pos_x: Option<Animation>,
    pos_y: Option<Animation>,
    scale: Option<Animation>,
}

impl Animator {
    fn slot(&self, field: Field) -> &Option<Animation> {
        match field {
            Field::PosX => &self.pos_x,
            Field::PosY => &self.pos_y,
            Field::Scale => &self.scale,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<Animation> {
        match field {
            Field::PosX => &mut self.pos_x,
            Field::PosY => &mut self.pos_y,
            Field::Scale => &mut self.scale,
        }
    }

    /// Animates `field` from its current value in `state` to `target`,
    /// superseding any animation already running on that field.
    pub fn animate(
        &mut self,
        state: &TransformState,
        field: Field,
        target: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) {
        let from = state.get(field);
        *self.slot_mut(field) = Some(Animation::new(from, target, now, duration, easing));
    }

    /// Drops the animation on `field`. Returns whether one was running.
    pub fn cancel(&mut self, field: Field) -> bool {
        self.slot_mut(field).take().is_some()
    }

    pub fn cancel_all(&mut self) {
        for field in Field::ALL {
            self.cancel(field);
        }
    }

    /// Where `field` is heading, if it is animating.
    #[must_use]
    pub fn target(&self, field: Field) -> Option<f32> {
        self.slot(field).as_ref().map(Animation::target)
    }

    #[must_use]
    pub fn is_animating(&self, field: Field) -> bool {
        self.slot(field).is_some()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        Field::ALL.iter().any(|field| self.is_animating(*field))
    }

    /// Writes the current value of every running animation into `state` and
    /// retires the finished ones. Returns whether anything is still moving.
    pub fn tick(&mut self, state: &mut TransformState, now: Instant) -> bool {
        for field in Field::ALL {
            let Some(animation) = *self.slot(field) else {
                continue;
            };
            state.set(field, animation.value_at(now));
            if animation.is_finished_at(now) {
                *self.slot_mut(field) = None;
            }
        }
        self.is_active()
    }
}
