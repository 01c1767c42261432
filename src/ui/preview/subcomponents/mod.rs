// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the preview.
//!
//! Each gesture has its own State, Message, Effect, and `handle()` method.
//! They write the shared transform through a [`Context`] and report discrete
//! outcomes as effects; `component.rs` routes events to them and applies the
//! effects to the viewer state.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator, owns Arbiter + ViewerState)
//!     ├── pan        - Drag, snap-back, page turn and dismiss decisions
//!     ├── pinch      - Continuous zoom with ceiling and neutral floor
//!     └── double_tap - Zoom toggle
//! ```

pub mod double_tap;
pub mod pan;
pub mod pinch;

use crate::ui::preview::animation::Animator;
use crate::ui::preview::settings::PreviewSettings;
use crate::ui::preview::state::{Field, TransformState};
use std::time::{Duration, Instant};

/// Everything a sub-component may touch while handling one message.
pub struct Context<'a> {
    pub transform: &'a mut TransformState,
    pub animator: &'a mut Animator,
    pub settings: &'a PreviewSettings,
    pub has_previous: bool,
    pub has_next: bool,
    pub now: Instant,
}

impl Context<'_> {
    /// Writes `value` directly, cancelling any animation on `field`.
    pub(crate) fn write(&mut self, field: Field, value: f32) {
        self.animator.cancel(field);
        self.transform.set(field, value);
    }

    /// Animates `field` towards `target` with the configured easing.
    pub(crate) fn animate(&mut self, field: Field, target: f32, duration: Duration) {
        self.animator.animate(
            &*self.transform,
            field,
            target,
            duration,
            self.settings.easing,
            self.now,
        );
    }

    /// Animates both translation fields back to the origin and zeroes the
    /// committed translation.
    pub(crate) fn recenter(&mut self, duration: Duration) {
        self.animate(Field::PosX, 0.0, duration);
        self.animate(Field::PosY, 0.0, duration);
        self.transform.clear_saved_position();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Owns the pieces a [`Context`] borrows.
    pub struct Harness {
        pub transform: TransformState,
        pub animator: Animator,
        pub settings: PreviewSettings,
        pub has_previous: bool,
        pub has_next: bool,
        pub now: Instant,
    }

    impl Default for Harness {
        fn default() -> Self {
            Self {
                transform: TransformState::default(),
                animator: Animator::default(),
                settings: PreviewSettings::default(),
                has_previous: true,
                has_next: true,
                now: Instant::now(),
            }
        }
    }

    impl Harness {
        pub fn context(&mut self) -> Context<'_> {
            Context {
                transform: &mut self.transform,
                animator: &mut self.animator,
                settings: &self.settings,
                has_previous: self.has_previous,
                has_next: self.has_next,
                now: self.now,
            }
        }

        /// Runs every animation to completion.
        pub fn settle(&mut self) {
            self.now += Duration::from_secs(5);
            self.animator.tick(&mut self.transform, self.now);
        }
    }
}
