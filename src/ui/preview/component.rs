// SPDX-License-Identifier: MPL-2.0
//! Preview component encapsulating state and update logic.
//!
//! [`PreviewController`] owns one preview session: the image list, the viewer
//! and transform state, the animation slots, and the gesture arbiter. Hosts
//! feed it gesture events and frame ticks with explicit instants, read a
//! [`RenderFrame`] each frame, and react to the returned [`Effect`]s.

use crate::config::NEUTRAL_ZOOM;
use crate::ui::preview::animation::Animator;
use crate::ui::preview::gesture::{Arbiter, Dispatch, GestureEvent, PanEvent, PinchEvent, Phase};
use crate::ui::preview::policy::PageTurn;
use crate::ui::preview::projection::{self, RenderFrame};
use crate::ui::preview::settings::PreviewSettings;
use crate::ui::preview::state::{Field, ImageList, TransformState, ViewerState};
use crate::ui::preview::subcomponents::{double_tap, pan, pinch, Context};
use iced::Vector;
use std::time::Instant;

/// Discrete outcomes reported to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// A page turn selected another image.
    ImageChanged { index: usize },
    /// The overlay was dismissed.
    Dismissed,
    /// A double tap started zooming towards `target`.
    ZoomToggled { target: f32 },
}

/// Gesture sub-component states.
#[derive(Debug, Clone, Default)]
struct Gestures {
    pan: pan::State,
    pinch: pinch::State,
    double_tap: double_tap::State,
}

/// One preview session over an image list.
#[derive(Debug, Clone)]
pub struct PreviewController {
    images: ImageList,
    settings: PreviewSettings,
    initial_index: usize,
    viewer: ViewerState,
    transform: TransformState,
    animator: Animator,
    arbiter: Arbiter,
    gestures: Gestures,
}

fn context<'a>(
    transform: &'a mut TransformState,
    animator: &'a mut Animator,
    settings: &'a PreviewSettings,
    viewer: &ViewerState,
    now: Instant,
) -> Context<'a> {
    Context {
        transform,
        animator,
        settings,
        has_previous: viewer.has_previous(),
        has_next: viewer.has_next(),
        now,
    }
}

impl PreviewController {
    /// Opens a preview on `initial_index` (clamped into the list).
    #[must_use]
    pub fn open(
        images: impl Into<ImageList>,
        initial_index: usize,
        settings: PreviewSettings,
    ) -> Self {
        let images = images.into();
        let viewer = ViewerState::open(&images, initial_index);
        tracing::info!(
            images = images.len(),
            index = viewer.image_index(),
            "preview opened"
        );
        Self {
            viewer,
            initial_index,
            transform: TransformState::default(),
            animator: Animator::default(),
            arbiter: Arbiter::new(settings.double_tap_window),
            gestures: Gestures::default(),
            images,
            settings,
        }
    }

    /// Starts a fresh session over the same images and settings.
    ///
    /// Nothing carries over from the previous session: index, zoom and
    /// position start from their initial values.
    pub fn reopen(&mut self) {
        *self = Self::open(self.images.clone(), self.initial_index, self.settings);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn images(&self) -> &ImageList {
        &self.images
    }

    #[must_use]
    pub fn settings(&self) -> &PreviewSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn image_index(&self) -> usize {
        self.viewer.image_index()
    }

    /// Locator of the displayed image.
    #[must_use]
    pub fn current_locator(&self) -> Option<&str> {
        self.images.get(self.viewer.image_index())
    }

    /// Which gesture currently owns the transform.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.arbiter.phase()
    }

    /// Whether any animation is running; hosts keep ticking while true.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Handles one gesture event. Events after dismissal are ignored.
    pub fn handle(&mut self, event: GestureEvent, now: Instant) -> Vec<Effect> {
        if !self.viewer.is_open() {
            tracing::trace!(?event, "preview closed, event ignored");
            return Vec::new();
        }
        let Some(dispatch) = self.arbiter.route(event) else {
            tracing::trace!(?event, phase = ?self.arbiter.phase(), "gesture event dropped");
            return Vec::new();
        };

        match dispatch {
            Dispatch::Pan { entered, event } => self.handle_pan(entered, event, now),
            Dispatch::Pinch { entered, event } => {
                self.handle_pinch(entered, event, now);
                Vec::new()
            }
            Dispatch::DoubleTap => {
                let mut ctx = context(
                    &mut self.transform,
                    &mut self.animator,
                    &self.settings,
                    &self.viewer,
                    now,
                );
                match self
                    .gestures
                    .double_tap
                    .handle(double_tap::Message::Toggle, &mut ctx)
                {
                    double_tap::Effect::Toggled { target } => {
                        tracing::debug!(zoom_target = target, "double tap zoom toggle");
                        vec![Effect::ZoomToggled { target }]
                    }
                }
            }
        }
    }

    fn handle_pan(&mut self, entered: bool, event: PanEvent, now: Instant) -> Vec<Effect> {
        let mut ctx = context(
            &mut self.transform,
            &mut self.animator,
            &self.settings,
            &self.viewer,
            now,
        );
        let gesture = &mut self.gestures.pan;
        if entered {
            gesture.handle(pan::Message::Began, &mut ctx);
        }
        let effect = match event {
            PanEvent::Began => pan::Effect::None,
            PanEvent::Updated { translation } => {
                gesture.handle(pan::Message::Updated(translation), &mut ctx)
            }
            PanEvent::Ended { translation } => {
                gesture.handle(pan::Message::Ended(translation), &mut ctx)
            }
        };

        let mut effects = Vec::new();
        if let pan::Effect::Released { page_turn, dismiss } = effect {
            if let Some(direction) = page_turn {
                effects.extend(self.turn_page(direction, now));
            }
            if dismiss {
                effects.extend(self.dismiss());
            }
        }
        effects
    }

    fn handle_pinch(&mut self, entered: bool, event: PinchEvent, now: Instant) {
        let mut ctx = context(
            &mut self.transform,
            &mut self.animator,
            &self.settings,
            &self.viewer,
            now,
        );
        let gesture = &mut self.gestures.pinch;
        if entered {
            gesture.handle(pinch::Message::Began, &mut ctx);
        }
        let effect = match event {
            PinchEvent::Began => pinch::Effect::None,
            PinchEvent::Updated { ratio } => {
                gesture.handle(pinch::Message::Updated(ratio), &mut ctx)
            }
            PinchEvent::Ended => gesture.handle(pinch::Message::Ended, &mut ctx),
        };
        if let pinch::Effect::Settled { scale, floored } = effect {
            tracing::debug!(scale, floored, "pinch settled");
        }
    }

    /// Moves to the neighbouring image and resets the transform for it.
    fn turn_page(&mut self, direction: PageTurn, now: Instant) -> Option<Effect> {
        let index = match direction {
            PageTurn::Previous => self.viewer.go_previous(),
            PageTurn::Next => self.viewer.go_next(),
        }?;

        self.animator.cancel(Field::Scale);
        self.transform.scale = NEUTRAL_ZOOM;
        self.transform.saved_scale = NEUTRAL_ZOOM;
        self.transform.clear_saved_position();
        self.animator.animate(
            &self.transform,
            Field::PosX,
            0.0,
            self.settings.timing.as_duration(),
            self.settings.easing,
            now,
        );

        tracing::debug!(?direction, index, "page turned");
        Some(Effect::ImageChanged { index })
    }

    fn dismiss(&mut self) -> Option<Effect> {
        if !self.viewer.close() {
            return None;
        }
        self.animator.cancel_all();
        self.arbiter.reset();
        self.gestures = Gestures::default();
        self.transform.reset();
        tracing::info!(index = self.viewer.image_index(), "preview dismissed");
        Some(Effect::Dismissed)
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Advances running animations to `now`. Returns whether any is still
    /// running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.viewer.is_open() {
            return false;
        }
        self.animator.tick(&mut self.transform, now)
    }

    /// Projects the current state for a viewport of the given height.
    #[must_use]
    pub fn frame(&self, viewport_height: f32) -> RenderFrame {
        projection::project(
            &self.transform,
            &self.viewer,
            &self.settings,
            viewport_height,
        )
    }

    /// Live translation, shorthand for hosts that only need the offset.
    #[must_use]
    pub fn translation(&self) -> Vector {
        Vector::new(self.transform.pos_x, self.transform.pos_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::preview::gesture::TapKind;
    use std::time::Duration;

    fn controller(index: usize) -> PreviewController {
        let images = ImageList::new(["a.png", "b.png", "c.png"]).expect("non-empty");
        PreviewController::open(images, index, PreviewSettings::default())
    }

    fn drag(controller: &mut PreviewController, dx: f32, dy: f32, now: Instant) -> Vec<Effect> {
        let translation = Vector::new(dx, dy);
        controller.handle(PanEvent::Began.into(), now);
        controller.handle(PanEvent::Updated { translation }.into(), now);
        controller.handle(PanEvent::Ended { translation }.into(), now)
    }

    fn double_tap() -> GestureEvent {
        TapKind::Double {
            interval: Duration::from_millis(150),
        }
        .into()
    }

    #[test]
    fn open_clamps_index_and_starts_neutral() {
        let controller = controller(9);
        assert_eq!(controller.image_index(), 2);
        assert_eq!(controller.current_locator(), Some("c.png"));
        assert!(controller.is_open());
        assert_eq!(*controller.transform(), TransformState::default());
    }

    #[test]
    fn page_turn_reports_new_index_and_resets_transform() {
        let now = Instant::now();
        let mut controller = controller(1);

        let effects = drag(&mut controller, -150.0, 0.0, now);
        assert_eq!(effects, vec![Effect::ImageChanged { index: 2 }]);
        assert_eq!(controller.transform().saved_pos_x, 0.0);

        controller.tick(now + Duration::from_secs(1));
        assert_eq!(controller.transform().pos_x, 0.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn dismiss_closes_and_ignores_later_events() {
        let now = Instant::now();
        let mut controller = controller(0);

        let effects = drag(&mut controller, 0.0, 300.0, now);
        assert_eq!(effects, vec![Effect::Dismissed]);
        assert!(!controller.is_open());

        assert!(controller.handle(double_tap(), now).is_empty());
        assert!(drag(&mut controller, -300.0, 0.0, now).is_empty());
        assert_eq!(controller.image_index(), 0);
        assert!(!controller.tick(now));
    }

    #[test]
    fn diagonal_drag_can_page_and_dismiss() {
        let now = Instant::now();
        let mut controller = controller(1);
        let effects = drag(&mut controller, 150.0, 250.0, now);
        assert_eq!(
            effects,
            vec![Effect::ImageChanged { index: 0 }, Effect::Dismissed]
        );
    }

    #[test]
    fn double_tap_reports_zoom_target() {
        let now = Instant::now();
        let mut controller = controller(0);
        assert_eq!(
            controller.handle(double_tap(), now),
            vec![Effect::ZoomToggled { target: 2.0 }]
        );
        controller.tick(now + Duration::from_secs(1));
        assert_eq!(controller.transform().scale, 2.0);
    }

    #[test]
    fn reopen_starts_fresh() {
        let now = Instant::now();
        let mut controller = controller(1);
        drag(&mut controller, -150.0, 0.0, now);
        controller.handle(double_tap(), now);
        drag(&mut controller, 0.0, 300.0, now + Duration::from_secs(1));

        controller.reopen();
        assert!(controller.is_open());
        assert_eq!(controller.image_index(), 1);
        assert_eq!(*controller.transform(), TransformState::default());
        assert!(!controller.is_animating());
        assert_eq!(controller.phase(), Phase::Idle);
    }
}
