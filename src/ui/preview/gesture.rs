// SPDX-License-Identifier: MPL-2.0
//! Gesture events and arbitration.
//!
//! The gesture layer below reports already classified pan, pinch and tap
//! events. Pan, pinch and double tap race each other: the [`Arbiter`] lets one
//! gesture own the transform at a time and drops events from the losers.
//!
//! ```text
//!            Pan began/updated            Pan ended
//!   Idle ─────────────────────► Panning ───────────► Idle
//!    │ ▲  Pinch began/updated             Pinch ended
//!    │ └──────────────────────  Pinching ◄──────────  (same from Tapping)
//!    │  Single tap
//!    └──────────────► Tapping ── Double tap ──► fire, Idle
//! ```
//!
//! While panning or pinching every other gesture is ignored. A pending single
//! tap never blocks a pan or pinch.

use crate::domain::ui::DoubleTapWindow;
use iced::Vector;
use std::time::{Duration, Instant};

/// Pan phases. Translations are cumulative since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    Began,
    Updated { translation: Vector },
    Ended { translation: Vector },
}

/// Pinch phases. The ratio is cumulative since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchEvent {
    Began,
    Updated { ratio: f32 },
    Ended,
}

/// Tap classification reported by the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
    Single,
    /// Second tap of a pair; `interval` is the delay since the first one.
    Double { interval: Duration },
}

/// Input consumed by the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Pan(PanEvent),
    Pinch(PinchEvent),
    Tap(TapKind),
}

impl From<PanEvent> for GestureEvent {
    fn from(event: PanEvent) -> Self {
        GestureEvent::Pan(event)
    }
}

impl From<PinchEvent> for GestureEvent {
    fn from(event: PinchEvent) -> Self {
        GestureEvent::Pinch(event)
    }
}

impl From<TapKind> for GestureEvent {
    fn from(kind: TapKind) -> Self {
        GestureEvent::Tap(kind)
    }
}

/// Which gesture currently owns the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Panning,
    Pinching,
    /// A single tap was seen; a second one may complete a double tap.
    Tapping,
}

/// An accepted event, forwarded to the matching sub-component.
///
/// `entered` is set on the event that made the gesture active (an explicit
/// `Began`, or an `Updated` that arrived without one).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dispatch {
    Pan { entered: bool, event: PanEvent },
    Pinch { entered: bool, event: PinchEvent },
    DoubleTap,
}

/// Race between pan, pinch and double tap.
#[derive(Debug, Clone, Default)]
pub struct Arbiter {
    phase: Phase,
    double_tap_window: DoubleTapWindow,
}

impl Arbiter {
    #[must_use]
    pub fn new(double_tap_window: DoubleTapWindow) -> Self {
        Self {
            phase: Phase::Idle,
            double_tap_window,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Forgets any gesture in progress.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Applies the transition table. Returns `None` for dropped events.
    pub fn route(&mut self, event: GestureEvent) -> Option<Dispatch> {
        let accepting_new = matches!(self.phase, Phase::Idle | Phase::Tapping);

        match event {
            GestureEvent::Pan(event) => match (self.phase, event) {
                (Phase::Panning, PanEvent::Began) => None,
                (Phase::Panning, PanEvent::Updated { .. }) => Some(Dispatch::Pan {
                    entered: false,
                    event,
                }),
                (Phase::Panning, PanEvent::Ended { .. }) => {
                    self.phase = Phase::Idle;
                    Some(Dispatch::Pan {
                        entered: false,
                        event,
                    })
                }
                (_, PanEvent::Began | PanEvent::Updated { .. }) if accepting_new => {
                    self.phase = Phase::Panning;
                    Some(Dispatch::Pan {
                        entered: true,
                        event,
                    })
                }
                _ => None,
            },
            GestureEvent::Pinch(event) => match (self.phase, event) {
                (Phase::Pinching, PinchEvent::Began) => None,
                (Phase::Pinching, PinchEvent::Updated { .. }) => Some(Dispatch::Pinch {
                    entered: false,
                    event,
                }),
                (Phase::Pinching, PinchEvent::Ended) => {
                    self.phase = Phase::Idle;
                    Some(Dispatch::Pinch {
                        entered: false,
                        event,
                    })
                }
                (_, PinchEvent::Began | PinchEvent::Updated { .. }) if accepting_new => {
                    self.phase = Phase::Pinching;
                    Some(Dispatch::Pinch {
                        entered: true,
                        event,
                    })
                }
                _ => None,
            },
            GestureEvent::Tap(_) if !accepting_new => None,
            GestureEvent::Tap(TapKind::Double { interval })
                if self.double_tap_window.contains(interval) =>
            {
                self.phase = Phase::Idle;
                Some(Dispatch::DoubleTap)
            }
            GestureEvent::Tap(_) => {
                self.phase = Phase::Tapping;
                None
            }
        }
    }
}

/// Classifies raw tap instants into single and double taps.
///
/// For hosts whose input layer reports taps without counting them.
#[derive(Debug, Clone, Default)]
pub struct TapClassifier {
    window: DoubleTapWindow,
    last_tap: Option<Instant>,
}

impl TapClassifier {
    #[must_use]
    pub fn new(window: DoubleTapWindow) -> Self {
        Self {
            window,
            last_tap: None,
        }
    }

    /// Classifies a tap that happened at `at`.
    ///
    /// A double tap consumes both taps, so a third quick tap starts a new pair.
    pub fn classify(&mut self, at: Instant) -> TapKind {
        match self.last_tap.take() {
            Some(previous) => {
                let interval = at.saturating_duration_since(previous);
                if self.window.contains(interval) {
                    TapKind::Double { interval }
                } else {
                    self.last_tap = Some(at);
                    TapKind::Single
                }
            }
            None => {
                self.last_tap = Some(at);
                TapKind::Single
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pan_update(dx: f32, dy: f32) -> GestureEvent {
        PanEvent::Updated {
            translation: Vector::new(dx, dy),
        }
        .into()
    }

    fn quick_double() -> GestureEvent {
        TapKind::Double {
            interval: Duration::from_millis(120),
        }
        .into()
    }

    #[test]
    fn pan_lifecycle_moves_through_panning() {
        let mut arbiter = Arbiter::default();

        let began = arbiter.route(PanEvent::Began.into());
        assert_eq!(
            began,
            Some(Dispatch::Pan {
                entered: true,
                event: PanEvent::Began
            })
        );
        assert_eq!(arbiter.phase(), Phase::Panning);

        assert!(matches!(
            arbiter.route(pan_update(10.0, 0.0)),
            Some(Dispatch::Pan { entered: false, .. })
        ));

        let ended = arbiter.route(
            PanEvent::Ended {
                translation: Vector::new(10.0, 0.0),
            }
            .into(),
        );
        assert!(matches!(ended, Some(Dispatch::Pan { entered: false, .. })));
        assert_eq!(arbiter.phase(), Phase::Idle);
    }

    #[test]
    fn update_without_began_enters_the_gesture() {
        let mut arbiter = Arbiter::default();
        assert!(matches!(
            arbiter.route(pan_update(1.0, 1.0)),
            Some(Dispatch::Pan { entered: true, .. })
        ));
        assert_eq!(arbiter.phase(), Phase::Panning);
    }

    #[test]
    fn pinch_is_ignored_while_panning() {
        let mut arbiter = Arbiter::default();
        arbiter.route(PanEvent::Began.into());

        assert_eq!(arbiter.route(PinchEvent::Began.into()), None);
        assert_eq!(arbiter.route(PinchEvent::Updated { ratio: 2.0 }.into()), None);
        assert_eq!(arbiter.route(PinchEvent::Ended.into()), None);
        assert_eq!(arbiter.route(quick_double()), None);
        assert_eq!(arbiter.phase(), Phase::Panning);
    }

    #[test]
    fn pan_is_ignored_while_pinching() {
        let mut arbiter = Arbiter::default();
        arbiter.route(PinchEvent::Began.into());

        assert_eq!(arbiter.route(pan_update(50.0, 0.0)), None);
        assert_eq!(
            arbiter.route(
                PanEvent::Ended {
                    translation: Vector::new(50.0, 0.0)
                }
                .into()
            ),
            None
        );
        assert_eq!(arbiter.phase(), Phase::Pinching);

        arbiter.route(PinchEvent::Ended.into());
        assert_eq!(arbiter.phase(), Phase::Idle);
    }

    #[test]
    fn stray_end_events_are_dropped() {
        let mut arbiter = Arbiter::default();
        assert_eq!(arbiter.route(PinchEvent::Ended.into()), None);
        assert_eq!(
            arbiter.route(
                PanEvent::Ended {
                    translation: Vector::new(300.0, 0.0)
                }
                .into()
            ),
            None
        );
        assert_eq!(arbiter.phase(), Phase::Idle);
    }

    #[test]
    fn single_tap_waits_and_does_not_block_pan() {
        let mut arbiter = Arbiter::default();
        assert_eq!(arbiter.route(TapKind::Single.into()), None);
        assert_eq!(arbiter.phase(), Phase::Tapping);

        assert!(matches!(
            arbiter.route(PanEvent::Began.into()),
            Some(Dispatch::Pan { entered: true, .. })
        ));
    }

    #[test]
    fn double_tap_fires_from_idle_and_tapping() {
        let mut arbiter = Arbiter::default();
        assert_eq!(arbiter.route(quick_double()), Some(Dispatch::DoubleTap));
        assert_eq!(arbiter.phase(), Phase::Idle);

        arbiter.route(TapKind::Single.into());
        assert_eq!(arbiter.route(quick_double()), Some(Dispatch::DoubleTap));
        assert_eq!(arbiter.phase(), Phase::Idle);
    }

    #[test]
    fn slow_double_tap_is_downgraded() {
        let mut arbiter = Arbiter::default();
        let slow = TapKind::Double {
            interval: Duration::from_millis(400),
        };
        assert_eq!(arbiter.route(slow.into()), None);
        assert_eq!(arbiter.phase(), Phase::Tapping);
    }

    #[test]
    fn classifier_pairs_quick_taps() {
        let start = Instant::now();
        let mut classifier = TapClassifier::default();

        assert_eq!(classifier.classify(start), TapKind::Single);
        assert_eq!(
            classifier.classify(start + Duration::from_millis(200)),
            TapKind::Double {
                interval: Duration::from_millis(200)
            }
        );
        // The pair was consumed; the next tap starts over.
        assert_eq!(
            classifier.classify(start + Duration::from_millis(300)),
            TapKind::Single
        );
    }

    #[test]
    fn classifier_restarts_after_slow_tap() {
        let start = Instant::now();
        let mut classifier = TapClassifier::new(DoubleTapWindow::from_millis(250));

        classifier.classify(start);
        assert_eq!(
            classifier.classify(start + Duration::from_millis(600)),
            TapKind::Single
        );
        assert!(matches!(
            classifier.classify(start + Duration::from_millis(700)),
            TapKind::Double { .. }
        ));
    }
}
