// SPDX-License-Identifier: MPL-2.0
//! Translation of raw mouse and touch input into preview gesture events.
//!
//! Desktop input has no gesture recogniser, so this module plays that role:
//! a left-button drag or a single finger pans, two fingers pinch, the mouse
//! wheel performs one pinch step per notch, and presses that never moved past
//! [`TAP_SLOP`] count as taps.

use crate::config::TAP_SLOP;
use crate::domain::ui::DoubleTapWindow;
use crate::ui::preview::{GestureEvent, PanEvent, PinchEvent, TapClassifier};
use iced::{mouse, touch, Point, Vector};
use std::collections::HashMap;
use std::time::Instant;

/// Scale change for one wheel notch.
const WHEEL_STEP: f32 = 1.1;

/// Pixel wheel deltas are converted to notches with this divisor.
const PIXELS_PER_NOTCH: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Drag {
    /// Pressed, not yet moved past the tap slop.
    Pressed { origin: Point },
    Panning { origin: Point, translation: Vector },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pinch {
    initial_distance: f32,
}

/// Tracks pointer state between raw events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    cursor: Option<Point>,
    drag: Option<Drag>,
    fingers: HashMap<touch::Finger, Point>,
    pinch: Option<Pinch>,
    taps: TapClassifier,
}

impl PointerTracker {
    #[must_use]
    pub fn new(double_tap_window: DoubleTapWindow) -> Self {
        Self {
            taps: TapClassifier::new(double_tap_window),
            ..Self::default()
        }
    }

    /// Forgets every pointer in flight. Tap history is kept.
    pub fn reset(&mut self) {
        self.drag = None;
        self.fingers.clear();
        self.pinch = None;
    }

    /// Converts a raw event received at `now` into gesture events.
    pub fn process(&mut self, event: &iced::Event, now: Instant) -> Vec<GestureEvent> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Some(*position);
                self.move_to(*position)
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                match self.cursor {
                    Some(origin) if self.fingers.is_empty() => {
                        self.drag = Some(Drag::Pressed { origin });
                    }
                    _ => {}
                }
                Vec::new()
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.fingers.is_empty() {
                    self.release(now)
                } else {
                    Vec::new()
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => self.cancel_drag(),
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => wheel_pinch(*delta),
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                self.finger_pressed(*id, *position)
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                self.finger_moved(*id, *position)
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => self.finger_lifted(*id, now),
            _ => Vec::new(),
        }
    }

    fn move_to(&mut self, position: Point) -> Vec<GestureEvent> {
        match self.drag {
            Some(Drag::Pressed { origin }) => {
                let translation = position - origin;
                if translation.x.hypot(translation.y) <= TAP_SLOP {
                    return Vec::new();
                }
                self.drag = Some(Drag::Panning {
                    origin,
                    translation,
                });
                vec![
                    PanEvent::Began.into(),
                    PanEvent::Updated { translation }.into(),
                ]
            }
            Some(Drag::Panning { origin, .. }) => {
                let translation = position - origin;
                self.drag = Some(Drag::Panning {
                    origin,
                    translation,
                });
                vec![PanEvent::Updated { translation }.into()]
            }
            None => Vec::new(),
        }
    }

    fn release(&mut self, now: Instant) -> Vec<GestureEvent> {
        match self.drag.take() {
            Some(Drag::Pressed { .. }) => vec![self.taps.classify(now).into()],
            Some(Drag::Panning { translation, .. }) => {
                vec![PanEvent::Ended { translation }.into()]
            }
            None => Vec::new(),
        }
    }

    /// Ends a drag without a tap, keeping the last translation.
    fn cancel_drag(&mut self) -> Vec<GestureEvent> {
        match self.drag.take() {
            Some(Drag::Panning { translation, .. }) => {
                vec![PanEvent::Ended { translation }.into()]
            }
            _ => Vec::new(),
        }
    }

    fn finger_pressed(&mut self, id: touch::Finger, position: Point) -> Vec<GestureEvent> {
        self.fingers.insert(id, position);
        match self.fingers.len() {
            1 => {
                self.drag = Some(Drag::Pressed { origin: position });
                Vec::new()
            }
            2 => {
                let mut events = self.cancel_drag();
                self.drag = None;
                if let Some(distance) = self.finger_distance() {
                    self.pinch = Some(Pinch {
                        initial_distance: distance,
                    });
                    events.push(PinchEvent::Began.into());
                }
                events
            }
            _ => Vec::new(),
        }
    }

    fn finger_moved(&mut self, id: touch::Finger, position: Point) -> Vec<GestureEvent> {
        let Some(slot) = self.fingers.get_mut(&id) else {
            return Vec::new();
        };
        *slot = position;

        if let Some(pinch) = self.pinch {
            return match self.finger_distance() {
                Some(distance) if pinch.initial_distance > 0.0 => vec![PinchEvent::Updated {
                    ratio: distance / pinch.initial_distance,
                }
                .into()],
                _ => Vec::new(),
            };
        }
        self.move_to(position)
    }

    fn finger_lifted(&mut self, id: touch::Finger, now: Instant) -> Vec<GestureEvent> {
        if self.fingers.remove(&id).is_none() {
            return Vec::new();
        }
        if self.pinch.is_some() {
            if self.fingers.len() < 2 {
                self.pinch = None;
                // The remaining finger does not resume a pan.
                self.drag = None;
                return vec![PinchEvent::Ended.into()];
            }
            return Vec::new();
        }
        self.release(now)
    }

    fn finger_distance(&self) -> Option<f32> {
        let mut positions = self.fingers.values();
        let a = positions.next()?;
        let b = positions.next()?;
        Some(a.distance(*b))
    }
}

/// One complete pinch per wheel movement; scrolling up zooms in.
fn wheel_pinch(delta: mouse::ScrollDelta) -> Vec<GestureEvent> {
    let notches = match delta {
        mouse::ScrollDelta::Lines { y, .. } => y,
        mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_NOTCH,
    };
    if notches == 0.0 || !notches.is_finite() {
        return Vec::new();
    }
    vec![
        PinchEvent::Began.into(),
        PinchEvent::Updated {
            ratio: WHEEL_STEP.powf(notches),
        }
        .into(),
        PinchEvent::Ended.into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::preview::TapKind;
    use std::time::Duration;

    fn cursor(x: f32, y: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    fn press() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn release() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn finger(id: u64, x: f32, y: f32, pressed: bool) -> iced::Event {
        let id = touch::Finger(id);
        let position = Point::new(x, y);
        iced::Event::Touch(if pressed {
            touch::Event::FingerPressed { id, position }
        } else {
            touch::Event::FingerMoved { id, position }
        })
    }

    fn lift(id: u64) -> iced::Event {
        iced::Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(id),
            position: Point::ORIGIN,
        })
    }

    #[test]
    fn mouse_drag_becomes_pan() {
        let now = Instant::now();
        let mut tracker = PointerTracker::default();
        tracker.process(&cursor(100.0, 100.0), now);
        tracker.process(&press(), now);

        assert!(tracker.process(&cursor(103.0, 100.0), now).is_empty());

        let events = tracker.process(&cursor(160.0, 120.0), now);
        assert_eq!(
            events,
            vec![
                PanEvent::Began.into(),
                PanEvent::Updated {
                    translation: Vector::new(60.0, 20.0)
                }
                .into()
            ]
        );

        let events = tracker.process(&release(), now);
        assert_eq!(
            events,
            vec![PanEvent::Ended {
                translation: Vector::new(60.0, 20.0)
            }
            .into()]
        );
    }

    #[test]
    fn quick_clicks_become_double_tap() {
        let now = Instant::now();
        let mut tracker = PointerTracker::default();
        tracker.process(&cursor(10.0, 10.0), now);

        tracker.process(&press(), now);
        assert_eq!(
            tracker.process(&release(), now),
            vec![TapKind::Single.into()]
        );

        let later = now + Duration::from_millis(120);
        tracker.process(&press(), later);
        assert_eq!(
            tracker.process(&release(), later),
            vec![TapKind::Double {
                interval: Duration::from_millis(120)
            }
            .into()]
        );
    }

    #[test]
    fn wheel_produces_pinch_step() {
        let now = Instant::now();
        let mut tracker = PointerTracker::default();
        let events = tracker.process(
            &iced::Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
            now,
        );
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            PinchEvent::Updated { ratio: WHEEL_STEP }.into()
        );
    }

    #[test]
    fn two_fingers_pinch() {
        let now = Instant::now();
        let mut tracker = PointerTracker::default();
        tracker.process(&finger(1, 0.0, 0.0, true), now);
        let began = tracker.process(&finger(2, 100.0, 0.0, true), now);
        assert_eq!(began, vec![PinchEvent::Began.into()]);

        let moved = tracker.process(&finger(2, 200.0, 0.0, false), now);
        assert_eq!(moved, vec![PinchEvent::Updated { ratio: 2.0 }.into()]);

        assert_eq!(tracker.process(&lift(2), now), vec![PinchEvent::Ended.into()]);
        // The finger left on the screen neither pans nor taps.
        assert!(tracker.process(&finger(1, 80.0, 0.0, false), now).is_empty());
        assert!(tracker.process(&lift(1), now).is_empty());
    }

    #[test]
    fn second_finger_ends_running_pan() {
        let now = Instant::now();
        let mut tracker = PointerTracker::default();
        tracker.process(&finger(1, 0.0, 0.0, true), now);
        tracker.process(&finger(1, 40.0, 0.0, false), now);

        let events = tracker.process(&finger(2, 100.0, 100.0, true), now);
        assert_eq!(
            events,
            vec![
                PanEvent::Ended {
                    translation: Vector::new(40.0, 0.0)
                }
                .into(),
                PinchEvent::Began.into()
            ]
        );
    }
}
