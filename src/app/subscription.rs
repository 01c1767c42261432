// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input reaches the preview through a raw event listener, and frame
//! ticks run only while an animation is in flight.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes mouse and touch events that no widget captured.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let pointer = matches!(event, event::Event::Mouse(_) | event::Event::Touch(_));
        match status {
            event::Status::Ignored if pointer => Some(Message::RawEvent(event)),
            _ => None,
        }
    })
}

/// Creates the frame tick subscription used while animations run.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
