// SPDX-License-Identifier: MPL-2.0
//! Application root state for the preview demo shell.
//!
//! The `App` struct owns one [`PreviewController`] and a [`PointerTracker`]
//! that turns desktop input into gestures. Everything the preview does is
//! decided by the controller; this layer only stamps events with the current
//! instant, drives frame ticks, and logs the effects.

mod message;
pub mod paths;
pub mod pointer;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::ui::preview::{Effect, PreviewController};
use iced::{window, Element, Subscription, Task, Theme};
use pointer::PointerTracker;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    controller: PreviewController,
    pointer: PointerTracker,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_open", &self.controller.is_open())
            .field("image_index", &self.controller.image_index())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires `Fn` for boot while flags may only be consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Some(warning) = &flags.config_warning {
            tracing::warn!(%warning, "using default configuration");
        }
        let settings = flags.config.preview_settings();
        tracing::debug!(?settings, "preview settings resolved");

        let app = App {
            pointer: PointerTracker::new(settings.double_tap_window),
            controller: PreviewController::open(flags.images, flags.index, settings),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.controller.current_locator() {
            Some(locator) if self.controller.is_open() => format!("IcedGlance - {locator}"),
            _ => "IcedGlance".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.controller.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent(event) => {
                let now = Instant::now();
                for gesture in self.pointer.process(&event, now) {
                    let effects = self.controller.handle(gesture, now);
                    self.report(&effects);
                }
            }
            Message::Tick(now) => {
                self.controller.tick(now);
            }
            Message::Reopen => {
                self.pointer.reset();
                self.controller.reopen();
            }
        }
        Task::none()
    }

    fn report(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::ImageChanged { index } => {
                    let locator = self.controller.images().get(*index).unwrap_or_default();
                    tracing::info!(index, locator, "image changed");
                }
                Effect::Dismissed => {
                    self.pointer.reset();
                    tracing::info!("preview dismissed by gesture");
                }
                Effect::ZoomToggled { target } => {
                    tracing::debug!(zoom = target, "zoom toggled");
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::preview::ImageList;
    use iced::{mouse, Point};

    fn app() -> App {
        let flags = Flags {
            images: ImageList::new(["one.png", "two.png"]).expect("non-empty"),
            index: 0,
            config: Config::default(),
            config_warning: None,
        };
        App::new(flags).0
    }

    fn mouse_event(event: mouse::Event) -> Message {
        Message::RawEvent(iced::Event::Mouse(event))
    }

    fn drag(app: &mut App, dx: f32, dy: f32) {
        let _ = app.update(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(400.0, 300.0),
        }));
        let _ = app.update(mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)));
        let _ = app.update(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(400.0 + dx, 300.0 + dy),
        }));
        let _ = app.update(mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left)));
    }

    #[test]
    fn title_shows_current_locator() {
        let app = app();
        assert_eq!(app.title(), "IcedGlance - one.png");
    }

    #[test]
    fn mouse_drag_turns_page() {
        let mut app = app();
        drag(&mut app, -160.0, 0.0);
        assert_eq!(app.controller.image_index(), 1);
        assert_eq!(app.title(), "IcedGlance - two.png");
    }

    #[test]
    fn vertical_drag_dismisses_and_reopen_restores() {
        let mut app = app();
        drag(&mut app, 0.0, 320.0);
        assert!(!app.controller.is_open());
        assert_eq!(app.title(), "IcedGlance");

        let _ = app.update(Message::Reopen);
        assert!(app.controller.is_open());
        assert_eq!(app.controller.image_index(), 0);
    }

    #[test]
    fn tick_advances_animation() {
        let mut app = app();
        drag(&mut app, 40.0, 0.0);
        assert!(app.controller.is_animating());

        let later = Instant::now() + std::time::Duration::from_secs(1);
        let _ = app.update(Message::Tick(later));
        assert!(!app.controller.is_animating());
        assert_eq!(app.controller.transform().pos_x, 0.0);
    }
}
