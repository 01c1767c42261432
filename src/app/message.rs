// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::ui::preview::ImageList;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Mouse or touch input not captured by a widget.
    RawEvent(iced::Event),
    /// Animation frame tick.
    Tick(Instant),
    /// Open a fresh preview after a dismiss.
    Reopen,
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Clone)]
pub struct Flags {
    pub images: ImageList,
    /// Index of the image shown first; clamped into the list.
    pub index: usize,
    pub config: Config,
    /// Warning produced while loading the config, if any.
    pub config_warning: Option<String>,
}
