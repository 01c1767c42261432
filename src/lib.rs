// SPDX-License-Identifier: MPL-2.0
//! `iced_glance` is a gesture driven full-screen image preview built on Iced.
//!
//! The preview core in [`ui::preview`] turns pan, pinch and double-tap
//! gestures into a translation and scale, fades the image and backdrop while
//! dragging vertically, and reports page turns and dismissal as effects. The
//! [`app`] module hosts it in a desktop window for manual testing.

#![doc(html_root_url = "https://docs.rs/iced_glance/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
