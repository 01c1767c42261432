// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: components own
//! their state, handle messages, and report effects to their parent.
//!
//! - [`preview`] - Gesture driven full-screen image preview

pub mod preview;
