// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and the rules that keep them valid.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: Gesture and animation value objects ([`PinchRatio`](ui::newtypes::PinchRatio),
//!   [`ZoomLimits`](ui::newtypes::ZoomLimits), [`DoubleTapWindow`](ui::newtypes::DoubleTapWindow))

pub mod ui;
