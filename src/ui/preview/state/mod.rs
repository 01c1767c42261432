// SPDX-License-Identifier: MPL-2.0
//! Preview state modules
//!
//! Leaf state read and written by the gesture sub-components. Neither type
//! carries policy: thresholds and transitions live in the sub-components and
//! in [`super::policy`].

pub mod transform;
pub mod viewer;

pub use transform::{Field, TransformState};
pub use viewer::{ImageList, ViewerState};
