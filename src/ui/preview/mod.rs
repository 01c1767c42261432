// SPDX-License-Identifier: MPL-2.0
//! Full-screen image preview driven by pan, pinch and double-tap gestures.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (PreviewController, orchestrator)
//!     ├── gesture       - Event types, Arbiter race, TapClassifier
//!     ├── subcomponents - pan / pinch / double_tap handlers
//!     ├── policy        - Page turn, dismiss and snap-back rules
//!     ├── animation     - One animation slot per transform field
//!     ├── projection    - Transform -> RenderFrame (opacity, backdrop, indicators)
//!     ├── settings      - Validated thresholds and durations
//!     └── state         - TransformState, ViewerState, ImageList
//! ```
//!
//! Time never comes from the clock inside this module: every operation that
//! depends on it takes an `Instant`.

pub mod animation;
pub mod component;
pub mod gesture;
pub mod policy;
pub mod projection;
pub mod settings;
pub mod state;
pub mod subcomponents;

pub use component::{Effect, PreviewController};
pub use gesture::{GestureEvent, PanEvent, PinchEvent, TapClassifier, TapKind};
pub use projection::RenderFrame;
pub use settings::PreviewSettings;
pub use state::{ImageList, TransformState, ViewerState};
