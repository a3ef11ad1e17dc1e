// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition for the controls overlay.
//!
//! - [`pointer`]: raw pointer samples
//! - [`router`]: tap, double-tap, pinch and thumb-pan classification
//! - [`touchable`]: press feedback and activation for buttons
//! - [`observers`]: effects that run alongside the thumb pan

pub mod observers;
pub mod pointer;
pub mod router;
pub mod touchable;

pub use observers::{ThumbObserver, ThumbPressScale};
pub use pointer::{FingerId, PointerEvent, PointerPhase, MOUSE_FINGER};
pub use router::{GestureIntent, GestureRouter, PanPhase, RouterContext};
pub use touchable::Touchable;
