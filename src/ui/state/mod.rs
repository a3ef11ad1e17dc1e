// SPDX-License-Identifier: MPL-2.0
//! State machines behind the controls overlay.
//!
//! None of these types touch the clock or the view tree. Time comes in as an
//! `Instant` parameter and geometry as measured values.

pub mod fade;
pub mod layout;
pub mod progress;
pub mod thumb;
pub mod timer;
pub mod visibility;

pub use fade::OverlayFade;
pub use layout::LayoutTracker;
pub use thumb::{DragSession, OffsetSource, ThumbReconciler};
pub use timer::AutoHideTimer;
pub use visibility::{Visibility, VisibilityController};
