// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no UI or I/O dependencies.
//!
//! # Modules
//!
//! - [`controls`]: Control value objects ([`AutoHideDelay`](controls::AutoHideDelay),
//!   [`HitSlop`](controls::HitSlop), [`GestureTiming`](controls::GestureTiming),
//!   [`SkipStep`](controls::SkipStep))
//! - [`diagnostics`]: Diagnostics types ([`EventCapacity`](diagnostics::EventCapacity))

pub mod controls;
pub mod diagnostics;
