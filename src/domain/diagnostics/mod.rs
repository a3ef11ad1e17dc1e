// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`EventCapacity`]: Capacity of the control event buffer

mod newtypes;

pub use newtypes::EventCapacity;
