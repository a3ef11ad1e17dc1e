// SPDX-License-Identifier: MPL-2.0
//! Localized labels for the controls overlay.
//!
//! Translations live in `assets/i18n/<locale>.ftl` and are embedded at build
//! time. Missing keys render as `MISSING: <key>` so gaps are visible.

pub mod fluent;

pub use fluent::I18n;
