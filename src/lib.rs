// SPDX-License-Identifier: MPL-2.0
//! `iced_video_controls` provides gesture-driven on-screen controls for a
//! video surface, built with the Iced GUI framework.
//!
//! The overlay combines a seek slider whose thumb follows either playback or
//! the user's finger, an auto-hiding visibility controller, a gesture router
//! for taps, double taps, pans and pinches, and playback and fullscreen
//! buttons. Hosts drive it with [`ui::controls::Message`]s and apply the
//! [`ui::controls::Effect`]s it returns.
//!
//! A demo host over a simulated player lives in [`app`].

#![doc(html_root_url = "https://docs.rs/iced_video_controls/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
