// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the backdrop, control buttons and the seek track.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_200, GRAY_400, GRAY_900, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Scales a color's alpha by the overlay opacity.
#[must_use]
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn filled(color: Color, rad: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: rad.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimming layer behind the controls.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(faded(Color { a: opacity::BACKDROP, ..BLACK }, alpha), 0.0)
}

/// Round background of a control button, darker while pressed.
pub fn control_button(pressed: bool, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = if pressed {
            Color {
                a: opacity::PRESSED,
                ..GRAY_900
            }
        } else {
            Color::TRANSPARENT
        };
        container::Style {
            text_color: Some(faded(WHITE, alpha)),
            ..filled(faded(background, alpha), radius::FULL)
        }
    }
}

/// Whole track, unplayed part.
pub fn track(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(faded(GRAY_400, alpha), radius::SM)
}

/// Buffered part of the track.
pub fn playable_bar(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(faded(GRAY_200, alpha), radius::SM)
}

/// Played part of the track.
pub fn active_bar(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(faded(WHITE, alpha), radius::SM)
}

pub fn thumb(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(faded(WHITE, alpha), radius::FULL)
}

/// Time labels.
pub fn label(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(faded(WHITE, alpha)),
        ..Default::default()
    }
}
