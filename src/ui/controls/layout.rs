// SPDX-License-Identifier: MPL-2.0
//! Overlay layout computed from the window size.
//!
//! The view positions every control from this layout, and the gesture code
//! hit-tests against the same rectangles, so what is drawn and what is
//! touchable never drift apart.

use super::button_group::{Button, Spacing};
use crate::ui::design_tokens::{sizing, spacing};
use iced::{Point, Rectangle, Size};

/// Window-space rectangles of every overlay element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub container: Rectangle,
    pub track: Rectangle,
    pub current_time: Rectangle,
    pub total_time: Rectangle,
    pub fullscreen: Rectangle,
    pub thumb: Size,
    /// Indexed in [`Button::ALL`] order.
    pub buttons: [Rectangle; 3],
}

impl OverlayLayout {
    /// Lays out the overlay for a window of `size`.
    #[must_use]
    pub fn compute(size: Size, button_spacing: Spacing) -> Self {
        let width = sanitize(size.width);
        let height = sanitize(size.height);
        let pad = spacing::MD;

        let row_y = (height - pad - sizing::SLIDER_ROW_HEIGHT).max(0.0);
        let row = |x: f32, w: f32| {
            Rectangle::new(Point::new(x, row_y), Size::new(w, sizing::SLIDER_ROW_HEIGHT))
        };

        let current_time = row(pad, sizing::CURRENT_TIME_WIDTH);
        let fullscreen = row(
            (width - pad - sizing::FULLSCREEN_BUTTON).max(0.0),
            sizing::FULLSCREEN_BUTTON,
        );
        let total_time = row(
            (fullscreen.x - spacing::SM - sizing::TOTAL_TIME_WIDTH).max(0.0),
            sizing::TOTAL_TIME_WIDTH,
        );

        let track_x = current_time.x + current_time.width + spacing::SM;
        let track_width = (total_time.x - spacing::SM - track_x).max(0.0);
        let track = Rectangle::new(
            Point::new(
                track_x,
                row_y + (sizing::SLIDER_ROW_HEIGHT - sizing::TRACK_HEIGHT) / 2.0,
            ),
            Size::new(track_width, sizing::TRACK_HEIGHT),
        );

        Self {
            container: Rectangle::new(Point::ORIGIN, Size::new(width, height)),
            track,
            current_time,
            total_time,
            fullscreen,
            thumb: Size::new(sizing::THUMB, sizing::THUMB),
            buttons: button_row(width, height, button_spacing),
        }
    }

    /// Bounds of one playback button.
    #[must_use]
    pub fn button(&self, button: Button) -> Rectangle {
        match button {
            Button::Rewind => self.buttons[0],
            Button::PlayPause => self.buttons[1],
            Button::Forward => self.buttons[2],
        }
    }

    /// The playback button under `position`, if any.
    #[must_use]
    pub fn button_at(&self, position: Point) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|button| self.button(*button).contains(position))
    }
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self::compute(Size::ZERO, Spacing::default())
    }
}

fn button_row(width: f32, height: f32, button_spacing: Spacing) -> [Rectangle; 3] {
    let size = sizing::PLAYBACK_BUTTON;
    let y = ((height - size) / 2.0).max(0.0);
    let inner = (width - 2.0 * spacing::MD).max(0.0);

    let x_at = |index: f32| -> f32 {
        match button_spacing {
            Spacing::Fixed(gap) => {
                let gap = sanitize(gap);
                let total = 3.0 * size + 2.0 * gap;
                (width - total) / 2.0 + index * (size + gap)
            }
            Spacing::SpaceBetween => {
                let gap = ((inner - 3.0 * size) / 2.0).max(0.0);
                spacing::MD + index * (size + gap)
            }
            Spacing::SpaceAround => {
                let slot = inner / 3.0;
                spacing::MD + index * slot + (slot - size) / 2.0
            }
        }
    };

    [0.0, 1.0, 2.0].map(|index| {
        Rectangle::new(Point::new(x_at(index), y), Size::new(size, size))
    })
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
