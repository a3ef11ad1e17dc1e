// SPDX-License-Identifier: MPL-2.0
//! Rendering of the controls overlay.
//!
//! Every element is placed at the rectangle [`OverlayLayout`] computed for
//! it, so drawing and hit-testing share one geometry. Input does not flow
//! through these widgets: pointer events reach [`VideoControls`] directly.
//!
//! [`OverlayLayout`]: super::layout::OverlayLayout

use super::button_group::Button;
use super::component::VideoControls;
use super::time_display::{format_current, format_total};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{overlay, tooltip};
use iced::alignment::Horizontal;
use iced::widget::{container, text, tooltip::Position, Space, Stack};
use iced::{Element, Length, Padding, Point, Rectangle, Size};
use std::time::Instant;

/// Inputs the view needs beyond the controls state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub now: Instant,
}

/// Builds the overlay. Draws nothing once the fade has reached 0.
pub fn view<'a, Message: 'a>(
    controls: &VideoControls,
    ctx: ViewContext<'_>,
) -> Element<'a, Message> {
    let alpha = controls.opacity(ctx.now);
    if alpha <= 0.0 {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    }

    let layout = controls.layout();
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(overlay::backdrop(alpha)),
        );

    for button in Button::ALL {
        let pressed = controls.buttons().is_pressed(button);
        let (glyph, label) = playback_glyph(button, controls.is_playing());
        layers = layers.push(place(
            layout.button(button),
            tooltip::labeled(
                glyph_button(glyph, layout.button(button).size(), pressed, alpha),
                ctx.i18n.tr(label),
                Position::Top,
            ),
        ));
    }

    let fullscreen_glyph = if controls.fullscreen().is_fullscreen() {
        "⤡"
    } else {
        "⤢"
    };
    layers = layers.push(place(
        layout.fullscreen,
        tooltip::labeled(
            glyph_button(
                fullscreen_glyph,
                layout.fullscreen.size(),
                controls.fullscreen().is_pressed(),
                alpha,
            ),
            ctx.i18n.tr("label-toggle-fullscreen"),
            Position::Top,
        ),
    ));

    let reconciler = controls.slider().reconciler();
    layers = layers
        .push(place(
            layout.current_time,
            time_label(
                format_current(reconciler.current_time()),
                layout.current_time,
                Horizontal::Left,
                alpha,
            ),
        ))
        .push(place(
            layout.total_time,
            time_label(
                format_total(reconciler.duration()),
                layout.total_time,
                Horizontal::Right,
                alpha,
            ),
        ));

    let track = layout.track;
    layers = layers
        .push(place(
            track,
            tooltip::labeled(
                bar(track.width, track.height, overlay::track(alpha)),
                ctx.i18n.tr("label-control-slider"),
                Position::Top,
            ),
        ))
        .push(place(
            track,
            bar(reconciler.playable_width(), track.height, overlay::playable_bar(alpha)),
        ))
        .push(place(
            track,
            bar(reconciler.active_width(), track.height, overlay::active_bar(alpha)),
        ));

    if let Some(thumb) = scaled_thumb(controls) {
        let geometry_alpha = alpha * controls.slider().thumb_geometry().opacity;
        layers = layers.push(place(
            thumb,
            tooltip::labeled(
                container(Space::new())
                    .width(Length::Fixed(thumb.width))
                    .height(Length::Fixed(thumb.height))
                    .style(overlay::thumb(geometry_alpha)),
                ctx.i18n.tr("label-slider-thumb"),
                Position::Top,
            ),
        ));

        if reconciler.is_dragging() {
            let time = format_current(reconciler.time_under_thumb());
            let preview = ctx
                .i18n
                .tr_with_args("hint-time-under-thumb", &[("time", time.as_str())]);
            let bubble = Rectangle::new(
                Point::new(thumb.x, (thumb.y - spacing::LG - spacing::XS).max(0.0)),
                Size::new(sizing::TOTAL_TIME_WIDTH * 2.0, spacing::LG),
            );
            layers = layers.push(place(
                bubble,
                container(text(preview).size(typography::BODY))
                    .style(overlay::label(alpha)),
            ));
        }
    }

    layers.into()
}

/// Thumb bounds grown around their center by the press scale.
fn scaled_thumb(controls: &VideoControls) -> Option<Rectangle> {
    let bounds = controls.slider().thumb_bounds()?;
    let scale = controls.slider().thumb_geometry().scale;
    let size = Size::new(bounds.width * scale, bounds.height * scale);
    let center = bounds.center();
    Some(Rectangle::new(
        Point::new(
            (center.x - size.width / 2.0).max(0.0),
            (center.y - size.height / 2.0).max(0.0),
        ),
        size,
    ))
}

/// Glyph and label key for a playback button.
fn playback_glyph(button: Button, is_playing: bool) -> (&'static str, &'static str) {
    match button {
        Button::Rewind => ("⏪", "label-rewind"),
        Button::Forward => ("⏩", "label-forward"),
        Button::PlayPause if is_playing => ("⏸", "label-pause"),
        Button::PlayPause => ("▶", "label-play"),
    }
}

/// Positions `content` with its top-left corner at `bounds`' origin.
fn place<'a, Message: 'a>(
    bounds: Rectangle,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .padding(Padding {
            top: bounds.y,
            left: bounds.x,
            right: 0.0,
            bottom: 0.0,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn glyph_button<'a, Message: 'a>(
    glyph: &'static str,
    size: Size,
    pressed: bool,
    alpha: f32,
) -> Element<'a, Message> {
    let icon = if size.width >= sizing::PLAYBACK_BUTTON {
        sizing::ICON_LG
    } else {
        sizing::ICON_MD
    };
    container(text(glyph).size(icon))
        .center_x(Length::Fixed(size.width))
        .center_y(Length::Fixed(size.height))
        .style(overlay::control_button(pressed, alpha))
        .into()
}

fn time_label<'a, Message: 'a>(
    value: String,
    bounds: Rectangle,
    align: Horizontal,
    alpha: f32,
) -> Element<'a, Message> {
    container(text(value).size(typography::BODY))
        .width(Length::Fixed(bounds.width))
        .center_y(Length::Fixed(bounds.height))
        .align_x(align)
        .style(overlay::label(alpha))
        .into()
}

fn bar<'a, Message: 'a>(
    width: f32,
    height: f32,
    style: impl Fn(&iced::Theme) -> container::Style + 'a,
) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(width.max(0.0)))
        .height(Length::Fixed(height))
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::controls::component::Message;
    use crate::test_utils::assert_relative_eq;

    #[test]
    fn play_pause_glyph_follows_playback_state() {
        assert_eq!(playback_glyph(Button::PlayPause, false).1, "label-play");
        assert_eq!(playback_glyph(Button::PlayPause, true).1, "label-pause");
        assert_eq!(playback_glyph(Button::Rewind, true).1, "label-rewind");
    }

    #[test]
    fn pressed_thumb_grows_around_its_center() {
        let now = Instant::now();
        let mut controls = VideoControls::default();
        controls.handle(Message::Resized(Size::new(800.0, 600.0)), now);
        let resting = scaled_thumb(&controls).expect("measured");
        assert_relative_eq!(resting.width, 20.0);

        controls.handle(
            Message::Slider(crate::ui::controls::slider::Message::Pan(
                crate::ui::gestures::PanPhase::Began,
            )),
            now,
        );
        let pressed = scaled_thumb(&controls).expect("measured");
        assert_relative_eq!(pressed.width, 25.0);
        assert_relative_eq!(pressed.center_x(), resting.center_x());
    }
}
