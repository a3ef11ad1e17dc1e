// SPDX-License-Identifier: MPL-2.0
//! Tooltips carrying the localized control labels.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Light bubble over the dark video surface.
pub fn tooltip_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.95, 0.95, 0.95, 0.98))),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color::from_rgba(0.7, 0.7, 0.7, 0.3),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Wraps `content` with a label shown on hover.
pub fn labeled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(label.into()).size(typography::BODY))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_is_opaque_with_shadow() {
        let style = tooltip_container(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("expected color background")
        };
        assert!(bg.a > 0.9);
        assert!(style.shadow.blur_radius > 0.0);
        assert_eq!(style.text_color, Some(palette::GRAY_900));
    }
}
