// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo: a stand-in video surface under the overlay.

use super::Message;
use crate::i18n::I18n;
use crate::ui::controls::{self, VideoControls};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{container, text, Column, Container, Stack};
use iced::{Background, Element, Length};
use std::time::Instant;

/// Context required to render the demo view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controls: &'a VideoControls,
    pub zoom: f32,
    /// Last platform error, already localized.
    pub notice: Option<&'a str>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut surface_content = Column::new()
        .spacing(spacing::XS)
        .push(text(format!("{:.0}%", ctx.zoom * 100.0)).size(typography::BODY))
        .push(text(ctx.i18n.tr("hint-double-tap")).size(typography::BODY));
    if let Some(notice) = ctx.notice {
        surface_content = surface_content.push(text(notice.to_string()).size(typography::BODY));
    }

    let surface = Container::new(surface_content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            text_color: Some(palette::GRAY_400),
            ..Default::default()
        });

    let overlay = controls::view(
        ctx.controls,
        controls::ViewContext {
            i18n: ctx.i18n,
            now: ctx.now,
        },
    );

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface)
        .push(overlay)
        .into()
}
