// SPDX-License-Identifier: MPL-2.0
//! Control row of the lightbox: navigation, zoom, and strip toggle.

use super::component::Message;
use crate::i18n::I18n;
use crate::ui::state::{Direction, Zoom};
use iced::widget::{button, Row, Text};
use iced::{alignment, Element};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub zoom: Zoom,
    pub compact: bool,
    pub strip_visible: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(10)
        .align_y(alignment::Vertical::Center);

    row = row.push(
        button(Text::new(ctx.i18n.tr("viewer-previous-button")))
            .on_press(Message::Navigate(Direction::Previous)),
    );

    row = row.push(
        button(Text::new(ctx.i18n.tr("viewer-zoom-out-button"))).on_press(Message::ZoomOut),
    );
    row = row.push(Text::new(format!("{}%", ctx.zoom.percent())));
    row = row.push(
        button(Text::new(ctx.i18n.tr("viewer-zoom-in-button"))).on_press(Message::ZoomIn),
    );
    row = row.push(
        button(Text::new(ctx.i18n.tr("viewer-zoom-reset-button"))).on_press(Message::ResetView),
    );

    row = row.push(
        button(Text::new(ctx.i18n.tr("viewer-next-button")))
            .on_press(Message::Navigate(Direction::Next)),
    );

    if ctx.compact {
        let toggle_key = if ctx.strip_visible {
            "viewer-strip-hide"
        } else {
            "viewer-strip-show"
        };
        row = row.push(button(Text::new(ctx.i18n.tr(toggle_key))).on_press(Message::ToggleStrip));
    }

    row.into()
}
