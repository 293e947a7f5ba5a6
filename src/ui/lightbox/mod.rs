// SPDX-License-Identifier: MPL-2.0
//! Lightbox module responsible for rendering the fullscreen viewer.

pub mod component;
pub mod controls;
pub mod pane;
pub mod strip;

use self::component::Message;
use crate::gallery::Collection;
use crate::i18n::I18n;
use crate::loader::ImageStore;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub collection: &'a Collection,
    pub images: &'a ImageStore,
}

/// Renders the open lightbox. Callers must only invoke this while the
/// component is open; a closed component renders an empty container.
pub fn view<'a>(state: &'a component::State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(index) = state.open_index() else {
        return Container::new(Space::new().width(Length::Shrink)).into();
    };

    let mut column = Column::new()
        .spacing(12)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    column = column.push(top_bar(state, &ctx, index));
    column = column.push(image_pane(state, &ctx, index));
    column = column.push(caption(&ctx, index));

    let zoom = state.zoom().unwrap_or_default();
    column = column.push(controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        zoom,
        compact: state.is_compact(),
        strip_visible: state.strip_visible(),
    }));

    if state.strip_visible() {
        column = column.push(strip::view(ctx.collection, ctx.images, index));
    }

    column.into()
}

fn top_bar<'a>(
    state: &component::State,
    ctx: &ViewContext<'a>,
    index: usize,
) -> Element<'a, Message> {
    let position = Text::new(ctx.i18n.tr_with(
        "viewer-position",
        &[
            ("current", (index + 1).to_string()),
            ("total", state.item_count().to_string()),
        ],
    ));

    let close =
        button(Text::new(ctx.i18n.tr("viewer-close-button"))).on_press(Message::Close);

    Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(position)
        .push(Space::new().width(Length::Fill))
        .push(close)
        .into()
}

fn image_pane<'a>(
    state: &component::State,
    ctx: &ViewContext<'a>,
    index: usize,
) -> Element<'a, Message> {
    let Some(item) = ctx.collection.item(index) else {
        return centered_notice(ctx.i18n.tr("viewer-load-failed"));
    };

    if let Some(loaded) = ctx.images.get(&item.source) {
        let zoom = state.zoom().unwrap_or_default();
        return pane::ImagePane::new(
            loaded.handle.clone(),
            loaded.width,
            loaded.height,
            zoom.value(),
            state.pan_offset(),
            state.swipe_offset_x(),
        )
        .into_element();
    }

    if ctx.images.has_failed(&item.source) {
        centered_notice(ctx.i18n.tr("viewer-load-failed"))
    } else {
        centered_notice(ctx.i18n.tr("viewer-loading"))
    }
}

fn caption<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(4)
        .align_x(alignment::Horizontal::Center);

    if let Some(item) = ctx.collection.item(index) {
        column = column.push(Text::new(item.title.as_str()).size(20));
        if let Some(caption) = &item.caption {
            column = column.push(Text::new(caption.as_str()).size(14));
        }
    }

    column.into()
}

fn centered_notice<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
