// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of the active collection, with a collection selector.

use crate::config::GRID_COLUMNS;
use crate::gallery::{Collection, Gallery, GalleryItem};
use crate::i18n::I18n;
use crate::loader::ImageStore;
use iced::widget::{button, scrollable, Column, Container, Image, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Height of a grid cell's image area.
const CELL_IMAGE_HEIGHT: f32 = 180.0;

/// Messages emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Switch the active collection.
    SelectCollection(usize),
    /// Open the lightbox at an item of the active collection.
    OpenItem(usize),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub active_collection: usize,
    pub images: &'a ImageStore,
    /// False while the lightbox holds the scroll lock.
    pub scroll_enabled: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.gallery.is_empty() {
        return empty_state(ctx.i18n);
    }

    let mut column = Column::new()
        .spacing(16)
        .padding(16)
        .width(Length::Fill);

    if ctx.gallery.collections().len() > 1 {
        column = column.push(selector(&ctx));
    }

    if let Some(collection) = ctx.gallery.collection(ctx.active_collection) {
        column = column.push(header(collection));
        column = column.push(cells(collection, ctx.images));
    }

    if ctx.scroll_enabled {
        scrollable(column).width(Length::Fill).into()
    } else {
        // Scroll lock held: render the same content without a scrollable.
        Container::new(column).width(Length::Fill).into()
    }
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(8)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("gallery-empty-title")).size(24))
        .push(Text::new(i18n.tr("gallery-empty-hint")));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn selector<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(10);
    for (index, collection) in ctx.gallery.collections().iter().enumerate() {
        let mut entry = button(Text::new(collection.name.as_str()));
        if index != ctx.active_collection {
            entry = entry.on_press(Message::SelectCollection(index));
        }
        row = row.push(entry);
    }
    row.into()
}

fn header(collection: &Collection) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(4)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(collection.name.as_str()).size(28));

    if let Some(subtitle) = &collection.subtitle {
        column = column.push(Text::new(subtitle.as_str()).size(16));
    }

    column.into()
}

fn cells<'a>(collection: &'a Collection, images: &'a ImageStore) -> Element<'a, Message> {
    let mut column = Column::new().spacing(12).width(Length::Fill);

    for (row_index, row_items) in collection.items().chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(12).width(Length::Fill);
        for (column_index, item) in row_items.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + column_index;
            row = row.push(cell(item, index, images));
        }
        // Pad the last row so cells keep their width.
        for _ in row_items.len()..GRID_COLUMNS {
            row = row.push(Space::new().width(Length::Fill));
        }
        column = column.push(row);
    }

    column.into()
}

fn cell<'a>(item: &'a GalleryItem, index: usize, images: &'a ImageStore) -> Element<'a, Message> {
    let thumbnail: Element<'_, Message> = match images.get(&item.source) {
        Some(loaded) => Image::new(loaded.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(CELL_IMAGE_HEIGHT))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => Container::new(Space::new().width(Length::Shrink))
            .width(Length::Fill)
            .height(Length::Fixed(CELL_IMAGE_HEIGHT))
            .into(),
    };

    let mut content = Column::new()
        .spacing(4)
        .width(Length::Fill)
        .push(thumbnail)
        .push(Text::new(item.title.as_str()).size(16));

    if let Some(caption) = &item.caption {
        content = content.push(Text::new(caption.as_str()).size(12));
    }

    button(content)
        .width(Length::Fill)
        .on_press(Message::OpenItem(index))
        .into()
}
