// SPDX-License-Identifier: MPL-2.0
//! Horizontal thumbnail strip inside the lightbox.

use super::component::Message;
use crate::config::STRIP_THUMBNAIL_SIZE;
use crate::gallery::Collection;
use crate::loader::ImageStore;
use iced::widget::{button, scrollable, Container, Image, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(
    collection: &'a Collection,
    images: &'a ImageStore,
    current: usize,
) -> Element<'a, Message> {
    let mut row = Row::new().spacing(6);

    for (index, item) in collection.items().iter().enumerate() {
        let cell: Element<'_, Message> = match images.get(&item.source) {
            Some(loaded) => Image::new(loaded.handle.clone())
                .width(Length::Fixed(STRIP_THUMBNAIL_SIZE))
                .height(Length::Fixed(STRIP_THUMBNAIL_SIZE))
                .content_fit(iced::ContentFit::Cover)
                .into(),
            None => Container::new(Text::new("·"))
                .center_x(Length::Fixed(STRIP_THUMBNAIL_SIZE))
                .center_y(Length::Fixed(STRIP_THUMBNAIL_SIZE))
                .into(),
        };

        let mut thumb = button(cell).padding(if index == current { 3 } else { 0 });
        if index != current {
            thumb = thumb.on_press(Message::JumpTo(index));
        }
        row = row.push(thumb);
    }

    scrollable(row)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill)
        .into()
}
