// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the
//! lightbox.
//!
//! The `App` struct wires together the domains (gallery, localization,
//! decoded-image store, viewer) and translates lightbox effects into image
//! loads. Policy decisions like window sizing, the compact breakpoint, and
//! which collection is active stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{Config, COMPACT_WIDTH_THRESHOLD};
use crate::gallery::{Collection, Gallery};
use crate::i18n::I18n;
use crate::loader::{self, ImageStore};
use crate::ui::grid;
use crate::ui::lightbox::{self, component};
use crate::ui::scroll_lock::ScrollLockState;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    gallery: Gallery,
    active_collection: usize,
    lightbox: component::State,
    images: ImageStore,
    scroll_lock: ScrollLockState,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load settings, using defaults: {e}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);

        let gallery = match &flags.source {
            Some(source) => match Gallery::load(source) {
                Ok(gallery) => {
                    tracing::info!(
                        collections = gallery.collections().len(),
                        items = gallery.iter_items().count(),
                        "gallery loaded from {}",
                        source.display()
                    );
                    gallery
                }
                Err(e) => {
                    tracing::error!("failed to load gallery from {}: {e}", source.display());
                    Gallery::default()
                }
            },
            None => Gallery::default(),
        };

        let scroll_lock = ScrollLockState::new();
        let mut viewer = component::State::new(
            scroll_lock.clone(),
            config.zoom_step(),
            config.swipe_threshold(),
        );
        viewer.set_item_count(gallery.collection(0).map_or(0, Collection::len));

        let load_all = Task::batch(
            gallery
                .iter_items()
                .map(|item| load_task(item.source.clone())),
        );

        let app = Self {
            i18n,
            gallery,
            active_collection: 0,
            lightbox: viewer,
            images: ImageStore::default(),
            scroll_lock,
        };

        (app, load_all)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Grid(grid::Message::SelectCollection(index)) => {
                self.select_collection(index);
                Task::none()
            }
            Message::Grid(grid::Message::OpenItem(index)) => {
                let effect = self.lightbox.handle(component::Message::Open(index));
                self.process_effect(effect)
            }
            Message::Lightbox(viewer_message) => {
                let effect = self.lightbox.handle(viewer_message);
                self.process_effect(effect)
            }
            Message::ImageLoaded { path, result } => {
                match result {
                    Ok(image) => self.images.insert(path, image),
                    Err(e) => {
                        tracing::warn!("failed to decode {}: {e}", path.display());
                        self.images.mark_failed(path);
                    }
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.lightbox.set_compact(size.width < COMPACT_WIDTH_THRESHOLD);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let active = self
            .gallery
            .collection(self.active_collection);

        if self.lightbox.is_open() {
            if let Some(collection) = active {
                return lightbox::view(
                    &self.lightbox,
                    lightbox::ViewContext {
                        i18n: &self.i18n,
                        collection,
                        images: &self.images,
                    },
                )
                .map(Message::Lightbox);
            }
        }

        grid::view(grid::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            active_collection: self.active_collection,
            images: &self.images,
            scroll_enabled: !self.scroll_lock.is_locked(),
        })
        .map(Message::Grid)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.lightbox.is_open())
    }

    fn select_collection(&mut self, index: usize) {
        if index == self.active_collection || index >= self.gallery.collections().len() {
            return;
        }
        // Close first so an open index can never refer across item lists.
        self.lightbox.close();
        self.active_collection = index;
        self.lightbox
            .set_item_count(self.gallery.collection(index).map_or(0, Collection::len));
    }

    fn process_effect(&mut self, effect: component::Effect) -> Task<Message> {
        match effect {
            component::Effect::None => Task::none(),
            component::Effect::ItemShown(index) => {
                let Some(item) = self
                    .gallery
                    .collection(self.active_collection)
                    .and_then(|collection| collection.item(index))
                else {
                    return Task::none();
                };

                if self.images.is_missing(&item.source) {
                    load_task(item.source.clone())
                } else {
                    self.images.touch(&item.source);
                    Task::none()
                }
            }
        }
    }
}

fn load_task(path: PathBuf) -> Task<Message> {
    Task::perform(loader::load(path.clone()), move |result| {
        Message::ImageLoaded {
            path: path.clone(),
            result,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryItem;

    fn gallery(counts: &[usize]) -> Gallery {
        let collections = counts
            .iter()
            .enumerate()
            .map(|(c, count)| {
                let items = (0..*count)
                    .map(|i| GalleryItem {
                        source: PathBuf::from(format!("/gallery/{c}/{i}.jpg")),
                        title: format!("Item {i}"),
                        caption: None,
                    })
                    .collect();
                Collection::new(format!("Collection {c}"), None, items)
            })
            .collect();
        Gallery::new(collections)
    }

    fn app_with(counts: &[usize]) -> App {
        let (mut app, _task) = App::new(Flags::default());
        app.gallery = gallery(counts);
        app.active_collection = 0;
        app.lightbox
            .set_item_count(app.gallery.collection(0).map_or(0, Collection::len));
        app
    }

    #[test]
    fn opening_from_the_grid_locks_scrolling() {
        let mut app = app_with(&[4]);
        let _ = app.update(Message::Grid(grid::Message::OpenItem(2)));

        assert_eq!(app.lightbox.open_index(), Some(2));
        assert!(app.scroll_lock.is_locked());

        let _ = app.update(Message::Lightbox(component::Message::Close));
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn switching_collections_closes_the_viewer() {
        let mut app = app_with(&[4, 7]);
        let _ = app.update(Message::Grid(grid::Message::OpenItem(3)));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::Grid(grid::Message::SelectCollection(1)));
        assert!(!app.lightbox.is_open());
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.lightbox.item_count(), 7);
    }

    #[test]
    fn selecting_an_unknown_collection_is_ignored() {
        let mut app = app_with(&[4]);
        let _ = app.update(Message::Grid(grid::Message::SelectCollection(9)));
        assert_eq!(app.active_collection, 0);
    }

    #[test]
    fn resize_toggles_compact_presentation() {
        let mut app = app_with(&[4]);
        let _ = app.update(Message::WindowResized(iced::Size::new(480.0, 800.0)));
        assert!(app.lightbox.is_compact());

        let _ = app.update(Message::WindowResized(iced::Size::new(1200.0, 800.0)));
        assert!(!app.lightbox.is_compact());
    }

    #[test]
    fn failed_decodes_are_recorded() {
        let mut app = app_with(&[2]);
        let path = PathBuf::from("/gallery/0/0.jpg");
        let _ = app.update(Message::ImageLoaded {
            path: path.clone(),
            result: Err(crate::error::Error::Decode("bad file".into())),
        });
        assert!(app.images.has_failed(&path));
    }
}
