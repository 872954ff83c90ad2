// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the modal.
//!
//! The `App` struct owns the session lifecycle (fetching, ready, failed),
//! the navigation controller, and the per-photo image caches. Update logic,
//! view rendering, and event subscriptions live in their own submodules so
//! the state definition stays auditable in one place.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Endpoints};
use crate::error::Error;
use crate::navigation::GalleryNavigator;
use crate::{api, ui};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Session lifecycle for the one-time listing fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The listing request is in flight.
    Loading,
    /// Photos are available and the grid is shown.
    Ready,
    /// The fetch failed; a blocking error screen is shown until the user
    /// retries.
    Failed(Error),
}

/// Lifecycle of one downloaded image.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(image::Handle),
    Failed,
}

/// Root Iced application state.
pub struct App {
    endpoints: Endpoints,
    load_state: LoadState,
    navigator: GalleryNavigator,
    /// Grid thumbnails, keyed by photo id.
    thumbnails: HashMap<String, ImageSlot>,
    /// Full-resolution modal images, keyed by photo id. Filled on demand
    /// when a photo becomes the selection.
    full_images: HashMap<String, ImageSlot>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("load_state", &self.load_state)
            .field("photo_count", &self.navigator.len())
            .field("selected", &self.navigator.selected_index())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
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
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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
    /// Initializes application state and kicks off the one-time listing
    /// fetch.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let endpoints = Endpoints {
            api_base: flags.api_base.unwrap_or_else(|| {
                config::DEFAULT_API_BASE.to_string()
            }),
            image_base: flags.image_base.unwrap_or_else(|| {
                config::DEFAULT_IMAGE_BASE.to_string()
            }),
            limit: flags.limit.unwrap_or(config::DEFAULT_FETCH_LIMIT),
        };

        let app = App {
            endpoints,
            load_state: LoadState::Loading,
            navigator: GalleryNavigator::default(),
            thumbnails: HashMap::new(),
            full_images: HashMap::new(),
        };

        let fetch = app.fetch_photo_list_task();
        (app, fetch)
    }

    fn title(&self) -> String {
        String::from("Gallery Slider")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.load_state {
            LoadState::Loading => ui::panels::loading_screen(),
            LoadState::Failed(error) => ui::error_screen::view(error),
            LoadState::Ready => view::gallery(self),
        }
    }

    /// Keyboard listening is scoped to the modal's open lifetime: the
    /// subscription is only returned while a selection exists, so the
    /// runtime drops it on close whatever the exit path.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::modal_keys(self.navigator.is_open())
    }

    /// Builds the task performing the listing fetch. Used at startup and by
    /// the "Try Again" control.
    fn fetch_photo_list_task(&self) -> Task<Message> {
        Task::perform(
            api::fetch_photo_list(self.endpoints.clone()),
            Message::PhotoListFetched,
        )
    }

    /// Read access for views and tests.
    pub fn navigator(&self) -> &GalleryNavigator {
        &self.navigator
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn thumbnail(&self, id: &str) -> Option<&ImageSlot> {
        self.thumbnails.get(id)
    }

    pub fn full_image(&self, id: &str) -> Option<&ImageSlot> {
        self.full_images.get(id)
    }
}
