// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! All state transitions happen synchronously in here, in response to UI
//! events or task completions. The only suspension points are the listing
//! fetch and the per-image downloads, which report back as messages.

use super::{App, ImageSlot, LoadState, Message};
use crate::api;
use crate::navigation::GalleryNavigator;
use iced::Task;
use std::collections::HashMap;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::PhotoListFetched(Ok(photos)) => {
            tracing::info!(count = photos.len(), "photo listing fetched");

            app.thumbnails = photos
                .iter()
                .map(|photo| (photo.id.clone(), ImageSlot::Loading))
                .collect();
            app.full_images = HashMap::new();

            let thumbnail_tasks = photos
                .iter()
                .map(|photo| {
                    let id = photo.id.clone();
                    Task::perform(api::fetch_image(photo.url.clone()), move |result| {
                        Message::ThumbnailLoaded {
                            id: id.clone(),
                            result,
                        }
                    })
                })
                .collect::<Vec<_>>();

            app.navigator = GalleryNavigator::new(photos);
            app.load_state = LoadState::Ready;

            Task::batch(thumbnail_tasks)
        }
        Message::PhotoListFetched(Err(error)) => {
            tracing::warn!(%error, "photo listing fetch failed");
            app.load_state = LoadState::Failed(error);
            Task::none()
        }
        Message::ThumbnailLoaded { id, result } => {
            let slot = match result {
                Ok(handle) => ImageSlot::Ready(handle),
                Err(error) => {
                    tracing::debug!(%error, id = %id, "thumbnail failed to load");
                    ImageSlot::Failed
                }
            };
            app.thumbnails.insert(id, slot);
            Task::none()
        }
        Message::FullImageLoaded { id, result } => {
            let slot = match result {
                Ok(handle) => ImageSlot::Ready(handle),
                Err(error) => {
                    tracing::debug!(%error, id = %id, "full-resolution image failed to load");
                    ImageSlot::Failed
                }
            };
            app.full_images.insert(id, slot);
            Task::none()
        }
        Message::SelectPhoto(index) => {
            app.navigator.select(index);
            ensure_full_image(app)
        }
        Message::NextPhoto => {
            app.navigator.next();
            ensure_full_image(app)
        }
        Message::PreviousPhoto => {
            app.navigator.previous();
            ensure_full_image(app)
        }
        Message::CloseModal => {
            app.navigator.close();
            Task::none()
        }
        Message::HoverPhoto(id) => {
            app.navigator.set_hover(id);
            Task::none()
        }
        Message::ClearHover => {
            app.navigator.clear_hover();
            Task::none()
        }
        Message::RetryFetch => {
            tracing::info!("retrying photo listing fetch");
            app.load_state = LoadState::Loading;
            app.navigator = GalleryNavigator::default();
            app.thumbnails.clear();
            app.full_images.clear();
            app.fetch_photo_list_task()
        }
    }
}

/// Starts downloading the full-resolution image for the current selection
/// unless it is already cached or in flight.
fn ensure_full_image(app: &mut App) -> Task<Message> {
    let Some(photo) = app.navigator.selected_photo() else {
        return Task::none();
    };

    if app.full_images.contains_key(&photo.id) {
        return Task::none();
    }

    let id = photo.id.clone();
    let url = photo.download_url.clone();
    app.full_images.insert(id.clone(), ImageSlot::Loading);

    Task::perform(api::fetch_image(url), move |result| {
        Message::FullImageLoaded {
            id: id.clone(),
            result,
        }
    })
}
