// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::photo::Photo;
use iced::widget::image;

/// Top-level messages consumed by `App::update`. Every state transition in
/// the gallery goes through exactly one of these variants.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the one-time photo listing fetch.
    PhotoListFetched(Result<Vec<Photo>, Error>),
    /// A grid thumbnail finished downloading (or failed).
    ThumbnailLoaded {
        id: String,
        result: Result<image::Handle, Error>,
    },
    /// A full-resolution image for the modal finished downloading (or failed).
    FullImageLoaded {
        id: String,
        result: Result<image::Handle, Error>,
    },
    /// A grid card, navigation dot, or strip thumbnail was activated.
    SelectPhoto(usize),
    /// Pointer entered a grid card.
    HoverPhoto(String),
    /// Pointer left a grid card.
    ClearHover,
    /// Advance the modal selection (button or `ArrowRight`).
    NextPhoto,
    /// Retreat the modal selection (button or `ArrowLeft`).
    PreviousPhoto,
    /// Close the modal (button, backdrop click, or `Escape`).
    CloseModal,
    /// The "Try Again" control on the fetch error screen.
    RetryFetch,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// These exist for testing against a local stub server; the defaults are the
/// compile-time constants in [`crate::config`].
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional listing API base override (e.g. `http://127.0.0.1:9000`).
    pub api_base: Option<String>,
    /// Optional image host override for derived thumbnail/full references.
    pub image_base: Option<String>,
    /// Optional fetch page size override.
    pub limit: Option<u32>,
}
