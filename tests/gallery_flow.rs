// SPDX-License-Identifier: MPL-2.0
//! End-to-end exercises of the message loop: listing fetch outcomes, modal
//! navigation, and per-image failure isolation, all without a network.

use iced_gallery::api::{self, ListEntry};
use iced_gallery::app::{App, Flags, ImageSlot, LoadState, Message};
use iced_gallery::error::Error;
use iced_gallery::photo::Photo;

const LISTING_FIXTURE: &str = r#"[
    {"id": "1", "url": "https://unsplash.com/photos/alpha"},
    {"id": "2", "url": "https://unsplash.com/photos/beta"},
    {"id": "3", "url": "https://unsplash.com/photos/gamma"}
]"#;

fn fixture_photos() -> Vec<Photo> {
    let entries: Vec<ListEntry> = serde_json::from_str(LISTING_FIXTURE).expect("valid fixture");
    api::photos_from_list(entries, "https://picsum.photos")
}

fn ready_app() -> App {
    let (mut app, _boot) = App::new(Flags::default());
    let _task = app.update(Message::PhotoListFetched(Ok(fixture_photos())));
    app
}

#[test]
fn listing_fetch_populates_the_grid() {
    let app = ready_app();

    assert_eq!(*app.load_state(), LoadState::Ready);
    assert_eq!(app.navigator().len(), 3);
    assert_eq!(app.navigator().photos()[0].title, "photos/alpha");
    assert!(!app.navigator().is_open());
}

#[test]
fn server_error_blocks_the_session_until_retry() {
    let (mut app, _boot) = App::new(Flags::default());
    let _task = app.update(Message::PhotoListFetched(Err(Error::Http(
        "HTTP status: 500 Internal Server Error".into(),
    ))));

    // No photo grid is available, only the error state with its retry path.
    assert!(matches!(app.load_state(), LoadState::Failed(_)));
    assert!(app.navigator().is_empty());

    let _task = app.update(Message::RetryFetch);
    assert_eq!(*app.load_state(), LoadState::Loading);
}

#[test]
fn modal_navigation_wraps_in_both_directions() {
    let mut app = ready_app();

    let _task = app.update(Message::SelectPhoto(0));
    assert_eq!(app.navigator().selected_index(), Some(0));

    let _task = app.update(Message::NextPhoto);
    let _task = app.update(Message::NextPhoto);
    assert_eq!(app.navigator().selected_index(), Some(2));

    let _task = app.update(Message::NextPhoto);
    assert_eq!(app.navigator().selected_index(), Some(0)); // forward wraparound

    let _task = app.update(Message::PreviousPhoto);
    assert_eq!(app.navigator().selected_index(), Some(2)); // backward wraparound

    let _task = app.update(Message::CloseModal);
    assert!(!app.navigator().is_open());
}

#[test]
fn opening_a_photo_requests_its_full_resolution_image() {
    let mut app = ready_app();
    let _task = app.update(Message::SelectPhoto(1));

    let id = &app.navigator().photos()[1].id;
    assert!(matches!(app.full_image(id), Some(ImageSlot::Loading)));
}

#[test]
fn one_broken_image_does_not_disturb_the_rest() {
    let mut app = ready_app();

    let _task = app.update(Message::ThumbnailLoaded {
        id: "2".into(),
        result: Err(Error::Image("HTTP status: 404 Not Found".into())),
    });

    assert!(matches!(app.thumbnail("2"), Some(ImageSlot::Failed)));
    assert!(matches!(app.thumbnail("1"), Some(ImageSlot::Loading)));

    // Hover and selection still work on the broken photo.
    let _task = app.update(Message::HoverPhoto("2".into()));
    assert!(app.navigator().is_hovered("2"));

    let _task = app.update(Message::SelectPhoto(1));
    assert_eq!(app.navigator().selected_index(), Some(1));
}
