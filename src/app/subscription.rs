// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is the modal keyboard listener. It is acquired by
//! being returned while the modal is open and released by returning
//! `Subscription::none()` once it closes, so no global listener outlives
//! the Open state.

use super::Message;
use iced::{event, keyboard, Subscription};

/// Keyboard surface while the modal is open: `Escape` closes, `ArrowRight`
/// advances, `ArrowLeft` retreats.
pub fn modal_keys(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| {
        // Keys already claimed by a focused widget are not navigation.
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::Escape => Some(Message::CloseModal),
                keyboard::key::Named::ArrowRight => Some(Message::NextPhoto),
                keyboard::key::Named::ArrowLeft => Some(Message::PreviousPhoto),
                _ => None,
            },
            _ => None,
        }
    })
}
