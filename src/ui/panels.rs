// SPDX-License-Identifier: MPL-2.0
//! Shared placeholder panels for images that are loading or unavailable.
//!
//! A failed image is strictly local: the affected cell renders one of these
//! panels while badges, hover, and navigation keep working around it.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Color, Element, Length};

/// Fullscreen panel shown while the photo listing is being fetched.
pub fn loading_screen<'a, Message: 'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new("Loading beautiful images...").size(typography::BODY_LG))
        .push(
            Text::new("Fetching the photo collection")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Fixed-height panel shown in place of an image that is still downloading.
pub fn loading_panel<'a, Message: 'a>(height: f32) -> Element<'a, Message> {
    Container::new(
        Text::new("Loading...")
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::placeholder(palette::SURFACE_RAISED))
    .into()
}

/// Fixed-height panel shown in place of an image that failed to load.
pub fn unavailable_panel<'a, Message: 'a>(
    label: &'a str,
    background: Color,
    height: f32,
) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::placeholder(background))
        .into()
}
