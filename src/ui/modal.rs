// SPDX-License-Identifier: MPL-2.0
//! Fullscreen modal viewer.
//!
//! Renders the selected photo at full resolution with close/prev/next
//! controls, a thumbnail strip over the first few photos, and a position
//! label. All three controls map to the same navigation operations as the
//! keyboard surface.

use crate::app::{ImageSlot, Message};
use crate::config;
use crate::navigation::GalleryNavigator;
use crate::photo::Photo;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{panels, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, scrollable, Column, Container, Image, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};
use std::collections::HashMap;

/// Context required to render the modal.
pub struct ViewContext<'a> {
    pub navigator: &'a GalleryNavigator,
    /// The photo at the current selection.
    pub photo: &'a Photo,
    pub index: usize,
    pub full_images: &'a HashMap<String, ImageSlot>,
    pub thumbnails: &'a HashMap<String, ImageSlot>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = Column::new().push(image_area(&ctx)).push(footer(&ctx));

    Container::new(body)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .style(styles::modal_surface)
        .into()
}

/// The main display: full-resolution image (or a placeholder panel) with
/// the close and arrow controls stacked on top.
fn image_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.full_images.get(&ctx.photo.id) {
        Some(ImageSlot::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(ImageSlot::Failed) => panels::unavailable_panel(
            "Image failed to load",
            palette::SURFACE_RAISED,
            sizing::MODAL_IMAGE_HEIGHT,
        ),
        _ => panels::loading_panel(sizing::MODAL_IMAGE_HEIGHT),
    };

    let close = Container::new(
        button(Text::new("\u{2715}").size(typography::BODY_LG))
            .padding(spacing::XS)
            .style(styles::overlay)
            .on_press(Message::CloseModal),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .align_x(Horizontal::Right);

    let previous = Container::new(
        button(Text::new("\u{276e}").size(typography::TITLE_SM))
            .padding(spacing::SM)
            .style(styles::overlay)
            .on_press(Message::PreviousPhoto),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .align_x(Horizontal::Left)
    .align_y(Vertical::Center);

    let next = Container::new(
        button(Text::new("\u{276f}").size(typography::TITLE_SM))
            .padding(spacing::SM)
            .style(styles::overlay)
            .on_press(Message::NextPhoto),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
        .push(picture)
        .push(previous)
        .push(next)
        .push(close)
        .into()
}

/// Title, author, thumbnail strip, and position info below the image.
fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let total = ctx.navigator.len();

    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.photo.title.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.photo.author.as_str())
                .size(typography::BODY)
                .color(palette::ACCENT_400),
        );

    let progress = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(format!("Image {} of {}", ctx.index + 1, total)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new("\u{2190} \u{2192} Navigate  \u{2022}  ESC Close")
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(heading)
        .push(thumbnail_strip(ctx))
        .push(progress)
        .into()
}

/// Bounded strip over the first [`config::THUMBNAIL_STRIP_CAP`] photos;
/// the active entry carries the accent border and clicking one selects it.
fn thumbnail_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut strip = Row::new().spacing(spacing::XS);

    for (index, photo) in ctx
        .navigator
        .photos()
        .iter()
        .take(config::THUMBNAIL_STRIP_CAP)
        .enumerate()
    {
        let content: Element<'a, Message> = match ctx.thumbnails.get(&photo.id) {
            Some(ImageSlot::Ready(handle)) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            _ => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };

        strip = strip.push(
            button(content)
                .width(Length::Fixed(sizing::STRIP_THUMB))
                .height(Length::Fixed(sizing::STRIP_THUMB))
                .padding(2.0)
                .style(styles::strip_thumbnail(index == ctx.index))
                .on_press(Message::SelectPhoto(index)),
        );
    }

    scrollable(strip)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .into()
}
