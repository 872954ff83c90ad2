// SPDX-License-Identifier: MPL-2.0
//! Responsive thumbnail grid.
//!
//! One activator per photo in sequence order. The column count follows the
//! available width via the `responsive` widget, so no window-size state is
//! tracked anywhere. Hover only drives the card border and caption; nothing
//! else depends on it.

use crate::app::{ImageSlot, Message};
use crate::config;
use crate::navigation::GalleryNavigator;
use crate::photo::Photo;
use crate::ui::design_tokens::{card_accent, palette, sizing, spacing, typography};
use crate::ui::{panels, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, mouse_area, responsive, scrollable, Column, Container, Image, Row, Space, Stack, Text,
};
use iced::{ContentFit, Element, Length, Size};
use std::collections::HashMap;

/// Context required to render the grid.
pub struct ViewContext<'a> {
    pub navigator: &'a GalleryNavigator,
    pub thumbnails: &'a HashMap<String, ImageSlot>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    responsive(move |available: Size| {
        let columns =
            ((available.width / sizing::CARD_FOOTPRINT) as usize).clamp(1, sizing::MAX_COLUMNS);
        grid_content(&ctx, columns)
    })
    .into()
}

fn grid_content<'a>(ctx: &ViewContext<'a>, columns: usize) -> Element<'a, Message> {
    let navigator = ctx.navigator;

    let header = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new("Image Gallery").size(typography::TITLE_LG))
        .push(
            Text::new(format!(
                "Explore {} stunning images. Click any photo to view in fullscreen \
                 with smooth navigation.",
                navigator.len()
            ))
            .size(typography::BODY)
            .color(palette::GRAY_400),
        );

    let mut rows = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::LG);
    let mut in_row = 0;

    for (index, photo) in navigator.photos().iter().enumerate() {
        row = row.push(card(
            photo,
            index,
            navigator.is_hovered(&photo.id),
            ctx.thumbnails.get(&photo.id),
        ));
        in_row += 1;

        if in_row == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG);
            in_row = 0;
        }
    }

    if in_row > 0 {
        // Pad the trailing row so its cards keep the same width.
        while in_row < columns {
            row = row.push(Space::new().width(Length::Fill));
            in_row += 1;
        }
        rows = rows.push(row);
    }

    let mut content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(header)
        .push(rows);

    if navigator.is_open() {
        content = content.push(dots(navigator));
    }

    scrollable(content.width(Length::Fill)).into()
}

/// One grid card: thumbnail (or placeholder), index badge, and a caption
/// revealed on hover.
fn card<'a>(
    photo: &'a Photo,
    index: usize,
    hovered: bool,
    slot: Option<&'a ImageSlot>,
) -> Element<'a, Message> {
    let image_area: Element<'a, Message> = match slot {
        Some(ImageSlot::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Failed) => {
            panels::unavailable_panel("Image unavailable", card_accent(index), sizing::CARD_IMAGE)
        }
        _ => panels::loading_panel(sizing::CARD_IMAGE),
    };

    let badge = Container::new(Text::new(format!("#{}", index + 1)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::badge(card_accent(index)));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE))
        .push(image_area)
        .push(
            Container::new(badge)
                .width(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Right),
        );

    if hovered {
        let caption = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(photo.author.as_str()).size(typography::CAPTION))
            .push(
                Text::new(photo.title.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_200),
            );

        layers = layers.push(
            Container::new(
                Container::new(caption)
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::card_caption),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom),
        );
    }

    let activator = button(layers)
        .padding(spacing::XXS)
        .style(styles::card(hovered))
        .on_press(Message::SelectPhoto(index));

    mouse_area(activator)
        .on_enter(Message::HoverPhoto(photo.id.clone()))
        .on_exit(Message::ClearHover)
        .into()
}

/// Navigation dots below the grid, shown only while the modal is open.
/// Capped at the first [`config::NAVIGATION_DOT_CAP`] photos.
fn dots(navigator: &GalleryNavigator) -> Element<'_, Message> {
    let selected = navigator.selected_index();
    let count = navigator.len().min(config::NAVIGATION_DOT_CAP);

    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for index in 0..count {
        let active = selected == Some(index);
        let width = if active {
            sizing::DOT_ACTIVE_WIDTH
        } else {
            sizing::DOT
        };

        row = row.push(
            button(Space::new())
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::DOT))
                .padding(0.0)
                .style(styles::dot(active))
                .on_press(Message::SelectPhoto(index)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::SM)
        .into()
}
