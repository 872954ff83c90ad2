// SPDX-License-Identifier: MPL-2.0
//! Blocking error screen for a failed photo listing fetch.
//!
//! The fetch runs once per session with no automatic retry; the only way
//! forward is the "Try Again" control, which re-runs it from scratch.

use crate::app::Message;
use crate::error::Error;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view(error: &Error) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new("Failed to fetch photos")
                .size(typography::TITLE_MD)
                .color(palette::ERROR_500),
        )
        .push(
            Text::new(error.to_string())
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(
            button(Text::new("Try Again").size(typography::BODY_LG))
                .padding([spacing::XS, spacing::LG])
                .style(styles::primary)
                .on_press(Message::RetryFetch),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
