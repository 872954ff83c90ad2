// SPDX-License-Identifier: MPL-2.0
//! Centralized button and container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Primary action button (e.g. "Try Again").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        _ => palette::ACCENT_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::ACCENT_600,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}

/// Semi-transparent overlay button used for the modal's close and arrow
/// controls.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Grid card frame; the border lights up while the card is hovered.
pub fn card(hovered: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: palette::WHITE,
        border: Border {
            color: if hovered {
                palette::ACCENT_500
            } else {
                palette::GRAY_700
            },
            width: 2.0,
            radius: radius::LG.into(),
        },
        ..button::Style::default()
    }
}

/// One thumbnail in the modal strip; the active entry carries the accent
/// border.
pub fn strip_thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::ACCENT_500
        } else if matches!(status, button::Status::Hovered) {
            palette::ACCENT_400
        } else {
            palette::GRAY_700
        };

        button::Style {
            background: Some(Background::Color(palette::SURFACE)),
            text_color: palette::WHITE,
            border: Border {
                color,
                width: 2.0,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        }
    }
}

/// One navigation dot below the grid.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if active {
            palette::ACCENT_500
        } else if matches!(status, button::Status::Hovered) {
            palette::ACCENT_400
        } else {
            palette::GRAY_700
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Modal body surface.
pub fn modal_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        border: Border {
            color: Color {
                a: 0.4,
                ..palette::ACCENT_500
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..container::Style::default()
    }
}

/// Dimming layer behind the modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Caption strip revealed at the bottom of a hovered grid card.
pub fn card_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Solid accent panel behind an index badge.
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(accent)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Flat panel used for loading and image-unavailable placeholders.
pub fn placeholder(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
