// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: colors, spacing, sizing, and typography.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.09, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.18, 0.2, 0.26);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.47, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.72, 0.74, 0.8);

    /// Brand accent (violet) used for selected states and highlights.
    pub const ACCENT_400: Color = Color::from_rgb(0.68, 0.52, 0.96);
    pub const ACCENT_500: Color = Color::from_rgb(0.58, 0.4, 0.92);
    pub const ACCENT_600: Color = Color::from_rgb(0.48, 0.3, 0.82);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);

    /// Card surfaces and the modal body.
    pub const SURFACE: Color = Color::from_rgb(0.11, 0.12, 0.16);
    pub const SURFACE_RAISED: Color = Color::from_rgb(0.15, 0.16, 0.21);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Modal backdrop, matching a near-black dimming layer.
    pub const BACKDROP: f32 = 0.85;
}

/// Spacing scale (4px baseline grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 999.0;
}

pub mod sizing {
    /// Square thumbnail area of one grid card.
    pub const CARD_IMAGE: f32 = 240.0;
    /// Card footprint used to derive the column count from the window width.
    pub const CARD_FOOTPRINT: f32 = 270.0;
    /// Maximum grid columns, however wide the window gets.
    pub const MAX_COLUMNS: usize = 4;

    /// Edge length of one thumbnail in the modal strip.
    pub const STRIP_THUMB: f32 = 64.0;

    /// Navigation dot dimensions below the grid.
    pub const DOT: f32 = 8.0;
    pub const DOT_ACTIVE_WIDTH: f32 = 32.0;

    /// Modal body constraints.
    pub const MODAL_MAX_WIDTH: f32 = 960.0;
    pub const MODAL_IMAGE_HEIGHT: f32 = 440.0;
}

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_LG: f32 = 16.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const TITLE_MD: f32 = 24.0;
    pub const TITLE_LG: f32 = 32.0;
}

/// Accent colors cycled by grid position, used for index badges and for the
/// placeholder panel shown when an image fails to load.
pub const CARD_ACCENTS: [Color; 8] = [
    Color::from_rgb(0.15, 0.65, 0.85), // cyan
    Color::from_rgb(0.62, 0.35, 0.85), // purple
    Color::from_rgb(0.92, 0.45, 0.2),  // orange
    Color::from_rgb(0.18, 0.7, 0.55),  // emerald
    Color::from_rgb(0.9, 0.72, 0.2),   // amber
    Color::from_rgb(0.9, 0.3, 0.5),    // rose
    Color::from_rgb(0.4, 0.42, 0.88),  // indigo
    Color::from_rgb(0.52, 0.75, 0.25), // lime
];

/// Returns the accent color for a grid position.
pub fn card_accent(index: usize) -> Color {
    CARD_ACCENTS[index % CARD_ACCENTS.len()]
}
