// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`grid`] - Responsive thumbnail grid with hover overlays and index badges
//! - [`modal`] - Fullscreen modal viewer with navigation controls
//! - [`error_screen`] - Blocking fetch-failure screen with a retry control
//! - [`panels`] - Shared loading and image-unavailable panels
//! - [`styles`] - Centralized button and container styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod error_screen;
pub mod grid;
pub mod modal;
pub mod panels;
pub mod styles;
