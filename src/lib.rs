// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a responsive photo gallery built with the Iced GUI framework.
//!
//! It fetches a page of photo records from the public Lorem Picsum listing API,
//! lays them out as a thumbnail grid, and opens a fullscreen modal viewer with
//! keyboard and click navigation that wraps around at both ends.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod navigation;
pub mod photo;
pub mod ui;
