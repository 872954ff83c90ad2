// SPDX-License-Identifier: MPL-2.0
//! Compile-time constants and launcher-overridable endpoints.
//!
//! There is no persisted configuration file: the gallery keeps no state
//! between sessions. The only knobs are the endpoint hosts and the fetch
//! limit, which the launcher may override for testing against a stub server.

/// Base URL of the photo listing API.
pub const DEFAULT_API_BASE: &str = "https://picsum.photos";

/// Base URL used to derive thumbnail and full-resolution image references.
pub const DEFAULT_IMAGE_BASE: &str = "https://picsum.photos";

/// The listing page requested at startup.
pub const LIST_PAGE: u32 = 1;

/// How many photo records to request.
pub const DEFAULT_FETCH_LIMIT: u32 = 30;

/// Maximum number of thumbnails shown in the modal's thumbnail strip.
pub const THUMBNAIL_STRIP_CAP: usize = 12;

/// Maximum number of navigation dots shown below the grid.
pub const NAVIGATION_DOT_CAP: usize = 15;

/// Resolved endpoints for a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_base: String,
    pub image_base: String,
    pub limit: u32,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

impl Endpoints {
    /// Returns the full URL of the listing request.
    pub fn list_url(&self) -> String {
        format!(
            "{}/v2/list?page={}&limit={}",
            self.api_base, LIST_PAGE, self.limit
        )
    }
}
