// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the photo listing API and per-image byte fetches.
//!
//! The listing is fetched once at startup and reshaped into [`Photo`]
//! records; individual images are downloaded lazily and handed to Iced as
//! in-memory handles. Neither request is retried automatically.

use crate::config::Endpoints;
use crate::error::{Error, Result};
use crate::photo::{self, Photo};
use iced::widget::image;
use serde::Deserialize;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// One raw entry of the `/v2/list` response. Only the fields the gallery
/// consumes are deserialized; the rest of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEntry {
    id: EntryId,
    url: String,
}

/// Listing ids have been served both as strings and as bare numbers; both
/// spellings map to the same string id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EntryId {
    Text(String),
    Number(u64),
}

impl EntryId {
    fn into_string(self) -> String {
        match self {
            EntryId::Text(s) => s,
            EntryId::Number(n) => n.to_string(),
        }
    }
}

/// Reshapes raw listing entries into display-ready photos, preserving the
/// response order. The position in the response selects the synthetic author.
pub fn photos_from_list(entries: Vec<ListEntry>, image_base: &str) -> Vec<Photo> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let id = entry.id.into_string();
            Photo {
                title: photo::title_from_page_url(&entry.url),
                url: photo::thumbnail_url(image_base, &id),
                download_url: photo::full_resolution_url(image_base, &id),
                author: photo::author_for_position(index).to_string(),
                id,
            }
        })
        .collect()
}

fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Http(e.to_string()))
}

/// Fetches and reshapes the photo listing.
///
/// A transport failure or non-OK status is terminal for the session until
/// the user explicitly retries.
pub async fn fetch_photo_list(endpoints: Endpoints) -> Result<Vec<Photo>> {
    let response = client()?
        .get(endpoints.list_url())
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes().await?;
    let entries: Vec<ListEntry> = serde_json::from_slice(&bytes)?;
    Ok(photos_from_list(entries, &endpoints.image_base))
}

/// Downloads one image and wraps the bytes in an Iced image handle.
///
/// Failures are local to the affected photo; the caller renders a
/// placeholder panel and navigation continues to work.
pub async fn fetch_image(url: String) -> Result<image::Handle> {
    let response = client()?
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Image(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Image(format!("HTTP status: {}", response.status())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Image(e.to_string()))?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::AUTHOR_NAMES;

    const LISTING_FIXTURE: &str = r#"[
        {
            "id": "0",
            "author": "Alejandro Escamilla",
            "width": 5000,
            "height": 3333,
            "url": "https://unsplash.com/photos/yC-Yzbqy7PY",
            "download_url": "https://picsum.photos/id/0/5000/3333"
        },
        {
            "id": "10",
            "author": "Paul Jarvis",
            "width": 2500,
            "height": 1667,
            "url": "https://unsplash.com/photos/6J--NXulQCs",
            "download_url": "https://picsum.photos/id/10/2500/1667"
        }
    ]"#;

    #[test]
    fn listing_is_reshaped_into_display_fields() {
        let entries: Vec<ListEntry> = serde_json::from_str(LISTING_FIXTURE).expect("valid fixture");
        let photos = photos_from_list(entries, "https://picsum.photos");

        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, "0");
        assert_eq!(photos[0].title, "photos/yC-Yzbqy7PY");
        assert_eq!(photos[0].url, "https://picsum.photos/400/400?random=0");
        assert_eq!(
            photos[0].download_url,
            "https://picsum.photos/800/800?random=0"
        );
        assert_eq!(photos[0].author, AUTHOR_NAMES[0]);
        assert_eq!(photos[1].author, AUTHOR_NAMES[1]);
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let raw = r#"[{"id": 7, "url": "https://unsplash.com/photos/abc"}]"#;
        let entries: Vec<ListEntry> = serde_json::from_str(raw).expect("valid fixture");
        let photos = photos_from_list(entries, "https://picsum.photos");

        assert_eq!(photos[0].id, "7");
        assert_eq!(photos[0].url, "https://picsum.photos/400/400?random=7");
    }

    #[test]
    fn author_assignment_wraps_past_table_size() {
        let mut raw = String::from("[");
        for i in 0..31 {
            if i > 0 {
                raw.push(',');
            }
            raw.push_str(&format!(
                r#"{{"id": "{}", "url": "https://unsplash.com/photos/p{}"}}"#,
                i, i
            ));
        }
        raw.push(']');

        let entries: Vec<ListEntry> = serde_json::from_str(&raw).expect("valid fixture");
        let photos = photos_from_list(entries, "https://picsum.photos");

        assert_eq!(photos.len(), 31);
        assert_eq!(photos[30].author, photos[0].author);
    }

    #[test]
    fn malformed_listing_is_a_decode_error() {
        let err = serde_json::from_str::<Vec<ListEntry>>(r#"{"not": "an array"}"#)
            .map_err(Error::from)
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn entries_without_page_url_are_rejected() {
        assert!(serde_json::from_str::<Vec<ListEntry>>(r#"[{"id": "3"}]"#).is_err());
    }
}
