// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the gallery. Payloads are plain strings so errors can
/// be cloned into Iced messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport failure or non-OK status while talking to the photo API.
    Http(String),
    /// The listing response could not be parsed as the expected JSON shape.
    Decode(String),
    /// An individual image failed to download or render.
    Image(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
