// SPDX-License-Identifier: MPL-2.0
//! Display-ready photo records and the transformations that produce them.
//!
//! The listing API returns source page URLs and photographer names that the
//! gallery does not show directly. Instead, each record is reshaped into a
//! `Photo`: a derived title, derived image references keyed by id, and a
//! synthetic author label drawn from a fixed round-robin table. The author is
//! display-only metadata with no identity semantics.

/// One display-ready gallery entry. Immutable after the fetch completes;
/// position in the fetched sequence is both display order and navigation
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Unique string identifier from the listing API.
    pub id: String,
    /// Last two path segments of the source page URL, joined by `/`.
    pub title: String,
    /// Thumbnail image reference (400x400), derived from `id`.
    pub url: String,
    /// Full-resolution image reference (800x800), derived from `id`.
    pub download_url: String,
    /// Synthetic author label, assigned round-robin by fetch position.
    pub author: String,
}

/// Fixed table of synthetic author names, indexed by fetch position mod 30.
pub const AUTHOR_NAMES: [&str; 30] = [
    "Saranya Ravi",
    "Karthik Subramanian",
    "Priya Venkatesh",
    "Arun Kumar",
    "Lakshmi Narayanan",
    "Deepa Sivakumar",
    "Vignesh Murugan",
    "Revathi Chandran",
    "Sridhar Rajan",
    "Meena Krishnan",
    "Harish Balaji",
    "Anitha Gopal",
    "Raghav Prasath",
    "Kavya Senthil",
    "Sathish Kumar",
    "Nandhini Ramesh",
    "Praveen Shankar",
    "Divya Manikandan",
    "Gokul Raj",
    "Yamini Suresh",
    "Sanjay Varadhan",
    "Swathi Kannan",
    "Ajay Bharath",
    "Monika Elango",
    "Rajesh Karthikeyan",
    "Keerthana Vijayan",
    "Vishnu Saravanan",
    "Janani Kripa",
    "Aravind Jayaraman",
    "Shalini Perumal",
];

/// Returns the synthetic author name for a fetch position.
pub fn author_for_position(index: usize) -> &'static str {
    AUTHOR_NAMES[index % AUTHOR_NAMES.len()]
}

/// Derives a display title from a source page URL: the last two `/`-separated
/// segments joined back together. Shorter URLs keep whatever segments exist.
pub fn title_from_page_url(page_url: &str) -> String {
    let segments: Vec<&str> = page_url.split('/').collect();
    let start = segments.len().saturating_sub(2);
    segments[start..].join("/")
}

/// Derives the thumbnail reference for a photo id.
pub fn thumbnail_url(image_base: &str, id: &str) -> String {
    format!("{}/400/400?random={}", image_base, id)
}

/// Derives the full-resolution reference for a photo id.
pub fn full_resolution_url(image_base: &str, id: &str) -> String {
    format!("{}/800/800?random={}", image_base, id)
}
