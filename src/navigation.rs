// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation module for managing the photo sequence and modal
//! selection state.
//!
//! This module provides a shared `GalleryNavigator` used by both the grid
//! and the modal views so there is a single source of truth for "which
//! photo, if any, is open in the modal". Navigation is cyclic: advancing
//! past the last photo wraps to the first, and retreating past the first
//! wraps to the last.

use crate::photo::Photo;

/// Owns the immutable photo sequence together with the modal selection and
/// the transient grid hover id.
///
/// Two states: **Closed** (no selection, modal hidden) and **Open(i)**
/// (selection is a valid index into the sequence). The sequence never
/// changes after construction, so a present selection is always in range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryNavigator {
    photos: Vec<Photo>,
    selected: Option<usize>,
    hovered: Option<String>,
}

impl GalleryNavigator {
    /// Creates a navigator over a fetched photo sequence, starting Closed.
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            selected: None,
            hovered: None,
        }
    }

    /// Opens the modal on `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.photos.len() {
            self.selected = Some(index);
        }
    }

    /// Advances the selection, wrapping from the last photo to the first.
    ///
    /// From Closed this opens the first photo. A no-op on an empty sequence.
    pub fn next(&mut self) {
        if self.photos.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(current) => (current + 1) % self.photos.len(),
            None => 0,
        });
    }

    /// Retreats the selection, wrapping from the first photo to the last.
    ///
    /// From Closed this opens the first photo. A no-op on an empty sequence.
    pub fn previous(&mut self) {
        if self.photos.is_empty() {
            return;
        }
        let len = self.photos.len();
        self.selected = Some(match self.selected {
            Some(current) => (current + len - 1) % len,
            None => 0,
        });
    }

    /// Closes the modal, unconditionally.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Checks whether the modal is open.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Returns the selected index, if the modal is open.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the photo currently shown in the modal, if any.
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.selected.and_then(|idx| self.photos.get(idx))
    }

    /// Marks a photo as hovered in the grid. Cosmetic only.
    pub fn set_hover(&mut self, id: String) {
        self.hovered = Some(id);
    }

    /// Clears the grid hover state.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Checks whether the given photo id is the hovered one.
    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    /// Returns the photo at the given index.
    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Returns the full photo sequence in display order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Returns the total number of photos.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Checks if the photo sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::{self, Photo};
    use proptest::prelude::*;

    fn test_photo(id: &str, position: usize) -> Photo {
        Photo {
            id: id.to_string(),
            title: format!("photos/{}", id),
            url: photo::thumbnail_url("https://picsum.photos", id),
            download_url: photo::full_resolution_url("https://picsum.photos", id),
            author: photo::author_for_position(position).to_string(),
        }
    }

    fn navigator_of(n: usize) -> GalleryNavigator {
        let photos = (0..n)
            .map(|i| test_photo(&i.to_string(), i))
            .collect::<Vec<_>>();
        GalleryNavigator::new(photos)
    }

    #[test]
    fn new_navigator_starts_closed() {
        let nav = navigator_of(3);
        assert!(!nav.is_open());
        assert_eq!(nav.selected_index(), None);
        assert_eq!(nav.selected_photo(), None);
    }

    #[test]
    fn select_opens_the_modal_on_that_index() {
        let mut nav = navigator_of(3);
        nav.select(1);
        assert!(nav.is_open());
        assert_eq!(nav.selected_index(), Some(1));
        assert_eq!(nav.selected_photo().map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn select_reaches_any_index_regardless_of_prior_state() {
        let mut nav = navigator_of(3);
        nav.select(2);
        nav.select(0);
        assert_eq!(nav.selected_index(), Some(0));

        nav.close();
        nav.select(2);
        assert_eq!(nav.selected_index(), Some(2));
    }

    #[test]
    fn select_ignores_out_of_range_index() {
        let mut nav = navigator_of(3);
        nav.select(3);
        assert!(!nav.is_open());

        nav.select(1);
        nav.select(99);
        assert_eq!(nav.selected_index(), Some(1));
    }

    #[test]
    fn next_advances_and_wraps_around() {
        let mut nav = navigator_of(3);
        nav.select(0);
        nav.next();
        assert_eq!(nav.selected_index(), Some(1));
        nav.next();
        assert_eq!(nav.selected_index(), Some(2));
        nav.next();
        assert_eq!(nav.selected_index(), Some(0)); // wraps to first
    }

    #[test]
    fn previous_wraps_backward() {
        let mut nav = navigator_of(3);
        nav.select(0);
        nav.previous();
        assert_eq!(nav.selected_index(), Some(2)); // wraps to last
    }

    #[test]
    fn next_from_closed_opens_first_photo() {
        let mut nav = navigator_of(3);
        nav.next();
        assert_eq!(nav.selected_index(), Some(0));
    }

    #[test]
    fn previous_from_closed_opens_first_photo() {
        let mut nav = navigator_of(3);
        nav.previous();
        assert_eq!(nav.selected_index(), Some(0));
    }

    #[test]
    fn close_always_reaches_closed() {
        let mut nav = navigator_of(3);
        nav.close();
        assert!(!nav.is_open());

        nav.select(2);
        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn empty_sequence_navigation_is_a_no_op() {
        let mut nav = GalleryNavigator::default();
        nav.next();
        nav.previous();
        assert!(!nav.is_open());
        assert!(nav.is_empty());
    }

    #[test]
    fn single_photo_navigation_stays_on_it() {
        let mut nav = navigator_of(1);
        nav.select(0);
        nav.next();
        assert_eq!(nav.selected_index(), Some(0));
        nav.previous();
        assert_eq!(nav.selected_index(), Some(0));
    }

    #[test]
    fn hover_tracks_a_single_photo_id() {
        let mut nav = navigator_of(2);
        assert!(!nav.is_hovered("0"));

        nav.set_hover("0".to_string());
        assert!(nav.is_hovered("0"));
        assert!(!nav.is_hovered("1"));

        nav.set_hover("1".to_string());
        assert!(nav.is_hovered("1"));

        nav.clear_hover();
        assert!(!nav.is_hovered("1"));
    }

    proptest! {
        #[test]
        fn n_steps_forward_return_to_start(n in 1usize..40, start in 0usize..40) {
            let start = start % n;
            let mut nav = navigator_of(n);
            nav.select(start);
            for _ in 0..n {
                nav.next();
            }
            prop_assert_eq!(nav.selected_index(), Some(start));
        }

        #[test]
        fn n_steps_backward_return_to_start(n in 1usize..40, start in 0usize..40) {
            let start = start % n;
            let mut nav = navigator_of(n);
            nav.select(start);
            for _ in 0..n {
                nav.previous();
            }
            prop_assert_eq!(nav.selected_index(), Some(start));
        }

        #[test]
        fn next_then_previous_is_identity(n in 1usize..40, start in 0usize..40) {
            let start = start % n;
            let mut nav = navigator_of(n);
            nav.select(start);
            nav.next();
            nav.previous();
            prop_assert_eq!(nav.selected_index(), Some(start));

            nav.previous();
            nav.next();
            prop_assert_eq!(nav.selected_index(), Some(start));
        }

        #[test]
        fn selection_is_always_in_range(n in 1usize..20, steps in proptest::collection::vec(0u8..4, 0..64)) {
            let mut nav = navigator_of(n);
            for step in steps {
                match step {
                    0 => nav.next(),
                    1 => nav.previous(),
                    2 => nav.select(n / 2),
                    _ => nav.close(),
                }
                if let Some(idx) = nav.selected_index() {
                    prop_assert!(idx < n);
                }
            }
        }
    }
}
