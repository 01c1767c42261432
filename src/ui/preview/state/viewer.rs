// SPDX-License-Identifier: MPL-2.0
//! Viewer state management
//!
//! Tracks which image of the collection is displayed and whether the overlay
//! is open. Only discrete transitions (page turns, dismiss) change it.

use crate::error::PreviewError;

/// Ordered, non-empty collection of image locators.
///
/// Locators are opaque to the preview (paths, URLs, cache keys); loading them
/// is the renderer's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList(Vec<String>);

impl ImageList {
    /// Creates a list from locators, rejecting an empty collection.
    pub fn new<I, S>(locators: I) -> Result<Self, PreviewError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locators: Vec<String> = locators.into_iter().map(Into::into).collect();
        if locators.is_empty() {
            return Err(PreviewError::NoImages);
        }
        Ok(Self(locators))
    }

    /// Creates a list holding a single locator.
    #[must_use]
    pub fn single(locator: impl Into<String>) -> Self {
        Self(vec![locator.into()])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for ImageList {
    fn from(locator: &str) -> Self {
        Self::single(locator)
    }
}

impl From<String> for ImageList {
    fn from(locator: String) -> Self {
        Self::single(locator)
    }
}

impl TryFrom<Vec<String>> for ImageList {
    type Error = PreviewError;

    fn try_from(locators: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(locators)
    }
}

/// Displayed image index and overlay visibility.
///
/// `image_index` is always a valid index into the image list the state was
/// created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
    image_index: usize,
    is_open: bool,
    image_count: usize,
}

impl ViewerState {
    /// Opens the viewer on `initial_index`, clamped into the list.
    #[must_use]
    pub fn open(images: &ImageList, initial_index: usize) -> Self {
        Self {
            image_index: initial_index.min(images.last_index()),
            is_open: true,
            image_count: images.len(),
        }
    }

    #[must_use]
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.image_index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.image_index + 1 < self.image_count
    }

    /// Steps back one image. Returns the new index, or `None` at the first image.
    pub fn go_previous(&mut self) -> Option<usize> {
        if !self.has_previous() {
            return None;
        }
        self.image_index -= 1;
        Some(self.image_index)
    }

    /// Steps forward one image. Returns the new index, or `None` at the last image.
    pub fn go_next(&mut self) -> Option<usize> {
        if !self.has_next() {
            return None;
        }
        self.image_index += 1;
        Some(self.image_index)
    }

    /// Closes the overlay. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }
}
