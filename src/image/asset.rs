//! Image records with multiple resolution variants.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;
use crate::image::select::select_best_index;

// ---------------------------------------------------------------------------
// ImageAsset
// ---------------------------------------------------------------------------

/// One product image available in several resolutions.
///
/// `thresholds` partition viewport widths into `thresholds.len() + 1` bands,
/// one per entry of `resolution_urls` (index 0 is the lowest resolution).
/// The JSON shape matches the product-data feed: `imageUrls`, `thresholds`,
/// `imageText`, `thumbnailUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    #[serde(rename = "imageUrls")]
    pub resolution_urls: Vec<String>,
    #[serde(default)]
    pub thresholds: Vec<u32>,
    #[serde(rename = "imageText")]
    pub alt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ImageAsset {
    /// Build an asset, checking that there is one URL per resolution band.
    pub fn new(
        resolution_urls: Vec<String>,
        thresholds: Vec<u32>,
        alt_text: impl Into<String>,
    ) -> Result<Self, WidgetError> {
        let asset = Self {
            resolution_urls,
            thresholds,
            alt_text: alt_text.into(),
            thumbnail_url: None,
        };
        asset.validate()?;
        Ok(asset)
    }

    /// Check that there is one URL per resolution band.
    pub fn validate(&self) -> Result<(), WidgetError> {
        if self.resolution_urls.len() != self.thresholds.len() + 1 {
            return Err(WidgetError::ResolutionMismatch {
                urls: self.resolution_urls.len(),
                thresholds: self.thresholds.len(),
            });
        }
        Ok(())
    }

    /// A single-resolution image with no thresholds.
    pub fn single(url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            resolution_urls: vec![url.into()],
            thresholds: Vec::new(),
            alt_text: alt_text.into(),
            thumbnail_url: None,
        }
    }

    /// Set an explicit thumbnail URL (builder).
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Index of the resolution band for `viewport_width`.
    pub fn best_index(&self, viewport_width: u32) -> usize {
        select_best_index(&self.thresholds, viewport_width)
    }

    /// Thumbnail URL, falling back to the lowest resolution.
    pub fn thumbnail(&self) -> &str {
        match &self.thumbnail_url {
            Some(url) => url,
            None => self.resolution_urls.first().map_or("", String::as_str),
        }
    }

    /// Resolve what the rendering host should display at `viewport_width`.
    ///
    /// The URL/threshold count invariant is a caller precondition; it is only
    /// asserted in debug builds. Use [`ImageAsset::new`] to validate up front.
    pub fn select(&self, viewport_width: u32) -> SelectedImage {
        debug_assert_eq!(
            self.resolution_urls.len(),
            self.thresholds.len() + 1,
            "resolution urls must outnumber thresholds by one"
        );
        let index = self.best_index(viewport_width);
        SelectedImage {
            index,
            selected_url: self.resolution_urls[index].clone(),
            alt_text: self.alt_text.clone(),
            thumbnail_url: self.thumbnail().to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// SelectedImage
// ---------------------------------------------------------------------------

/// The resolved image handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedImage {
    /// Index into the asset's resolution URLs.
    pub index: usize,
    pub selected_url: String,
    pub alt_text: String,
    pub thumbnail_url: String,
}

// ===========================================================================
// Tests
// ===========================================================================
