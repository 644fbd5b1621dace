//! Image asset references
//!
//! Rich text images carry either an expanded `asset.url` or only an asset
//! reference of the form `image-<id>-<width>x<height>-<ext>`, which maps to
//! a fixed CDN path for the project and dataset.

use crate::config::ContentConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^image-([A-Za-z0-9]+)-(\d+x\d+)-([a-z0-9]+)$").expect("valid image ref pattern")
});

/// Resolves image asset references to CDN URLs
#[derive(Debug, Clone)]
pub struct ImageAssets {
    project_id: String,
    dataset: String,
}

impl ImageAssets {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(&config.project_id, &config.dataset)
    }

    /// CDN URL for an asset reference, or `None` when it is not an image ref
    pub fn url_for_ref(&self, reference: &str) -> Option<String> {
        let caps = IMAGE_REF.captures(reference.trim())?;
        Some(format!(
            "https://cdn.sanity.io/images/{}/{}/{}-{}.{}",
            self.project_id, self.dataset, &caps[1], &caps[2], &caps[3]
        ))
    }
}
