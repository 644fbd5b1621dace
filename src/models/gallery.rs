//! Gallery items

use super::null_default;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})")
        .expect("valid youtube pattern")
});

/// Kind of media in a gallery item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "video")]
    Video,
    /// Anything that is not a video is shown as a picture
    #[default]
    #[serde(rename = "imagem", other)]
    Image,
}

/// Photo or video shown in the gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, rename(deserialize = "titulo"))]
    pub title: Option<String>,
    #[serde(default, rename(deserialize = "descricao"))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "tipoMidia"))]
    pub kind: MediaKind,
    #[serde(default, rename(deserialize = "imagemUrl"))]
    pub image_url: Option<String>,
    #[serde(default, rename(deserialize = "videoUrl"))]
    pub video_url: Option<String>,
}

impl GalleryItem {
    /// `youtube-nocookie` embed URL when the video is hosted on YouTube
    pub fn youtube_embed_url(&self) -> Option<String> {
        youtube_embed_url(self.video_url.as_deref()?)
    }
}

/// Embed URL for any YouTube watch/share/embed link
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let caps = YOUTUBE_ID.captures(url)?;
    Some(format!("https://www.youtube-nocookie.com/embed/{}", &caps[1]))
}
