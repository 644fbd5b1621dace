//! Data models
//!
//! Read-only records decoded from the content store. Field names on the
//! Rust side are English; `rename(deserialize = ...)` maps them to the
//! store's Portuguese schema, so templates see the English names.
//!
//! Every field except the document id is optional in the store, hence the
//! pervasive `#[serde(default)]`.

mod banner;
mod birthday;
mod broadcast;
mod event;
mod gallery;
mod ministry;
mod news;
mod pastor;
pub mod rich_text;
mod settings;
mod writing;

pub use banner::Banner;
pub use birthday::Birthday;
pub use broadcast::{Broadcast, BroadcastKind, BroadcastStatus, PastorRef};
pub use event::Event;
pub use gallery::{GalleryItem, MediaKind};
pub use ministry::Ministry;
pub use news::NewsItem;
pub use pastor::Pastor;
pub use rich_text::Block;
pub use settings::{GeneralSettings, ServiceTime};
pub use writing::{Writing, WritingKind};

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Store slug object, `{ "current": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(default, deserialize_with = "null_default")]
    pub current: String,
}

/// Link to a social network profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "plataforma"))]
    pub platform: String,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
}

impl SocialLink {
    /// Human name of the platform, capitalized
    pub fn label(&self) -> String {
        let platform = self.platform.trim();
        match platform.to_lowercase().as_str() {
            "facebook" => "Facebook".to_string(),
            "instagram" => "Instagram".to_string(),
            "youtube" => "YouTube".to_string(),
            "whatsapp" => "WhatsApp".to_string(),
            "spotify" => "Spotify".to_string(),
            "" => "Link".to_string(),
            _ => {
                let mut chars = platform.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Slug text of an optional slug object, empty when absent
pub(crate) fn slug_text(slug: &Option<Slug>) -> Option<&str> {
    slug.as_ref()
        .map(|s| s.current.trim())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_label() {
        let link = |p: &str| SocialLink { platform: p.to_string(), url: String::new() };
        assert_eq!(link("youtube").label(), "YouTube");
        assert_eq!(link("tiktok").label(), "Tiktok");
        assert_eq!(link("").label(), "Link");
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let link: SocialLink =
            serde_json::from_value(serde_json::json!({"plataforma": null, "url": "https://x"})).unwrap();
        assert_eq!(link.platform, "");
        assert_eq!(link.url, "https://x");
    }

    #[test]
    fn test_slug_text_ignores_blank() {
        assert_eq!(slug_text(&None), None);
        assert_eq!(slug_text(&Some(Slug { current: " ".into() })), None);
        assert_eq!(slug_text(&Some(Slug { current: "fe".into() })), Some("fe"));
    }
}
