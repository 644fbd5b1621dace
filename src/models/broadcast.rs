//! Lives and podcasts

use super::{null_default, slug_text, Slug, SocialLink};
use crate::services::dates::format_datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastKind {
    Live,
    Podcast,
}

impl BroadcastKind {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim() {
            "live" => Some(Self::Live),
            "podcast" => Some(Self::Podcast),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Podcast => "Podcast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastStatus {
    Scheduled,
    OnAir,
    Finished,
}

impl BroadcastStatus {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim() {
            "agendado" => Some(Self::Scheduled),
            "ao_vivo" => Some(Self::OnAir),
            "finalizado" => Some(Self::Finished),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "📅 AGENDADO",
            Self::OnAir => "🔴 AO VIVO",
            Self::Finished => "✅ FINALIZADO",
        }
    }
}

/// Pastor referenced by a broadcast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastorRef {
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "nome"))]
    pub name: String,
    #[serde(default)]
    pub slug: Option<Slug>,
}

/// Live stream or podcast episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broadcast {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "titulo"))]
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    /// Raw `tipo`, see [`Broadcast::kind`]
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "tipo"))]
    pub kind_raw: String,
    #[serde(default, rename(deserialize = "descricao"))]
    pub description: Option<String>,
    #[serde(default, rename(deserialize = "imagemCapaUrl"))]
    pub cover_url: Option<String>,
    #[serde(default, rename(deserialize = "dataHora"))]
    pub scheduled_at: Option<String>,
    /// Raw `status`, see [`Broadcast::status`]
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "status"))]
    pub status_raw: String,
    #[serde(default, rename(deserialize = "urlYoutube"))]
    pub youtube_url: Option<String>,
    #[serde(default, rename(deserialize = "urlSpotify"))]
    pub spotify_url: Option<String>,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "urlOutrasPlataformas"))]
    pub other_platforms: Vec<SocialLink>,
    #[serde(default)]
    pub pastor: Option<PastorRef>,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "destaque"))]
    pub featured: bool,
    /// Length in minutes; the store allows fractions
    #[serde(default, rename(deserialize = "duracao"))]
    pub duration_minutes: Option<f64>,
}

impl Broadcast {
    pub fn kind(&self) -> Option<BroadcastKind> {
        BroadcastKind::from_raw(&self.kind_raw)
    }

    pub fn status(&self) -> Option<BroadcastStatus> {
        BroadcastStatus::from_raw(&self.status_raw)
    }

    /// Badge text; unknown statuses are shown uppercased as stored
    pub fn status_label(&self) -> String {
        match self.status() {
            Some(status) => status.label().to_string(),
            None => self.status_raw.to_uppercase(),
        }
    }

    pub fn date_label(&self) -> String {
        format_datetime(self.scheduled_at.as_deref())
    }

    /// "45 min", rounded to whole minutes
    pub fn duration_label(&self) -> Option<String> {
        self.duration_minutes
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0)
            .map(|minutes| format!("{} min", minutes.round().max(1.0) as u64))
    }

    /// At most three tags are shown on a card
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(3)]
    }

    pub fn pastor_href(&self) -> Option<String> {
        let pastor = self.pastor.as_ref()?;
        slug_text(&pastor.slug).map(|slug| format!("/pastores/{}", urlencoding::encode(slug)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn broadcast(value: serde_json::Value) -> Broadcast {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(broadcast(json!({"_id": "b", "status": "ao_vivo"})).status_label(), "🔴 AO VIVO");
        assert_eq!(broadcast(json!({"_id": "b", "status": "agendado"})).status_label(), "📅 AGENDADO");
        assert_eq!(broadcast(json!({"_id": "b", "status": "adiado"})).status_label(), "ADIADO");
    }

    #[test]
    fn test_kind_and_card_tags() {
        let b = broadcast(json!({
            "_id": "b",
            "tipo": "podcast",
            "tags": ["fé", "família", "oração", "louvor"],
            "urlOutrasPlataformas": null,
            "pastor": {"nome": "João", "slug": {"current": "joao"}}
        }));
        assert_eq!(b.kind(), Some(BroadcastKind::Podcast));
        assert_eq!(b.card_tags().len(), 3);
        assert!(b.other_platforms.is_empty());
        assert_eq!(b.pastor_href().as_deref(), Some("/pastores/joao"));
    }

    #[test]
    fn test_fractional_duration_is_accepted() {
        let b = broadcast(json!({"_id": "b", "duracao": 42.5}));
        assert_eq!(b.duration_minutes, Some(42.5));
        assert_eq!(b.duration_label().as_deref(), Some("43 min"));
        assert_eq!(broadcast(json!({"_id": "b", "duracao": 60})).duration_label().as_deref(), Some("60 min"));
        assert_eq!(broadcast(json!({"_id": "b"})).duration_label(), None);
    }

    #[test]
    fn test_unknown_kind_is_none() {
        assert_eq!(broadcast(json!({"_id": "b", "tipo": "radio"})).kind(), None);
    }
}
