use super::{null_default, Slug};
use crate::services::dates::format_date;
use serde::{Deserialize, Serialize};

/// Church news item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "titulo"))]
    pub title: String,
    #[serde(default, rename(deserialize = "resumo"))]
    pub summary: Option<String>,
    #[serde(default, rename(deserialize = "dataPublicacao"))]
    pub published_at: Option<String>,
    #[serde(default, rename(deserialize = "imagemPrincipalUrl"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
}

impl NewsItem {
    pub fn date_label(&self) -> String {
        format_date(self.published_at.as_deref())
    }
}
