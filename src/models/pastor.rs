//! Pastor model

use super::{null_default, rich_text::Block, slug_text, Slug, SocialLink};
use crate::services::dates::format_date;
use serde::{Deserialize, Serialize};

/// Ordering weight for pastors without an explicit one
pub const DEFAULT_ORDER: f64 = 99.0;

fn default_order() -> f64 {
    DEFAULT_ORDER
}

/// The store's number type allows fractions
fn order_or_default<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_ORDER))
}

/// Current or former pastor of the church
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pastor {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "nome"))]
    pub name: String,
    /// Position, e.g. "Pastor Presidente"
    #[serde(default, rename(deserialize = "cargo"))]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "atual"))]
    pub current: bool,
    #[serde(default, rename(deserialize = "dataEntrada"))]
    pub started_on: Option<String>,
    #[serde(default, rename(deserialize = "dataSaida"))]
    pub ended_on: Option<String>,
    /// Short plain-text biography
    #[serde(default, rename(deserialize = "biografia"))]
    pub biography: Option<String>,
    /// Long biography, only fetched for the detail page
    #[serde(default, rename(deserialize = "biografiaDetalhada"))]
    pub detailed_biography: Option<Vec<Block>>,
    #[serde(default, rename(deserialize = "imagemUrl"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename(deserialize = "telefone"))]
    pub phone: Option<String>,
    #[serde(default, rename(deserialize = "redesSociais"))]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(default = "default_order", deserialize_with = "order_or_default", rename(deserialize = "ordem"))]
    pub order: f64,
    #[serde(default)]
    pub slug: Option<Slug>,
}

impl Pastor {
    /// "Desde dd/mm/yyyy" for current pastors, the ministry period otherwise
    pub fn tenure_label(&self) -> String {
        if self.current {
            return match &self.started_on {
                Some(start) => format!("Desde {}", format_date(Some(start))),
                None => "Pastor atual".to_string(),
            };
        }
        match (&self.started_on, &self.ended_on) {
            (Some(start), Some(end)) => format!(
                "{} - {}",
                format_date(Some(start)),
                format_date(Some(end))
            ),
            _ => "Pastor histórico".to_string(),
        }
    }

    pub fn href(&self) -> Option<String> {
        slug_text(&self.slug).map(|slug| format!("/pastores/{}", urlencoding::encode(slug)))
    }
}
