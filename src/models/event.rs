//! Event model

use super::{null_default, rich_text::Block};
use crate::services::dates::{format_date, parse_instant};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Church event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "titulo"))]
    pub title: String,
    /// Start date or instant
    #[serde(default, rename(deserialize = "data"))]
    pub starts_at: Option<String>,
    #[serde(default, rename(deserialize = "dataFim"))]
    pub ends_at: Option<String>,
    #[serde(default, rename(deserialize = "descricao"))]
    pub description: Option<Vec<Block>>,
    #[serde(default, rename(deserialize = "local"))]
    pub location: Option<String>,
    #[serde(default, rename(deserialize = "imagemUrl"))]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "destaque"))]
    pub featured: bool,
}

impl Event {
    pub fn start(&self) -> Option<DateTime<FixedOffset>> {
        self.starts_at.as_deref().and_then(parse_instant)
    }

    /// "dd/mm/yyyy", or "dd/mm/yyyy a dd/mm/yyyy" for multi-day events
    pub fn date_label(&self) -> String {
        let start = format_date(self.starts_at.as_deref());
        match self.ends_at.as_deref() {
            Some(end) if !end.trim().is_empty() => {
                let end = format_date(Some(end));
                if end == start {
                    start
                } else {
                    format!("{start} a {end}")
                }
            }
            _ => start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_label() {
        let single: Event = serde_json::from_value(json!({"_id": "e", "data": "2024-05-10"})).unwrap();
        assert_eq!(single.date_label(), "10/05/2024");

        let range: Event = serde_json::from_value(
            json!({"_id": "e", "data": "2024-05-10", "dataFim": "2024-05-12"}),
        )
        .unwrap();
        assert_eq!(range.date_label(), "10/05/2024 a 12/05/2024");

        let undated: Event = serde_json::from_value(json!({"_id": "e"})).unwrap();
        assert_eq!(undated.date_label(), "Data não definida");
    }
}
