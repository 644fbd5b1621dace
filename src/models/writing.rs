//! Articles and written sermons
//!
//! Both document types share one shape once the query has projected the
//! sermon's `pregador`/`data` onto `autor`/`dataPublicacao`.

use super::{null_default, rich_text::Block, slug_text, Slug};
use crate::services::dates::format_date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WritingKind {
    #[serde(rename = "sermao")]
    Sermon,
    #[default]
    #[serde(rename = "artigo", other)]
    Article,
}

impl WritingKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "Artigo",
            Self::Sermon => "Sermão",
        }
    }

    /// Label for the author line
    pub fn author_label(self) -> &'static str {
        match self {
            Self::Article => "Por",
            Self::Sermon => "Pregador:",
        }
    }

    fn path_prefix(self) -> &'static str {
        match self {
            Self::Article => "/artigos",
            Self::Sermon => "/sermoes",
        }
    }
}

/// Article or written sermon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Writing {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "titulo"))]
    pub title: String,
    #[serde(default, rename(deserialize = "autor"))]
    pub author: Option<String>,
    #[serde(default, rename(deserialize = "dataPublicacao"))]
    pub published_at: Option<String>,
    #[serde(default, rename(deserialize = "resumo"))]
    pub summary: Option<String>,
    #[serde(default, rename(deserialize = "conteudo"))]
    pub body: Option<Vec<Block>>,
    #[serde(default, rename(deserialize = "imagemPrincipalUrl"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "tipo"))]
    pub kind: WritingKind,
}

impl Writing {
    pub fn date_label(&self) -> String {
        format_date(self.published_at.as_deref())
    }

    /// Detail page link, `None` when the document has no slug
    pub fn href(&self) -> Option<String> {
        slug_text(&self.slug)
            .map(|slug| format!("{}/{}", self.kind.path_prefix(), urlencoding::encode(slug)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_projection() {
        let sermon: Writing = serde_json::from_value(json!({
            "_id": "s1", "titulo": "Graça", "tipo": "sermao", "slug": {"current": "graca"}
        }))
        .unwrap();
        assert_eq!(sermon.kind, WritingKind::Sermon);
        assert_eq!(sermon.href().as_deref(), Some("/sermoes/graca"));

        let article: Writing =
            serde_json::from_value(json!({"_id": "a1", "slug": {"current": "fé e obras"}})).unwrap();
        assert_eq!(article.kind, WritingKind::Article);
        assert_eq!(article.href().as_deref(), Some("/artigos/f%C3%A9%20e%20obras"));
    }

    #[test]
    fn test_null_body_is_none() {
        let w: Writing = serde_json::from_value(json!({"_id": "a", "conteudo": null})).unwrap();
        assert!(w.body.is_none());
    }
}
