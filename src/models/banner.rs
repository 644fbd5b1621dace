use super::null_default;
use serde::{Deserialize, Serialize};

/// Home page slide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "titulo"))]
    pub title: String,
    #[serde(default, rename(deserialize = "descricao"))]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename(deserialize = "imagemUrl"))]
    pub image_url: Option<String>,
}
