use super::null_default;
use serde::{Deserialize, Serialize};

/// Ministry of the church
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ministry {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "nome"))]
    pub name: String,
    #[serde(default, rename(deserialize = "descricao"))]
    pub description: Option<String>,
    #[serde(default, rename(deserialize = "lider"))]
    pub leader: Option<String>,
    #[serde(default, rename(deserialize = "imagemUrl"))]
    pub image_url: Option<String>,
}
