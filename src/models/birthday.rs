use super::null_default;
use crate::services::dates::format_day_month;
use serde::{Deserialize, Serialize};

/// Member celebrating a birthday this month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Birthday {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "nome"))]
    pub name: String,
    #[serde(default, rename(deserialize = "dataNascimento"))]
    pub born_on: Option<String>,
}

impl Birthday {
    /// `dd/mm`; the year is never shown
    pub fn day_label(&self) -> Option<String> {
        format_day_month(self.born_on.as_deref())
    }
}
