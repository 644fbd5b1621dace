//! Site-wide settings singleton

use super::{null_default, SocialLink};
use serde::{Deserialize, Serialize};

/// One weekly service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTime {
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "diaSemana"))]
    pub weekday: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "horario"))]
    pub time: String,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "descricaoCulto"))]
    pub description: String,
}

impl ServiceTime {
    fn new(weekday: &str, time: &str, description: &str) -> Self {
        Self {
            weekday: weekday.to_string(),
            time: time.to_string(),
            description: description.to_string(),
        }
    }
}

/// Schedule shown when the store has none
pub fn default_schedule() -> Vec<ServiceTime> {
    vec![
        ServiceTime::new("Domingo", "08h30", "Escola Bíblica Dominical"),
        ServiceTime::new("Domingo", "18h00", "Culto da Família"),
        ServiceTime::new("Quinta-feira", "20h00", "Culto de Oração"),
        ServiceTime::new("Domingo", "09h00", "Santa Ceia"),
        ServiceTime::new("Segunda-feira", "08h00", "Círculo de Oração"),
    ]
}

/// Contact data and schedule shared by the footer and the contact page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default, rename(deserialize = "endereco"))]
    pub address: Option<String>,
    #[serde(default, rename(deserialize = "cep"))]
    pub postal_code: Option<String>,
    #[serde(default, rename(deserialize = "telefonePrincipal"))]
    pub phone: Option<String>,
    #[serde(default, rename(deserialize = "emailContato"))]
    pub email: Option<String>,
    #[serde(default, rename(deserialize = "linkMapa"))]
    pub map_url: Option<String>,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "redesSociais"))]
    pub social_links: Vec<SocialLink>,
    #[serde(default, deserialize_with = "null_default", rename(deserialize = "horariosCultos"))]
    pub services: Vec<ServiceTime>,
}

impl GeneralSettings {
    /// Stored schedule, or the default one when the store has none
    pub fn schedule(&self) -> Vec<ServiceTime> {
        if self.services.is_empty() {
            default_schedule()
        } else {
            self.services.clone()
        }
    }

    /// `tel:` link with only the digits of the phone number
    pub fn phone_href(&self) -> Option<String> {
        let digits: String = self
            .phone
            .as_deref()?
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        (!digits.is_empty()).then(|| format!("tel:{digits}"))
    }

    /// Whether any contact detail is present
    pub fn has_contact(&self) -> bool {
        self.address.is_some() || self.phone.is_some() || self.email.is_some()
    }
}
