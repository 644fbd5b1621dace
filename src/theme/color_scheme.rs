//! Light/dark color scheme
//!
//! The visitor's choice lives in the `tema` cookie. Without one, the
//! browser's own preference decides: the server knows it when the client
//! hint is sent, otherwise the page carries no scheme class and the
//! stylesheet follows `prefers-color-scheme`.

use serde::Serialize;

/// Cookie holding the chosen scheme
pub const COOKIE_NAME: &str = "tema";

/// One year
pub const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Client hint carrying the system preference
pub const SYSTEM_HINT_HEADER: &str = "sec-ch-prefers-color-scheme";

/// Toggle label while the stylesheet decides the scheme
pub const SYSTEM_TOGGLE_LABEL: &str = "Alternar modo claro/escuro";

/// `<html>` class for a possibly unknown scheme; empty defers to the
/// stylesheet's media query
pub fn html_class(scheme: Option<ColorScheme>) -> &'static str {
    scheme.map_or("", ColorScheme::html_class)
}

pub fn toggle_label(scheme: Option<ColorScheme>) -> &'static str {
    scheme.map_or(SYSTEM_TOGGLE_LABEL, ColorScheme::toggle_label)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().trim_matches('"').to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Stored choice first, then the system preference sent as a hint
    pub fn known(stored: Option<&str>, system: Option<&str>) -> Option<Self> {
        stored
            .and_then(Self::parse)
            .or_else(|| system.and_then(Self::parse))
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class on the `<html>` element
    pub fn html_class(self) -> &'static str {
        self.as_str()
    }

    /// Accessible label of the toggle button
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Ativar modo escuro",
            Self::Dark => "Ativar modo claro",
        }
    }

    /// `Set-Cookie` value persisting this scheme
    pub fn cookie(self) -> String {
        format!(
            "{COOKIE_NAME}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax",
            self.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stored_overrides_system() {
        assert_eq!(ColorScheme::known(Some("light"), Some("dark")), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::known(Some("dark"), Some("light")), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_system_used_without_stored() {
        assert_eq!(ColorScheme::known(None, Some("\"dark\"")), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::known(Some("roxo"), Some("dark")), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_unknown_scheme_leaves_html_unclassed() {
        assert_eq!(ColorScheme::known(None, None), None);
        assert_eq!(html_class(None), "");
        assert_eq!(toggle_label(None), SYSTEM_TOGGLE_LABEL);
        assert_eq!(html_class(Some(ColorScheme::Light)), "light");
        assert_eq!(html_class(Some(ColorScheme::Dark)), "dark");
    }

    #[test]
    fn test_cookie() {
        assert_eq!(
            ColorScheme::Dark.cookie(),
            "tema=dark; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_class(dark in any::<bool>()) {
            let scheme = if dark { ColorScheme::Dark } else { ColorScheme::Light };
            prop_assert_eq!(scheme.toggled().toggled().html_class(), scheme.html_class());
            prop_assert_ne!(scheme.toggled(), scheme);
        }
    }
}
