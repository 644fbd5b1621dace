//! Color scheme toggle

use axum::{
    extract::Query,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::middleware::Visitor;
use crate::theme::ColorScheme;

/// `?atual=` set by the page script from `prefers-color-scheme` when the
/// server could not tell which scheme was showing
#[derive(Debug, Default, Deserialize)]
pub struct ToggleParams {
    pub atual: Option<String>,
}

/// `POST /tema`: flip the scheme, remember it and go back where the
/// visitor was
pub async fn toggle_color_scheme(
    visitor: Visitor,
    Query(params): Query<ToggleParams>,
    headers: HeaderMap,
) -> Response {
    let scheme = showing(&visitor, &params).toggled();
    tracing::debug!(scheme = scheme.as_str(), "color scheme toggled");

    let location = back_to(&headers);
    let cookie = HeaderValue::from_str(&scheme.cookie());
    let location = HeaderValue::from_str(&location);

    match (cookie, location) {
        (Ok(cookie), Ok(location)) => (
            StatusCode::SEE_OTHER,
            [(header::SET_COOKIE, cookie), (header::LOCATION, location)],
        )
            .into_response(),
        _ => StatusCode::BAD_REQUEST.into_response(),
    }
}

/// Scheme the visitor was looking at; the cookie or hint wins over the
/// script's report, light when nobody knows
fn showing(visitor: &Visitor, params: &ToggleParams) -> ColorScheme {
    visitor
        .color_scheme
        .or_else(|| params.atual.as_deref().and_then(ColorScheme::parse))
        .unwrap_or_default()
}

/// Same-site path of the referring page, `/` otherwise
fn back_to(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(local_path)
        .unwrap_or_else(|| "/".to_string())
}

fn local_path(referer: &str) -> Option<String> {
    let path = match referer.find("://") {
        Some(scheme_end) => {
            let rest = &referer[scheme_end + 3..];
            &rest[rest.find('/')?..]
        }
        None => referer,
    };
    (path.starts_with('/') && !path.starts_with("//")).then(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(scheme: Option<ColorScheme>) -> Visitor {
        Visitor {
            path: "/".to_string(),
            color_scheme: scheme,
        }
    }

    fn reported(value: &str) -> ToggleParams {
        ToggleParams {
            atual: Some(value.to_string()),
        }
    }

    #[test]
    fn test_local_path_from_absolute_referer() {
        assert_eq!(
            local_path("https://igreja.example/eventos?x=1").as_deref(),
            Some("/eventos?x=1")
        );
        assert_eq!(local_path("https://igreja.example").as_deref(), None);
    }

    #[test]
    fn test_local_path_rejects_protocol_relative() {
        assert_eq!(local_path("//evil.example/x"), None);
        assert_eq!(local_path("/pastores").as_deref(), Some("/pastores"));
    }

    #[test]
    fn test_back_to_defaults_to_root() {
        assert_eq!(back_to(&HeaderMap::new()), "/");
    }

    #[test]
    fn test_showing_uses_script_report_only_when_undecided() {
        assert_eq!(showing(&visitor(None), &reported("dark")), ColorScheme::Dark);
        assert_eq!(
            showing(&visitor(Some(ColorScheme::Light)), &reported("dark")),
            ColorScheme::Light
        );
        assert_eq!(showing(&visitor(None), &ToggleParams::default()), ColorScheme::Light);
    }
}
