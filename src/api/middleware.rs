//! Shared request plumbing
//!
//! Contains:
//! - Application state handed to every handler
//! - The visitor extractor (request path and color scheme)
//! - Page errors and their plain 500 response
//! - Client hint and cache header helpers

use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;
use std::sync::Arc;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::services::{ContentService, RichTextRenderer};
use crate::theme::{simple_error_page, ColorScheme, ThemeEngine, COOKIE_NAME, SYSTEM_HINT_HEADER};

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
    pub theme: Arc<ThemeEngine>,
    pub site: Arc<SiteConfig>,
    pub rich_text: Arc<RichTextRenderer>,
}

/// Who is asking: the path being rendered and the scheme to render it in
#[derive(Debug, Clone)]
pub struct Visitor {
    pub path: String,
    /// `None` when the stylesheet has to decide from `prefers-color-scheme`
    pub color_scheme: Option<ColorScheme>,
}

impl Visitor {
    pub fn from_headers(path: impl Into<String>, headers: &HeaderMap) -> Self {
        let stored = cookie_value(headers, COOKIE_NAME);
        let system = headers
            .get(SYSTEM_HINT_HEADER)
            .and_then(|value| value.to_str().ok());
        Self {
            path: path.into(),
            color_scheme: ColorScheme::known(stored.as_deref(), system),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Visitor {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(parts.uri.path(), &parts.headers))
    }
}

/// Value of the cookie called `name`, if the request carries it
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        let Ok(cookie_str) = header_value.to_str() else {
            continue;
        };
        for cookie in cookie_str.split(';') {
            let cookie = cookie.trim();
            if let Some(value) = cookie
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
            {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Failure while building a page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to render page: {0:#}")]
    Render(#[from] anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(simple_error_page())).into_response()
    }
}

/// Ask browsers to send their color scheme preference on later requests
pub async fn advertise_color_scheme_hint(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static("accept-ch"),
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
    );
    headers.append(
        header::VARY,
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme, Cookie"),
    );
    response
}

/// Build Cache-Control header for static assets
pub fn cache_control_static(max_age: u32, immutable: bool) -> String {
    if immutable {
        format!("public, max-age={}, immutable", max_age)
    } else {
        format!("public, max-age={}", max_age)
    }
}

/// Build Cache-Control header for rendered pages
pub fn cache_control_no_cache() -> &'static str {
    "no-cache"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_cookie_value_found() {
        let map = headers(&[("cookie", "foo=1; tema=dark; bar=2")]);
        assert_eq!(cookie_value(&map, "tema").as_deref(), Some("dark"));
    }

    #[test]
    fn test_cookie_value_needs_exact_name() {
        let map = headers(&[("cookie", "temas=dark")]);
        assert_eq!(cookie_value(&map, "tema"), None);
    }

    #[test]
    fn test_cookie_value_across_headers() {
        let map = headers(&[("cookie", "a=1"), ("cookie", "tema=light")]);
        assert_eq!(cookie_value(&map, "tema").as_deref(), Some("light"));
    }

    #[test]
    fn test_visitor_prefers_cookie_over_hint() {
        let map = headers(&[
            ("cookie", "tema=light"),
            ("sec-ch-prefers-color-scheme", "dark"),
        ]);
        let visitor = Visitor::from_headers("/", &map);
        assert_eq!(visitor.color_scheme, Some(ColorScheme::Light));
    }

    #[test]
    fn test_visitor_uses_hint_without_cookie() {
        let map = headers(&[("sec-ch-prefers-color-scheme", "\"dark\"")]);
        let visitor = Visitor::from_headers("/eventos", &map);
        assert_eq!(visitor.color_scheme, Some(ColorScheme::Dark));
        assert_eq!(visitor.path, "/eventos");
    }

    #[test]
    fn test_visitor_without_cookie_or_hint_is_undecided() {
        let visitor = Visitor::from_headers("/", &HeaderMap::new());
        assert_eq!(visitor.color_scheme, None);
    }

    #[test]
    fn test_cache_control_static() {
        assert_eq!(cache_control_static(3600, false), "public, max-age=3600");
        assert_eq!(
            cache_control_static(31536000, true),
            "public, max-age=31536000, immutable"
        );
    }

    #[test]
    fn test_page_error_is_500() {
        let response = PageError::Render(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
