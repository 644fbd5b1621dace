//! Page shell
//!
//! Every page goes through [`render`]: the standard template variables,
//! the footer's contact details and the auto-refresh used while content
//! is still loading are added here. The footer loads concurrently with
//! the page's own content, so both share one render deadline.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::future::Future;
use tera::Context as TeraContext;

use super::middleware::{cache_control_no_cache, AppState, PageError, Visitor};
use super::views::SettingsView;
use crate::content::GatewayError;
use crate::services::{load_within, ContentService, Loadable};
use crate::theme::StandardTemplateVars;

/// Footer text when the site configuration is missing or failing
pub const FOOTER_UNAVAILABLE: &str = "Informações de contato não disponíveis.";

/// Seconds before a page still loading asks the browser to reload it
pub const REFRESH_SECS: u64 = 2;

/// A page about to be rendered
#[derive(Debug)]
pub struct Page {
    template: &'static str,
    context: TeraContext,
    status: StatusCode,
    loading: bool,
}

impl Page {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            context: TeraContext::new(),
            status: StatusCode::OK,
            loading: false,
        }
    }

    pub fn with<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.context.insert(key, value);
        self
    }

    /// Insert a content state; a loading one makes the page refresh itself
    pub fn with_loadable<T: Serialize>(mut self, key: &str, value: &Loadable<T>) -> Self {
        self.loading |= value.is_loading();
        self.context.insert(key, value);
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

/// Run a content operation under the render deadline
pub async fn load<T, F, Fut>(state: &AppState, failure_message: &str, fetch: F) -> Loadable<T>
where
    T: Send + 'static,
    F: FnOnce(ContentService) -> Fut,
    Fut: Future<Output = Result<T, GatewayError>> + Send + 'static,
{
    load_within(
        state.site.render_deadline(),
        failure_message,
        fetch(state.content.clone()),
    )
    .await
}

/// Site configuration; `None` when the singleton was never created
pub async fn site_settings(state: &AppState, failure_message: &str) -> Loadable<Option<SettingsView>> {
    load(state, failure_message, |content| async move { content.settings().await })
        .await
        .map(|settings| settings.map(SettingsView::from))
}

/// Footer contact details; never an error page
async fn footer(state: &AppState) -> Loadable<SettingsView> {
    site_settings(state, FOOTER_UNAVAILABLE)
        .await
        .and_then(|settings| settings.ok_or_else(|| FOOTER_UNAVAILABLE.to_string()))
}

/// Render the page built by `page` inside the site chrome
///
/// The footer's settings load while `page` loads its own content.
pub async fn render<F>(state: &AppState, visitor: &Visitor, page: F) -> Result<Response, PageError>
where
    F: Future<Output = Page>,
{
    let (footer, page) = tokio::join!(footer(state), page);

    let mut context = page.context;
    context.insert("footer", &footer);
    context.insert("contact_form_endpoint", &state.site.contact_form_endpoint);
    if page.loading {
        context.insert("refresh_secs", &REFRESH_SECS);
    }

    let vars = StandardTemplateVars::new(
        state.site.name.as_str(),
        state.site.tagline.as_str(),
        visitor.path.as_str(),
        visitor.color_scheme,
    );
    let html = state
        .theme
        .render_with_standard_vars(page.template, &context, &vars)?;

    Ok((
        page.status,
        [(header::CACHE_CONTROL, cache_control_no_cache())],
        Html(html),
    )
        .into_response())
}
