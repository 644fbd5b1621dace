//! HTTP layer - page handlers and routing
//!
//! This module contains every route of the site:
//! - List pages (pastors, ministries, events, gallery, articles, news, lives)
//! - Detail pages (article, sermon, pastor)
//! - Static pages (history, contact, members area, 404)
//! - Color scheme toggle
//! - Embedded static assets

pub mod detail;
pub mod middleware;
pub mod pages;
pub mod preferences;
pub mod shell;
pub mod static_files;
pub mod views;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use middleware::{AppState, PageError, Visitor};

/// Build the site router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/nossa-historia", get(pages::history))
        .route("/historia", get(pages::history))
        .route("/pastores", get(pages::pastors))
        .route("/pastores/{slug}", get(detail::pastor))
        .route("/ministerios", get(pages::ministries))
        .route("/eventos", get(pages::events))
        .route("/galeria", get(pages::gallery))
        .route("/artigos", get(pages::writings))
        .route("/artigos/{slug}", get(detail::article))
        .route("/sermoes", get(pages::sermons))
        .route("/sermoes/{slug}", get(detail::sermon))
        .route("/noticias", get(pages::news))
        .route("/lives-podcasts", get(pages::broadcasts))
        .route("/contato", get(pages::contact))
        .route("/area-de-membros", get(pages::members))
        .route("/login", get(pages::members))
        .route("/tema", post(preferences::toggle_color_scheme))
        .route("/static/{*path}", get(static_files::serve_static))
        .fallback(pages::not_found)
        .layer(axum_middleware::from_fn(
            middleware::advertise_color_scheme_hint,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
