//! Embedded stylesheet, script and images

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use super::middleware::cache_control_static;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// One hour; assets are not fingerprinted
const MAX_AGE_SECS: u32 = 3600;

/// `GET /static/{*path}`
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let asset_path = path.trim_start_matches('/');

    match StaticAssets::get(asset_path) {
        Some(content) => build_response(asset_path, content.data.into_owned()),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

fn build_response(path: &str, data: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, get_content_type(path).to_string()),
            (header::CACHE_CONTROL, cache_control_static(MAX_AGE_SECS, false)),
        ],
        Body::from(data),
    )
        .into_response()
}

/// Get content type from file extension
fn get_content_type(path: &str) -> &'static str {
    match path.rsplit('.').next().unwrap_or("") {
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}
