//! Detail page handlers
//!
//! A slug that matches no document renders the page's failure state with
//! a "não encontrado" message and a 404 status.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use super::middleware::{AppState, PageError, Visitor};
use super::shell::{self, Page};
use super::views::{PastorView, WritingView};
use crate::models::Writing;
use crate::services::Loadable;

pub const ARTICLE_FAILED: &str = "Falha ao carregar o artigo.";
pub const ARTICLE_NOT_FOUND: &str = "Artigo não encontrado";
pub const SERMON_FAILED: &str = "Falha ao carregar o sermão.";
pub const SERMON_NOT_FOUND: &str = "Sermão não encontrado";
pub const PASTOR_FAILED: &str = "Falha ao carregar os dados do pastor.";
pub const PASTOR_NOT_FOUND: &str = "Pastor não encontrado";

/// Status for a detail state: 404 when the document does not exist
fn status_of<T>(state: &Loadable<Option<T>>) -> StatusCode {
    match state {
        Loadable::Success(None) => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    }
}

fn found<T>(state: Loadable<Option<T>>, not_found: &str) -> Loadable<T> {
    state.and_then(|document| document.ok_or_else(|| not_found.to_string()))
}

pub async fn article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    visitor: Visitor,
) -> Result<Response, PageError> {
    let page = async {
        let article = shell::load(&state, ARTICLE_FAILED, |content| async move {
            content.article(&slug).await
        })
        .await;
        writing_page(&state, article, ARTICLE_NOT_FOUND)
    };
    shell::render(&state, &visitor, page).await
}

pub async fn sermon(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    visitor: Visitor,
) -> Result<Response, PageError> {
    let page = async {
        let sermon = shell::load(&state, SERMON_FAILED, |content| async move {
            content.sermon(&slug).await
        })
        .await;
        writing_page(&state, sermon, SERMON_NOT_FOUND)
    };
    shell::render(&state, &visitor, page).await
}

fn writing_page(state: &AppState, writing: Loadable<Option<Writing>>, not_found: &str) -> Page {
    let status = status_of(&writing);
    let writing = found(writing, not_found).map(|w| WritingView::detail(w, &state.rich_text));

    Page::new("artigo.html")
        .with_loadable("writing", &writing)
        .with_status(status)
}

pub async fn pastor(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    visitor: Visitor,
) -> Result<Response, PageError> {
    let page = async {
        let pastor = shell::load(&state, PASTOR_FAILED, |content| async move {
            content.pastor(&slug).await
        })
        .await;

        let status = status_of(&pastor);
        let pastor = found(pastor, PASTOR_NOT_FOUND).map(|p| PastorView::detail(p, &state.rich_text));

        Page::new("pastor.html")
            .with_loadable("pastor", &pastor)
            .with_status(status)
    };
    shell::render(&state, &visitor, page).await
}
