//! List and static page handlers
//!
//! Each handler loads its content into a [`Loadable`] and hands it to the
//! shell. Filters read the query string and run over the fetched list.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Redirect, Response},
};
use serde::Deserialize;

use super::middleware::{AppState, PageError, Visitor};
use super::shell::{self, Page};
use super::views::{
    BirthdayView, BroadcastView, EventView, GalleryView, NewsView, PastorView, SettingsView,
    WritingView,
};
use crate::models::Banner;
use crate::services::dates::current_month;
use crate::services::{BroadcastFilter, ListFilter, Loadable, MediaFilter, WritingFilter};

pub const PASTORS_FAILED: &str = "Falha ao carregar os dados dos pastores.";
pub const MINISTRIES_FAILED: &str = "Falha ao carregar os ministérios.";
pub const EVENTS_FAILED: &str = "Falha ao carregar os dados dos eventos.";
pub const GALLERY_FAILED: &str = "Falha ao carregar os itens da galeria.";
pub const WRITINGS_FAILED: &str = "Falha ao carregar os conteúdos.";
pub const NEWS_FAILED: &str = "Falha ao carregar as notícias.";
pub const BROADCASTS_FAILED: &str = "Falha ao carregar as lives e podcasts.";
pub const BANNERS_FAILED: &str = "Falha ao carregar os banners.";
pub const ARTICLES_FAILED: &str = "Falha ao carregar artigos.";
pub const BIRTHDAYS_FAILED: &str = "Falha ao carregar aniversariantes.";
pub const CONTACT_FAILED: &str = "Falha ao carregar as informações de contato.";

/// Broadcasts shown on the lives and podcasts page
const BROADCAST_PAGE_LIMIT: usize = 50;
/// Featured broadcasts shown on the home page
const BROADCAST_HOME_LIMIT: usize = 6;

/// `?filtro=` and `?tipo=` of the filterable lists
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub filtro: Option<String>,
    pub tipo: Option<String>,
}

pub async fn home(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    let month = current_month();
    let page = async {
        let (banners, articles, birthdays, broadcasts) = tokio::join!(
            shell::load(&state, BANNERS_FAILED, |content| async move { content.banners().await }),
            shell::load(&state, ARTICLES_FAILED, |content| async move {
                content.recent_articles().await
            }),
            shell::load(&state, BIRTHDAYS_FAILED, |content| async move {
                content.birthdays(&month).await
            }),
            shell::load(&state, BROADCASTS_FAILED, |content| async move {
                content.broadcasts(BROADCAST_HOME_LIMIT, true).await
            }),
        );

        let banners: Loadable<Vec<Banner>> = banners;
        let articles = articles.map(|items| items.iter().map(WritingView::card).collect::<Vec<_>>());
        let birthdays =
            birthdays.map(|items| items.into_iter().map(BirthdayView::from).collect::<Vec<_>>());
        let broadcasts =
            broadcasts.map(|items| items.iter().map(BroadcastView::from).collect::<Vec<_>>());

        Page::new("home.html")
            .with_loadable("banners", &banners)
            .with_loadable("articles", &articles)
            .with_loadable("birthdays", &birthdays)
            .with_loadable("broadcasts", &broadcasts)
    };
    shell::render(&state, &visitor, page).await
}

/// Church history; the content is part of the template
pub async fn history(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    shell::render(&state, &visitor, async { Page::new("historia.html") }).await
}

pub async fn pastors(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    let page = async {
        let pastors = shell::load(&state, PASTORS_FAILED, |content| async move { content.pastors().await })
            .await
            .map(|items| items.into_iter().map(PastorView::card).collect::<Vec<_>>());
        Page::new("pastores.html").with_loadable("pastors", &pastors)
    };
    shell::render(&state, &visitor, page).await
}

pub async fn ministries(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    let page = async {
        let ministries =
            shell::load(&state, MINISTRIES_FAILED, |content| async move { content.ministries().await }).await;
        Page::new("ministerios.html").with_loadable("ministries", &ministries)
    };
    shell::render(&state, &visitor, page).await
}

pub async fn events(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    let page = async {
        let events = shell::load(&state, EVENTS_FAILED, |content| async move { content.events().await })
            .await
            .map(|items| {
                items
                    .into_iter()
                    .map(|event| EventView::new(event, &state.rich_text))
                    .collect::<Vec<_>>()
            });
        Page::new("eventos.html").with_loadable("events", &events)
    };
    shell::render(&state, &visitor, page).await
}

pub async fn gallery(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
    visitor: Visitor,
) -> Result<Response, PageError> {
    let filter = MediaFilter::parse(params.tipo.as_deref());
    let page = async {
        let items = shell::load(&state, GALLERY_FAILED, |content| async move { content.gallery().await })
            .await
            .map(|items| {
                filter
                    .apply(&items)
                    .into_iter()
                    .map(GalleryView::from)
                    .collect::<Vec<_>>()
            });
        Page::new("galeria.html")
            .with_loadable("items", &items)
            .with("filters", &filter.options())
            .with("empty_message", gallery_empty_message(filter))
    };
    shell::render(&state, &visitor, page).await
}

fn gallery_empty_message(filter: MediaFilter) -> &'static str {
    match filter {
        MediaFilter::All => "Nenhum item foi adicionado à galeria ainda.",
        MediaFilter::Images => "Nenhuma foto encontrada.",
        MediaFilter::Videos => "Nenhum vídeo encontrado.",
    }
}

pub async fn writings(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
    visitor: Visitor,
) -> Result<Response, PageError> {
    let filter = WritingFilter::parse(params.filtro.as_deref());
    let page = async {
        let writings = shell::load(&state, WRITINGS_FAILED, |content| async move { content.writings().await })
            .await
            .map(|items| {
                filter
                    .apply(&items)
                    .into_iter()
                    .map(WritingView::card)
                    .collect::<Vec<_>>()
            });
        Page::new("artigos.html")
            .with_loadable("writings", &writings)
            .with("filters", &filter.options())
    };
    shell::render(&state, &visitor, page).await
}

/// The sermon list is the articles page with the sermon filter
pub async fn sermons() -> Redirect {
    Redirect::permanent("/artigos?filtro=sermoes")
}

pub async fn news(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    let page = async {
        let news = shell::load(&state, NEWS_FAILED, |content| async move { content.news().await })
            .await
            .map(|items| items.into_iter().map(NewsView::from).collect::<Vec<_>>());
        Page::new("noticias.html").with_loadable("news", &news)
    };
    shell::render(&state, &visitor, page).await
}

pub async fn broadcasts(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
    visitor: Visitor,
) -> Result<Response, PageError> {
    let filter = BroadcastFilter::parse(params.tipo.as_deref());
    let page = async {
        let broadcasts = shell::load(&state, BROADCASTS_FAILED, |content| async move {
            content.broadcasts(BROADCAST_PAGE_LIMIT, false).await
        })
        .await
        .map(|items| {
            filter
                .apply(&items)
                .into_iter()
                .map(BroadcastView::from)
                .collect::<Vec<_>>()
        });
        Page::new("lives_podcasts.html")
            .with_loadable("broadcasts", &broadcasts)
            .with("filters", &filter.options())
            .with("empty_message", broadcast_empty_message(filter))
    };
    shell::render(&state, &visitor, page).await
}

fn broadcast_empty_message(filter: BroadcastFilter) -> &'static str {
    match filter {
        BroadcastFilter::All => "Nenhum conteúdo encontrado.",
        BroadcastFilter::Lives => "Nenhum live encontrado.",
        BroadcastFilter::Podcasts => "Nenhum podcast encontrado.",
    }
}

pub async fn contact(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    let page = async {
        let settings: Loadable<Option<SettingsView>> = shell::site_settings(&state, CONTACT_FAILED).await;
        Page::new("contato.html").with_loadable("settings", &settings)
    };
    shell::render(&state, &visitor, page).await
}

/// Placeholder until members can sign in
pub async fn members(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    shell::render(&state, &visitor, async { Page::new("area_membros.html") }).await
}

pub async fn not_found(State(state): State<AppState>, visitor: Visitor) -> Result<Response, PageError> {
    let page = async { Page::new("not_found.html").with_status(StatusCode::NOT_FOUND) };
    shell::render(&state, &visitor, page).await
}
