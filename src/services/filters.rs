//! List filters
//!
//! Filters are chosen from the query string and applied to data that was
//! already fetched; they never trigger another query. Unknown values fall
//! back to "all".

use crate::models::{Broadcast, BroadcastKind, GalleryItem, MediaKind, Writing, WritingKind};
use serde::Serialize;

/// A filter over one kind of list item
pub trait ListFilter<T>: Copy {
    fn keep(self, item: &T) -> bool;

    /// Items that pass the filter, in their original order
    fn apply<'a>(self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.keep(item)).collect()
    }
}

/// Query-string value and label of a filter option
#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// `?filtro=` on the articles page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritingFilter {
    #[default]
    All,
    Articles,
    Sermons,
}

impl WritingFilter {
    pub const OPTIONS: [(Self, &'static str, &'static str); 3] = [
        (Self::All, "todos", "Todos"),
        (Self::Articles, "artigos", "Artigos"),
        (Self::Sermons, "sermoes", "Sermões"),
    ];

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("artigos") => Self::Articles,
            Some("sermoes") => Self::Sermons,
            _ => Self::All,
        }
    }

    pub fn options(self) -> Vec<FilterOption> {
        options(&Self::OPTIONS, self)
    }
}

impl ListFilter<Writing> for WritingFilter {
    fn keep(self, item: &Writing) -> bool {
        match self {
            Self::All => true,
            Self::Articles => item.kind == WritingKind::Article,
            Self::Sermons => item.kind == WritingKind::Sermon,
        }
    }
}

/// `?tipo=` on the gallery page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaFilter {
    #[default]
    All,
    Images,
    Videos,
}

impl MediaFilter {
    pub const OPTIONS: [(Self, &'static str, &'static str); 3] = [
        (Self::All, "todos", "Todos"),
        (Self::Images, "imagens", "Fotos"),
        (Self::Videos, "videos", "Vídeos"),
    ];

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("imagens") | Some("imagem") => Self::Images,
            Some("videos") | Some("video") => Self::Videos,
            _ => Self::All,
        }
    }

    pub fn options(self) -> Vec<FilterOption> {
        options(&Self::OPTIONS, self)
    }
}

impl ListFilter<GalleryItem> for MediaFilter {
    fn keep(self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Images => item.kind == MediaKind::Image,
            Self::Videos => item.kind == MediaKind::Video,
        }
    }
}

/// `?tipo=` on the lives and podcasts page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BroadcastFilter {
    #[default]
    All,
    Lives,
    Podcasts,
}

impl BroadcastFilter {
    pub const OPTIONS: [(Self, &'static str, &'static str); 3] = [
        (Self::All, "todos", "Todos"),
        (Self::Lives, "live", "Lives"),
        (Self::Podcasts, "podcast", "Podcasts"),
    ];

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("live") => Self::Lives,
            Some("podcast") => Self::Podcasts,
            _ => Self::All,
        }
    }

    pub fn options(self) -> Vec<FilterOption> {
        options(&Self::OPTIONS, self)
    }
}

impl ListFilter<Broadcast> for BroadcastFilter {
    fn keep(self, item: &Broadcast) -> bool {
        match self {
            Self::All => true,
            Self::Lives => item.kind() == Some(BroadcastKind::Live),
            Self::Podcasts => item.kind() == Some(BroadcastKind::Podcast),
        }
    }
}

fn options<F: PartialEq + Copy>(all: &[(F, &'static str, &'static str)], current: F) -> Vec<FilterOption> {
    all.iter()
        .map(|&(filter, value, label)| FilterOption {
            value,
            label,
            active: filter == current,
        })
        .collect()
}
