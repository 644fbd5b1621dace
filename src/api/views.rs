//! Template views
//!
//! Models serialize as they are; views add the labels and links the
//! templates show next to them.

use serde::Serialize;

use crate::models::{
    Birthday, Broadcast, BroadcastStatus, Event, GalleryItem, GeneralSettings, MediaKind, NewsItem,
    Pastor, ServiceTime, SocialLink, Writing,
};
use crate::services::RichTextRenderer;

/// External link with a display label
#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub label: String,
    pub url: String,
}

impl From<&SocialLink> for LinkView {
    fn from(link: &SocialLink) -> Self {
        Self {
            label: link.label(),
            url: link.url.clone(),
        }
    }
}

fn links(items: &[SocialLink]) -> Vec<LinkView> {
    items
        .iter()
        .filter(|link| !link.url.trim().is_empty())
        .map(LinkView::from)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct PastorView {
    #[serde(flatten)]
    pub pastor: Pastor,
    pub tenure_label: String,
    pub href: Option<String>,
    pub links: Vec<LinkView>,
    /// Rendered detailed biography, only on the detail page
    pub biography_html: Option<String>,
}

impl PastorView {
    pub fn card(pastor: Pastor) -> Self {
        Self {
            tenure_label: pastor.tenure_label(),
            href: pastor.href(),
            links: links(pastor.social_links.as_deref().unwrap_or_default()),
            biography_html: None,
            pastor,
        }
    }

    pub fn detail(pastor: Pastor, renderer: &RichTextRenderer) -> Self {
        let html = pastor
            .detailed_biography
            .as_deref()
            .map(|blocks| renderer.render(blocks))
            .filter(|html| !html.is_empty());
        Self {
            biography_html: html,
            ..Self::card(pastor)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub date_label: String,
    pub description_html: String,
}

impl EventView {
    pub fn new(event: Event, renderer: &RichTextRenderer) -> Self {
        Self {
            date_label: event.date_label(),
            description_html: event
                .description
                .as_deref()
                .map(|blocks| renderer.render(blocks))
                .unwrap_or_default(),
            event,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    #[serde(flatten)]
    pub item: GalleryItem,
    pub is_video: bool,
    /// Privacy-enhanced player URL, for YouTube videos only
    pub embed_url: Option<String>,
}

impl From<&GalleryItem> for GalleryView {
    fn from(item: &GalleryItem) -> Self {
        Self {
            is_video: item.kind == MediaKind::Video,
            embed_url: item.youtube_embed_url(),
            item: item.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WritingView {
    #[serde(flatten)]
    pub writing: Writing,
    pub kind_label: &'static str,
    pub author_label: &'static str,
    pub date_label: String,
    pub href: Option<String>,
    pub body_html: Option<String>,
}

impl WritingView {
    pub fn card(writing: &Writing) -> Self {
        Self {
            kind_label: writing.kind.label(),
            author_label: writing.kind.author_label(),
            date_label: writing.date_label(),
            href: writing.href(),
            body_html: None,
            writing: writing.clone(),
        }
    }

    pub fn detail(writing: Writing, renderer: &RichTextRenderer) -> Self {
        let body_html = writing.body.as_deref().map(|blocks| renderer.render(blocks));
        Self {
            body_html,
            ..Self::card(&writing)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BroadcastView {
    #[serde(flatten)]
    pub broadcast: Broadcast,
    pub kind_label: Option<&'static str>,
    pub status: Option<BroadcastStatus>,
    pub status_label: String,
    pub date_label: String,
    pub duration_label: Option<String>,
    pub card_tags: Vec<String>,
    pub pastor_href: Option<String>,
    pub platforms: Vec<LinkView>,
}

impl From<&Broadcast> for BroadcastView {
    fn from(broadcast: &Broadcast) -> Self {
        Self {
            kind_label: broadcast.kind().map(|kind| kind.label()),
            status: broadcast.status(),
            status_label: broadcast.status_label(),
            date_label: broadcast.date_label(),
            duration_label: broadcast.duration_label(),
            card_tags: broadcast.card_tags().to_vec(),
            pastor_href: broadcast.pastor_href(),
            platforms: links(&broadcast.other_platforms),
            broadcast: broadcast.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsView {
    #[serde(flatten)]
    pub item: NewsItem,
    pub date_label: String,
}

impl From<NewsItem> for NewsView {
    fn from(item: NewsItem) -> Self {
        Self {
            date_label: item.date_label(),
            item,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BirthdayView {
    pub name: String,
    pub day_label: Option<String>,
}

impl From<Birthday> for BirthdayView {
    fn from(birthday: Birthday) -> Self {
        Self {
            day_label: birthday.day_label(),
            name: birthday.name,
        }
    }
}

/// Church contact details and service schedule
#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    #[serde(flatten)]
    pub settings: GeneralSettings,
    pub schedule: Vec<ServiceTime>,
    pub phone_href: Option<String>,
    pub has_contact: bool,
    pub links: Vec<LinkView>,
}

impl From<GeneralSettings> for SettingsView {
    fn from(settings: GeneralSettings) -> Self {
        Self {
            schedule: settings.schedule(),
            phone_href: settings.phone_href(),
            has_contact: settings.has_contact(),
            links: links(&settings.social_links),
            settings,
        }
    }
}
