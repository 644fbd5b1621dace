//! Content service
//!
//! One typed operation per content type. Queries go through the shared
//! [`ContentSource`] (normally the memoized gateway); answers are decoded
//! into models and put in the order the pages expect.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::content::{queries, ContentSource, GatewayError, Query};
use crate::models::{
    Banner, Birthday, Broadcast, Event, GalleryItem, GeneralSettings, Ministry, NewsItem, Pastor,
    Writing,
};

/// Number of articles shown on the home page
pub const RECENT_ARTICLES: usize = 3;

/// Typed access to the content store
#[derive(Clone)]
pub struct ContentService {
    source: Arc<dyn ContentSource>,
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService").finish_non_exhaustive()
    }
}

impl ContentService {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Fetch a list; `null` means no documents
    async fn list<T: DeserializeOwned>(&self, query: Query) -> Result<Vec<T>, GatewayError> {
        match self.source.fetch(&query).await? {
            Value::Null => Ok(Vec::new()),
            value => decode(query.label, value),
        }
    }

    /// Fetch a single document; `null` means not found
    async fn one<T: DeserializeOwned>(&self, query: Query) -> Result<Option<T>, GatewayError> {
        match self.source.fetch(&query).await? {
            Value::Null => Ok(None),
            value => decode(query.label, value).map(Some),
        }
    }

    /// All pastors, by `ordem` ascending; ties keep the store order
    pub async fn pastors(&self) -> Result<Vec<Pastor>, GatewayError> {
        let mut pastors: Vec<Pastor> = self.list(queries::pastors()).await?;
        pastors.sort_by(|a, b| a.order.total_cmp(&b.order));
        Ok(pastors)
    }

    pub async fn pastor(&self, slug: &str) -> Result<Option<Pastor>, GatewayError> {
        self.one(queries::pastor_by_slug(slug)).await
    }

    pub async fn ministries(&self) -> Result<Vec<Ministry>, GatewayError> {
        self.list(queries::ministries()).await
    }

    /// Events, newest start first, undated ones last
    pub async fn events(&self) -> Result<Vec<Event>, GatewayError> {
        let mut events: Vec<Event> = self.list(queries::events()).await?;
        events.sort_by(|a, b| match (a.start(), b.start()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        Ok(events)
    }

    pub async fn gallery(&self) -> Result<Vec<GalleryItem>, GatewayError> {
        self.list(queries::gallery()).await
    }

    /// Articles and sermons together, newest first
    pub async fn writings(&self) -> Result<Vec<Writing>, GatewayError> {
        self.list(queries::writings()).await
    }

    pub async fn recent_articles(&self) -> Result<Vec<Writing>, GatewayError> {
        self.list(queries::recent_articles(RECENT_ARTICLES)).await
    }

    pub async fn article(&self, slug: &str) -> Result<Option<Writing>, GatewayError> {
        self.one(queries::article_by_slug(slug)).await
    }

    pub async fn sermon(&self, slug: &str) -> Result<Option<Writing>, GatewayError> {
        self.one(queries::sermon_by_slug(slug)).await
    }

    pub async fn broadcasts(&self, limit: usize, featured_only: bool) -> Result<Vec<Broadcast>, GatewayError> {
        self.list(queries::broadcasts(limit, featured_only)).await
    }

    pub async fn banners(&self) -> Result<Vec<Banner>, GatewayError> {
        self.list(queries::banners()).await
    }

    pub async fn news(&self) -> Result<Vec<NewsItem>, GatewayError> {
        self.list(queries::news()).await
    }

    /// Birthdays in `month` (`"01"`..`"12"`), by day
    pub async fn birthdays(&self, month: &str) -> Result<Vec<Birthday>, GatewayError> {
        self.list(queries::birthdays(month)).await
    }

    /// The settings singleton; `None` when it was never created
    pub async fn settings(&self) -> Result<Option<GeneralSettings>, GatewayError> {
        self.one(queries::settings()).await
    }
}

fn decode<T: DeserializeOwned>(label: &str, value: Value) -> Result<T, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::Decode(format!("{label}: {e}")))
}
