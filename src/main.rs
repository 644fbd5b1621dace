//! Igreja Unida - website of the 1ª Igreja Unida de Inácio Monteiro

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use igreja_unida::{
    api::{self, AppState},
    cache::{create_cache, MemoizedSource},
    config::Config,
    content::{ImageAssets, SanityClient},
    services::{ContentService, RichTextRenderer},
    theme::ThemeEngine,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "igreja_unida=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting church website...");

    // Load configuration
    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    // Content store behind the fetch-once cache
    let client = SanityClient::new(&config.content)?;
    tracing::info!(endpoint = client.endpoint(), "Content store client ready");
    let source = MemoizedSource::new(Arc::new(client), create_cache(&config.cache));
    let content = ContentService::new(Arc::new(source));

    // Initialize theme engine
    let theme = ThemeEngine::new()?;
    tracing::info!("Theme engine initialized");

    let rich_text = RichTextRenderer::new(ImageAssets::from_config(&config.content));

    let state = AppState {
        content,
        theme: Arc::new(theme),
        site: Arc::new(config.site.clone()),
        rich_text: Arc::new(rich_text),
    };

    // Build router
    let app = api::build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
