mod config;
mod embedder;
mod errors;
mod export;
mod extract;
mod routes;
mod screening;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embedder::{Embedder, FastembedEmbedder};
use crate::routes::build_router;
use crate::screening::vocabulary::SkillVocabulary;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary (falls back to the built-in list if missing)
    let vocabulary = Arc::new(SkillVocabulary::load(&config.skills_file));
    info!(
        "Skill vocabulary ready ({} terms from '{}')",
        vocabulary.len(),
        config.skills_file.display()
    );

    // Load the embedding model once; first run downloads the weights
    let model_name = config.embed_model.clone();
    let embedder: Arc<dyn Embedder> =
        Arc::new(tokio::task::spawn_blocking(move || FastembedEmbedder::load(&model_name)).await??);
    info!("Embedding model ready ({})", embedder.model_name());

    let state = AppState {
        vocabulary,
        embedder,
        sessions: SessionStore::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
