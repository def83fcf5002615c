mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::io;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::alphabet::AlphabetResolver;

pub fn build_router(resolver: Arc<AlphabetResolver>, default_language: &str) -> Router {
    let state = Arc::new(AppState {
        resolver,
        default_language: default_language.to_string(),
    });

    Router::new()
        .route("/api/alphabet", get(handlers::alphabet))
        .route("/api/languages", get(handlers::languages))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `host:port` and serve until the listener fails.
pub async fn start(
    host: &str,
    port: u16,
    resolver: Arc<AlphabetResolver>,
    default_language: &str,
) -> io::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!(%addr, error = %e, "bind failed");
        e
    })?;

    info!(addr = %listener.local_addr()?, "alphabet server listening");
    eprintln!("  Alphabet server on http://{} (Ctrl+C to stop)", addr);

    axum::serve(listener, build_router(resolver, default_language))
        .await
        .inspect_err(|e| error!(error = %e, "server stopped"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::providers::StaticLocaleData;

    #[tokio::test]
    async fn test_start_reports_bind_failure() {
        let resolver = Arc::new(AlphabetResolver::with_provider(StaticLocaleData::new()));
        let result = start("256.0.0.1", 0, resolver, "English").await;
        assert!(result.is_err());
    }
}
