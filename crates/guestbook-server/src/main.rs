use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use guestbook_api::{AppStateInner, router};
use guestbook_store::{Store, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guestbook=debug,tower_http=debug".into()),
        )
        .init();

    // Config — the store secrets have no defaults; refuse to serve without them.
    let store_url = std::env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
    let store_key = std::env::var("SUPABASE_KEY").context("SUPABASE_KEY must be set")?;
    let host = std::env::var("GUESTBOOK_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("GUESTBOOK_PORT")
        .unwrap_or_else(|_| "5000".into())
        .parse()?;

    // Shared state — one store handle for the life of the process
    let store = Store::new(StoreConfig {
        url: store_url,
        key: store_key,
    });
    let state = Arc::new(AppStateInner { store });

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Guestbook gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
