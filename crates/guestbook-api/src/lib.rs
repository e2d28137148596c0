pub mod entries;
pub mod error;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};

use guestbook_store::Store;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

/// The four gateway routes. Layering (CORS, request tracing) is left to the
/// caller so tests can drive the bare router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/guestbook",
            get(entries::list_entries).post(entries::create_entry),
        )
        .route(
            "/guestbook/{id}",
            put(entries::update_entry).delete(entries::delete_entry),
        )
        .with_state(state)
}
