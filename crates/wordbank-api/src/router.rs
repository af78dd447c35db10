//! Axum router construction for the word API.
//!
//! Assembles the REST routes, the optional static file fallback, and the
//! request pipeline into a single [`Router`].

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use wordbank_store::WordStore;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router for the word API.
///
/// The router includes:
/// - `GET /api/words` -- list all words
/// - `GET /api/word/random` -- one word at random
/// - `GET /api/word/{id}` -- one word by id
/// - `POST /api/word` -- create a word
///
/// When `assets` is given, any other path is served from that directory
/// (the bundled front-end). `/api/word/random` is a static segment and
/// takes precedence over `{id}`.
///
/// Layers run outermost first: correlation id, then access log, then the
/// route.
pub fn build_router<S: WordStore>(state: Arc<AppState<S>>, assets: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/api/words", get(handlers::list_words::<S>))
        .route("/api/word/random", get(handlers::get_random_word::<S>))
        .route("/api/word/{id}", get(handlers::get_word_by_id::<S>))
        .route("/api/word", post(handlers::post_word::<S>))
        .with_state(state);

    if let Some(dir) = assets {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(axum::middleware::from_fn(middleware::access_log))
        .layer(axum::middleware::from_fn(middleware::assign_request_id))
}
