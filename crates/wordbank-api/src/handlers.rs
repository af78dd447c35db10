//! REST API endpoint handlers for the word service.
//!
//! Handlers parse the path or body, call the [`WordService`] with the
//! request's [`RequestContext`], and encode the result. Failures become
//! [`ApiError`] envelopes.
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/api/words` | 200, array of words (ids included) |
//! | `GET` | `/api/word/{id}` | 200, word without id |
//! | `GET` | `/api/word/random` | 200, word without id |
//! | `POST` | `/api/word` | 201, stored word with id |
//!
//! [`WordService`]: crate::service::WordService

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use wordbank_store::WordStore;
use wordbank_types::NewWord;

use crate::context::RequestContext;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/words`
pub async fn list_words<S: WordStore>(
    State(state): State<Arc<AppState<S>>>,
    ctx: RequestContext,
) -> Result<Response, ApiError> {
    let words = state.words.list_words(&ctx).await?;
    json_response(StatusCode::OK, &words)
}

/// `GET /api/word/{id}`
pub async fn get_word_by_id<S: WordStore>(
    State(state): State<Arc<AppState<S>>>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let word = state.words.get_word_by_id(&ctx, &id).await?;
    json_response(StatusCode::OK, &word)
}

/// `GET /api/word/random`
pub async fn get_random_word<S: WordStore>(
    State(state): State<Arc<AppState<S>>>,
    ctx: RequestContext,
) -> Result<Response, ApiError> {
    let word = state.words.get_random_word(&ctx).await?;
    json_response(StatusCode::OK, &word)
}

/// `POST /api/word`
///
/// The body is parsed here rather than with `axum::Json` so that every
/// parse failure, content type included, yields the same JSON envelope.
pub async fn post_word<S: WordStore>(
    State(state): State<Arc<AppState<S>>>,
    ctx: RequestContext,
    body: Bytes,
) -> Result<Response, ApiError> {
    let input: NewWord = serde_json::from_slice(&body).map_err(ApiError::MalformedInput)?;

    let word = state.words.add_word(&ctx, input).await?;
    json_response(StatusCode::CREATED, &word)
}

/// Encode `body` as a JSON response with the given status.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body).map_err(ApiError::Encoding)?;
    Ok((status, [(CONTENT_TYPE, "application/json")], bytes).into_response())
}
