//! Domain service over a [`WordStore`].
//!
//! [`WordService`] turns transport-level requests into store calls and
//! shapes the results: single-record reads come back with their id cleared
//! (the caller already addressed the record), creation returns the full
//! stored record. Store errors pass through unchanged.
//!
//! Each operation logs one event tagged with the request's correlation id.

use std::sync::Arc;

use tracing::field::display;
use wordbank_store::{StoreError, WordStore};
use wordbank_types::{NewWord, Word, WordId};

use crate::context::RequestContext;

/// Read/write word operations composed from a store.
#[derive(Debug)]
pub struct WordService<S> {
    store: Arc<S>,
}

impl<S> Clone for WordService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: WordStore> WordService<S> {
    /// Create a service over an already constructed store.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every stored word, ids included.
    pub async fn list_words(&self, ctx: &RequestContext) -> Result<Vec<Word>, StoreError> {
        tracing::info!(request_id = ctx.request_id().map(display), "ListWords");

        self.store.list_words().await
    }

    /// Fetch one word by id, returned without its id.
    ///
    /// An `id` that does not parse as a word id cannot name a stored record
    /// and is reported as [`StoreError::NotFound`].
    pub async fn get_word_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Word, StoreError> {
        tracing::info!(request_id = ctx.request_id().map(display), id, "GetWordByID");

        let id: WordId = id
            .parse()
            .map_err(|_: uuid::Error| StoreError::NotFound(id.to_owned()))?;

        let word = self.store.get_word_by_id(id).await?;
        Ok(word.without_id())
    }

    /// Fetch one word chosen at random, returned without its id.
    pub async fn get_random_word(&self, ctx: &RequestContext) -> Result<Word, StoreError> {
        tracing::info!(request_id = ctx.request_id().map(display), "GetRandomWord");

        let word = self.store.get_random_word().await?;
        Ok(word.without_id())
    }

    /// Store a new word and return it with its assigned id.
    ///
    /// [`NewWord`] has no id field, so an id sent by the client never
    /// reaches the store.
    pub async fn add_word(&self, ctx: &RequestContext, input: NewWord) -> Result<Word, StoreError> {
        tracing::info!(
            request_id = ctx.request_id().map(display),
            word = %input.word,
            sections = input.sections.len(),
            "AddWord"
        );

        self.store.add_word(input).await
    }
}
