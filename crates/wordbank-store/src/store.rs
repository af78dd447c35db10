//! Storage capability traits.
//!
//! Reads and writes are separate traits so a component that only needs one
//! side can say so in its bounds. [`WordStore`] is blanket-implemented for
//! every type that provides both.
//!
//! Methods return `Send` futures so stores can be shared across the request
//! tasks of a multi-threaded runtime. The in-memory store completes without
//! suspending; the `PostgreSQL` store awaits the database.

use std::future::Future;

use wordbank_types::{NewWord, Word, WordId};

use crate::error::StoreError;

/// Read side of a word store.
pub trait WordReader: Send + Sync + 'static {
    /// Return a snapshot copy of every stored record, in unspecified order.
    fn list_words(&self) -> impl Future<Output = Result<Vec<Word>, StoreError>> + Send;

    /// Look up a record by its assigned id.
    ///
    /// Fails with [`StoreError::NotFound`] when no record carries `id`.
    fn get_word_by_id(
        &self,
        id: WordId,
    ) -> impl Future<Output = Result<Word, StoreError>> + Send;

    /// Pick one stored record uniformly at random.
    ///
    /// Fails with [`StoreError::NoRecords`] when the store is empty.
    fn get_random_word(&self) -> impl Future<Output = Result<Word, StoreError>> + Send;
}

/// Write side of a word store.
pub trait WordWriter: Send + Sync + 'static {
    /// Insert a new record and return it with its freshly assigned id.
    ///
    /// Fails with [`StoreError::AlreadyExists`] when a record with the same
    /// `word` is already stored. The duplicate check and the insert are
    /// atomic with respect to every other caller.
    fn add_word(&self, word: NewWord) -> impl Future<Output = Result<Word, StoreError>> + Send;
}

/// A store offering both reads and writes.
pub trait WordStore: WordReader + WordWriter {}

impl<T: WordReader + WordWriter> WordStore for T {}
