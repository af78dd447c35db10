//! Volatile in-memory word store.
//!
//! All records live behind one [`RwLock`]. Reads (list, lookup, random pick)
//! share the lock; inserts take it exclusively, so the duplicate check and
//! the insert happen in a single critical section. Records are cloned out on
//! every read, so callers never hold references into the guarded state.
//!
//! Nothing here survives a restart.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::Rng;
use wordbank_types::{NewWord, Word, WordId};

use crate::error::StoreError;
use crate::store::{WordReader, WordWriter};

/// Guarded record set.
#[derive(Debug, Default)]
struct Records {
    /// Stored records keyed by assigned id.
    by_id: HashMap<WordId, Word>,
    /// Uniqueness index from the lexical key to its record id.
    ids_by_word: HashMap<String, WordId>,
}

/// In-memory implementation of [`WordReader`] and [`WordWriter`].
///
/// Construct one at process start and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // No code path panics while holding the guard, so a poisoned lock still
    // guards a consistent record set.
    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.read().by_id.is_empty()
    }

    /// Snapshot copy of every record.
    pub fn list(&self) -> Vec<Word> {
        self.read().by_id.values().cloned().collect()
    }

    /// Copy of the record carrying `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has that id.
    pub fn get(&self, id: WordId) -> Result<Word, StoreError> {
        self.read()
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Copy of one record chosen uniformly at random.
    ///
    /// The count and the walk to the chosen position happen under the same
    /// read guard, so no insert can land in between.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoRecords`] if the store is empty, or
    /// [`StoreError::Internal`] if the walk ends before the drawn position.
    pub fn random(&self) -> Result<Word, StoreError> {
        let records = self.read();

        let count = records.by_id.len();
        if count == 0 {
            return Err(StoreError::NoRecords);
        }

        let position = rand::rng().random_range(0..count);

        records
            .by_id
            .values()
            .nth(position)
            .cloned()
            .ok_or_else(|| {
                StoreError::Internal(format!(
                    "random position {position} outside record set of {count}"
                ))
            })
    }

    /// Store a private copy of `new` under a fresh id and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if `new.word` is already stored.
    pub fn insert(&self, new: NewWord) -> Result<Word, StoreError> {
        let mut records = self.write();

        if records.ids_by_word.contains_key(&new.word) {
            return Err(StoreError::AlreadyExists(new.word));
        }

        let id = WordId::new();
        let word = new.into_word(id);
        let key = word.word.clone();

        records.by_id.insert(id, word.clone());
        records.ids_by_word.insert(key, id);

        tracing::debug!(%id, word = %word.word, "Stored word");

        Ok(word)
    }
}

impl WordReader for MemoryStore {
    async fn list_words(&self) -> Result<Vec<Word>, StoreError> {
        Ok(self.list())
    }

    async fn get_word_by_id(&self, id: WordId) -> Result<Word, StoreError> {
        self.get(id)
    }

    async fn get_random_word(&self) -> Result<Word, StoreError> {
        self.random()
    }
}

impl WordWriter for MemoryStore {
    async fn add_word(&self, word: NewWord) -> Result<Word, StoreError> {
        self.insert(word)
    }
}
