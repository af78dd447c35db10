//! Word record stores for the Wordbank service.
//!
//! Every backend implements the same capability split:
//!
//! ```text
//! WordReader  -- list_words, get_word_by_id, get_random_word
//! WordWriter  -- add_word
//! WordStore   -- anything that is both
//! ```
//!
//! The service layer depends only on [`WordStore`], so the backend is chosen
//! once at process start.
//!
//! # Modules
//!
//! - [`store`] -- The reader/writer traits
//! - [`memory`] -- Volatile in-memory store guarded by a single `RwLock`
//! - [`postgres`] -- Durable `PostgreSQL` store and its migrations
//! - [`error`] -- Shared error type

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::{PostgresConfig, PostgresStore};
pub use store::{WordReader, WordStore, WordWriter};
