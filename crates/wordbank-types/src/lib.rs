//! Shared type definitions for the Wordbank word service.
//!
//! This crate is the single source of truth for the word record shape used
//! by the storage backends and the HTTP API.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for word identifiers
//! - [`word`] -- The [`Word`] record and the [`NewWord`] insert payload

pub mod ids;
pub mod word;

// Re-export all public types at crate root for convenience.
pub use ids::WordId;
pub use word::{NewWord, Section, Word};
