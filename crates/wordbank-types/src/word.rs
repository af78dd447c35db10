//! The word record and its insert payload.
//!
//! A [`Word`] is the only entity in the service. Its `word` field is the
//! natural key: the store keeps at most one record per distinct value.
//! `sections` are free-form annotation maps that are passed through without
//! inspection.

use serde::{Deserialize, Serialize};

use crate::ids::WordId;

/// One annotation section: string keys mapped to arbitrary JSON values.
pub type Section = serde_json::Map<String, serde_json::Value>;

/// A lexical entry with its annotation sections.
///
/// Empty fields are omitted from the JSON form, so a record with its id
/// cleared serializes as `{"word": ..., "sections": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Store-assigned identifier. `None` until the record is persisted, and
    /// cleared on reads where the caller already knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WordId>,
    /// The lexical key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub word: String,
    /// Ordered annotation sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl Word {
    /// Return this record with its id cleared.
    #[must_use]
    pub fn without_id(self) -> Self {
        Self { id: None, ..self }
    }
}

/// Payload for creating a word.
///
/// Carries no id: the store assigns one on insert. Any `id` a client puts in
/// the request body is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWord {
    /// The lexical key. Required.
    pub word: String,
    /// Annotation sections. Defaults to empty.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl NewWord {
    /// Create a payload with no sections.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            sections: Vec::new(),
        }
    }

    /// Attach sections to the payload.
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Turn the payload into a stored record under `id`.
    pub fn into_word(self, id: WordId) -> Word {
        Word {
            id: Some(id),
            word: self.word,
            sections: self.sections,
        }
    }
}
