//! Identifier for documents accepted by a backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

const PREFIX: &str = "leitura";
const SUFFIX_LEN: usize = 6;

/// Identifier of a stored document, e.g. `leitura_20240101T000000Z_a1b2c3`.
///
/// The timestamp part records when the document was accepted; the random
/// suffix disambiguates uploads within the same second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generate a new identifier stamped with `at`.
    #[must_use]
    pub fn generate(at: Timestamp) -> Self {
        let random = uuid::Uuid::new_v4().simple().to_string();
        Self(format!(
            "{PREFIX}_{}_{}",
            at.format("%Y%m%dT%H%M%SZ"),
            &random[..SUFFIX_LEN]
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when parsing an empty document id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("document id must not be empty")]
pub struct EmptyDocumentId;

impl FromStr for DocumentId {
    type Err = EmptyDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmptyDocumentId);
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let at = Utc::now();
        let a = DocumentId::generate(at);
        let b = DocumentId::generate(at);
        assert_ne!(a, b);
    }

    #[test]
    fn should_embed_prefix_and_compact_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let id = DocumentId::generate(at);
        assert!(id.as_str().starts_with("leitura_20240102T030405Z_"));
        assert_eq!(id.as_str().len(), "leitura_20240102T030405Z_".len() + 6);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DocumentId::generate(Utc::now());
        let parsed: DocumentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_empty_id() {
        assert_eq!("  ".parse::<DocumentId>(), Err(EmptyDocumentId));
    }
}
