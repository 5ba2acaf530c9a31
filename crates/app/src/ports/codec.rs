//! Codec port — conversion between document text and the domain model.

use greenhub_domain::error::ParseError;
use greenhub_domain::greenhouse::Greenhouse;

/// Converts a textual document to and from a [`Greenhouse`].
///
/// Implementations are pure: no IO, no shared mutable state.
pub trait DocumentCodec {
    /// Parse `text` into a fresh document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when `text` is not a structurally valid
    /// document. No partial document is returned.
    fn decode(&self, text: &str) -> Result<Greenhouse, ParseError>;

    /// Serialize `greenhouse` into canonical text. Never fails, even for a
    /// document that would not pass validation.
    fn encode(&self, greenhouse: &Greenhouse) -> String;
}

impl<C: DocumentCodec + ?Sized> DocumentCodec for &C {
    fn decode(&self, text: &str) -> Result<Greenhouse, ParseError> {
        (**self).decode(text)
    }

    fn encode(&self, greenhouse: &Greenhouse) -> String {
        (**self).encode(greenhouse)
    }
}
