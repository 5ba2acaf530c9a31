//! Document service — use-cases for importing, checking and exporting a
//! greenhouse document.

use greenhub_domain::error::GreenhubError;
use greenhub_domain::finding::Finding;
use greenhub_domain::greenhouse::Greenhouse;
use greenhub_domain::validation;

use crate::ports::DocumentCodec;

use super::ensure_valid;

/// Application service for the import → edit → validate → export cycle.
///
/// The service holds no document: callers own the [`Greenhouse`] and pass it
/// to each call.
pub struct DocumentService<C> {
    codec: C,
}

impl<C: DocumentCodec> DocumentService<C> {
    /// Create a new service backed by the given codec.
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// Decode a document from text.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhubError::Parse`] when the text is malformed or lacks
    /// the greenhouse root element.
    #[tracing::instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn import(&self, text: &str) -> Result<Greenhouse, GreenhubError> {
        let greenhouse = self.codec.decode(text).inspect_err(|err| {
            tracing::warn!(error = %err, "failed to decode document");
        })?;
        tracing::debug!(
            sensors = greenhouse.sensors.len(),
            readings = greenhouse.readings.len(),
            "document imported"
        );
        Ok(greenhouse)
    }

    /// Run the validation rules. Never fails; an empty list means accepted.
    #[tracing::instrument(skip(self, greenhouse))]
    pub fn check(&self, greenhouse: &Greenhouse) -> Vec<Finding> {
        let findings = validation::validate(greenhouse);
        tracing::debug!(findings = findings.len(), "document checked");
        findings
    }

    /// Validate, then encode.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhubError::Rejected`] carrying every finding when the
    /// document is not valid.
    #[tracing::instrument(skip(self, greenhouse))]
    pub fn export(&self, greenhouse: &Greenhouse) -> Result<String, GreenhubError> {
        ensure_valid(greenhouse)?;
        Ok(self.codec.encode(greenhouse))
    }

    /// Encode without validating.
    pub fn render(&self, greenhouse: &Greenhouse) -> String {
        self.codec.encode(greenhouse)
    }
}
