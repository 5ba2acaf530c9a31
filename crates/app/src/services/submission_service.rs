//! Submission service — send accepted documents to a backend and query the
//! readings it holds.

use greenhub_domain::error::GreenhubError;
use greenhub_domain::greenhouse::Greenhouse;
use greenhub_domain::id::DocumentId;
use greenhub_domain::query::{ReadingPage, ReadingQuery};

use crate::ports::{DocumentCodec, ReadingBackend};

use super::ensure_valid;

/// Application service for uploading documents and querying readings.
pub struct SubmissionService<C, B> {
    codec: C,
    backend: B,
}

impl<C: DocumentCodec, B: ReadingBackend> SubmissionService<C, B> {
    /// Create a new service that encodes with `codec` and uploads to `backend`.
    pub fn new(codec: C, backend: B) -> Self {
        Self { codec, backend }
    }

    /// Validate, encode and upload a document.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhubError::Rejected`] without contacting the backend when
    /// the document has findings, or a backend error from the upload.
    #[tracing::instrument(skip(self, greenhouse), fields(greenhouse = %greenhouse.name))]
    pub async fn submit(&self, greenhouse: &Greenhouse) -> Result<DocumentId, GreenhubError> {
        ensure_valid(greenhouse)?;
        let document = self.codec.encode(greenhouse);
        let id = self.backend.upload(document).await?;
        tracing::info!(document_id = %id, "document submitted");
        Ok(id)
    }

    /// Upload a document exactly as given, leaving acceptance to the backend.
    ///
    /// # Errors
    ///
    /// Returns whatever the backend reports, typically
    /// [`GreenhubError::Parse`] or [`GreenhubError::Rejected`].
    #[tracing::instrument(skip(self, document), fields(bytes = document.len()))]
    pub async fn ingest(&self, document: String) -> Result<DocumentId, GreenhubError> {
        let id = self.backend.upload(document).await?;
        tracing::info!(document_id = %id, "document ingested");
        Ok(id)
    }

    /// Query reading records from the backend.
    ///
    /// # Errors
    ///
    /// Returns a backend error propagated from the port.
    #[tracing::instrument(skip(self))]
    pub async fn query(&self, query: ReadingQuery) -> Result<ReadingPage, GreenhubError> {
        let page = self.backend.query(query).await?;
        tracing::debug!(total = page.total, items = page.items.len(), "query answered");
        Ok(page)
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{JsonCodec, RecordingBackend};
    use greenhub_domain::finding::FindingKind;
    use greenhub_domain::reading::Reading;
    use greenhub_domain::record::ReadingStatus;
    use greenhub_domain::sensor::Sensor;

    fn make_service() -> SubmissionService<JsonCodec, RecordingBackend> {
        SubmissionService::new(JsonCodec, RecordingBackend::default())
    }

    fn valid() -> Greenhouse {
        Greenhouse::builder()
            .name("Estufa Oeste")
            .location("Jundiaí")
            .sensor(Sensor::new("T1", "temperatura", "C"))
            .reading(Reading::new("2024-01-01T00:00:00Z", "T1", "22"))
            .reading(Reading::new("2024-01-01T01:00:00Z", "T1", "23"))
            .build()
    }

    #[tokio::test]
    async fn should_upload_encoded_document_when_valid() {
        let svc = make_service();
        let id = svc.submit(&valid()).await.unwrap();
        assert!(id.as_str().starts_with("leitura_"));

        let uploads = svc.backend().uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0], JsonCodec.encode(&valid()));
    }

    #[tokio::test]
    async fn should_not_upload_when_document_has_findings() {
        let svc = make_service();
        let mut g = valid();
        g.readings[1].value = "99".to_string();

        let err = svc.submit(&g).await.unwrap_err();
        assert!(matches!(err, GreenhubError::Rejected(_)));
        assert_eq!(err.findings()[0].kind, FindingKind::OutOfRange);
        assert!(svc.backend().uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_ingest_text_without_local_validation() {
        let svc = make_service();
        let mut g = valid();
        g.readings[1].value = "99".to_string();
        let text = JsonCodec.encode(&g);

        svc.ingest(text.clone()).await.unwrap();
        assert_eq!(*svc.backend().uploads.lock().unwrap(), vec![text]);

        let page = svc
            .query(ReadingQuery::default().with_status(ReadingStatus::OutOfRange))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].value, "99");
    }

    #[tokio::test]
    async fn should_query_records_of_submitted_documents() {
        let svc = make_service();
        svc.submit(&valid()).await.unwrap();

        let page = svc
            .query(ReadingQuery::default().with_status(ReadingStatus::Ok))
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].greenhouse, "Estufa Oeste");
    }
}
