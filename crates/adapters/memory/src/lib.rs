//! # greenhub-adapter-memory
//!
//! In-process implementation of the [`ReadingBackend`] port.
//!
//! ## Behaviour
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `upload` | decode, re-validate, classify readings, store under a new [`DocumentId`]; out-of-range values alone do not refuse a document |
//! | `query` | filter records of every stored document (upload order), then paginate |
//! | `document` | return the stored text of one upload |
//!
//! Nothing is persisted; contents live as long as the value.
//!
//! ## Dependency rule
//!
//! Depends on `greenhub-app` (port traits) and `greenhub-domain` only.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use greenhub_app::ports::{DocumentCodec, ReadingBackend};
use greenhub_domain::error::{GreenhubError, NotFoundError, RejectedError};
use greenhub_domain::finding::FindingKind;
use greenhub_domain::id::DocumentId;
use greenhub_domain::query::{ReadingPage, ReadingQuery};
use greenhub_domain::record::{self, ReadingRecord};
use greenhub_domain::{time, validation};

/// One accepted upload.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: DocumentId,
    /// The text exactly as uploaded.
    pub text: String,
    pub records: Vec<ReadingRecord>,
}

/// Backend that keeps accepted documents in memory.
pub struct InMemoryBackend<C> {
    codec: C,
    documents: Mutex<Vec<StoredDocument>>,
}

impl<C: DocumentCodec> InMemoryBackend<C> {
    /// Create an empty backend that decodes uploads with `codec`.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            documents: Mutex::new(Vec::new()),
        }
    }

    /// Text of a previously accepted upload.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhubError::NotFound`] when no upload has that id.
    pub fn document(&self, id: &DocumentId) -> Result<String, GreenhubError> {
        self.lock()
            .iter()
            .find(|doc| &doc.id == id)
            .map(|doc| doc.text.clone())
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Document",
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Number of accepted uploads.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn accept(&self, text: String) -> Result<DocumentId, GreenhubError> {
        let greenhouse = self.codec.decode(&text)?;
        let findings = validation::validate(&greenhouse);
        if findings.iter().any(|finding| blocks_upload(finding.kind)) {
            tracing::warn!(findings = findings.len(), "upload rejected");
            return Err(RejectedError { findings }.into());
        }

        let id = DocumentId::generate(time::now());
        let records = record::classify(&greenhouse);
        tracing::info!(
            document_id = %id,
            readings = records.len(),
            out_of_range = findings.len(),
            "upload stored"
        );
        self.lock().push(StoredDocument {
            id: id.clone(),
            text,
            records,
        });
        Ok(id)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StoredDocument>> {
        // Documents are only ever appended whole, so a poisoned lock still
        // guards a consistent list.
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Structural findings refuse an upload. Out-of-range values are stored and
/// surface as [`ReadingStatus::OutOfRange`](greenhub_domain::record::ReadingStatus) records.
fn blocks_upload(kind: FindingKind) -> bool {
    !matches!(kind, FindingKind::OutOfRange)
}

impl<C: DocumentCodec> ReadingBackend for InMemoryBackend<C> {
    fn upload(
        &self,
        document: String,
    ) -> impl Future<Output = Result<DocumentId, GreenhubError>> + Send {
        let result = self.accept(document);
        async move { result }
    }

    fn query(
        &self,
        query: ReadingQuery,
    ) -> impl Future<Output = Result<ReadingPage, GreenhubError>> + Send {
        let page = {
            let documents = self.lock();
            query.paginate(documents.iter().flat_map(|doc| doc.records.iter().cloned()))
        };
        tracing::debug!(total = page.total, "query answered");
        async move { Ok(page) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenhub_adapter_xml::XmlCodec;
    use greenhub_domain::error::ParseError;
    use greenhub_domain::record::ReadingStatus;

    fn document(name: &str, readings: &[(&str, &str, &str)]) -> String {
        let mut xml = format!(
            "<estufa><nome>{name}</nome><localizacao>Campinas</localizacao>\
             <sensores>\
               <sensor id=\"T1\"><tipo>temperatura</tipo><unidade>C</unidade></sensor>\
               <sensor id=\"P1\"><tipo>pressao</tipo><unidade>hPa</unidade></sensor>\
             </sensores><leituras>"
        );
        for (at, sensor, value) in readings {
            xml.push_str(&format!(
                "<leitura><dataHora>{at}</dataHora><sensorRef ref=\"{sensor}\"/><valor>{value}</valor></leitura>"
            ));
        }
        xml.push_str("</leituras></estufa>");
        xml
    }

    fn make_backend() -> InMemoryBackend<XmlCodec> {
        InMemoryBackend::new(XmlCodec)
    }

    #[tokio::test]
    async fn should_store_valid_upload_and_return_its_text() {
        let backend = make_backend();
        let xml = document("A", &[("2024-01-01T00:00:00Z", "T1", "20")]);

        let id = backend.upload(xml.clone()).await.unwrap();
        assert_eq!(backend.len(), 1);
        assert_eq!(backend.document(&id).unwrap(), xml);
    }

    #[tokio::test]
    async fn should_reject_upload_with_findings() {
        let backend = make_backend();
        let xml = document(
            "A",
            &[
                ("2024-01-01T00:00:00Z", "T1", "20"),
                ("2024-01-01T00:00:00Z", "T1", "21"),
            ],
        );

        let err = backend.upload(xml).await.unwrap_err();
        assert_eq!(err.findings()[0].kind, FindingKind::DuplicateReading);
        assert!(backend.is_empty());
    }

    #[tokio::test]
    async fn should_store_out_of_range_readings_as_records() {
        let backend = make_backend();
        let id = backend
            .upload(document("A", &[("2024-01-01T00:00:00Z", "T1", "70")]))
            .await
            .unwrap();
        assert!(backend.document(&id).is_ok());

        let page = backend.query(ReadingQuery::default()).await.unwrap();
        assert_eq!(page.items[0].status, ReadingStatus::OutOfRange);
        assert_eq!(page.items[0].value, "70");
    }

    #[tokio::test]
    async fn should_reject_out_of_range_upload_with_structural_findings() {
        let backend = make_backend();
        let err = backend
            .upload(document("", &[("2024-01-01T00:00:00Z", "T1", "70")]))
            .await
            .unwrap_err();

        let kinds: Vec<FindingKind> = err.findings().iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![FindingKind::MissingField, FindingKind::OutOfRange]);
        assert!(backend.is_empty());
    }

    #[tokio::test]
    async fn should_reject_malformed_upload() {
        let backend = make_backend();
        let err = backend.upload("<estufa>".to_string()).await.unwrap_err();
        assert!(matches!(
            err,
            GreenhubError::Parse(ParseError::MalformedXml(_))
        ));
    }

    #[test]
    fn should_return_not_found_for_unknown_document() {
        let backend = make_backend();
        let id: DocumentId = "leitura_missing".parse().unwrap();
        assert!(matches!(
            backend.document(&id),
            Err(GreenhubError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_query_records_across_uploads_in_order() {
        let backend = make_backend();
        backend
            .upload(document(
                "A",
                &[
                    ("2024-01-01T00:00:00Z", "T1", "20"),
                    ("2024-01-01T01:00:00Z", "P1", "1013"),
                ],
            ))
            .await
            .unwrap();
        backend
            .upload(document("B", &[("2024-01-02T00:00:00Z", "T1", "70")]))
            .await
            .unwrap();

        let all = backend.query(ReadingQuery::default()).await.unwrap();
        let names: Vec<&str> = all.items.iter().map(|r| r.greenhouse.as_str()).collect();
        assert_eq!(names, vec!["A", "A", "B"]);

        let hot = backend
            .query(ReadingQuery::default().with_status(ReadingStatus::OutOfRange))
            .await
            .unwrap();
        assert_eq!(hot.total, 1);
        assert_eq!(hot.items[0].greenhouse, "B");

        let unknown = backend
            .query(ReadingQuery::default().with_status(ReadingStatus::UnknownRange))
            .await
            .unwrap();
        assert_eq!(unknown.items[0].sensor_type.as_deref(), Some("pressao"));
    }

    #[tokio::test]
    async fn should_paginate_query_results() {
        let backend = make_backend();
        backend
            .upload(document(
                "A",
                &[
                    ("2024-01-01T00:00:00Z", "T1", "20"),
                    ("2024-01-01T01:00:00Z", "T1", "21"),
                    ("2024-01-01T02:00:00Z", "T1", "22"),
                ],
            ))
            .await
            .unwrap();

        let page = backend
            .query(ReadingQuery::default().with_page(2, 2))
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].value, "22");
    }
}
