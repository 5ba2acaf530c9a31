//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod document_service;
pub mod submission_service;

use greenhub_domain::error::RejectedError;
use greenhub_domain::greenhouse::Greenhouse;
use greenhub_domain::validation;

/// Acceptance policy shared by export and submission: no findings allowed.
fn ensure_valid(greenhouse: &Greenhouse) -> Result<(), RejectedError> {
    let findings = validation::validate(greenhouse);
    if findings.is_empty() {
        return Ok(());
    }
    tracing::warn!(findings = findings.len(), "document rejected");
    Err(RejectedError { findings })
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory fakes of the ports, shared by the service tests.

    use std::future::Future;
    use std::sync::Mutex;

    use greenhub_domain::error::{GreenhubError, ParseError};
    use greenhub_domain::greenhouse::Greenhouse;
    use greenhub_domain::id::DocumentId;
    use greenhub_domain::query::{ReadingPage, ReadingQuery};
    use greenhub_domain::record;

    use crate::ports::{DocumentCodec, ReadingBackend};

    /// Codec that speaks JSON, enough to exercise the services.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct JsonCodec;

    impl DocumentCodec for JsonCodec {
        fn decode(&self, text: &str) -> Result<Greenhouse, ParseError> {
            serde_json::from_str(text).map_err(|err| ParseError::MalformedXml(Box::new(err)))
        }

        fn encode(&self, greenhouse: &Greenhouse) -> String {
            serde_json::to_string(greenhouse).unwrap()
        }
    }

    /// Backend that keeps every uploaded document.
    #[derive(Default)]
    pub struct RecordingBackend {
        pub uploads: Mutex<Vec<String>>,
    }

    impl ReadingBackend for RecordingBackend {
        fn upload(
            &self,
            document: String,
        ) -> impl Future<Output = Result<DocumentId, GreenhubError>> + Send {
            self.uploads.lock().unwrap().push(document);
            async { Ok(DocumentId::generate(greenhub_domain::time::now())) }
        }

        fn query(
            &self,
            query: ReadingQuery,
        ) -> impl Future<Output = Result<ReadingPage, GreenhubError>> + Send {
            let records: Vec<_> = self
                .uploads
                .lock()
                .unwrap()
                .iter()
                .map(|doc| JsonCodec.decode(doc).unwrap())
                .flat_map(|g| record::classify(&g))
                .collect();
            async move { Ok(query.paginate(records)) }
        }
    }
}
