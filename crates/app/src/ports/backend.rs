//! Backend port — where accepted documents are sent and reading records
//! are queried from.
//!
//! The remote system behind this port stores uploaded documents and answers
//! aggregated queries filterable by sensor type, time range and status.

use std::future::Future;

use greenhub_domain::error::GreenhubError;
use greenhub_domain::id::DocumentId;
use greenhub_domain::query::{ReadingPage, ReadingQuery};

/// Upload/query boundary consumed by
/// [`SubmissionService`](crate::services::submission_service::SubmissionService).
pub trait ReadingBackend {
    /// Submit an encoded document, returning the id it was stored under.
    fn upload(&self, document: String)
    -> impl Future<Output = Result<DocumentId, GreenhubError>> + Send;

    /// Fetch one page of reading records matching `query`.
    fn query(
        &self,
        query: ReadingQuery,
    ) -> impl Future<Output = Result<ReadingPage, GreenhubError>> + Send;
}
