//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GreenhubError`] via `#[from]`. Validation findings are *not* errors:
//! they are accumulated by [`crate::validation::validate`] and only become a
//! [`RejectedError`] when a caller refuses to export or submit a document.

use crate::finding::Finding;

/// Workspace-wide error.
#[derive(Debug, thiserror::Error)]
pub enum GreenhubError {
    /// The input text could not be decoded into a greenhouse document.
    #[error("parse error")]
    Parse(#[from] ParseError),

    /// The document decoded fine but failed validation.
    #[error("document rejected")]
    Rejected(#[from] RejectedError),

    /// A requested item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A backend (upload/query) operation failed.
    #[error("backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Fatal decode-time failures. No partial document is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text is not well-formed XML.
    #[error("malformed XML")]
    MalformedXml(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The document is well-formed but has no greenhouse root element.
    #[error("missing <estufa> root element (found <{found}>)")]
    MissingRoot {
        /// Name of the root element that was found instead.
        found: String,
    },
}

/// A document that cannot be exported or submitted because of findings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("document rejected with {} finding(s)", .findings.len())]
pub struct RejectedError {
    pub findings: Vec<Finding>,
}

/// Lookup failure for a sensor, reading, or stored document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl GreenhubError {
    /// Findings carried by a [`GreenhubError::Rejected`], empty otherwise.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        match self {
            Self::Rejected(err) => &err.findings,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{FindingKind, Locator};

    #[test]
    fn should_display_missing_root_with_found_tag() {
        let err = ParseError::MissingRoot {
            found: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "missing <estufa> root element (found <foo>)");
    }

    #[test]
    fn should_display_rejected_with_finding_count() {
        let err = RejectedError {
            findings: vec![Finding::new(
                FindingKind::MissingField,
                "name is required",
                Locator::greenhouse_field("nome"),
            )],
        };
        assert_eq!(err.to_string(), "document rejected with 1 finding(s)");
    }

    #[test]
    fn should_display_not_found() {
        let err = NotFoundError {
            entity: "Sensor",
            id: "S9".to_string(),
        };
        assert_eq!(err.to_string(), "Sensor not found: S9");
    }

    #[test]
    fn should_convert_parse_error_into_greenhub_error() {
        let err: GreenhubError = ParseError::MissingRoot {
            found: "foo".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            GreenhubError::Parse(ParseError::MissingRoot { .. })
        ));
        assert!(err.findings().is_empty());
    }

    #[test]
    fn should_expose_findings_of_rejected_error() {
        let finding = Finding::new(
            FindingKind::OutOfRange,
            "too hot",
            Locator::reading_field(0, "valor"),
        );
        let err: GreenhubError = RejectedError {
            findings: vec![finding.clone()],
        }
        .into();
        assert_eq!(err.findings(), &[finding]);
    }
}
