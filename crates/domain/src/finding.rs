//! Finding — one structured validation result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root of every locator path.
const ROOT: &str = "/estufa";

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingKind {
    /// A required field is empty or absent.
    MissingField,
    /// A sensor id was already declared earlier in the document.
    DuplicateSensorId,
    /// A reading with the same `(sensor_ref, timestamp)` appeared earlier.
    DuplicateReading,
    /// A numeric reading falls outside its sensor type's bounds.
    OutOfRange,
}

impl FindingKind {
    /// Stable machine-readable code, e.g. `MISSING_FIELD`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingField => "MISSING_FIELD",
            Self::DuplicateSensorId => "DUPLICATE_SENSOR_ID",
            Self::DuplicateReading => "DUPLICATE_READING",
            Self::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Human-readable, path-like reference to the offending element.
///
/// Positions are 1-based, like `XPath`, but the locator is not guaranteed
/// to be an evaluable query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// `/estufa/<field>`
    #[must_use]
    pub fn greenhouse_field(field: &str) -> Self {
        Self(format!("{ROOT}/{field}"))
    }

    /// `/estufa/sensores/sensor[<index + 1>]`
    #[must_use]
    pub fn sensor_at(index: usize) -> Self {
        Self(format!("{ROOT}/sensores/sensor[{}]", index + 1))
    }

    /// `/estufa/sensores/sensor[@id='<id>']`
    #[must_use]
    pub fn sensor_id(id: &str) -> Self {
        Self(format!("{ROOT}/sensores/sensor[@id='{id}']"))
    }

    /// `/estufa/leituras/leitura[<index + 1>]`
    #[must_use]
    pub fn reading_at(index: usize) -> Self {
        Self(format!("{ROOT}/leituras/leitura[{}]", index + 1))
    }

    /// `/estufa/leituras/leitura[<index + 1>]/<field>`
    #[must_use]
    pub fn reading_field(index: usize, field: &str) -> Self {
        Self::reading_at(index).child(field)
    }

    /// Append a child step to this locator.
    #[must_use]
    pub fn child(&self, step: &str) -> Self {
        Self(format!("{}/{step}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single non-fatal validation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
    pub locator: Locator,
}

impl Finding {
    #[must_use]
    pub fn new(kind: FindingKind, message: impl Into<String>, locator: Locator) -> Self {
        Self {
            kind,
            message: message.into(),
            locator,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.kind, self.message, self.locator)
    }
}
