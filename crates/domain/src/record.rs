//! Reading records — flattened, classified readings as exchanged with a
//! query backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::finding::Locator;
use crate::greenhouse::Greenhouse;
use crate::range;
use crate::reading::Reading;

/// Range classification of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    /// Numeric value within the bounds of a known sensor type.
    Ok,
    /// Numeric value outside the bounds of a known sensor type.
    OutOfRange,
    /// The range could not be determined: unresolved sensor, type not in
    /// the range table, or non-numeric value.
    UnknownRange,
}

impl ReadingStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::OutOfRange => "out_of_range",
            Self::UnknownRange => "unknown_range",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text is not a known reading status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reading status '{0}' (expected ok, out_of_range or unknown_range)")]
pub struct UnknownReadingStatus(pub String);

impl FromStr for ReadingStatus {
    type Err = UnknownReadingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Ok),
            "out_of_range" => Ok(Self::OutOfRange),
            "unknown_range" => Ok(Self::UnknownRange),
            other => Err(UnknownReadingStatus(other.to_string())),
        }
    }
}

/// One reading together with the greenhouse and sensor context needed to
/// filter it without the original document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRecord {
    pub greenhouse: String,
    pub location: String,
    pub sensor_ref: String,
    /// `None` when `sensor_ref` does not resolve.
    pub sensor_type: Option<String>,
    pub timestamp: String,
    pub value: String,
    pub status: ReadingStatus,
    pub locator: Locator,
}

/// Classify one reading against the sensors of `greenhouse`.
#[must_use]
pub fn status_of(greenhouse: &Greenhouse, reading: &Reading) -> ReadingStatus {
    let bounds = greenhouse.sensor_type_of(reading).and_then(range::range_for);
    match (bounds, reading.numeric_value()) {
        (Some(bounds), Some(value)) if bounds.contains(value) => ReadingStatus::Ok,
        (Some(_), Some(_)) => ReadingStatus::OutOfRange,
        _ => ReadingStatus::UnknownRange,
    }
}

/// Flatten every reading of `greenhouse` into a [`ReadingRecord`], in
/// document order.
#[must_use]
pub fn classify(greenhouse: &Greenhouse) -> Vec<ReadingRecord> {
    greenhouse
        .readings
        .iter()
        .enumerate()
        .map(|(index, reading)| ReadingRecord {
            greenhouse: greenhouse.name.clone(),
            location: greenhouse.location.clone(),
            sensor_ref: reading.sensor_ref.clone(),
            sensor_type: greenhouse.sensor_type_of(reading).map(str::to_string),
            timestamp: reading.timestamp.clone(),
            value: reading.value.clone(),
            status: status_of(greenhouse, reading),
            locator: Locator::reading_at(index),
        })
        .collect()
}
