//! Reading — one observation made by a sensor.

use serde::{Deserialize, Serialize};

/// A single observation.
///
/// All fields are kept as text so that the original formatting survives an
/// import/export cycle. `sensor_ref` is meant to match a
/// [`Sensor::id`](crate::sensor::Sensor::id) but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// ISO-8601 text, never parsed by validation.
    pub timestamp: String,
    pub sensor_ref: String,
    /// Numeric text such as `"23.5"`.
    pub value: String,
}

impl Reading {
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        sensor_ref: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sensor_ref: sensor_ref.into(),
            value: value.into(),
        }
    }

    /// The value as a finite number, if it parses as one.
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}
