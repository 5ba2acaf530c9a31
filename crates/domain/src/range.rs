//! Range table — inclusive numeric bounds per sensor type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bound for a reading value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the bound, both ends included.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for SensorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.min, self.max)
    }
}

/// Sensor types that have an entry in the range table.
///
/// [`Sensor::kind`](crate::sensor::Sensor::kind) stays free-form text; this
/// enum only names the categories that get range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownSensorType {
    #[serde(rename = "temperatura")]
    Temperature,
    #[serde(rename = "umidadeAr")]
    AirHumidity,
    #[serde(rename = "umidadeSolo")]
    SoilHumidity,
    #[serde(rename = "co2")]
    Co2,
    #[serde(rename = "luminosidade")]
    Luminosity,
}

impl KnownSensorType {
    pub const ALL: [Self; 5] = [
        Self::Temperature,
        Self::AirHumidity,
        Self::SoilHumidity,
        Self::Co2,
        Self::Luminosity,
    ];

    /// Tag used in documents, e.g. `temperatura`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Temperature => "temperatura",
            Self::AirHumidity => "umidadeAr",
            Self::SoilHumidity => "umidadeSolo",
            Self::Co2 => "co2",
            Self::Luminosity => "luminosidade",
        }
    }

    #[must_use]
    pub fn range(self) -> SensorRange {
        match self {
            // °C
            Self::Temperature => SensorRange::new(-10.0, 60.0),
            // %
            Self::AirHumidity | Self::SoilHumidity => SensorRange::new(0.0, 100.0),
            // ppm
            Self::Co2 => SensorRange::new(0.0, 10_000.0),
            // lux
            Self::Luminosity => SensorRange::new(0.0, 200_000.0),
        }
    }
}

impl fmt::Display for KnownSensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The type tag has no range-table entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sensor type '{0}'")]
pub struct UnknownSensorType(pub String);

impl FromStr for KnownSensorType {
    type Err = UnknownSensorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownSensorType(s.to_string()))
    }
}

/// Look up the bound for a free-form sensor type. Matching is exact.
#[must_use]
pub fn range_for(kind: &str) -> Option<SensorRange> {
    kind.parse::<KnownSensorType>().ok().map(KnownSensorType::range)
}
