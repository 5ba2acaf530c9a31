//! Greenhouse — the root of a document: identity, sensors, and readings.

use serde::{Deserialize, Serialize};

use crate::error::NotFoundError;
use crate::reading::Reading;
use crate::sensor::Sensor;
use crate::time::{self, Timestamp};

/// Type given to sensors created through [`Greenhouse::add_sensor`].
pub const DEFAULT_SENSOR_TYPE: &str = "temperatura";
/// Unit given to sensors created through [`Greenhouse::add_sensor`].
pub const DEFAULT_SENSOR_UNIT: &str = "C";
/// Value given to readings created through [`Greenhouse::add_reading`].
pub const DEFAULT_READING_VALUE: &str = "0";

/// One greenhouse document.
///
/// The value is owned by the caller and passed explicitly to the decoder,
/// validator and encoder. `Default` is the empty document that editing
/// starts from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Greenhouse {
    pub name: String,
    pub location: String,
    /// Declaration order is kept for display and export.
    pub sensors: Vec<Sensor>,
    pub readings: Vec<Reading>,
}

impl Greenhouse {
    /// Create a builder for constructing a [`Greenhouse`].
    #[must_use]
    pub fn builder() -> GreenhouseBuilder {
        GreenhouseBuilder::default()
    }

    /// First sensor whose id equals `id`.
    #[must_use]
    pub fn sensor(&self, id: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.id.as_deref() == Some(id))
    }

    /// Type of the sensor a reading points at, if the reference resolves.
    #[must_use]
    pub fn sensor_type_of(&self, reading: &Reading) -> Option<&str> {
        if reading.sensor_ref.is_empty() {
            return None;
        }
        self.sensor(&reading.sensor_ref).map(|s| s.kind.as_str())
    }

    /// Append a sensor with a generated id (`S<n>`) and default type/unit.
    pub fn add_sensor(&mut self) -> &mut Sensor {
        let id = format!("S{}", self.sensors.len() + 1);
        self.sensors
            .push(Sensor::new(id, DEFAULT_SENSOR_TYPE, DEFAULT_SENSOR_UNIT));
        let last = self.sensors.len() - 1;
        &mut self.sensors[last]
    }

    /// Append a reading stamped `at`, pointing at the first declared sensor.
    pub fn add_reading(&mut self, at: Timestamp) -> &mut Reading {
        let sensor_ref = self
            .sensors
            .first()
            .map(|s| s.id_str().to_string())
            .unwrap_or_default();
        self.readings
            .push(Reading::new(time::format(at), sensor_ref, DEFAULT_READING_VALUE));
        let last = self.readings.len() - 1;
        &mut self.readings[last]
    }

    /// Remove and return the sensor at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when `index` is out of bounds.
    pub fn remove_sensor(&mut self, index: usize) -> Result<Sensor, NotFoundError> {
        if index >= self.sensors.len() {
            return Err(NotFoundError {
                entity: "Sensor",
                id: format!("#{}", index + 1),
            });
        }
        Ok(self.sensors.remove(index))
    }

    /// Remove and return the reading at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when `index` is out of bounds.
    pub fn remove_reading(&mut self, index: usize) -> Result<Reading, NotFoundError> {
        if index >= self.readings.len() {
            return Err(NotFoundError {
                entity: "Reading",
                id: format!("#{}", index + 1),
            });
        }
        Ok(self.readings.remove(index))
    }
}

/// Step-by-step builder for [`Greenhouse`].
///
/// Building never fails: business rules are checked by
/// [`crate::validation::validate`], not at construction time.
#[derive(Debug, Default)]
pub struct GreenhouseBuilder {
    name: Option<String>,
    location: Option<String>,
    sensors: Vec<Sensor>,
    readings: Vec<Reading>,
}

impl GreenhouseBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn sensor(mut self, sensor: Sensor) -> Self {
        self.sensors.push(sensor);
        self
    }

    #[must_use]
    pub fn reading(mut self, reading: Reading) -> Self {
        self.readings.push(reading);
        self
    }

    #[must_use]
    pub fn build(self) -> Greenhouse {
        Greenhouse {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            sensors: self.sensors,
            readings: self.readings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Greenhouse {
        Greenhouse::builder()
            .name("Estufa Norte")
            .location("Campinas")
            .sensor(Sensor::new("T1", "temperatura", "C"))
            .sensor(Sensor::new("H1", "umidadeAr", "%"))
            .reading(Reading::new("2024-01-01T00:00:00Z", "T1", "21.5"))
            .build()
    }

    #[test]
    fn should_start_empty_by_default() {
        let g = Greenhouse::default();
        assert!(g.name.is_empty());
        assert!(g.location.is_empty());
        assert!(g.sensors.is_empty());
        assert!(g.readings.is_empty());
    }

    #[test]
    fn should_build_in_declaration_order() {
        let g = sample();
        assert_eq!(g.name, "Estufa Norte");
        assert_eq!(g.sensors[0].id.as_deref(), Some("T1"));
        assert_eq!(g.sensors[1].id.as_deref(), Some("H1"));
        assert_eq!(g.readings.len(), 1);
    }

    #[test]
    fn should_resolve_sensor_type_of_reading() {
        let g = sample();
        assert_eq!(g.sensor_type_of(&g.readings[0]), Some("temperatura"));
        let dangling = Reading::new("t", "X9", "1");
        assert_eq!(g.sensor_type_of(&dangling), None);
    }

    #[test]
    fn should_resolve_to_first_sensor_when_ids_repeat() {
        let g = Greenhouse::builder()
            .sensor(Sensor::new("S1", "co2", "ppm"))
            .sensor(Sensor::new("S1", "temperatura", "C"))
            .build();
        assert_eq!(g.sensor("S1").map(|s| s.kind.as_str()), Some("co2"));
    }

    #[test]
    fn should_add_sensor_with_generated_id_and_defaults() {
        let mut g = sample();
        let sensor = g.add_sensor().clone();
        assert_eq!(sensor, Sensor::new("S3", "temperatura", "C"));
        assert_eq!(g.sensors.len(), 3);
    }

    #[test]
    fn should_add_reading_pointing_at_first_sensor() {
        let mut g = sample();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let reading = g.add_reading(at).clone();
        assert_eq!(
            reading,
            Reading::new("2024-03-01T12:00:00.000Z", "T1", DEFAULT_READING_VALUE)
        );
    }

    #[test]
    fn should_add_reading_with_empty_ref_when_no_sensor_exists() {
        let mut g = Greenhouse::default();
        let reading = g.add_reading(Utc::now());
        assert!(reading.sensor_ref.is_empty());
    }

    #[test]
    fn should_remove_items_by_index() {
        let mut g = sample();
        let removed = g.remove_sensor(0).unwrap();
        assert_eq!(removed.id.as_deref(), Some("T1"));
        assert_eq!(g.sensors.len(), 1);

        let removed = g.remove_reading(0).unwrap();
        assert_eq!(removed.sensor_ref, "T1");
        assert!(g.readings.is_empty());
    }

    #[test]
    fn should_return_not_found_when_removing_out_of_bounds() {
        let mut g = sample();
        let err = g.remove_reading(5).unwrap_err();
        assert_eq!(err.entity, "Reading");
        assert_eq!(err.id, "#6");
        assert!(g.remove_sensor(2).is_err());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let g = sample();
        let json = serde_json::to_string(&g).unwrap();
        let parsed: Greenhouse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, g);
    }
}
