//! Validation — the ordered business rule set for a greenhouse document.
//!
//! Rules run in a fixed order and every finding is kept, so the same
//! document always yields the same list:
//!
//! 1. greenhouse `name`, then `location`
//! 2. per sensor, in list order: `id` present, `id` unique, `type` present
//! 3. per reading, in list order: `timestamp`, `sensor_ref`, `value` present;
//!    `(sensor_ref, timestamp)` unique; value within the range table
//!
//! A reading whose `sensor_ref` does not resolve is not an error; its range
//! check is simply skipped.

use std::collections::HashSet;

use crate::finding::{Finding, FindingKind, Locator};
use crate::greenhouse::Greenhouse;
use crate::range;
use crate::reading::Reading;
use crate::sensor::Sensor;

/// Run every rule over `greenhouse`. An empty result means the document is
/// accepted.
#[must_use]
pub fn validate(greenhouse: &Greenhouse) -> Vec<Finding> {
    let mut findings = Vec::new();
    check_greenhouse(greenhouse, &mut findings);
    check_sensors(&greenhouse.sensors, &mut findings);
    check_readings(greenhouse, &mut findings);
    findings
}

fn check_greenhouse(greenhouse: &Greenhouse, findings: &mut Vec<Finding>) {
    if greenhouse.name.is_empty() {
        findings.push(Finding::new(
            FindingKind::MissingField,
            "greenhouse name is required",
            Locator::greenhouse_field("nome"),
        ));
    }
    if greenhouse.location.is_empty() {
        findings.push(Finding::new(
            FindingKind::MissingField,
            "greenhouse location is required",
            Locator::greenhouse_field("localizacao"),
        ));
    }
}

fn check_sensors(sensors: &[Sensor], findings: &mut Vec<Finding>) {
    // Absent and empty ids are distinct keys, and both count as seen.
    let mut seen: HashSet<Option<&str>> = HashSet::new();

    for (index, sensor) in sensors.iter().enumerate() {
        let id = sensor.id_str();
        if id.is_empty() {
            findings.push(Finding::new(
                FindingKind::MissingField,
                format!("sensor id is missing at position {}", index + 1),
                Locator::sensor_at(index),
            ));
        }
        if !seen.insert(sensor.id.as_deref()) {
            let locator = if id.is_empty() {
                Locator::sensor_at(index)
            } else {
                Locator::sensor_id(id)
            };
            findings.push(Finding::new(
                FindingKind::DuplicateSensorId,
                format!("duplicate sensor id '{id}'"),
                locator,
            ));
        }

        if sensor.kind.is_empty() {
            let base = if id.is_empty() {
                Locator::sensor_at(index)
            } else {
                Locator::sensor_id(id)
            };
            findings.push(Finding::new(
                FindingKind::MissingField,
                format!("sensor type is missing for sensor at position {}", index + 1),
                base.child("tipo"),
            ));
        }
    }
}

fn check_readings(greenhouse: &Greenhouse, findings: &mut Vec<Finding>) {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for (index, reading) in greenhouse.readings.iter().enumerate() {
        check_required_reading_fields(index, reading, findings);

        if !seen.insert((reading.sensor_ref.as_str(), reading.timestamp.as_str())) {
            findings.push(Finding::new(
                FindingKind::DuplicateReading,
                format!(
                    "duplicate reading for sensor '{}' at '{}'",
                    reading.sensor_ref, reading.timestamp
                ),
                Locator::reading_at(index),
            ));
        }

        if let Some(finding) = check_range(greenhouse, index, reading) {
            findings.push(finding);
        }
    }
}

fn check_required_reading_fields(index: usize, reading: &Reading, findings: &mut Vec<Finding>) {
    let fields = [
        (&reading.timestamp, "dataHora", "reading timestamp is missing"),
        (&reading.sensor_ref, "sensorRef", "reading sensor reference is missing"),
        (&reading.value, "valor", "reading value is missing"),
    ];
    for (value, field, message) in fields {
        if value.is_empty() {
            findings.push(Finding::new(
                FindingKind::MissingField,
                message,
                Locator::reading_field(index, field),
            ));
        }
    }
}

fn check_range(greenhouse: &Greenhouse, index: usize, reading: &Reading) -> Option<Finding> {
    let kind = greenhouse.sensor_type_of(reading)?;
    let bounds = range::range_for(kind)?;
    let value = reading.numeric_value()?;
    if bounds.contains(value) {
        return None;
    }
    Some(Finding::new(
        FindingKind::OutOfRange,
        format!("value {value} is outside {bounds} for type '{kind}'"),
        Locator::reading_field(index, "valor"),
    ))
}
