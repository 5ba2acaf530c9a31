//! Sensor — a typed measurement device declared by a greenhouse.

use serde::{Deserialize, Serialize};

/// A measurement device with an id, a free-form type and a unit.
///
/// `id` is `None` when the source document declared the sensor without an
/// `id` attribute, which is distinct from an explicitly empty id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sensor {
    pub id: Option<String>,
    /// Category such as `temperatura` or `co2`.
    #[serde(rename = "type")]
    pub kind: String,
    pub unit: String,
}

impl Sensor {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            kind: kind.into(),
            unit: unit.into(),
        }
    }

    /// A sensor whose `id` attribute is absent.
    #[must_use]
    pub fn without_id(kind: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            unit: unit.into(),
        }
    }

    /// The id, or `""` when absent.
    #[must_use]
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Whether the sensor carries a non-empty id.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id_str().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_distinguish_absent_and_empty_id() {
        let absent = Sensor::without_id("co2", "ppm");
        let empty = Sensor::new("", "co2", "ppm");
        assert_ne!(absent, empty);
        assert_eq!(absent.id_str(), "");
        assert!(!absent.has_id());
        assert!(!empty.has_id());
    }

    #[test]
    fn should_serialize_kind_as_type() {
        let sensor = Sensor::new("S1", "temperatura", "C");
        let json = serde_json::to_value(&sensor).unwrap();
        assert_eq!(json["type"], "temperatura");
        assert_eq!(json["id"], "S1");
    }
}
