//! Element and attribute names of the greenhouse document grammar.
//!
//! ```text
//! estufa
//!   nome: text
//!   localizacao: text
//!   sensores
//!     sensor[id: attr] -> tipo: text, unidade: text   (0..n)
//!   leituras
//!     leitura -> dataHora: text, sensorRef[ref: attr], valor: text   (0..n)
//! ```

pub const ROOT: &str = "estufa";
pub const NAME: &str = "nome";
pub const LOCATION: &str = "localizacao";

pub const SENSORS: &str = "sensores";
pub const SENSOR: &str = "sensor";
pub const SENSOR_ID: &str = "id";
pub const SENSOR_TYPE: &str = "tipo";
pub const SENSOR_UNIT: &str = "unidade";

pub const READINGS: &str = "leituras";
pub const READING: &str = "leitura";
pub const READING_TIMESTAMP: &str = "dataHora";
pub const READING_SENSOR_REF: &str = "sensorRef";
pub const READING_SENSOR_REF_ATTR: &str = "ref";
pub const READING_VALUE: &str = "valor";
