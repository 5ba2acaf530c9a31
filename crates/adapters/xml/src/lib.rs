//! # greenhub-adapter-xml
//!
//! XML codec for greenhouse documents.
//!
//! ## Responsibilities
//! - Implement the [`DocumentCodec`] port defined in `greenhub-app::ports::codec`
//! - Decode with [roxmltree](https://docs.rs/roxmltree): strict on
//!   well-formedness and the `estufa` root, lenient on optional elements
//! - Encode to canonical, escaped XML with a fixed element order
//!
//! ## Dependency rule
//! Depends on `greenhub-app` (for port traits) and `greenhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod decode;
pub mod encode;
pub mod tags;

use greenhub_app::ports::DocumentCodec;
use greenhub_domain::error::ParseError;
use greenhub_domain::greenhouse::Greenhouse;

pub use decode::decode;
pub use encode::encode;

/// [`DocumentCodec`] backed by the XML decoder and encoder of this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlCodec;

impl DocumentCodec for XmlCodec {
    fn decode(&self, text: &str) -> Result<Greenhouse, ParseError> {
        decode::decode(text)
    }

    fn encode(&self, greenhouse: &Greenhouse) -> String {
        let xml = encode::encode(greenhouse);
        tracing::trace!(bytes = xml.len(), "document encoded");
        xml
    }
}
