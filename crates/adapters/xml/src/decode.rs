//! XML → [`Greenhouse`] decoding.
//!
//! Strict about well-formedness and the `estufa` root; lenient about
//! everything else. Missing optional elements decode to `""` so that the
//! validator, not the decoder, reports them.

use greenhub_domain::error::ParseError;
use greenhub_domain::greenhouse::Greenhouse;
use greenhub_domain::reading::Reading;
use greenhub_domain::sensor::Sensor;
use roxmltree::{Document, Node, ParsingOptions};

use crate::tags;

/// Parse `text` into a fresh [`Greenhouse`].
///
/// The `estufa` element is looked up as the root element first, then as the
/// first matching descendant in document order. Children are matched by
/// name regardless of their order. A document type declaration is accepted
/// and otherwise ignored.
///
/// # Errors
///
/// - [`ParseError::MalformedXml`] when `text` is not well-formed XML
/// - [`ParseError::MissingRoot`] when no `estufa` element exists
pub fn decode(text: &str) -> Result<Greenhouse, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)
        .map_err(|err| ParseError::MalformedXml(Box::new(err)))?;
    let root = find_root(&doc).ok_or_else(|| ParseError::MissingRoot {
        found: doc.root_element().tag_name().name().to_string(),
    })?;

    Ok(Greenhouse {
        name: child_text(root, tags::NAME),
        location: child_text(root, tags::LOCATION),
        sensors: collection(root, tags::SENSORS, tags::SENSOR)
            .map(decode_sensor)
            .collect(),
        readings: collection(root, tags::READINGS, tags::READING)
            .map(decode_reading)
            .collect(),
    })
}

fn find_root<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    doc.descendants().find(|node| node.has_tag_name(tags::ROOT))
}

fn decode_sensor(node: Node<'_, '_>) -> Sensor {
    Sensor {
        id: node.attribute(tags::SENSOR_ID).map(str::to_string),
        kind: child_text(node, tags::SENSOR_TYPE),
        unit: child_text(node, tags::SENSOR_UNIT),
    }
}

fn decode_reading(node: Node<'_, '_>) -> Reading {
    let sensor_ref = child(node, tags::READING_SENSOR_REF)
        .and_then(|r| r.attribute(tags::READING_SENSOR_REF_ATTR))
        .unwrap_or_default();
    Reading {
        timestamp: child_text(node, tags::READING_TIMESTAMP),
        sensor_ref: sensor_ref.to_string(),
        value: child_text(node, tags::READING_VALUE),
    }
}

/// Every `item` element under any `container` child of `parent`, in
/// document order.
fn collection<'a, 'input>(
    parent: Node<'a, 'input>,
    container: &'static str,
    item: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    parent
        .children()
        .filter(move |c| c.has_tag_name(container))
        .flat_map(move |c| c.children().filter(move |n| n.has_tag_name(item)))
}

fn child<'a, 'input>(parent: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    parent.children().find(|n| n.has_tag_name(name))
}

/// Trimmed text content of the first `name` child, `""` when absent.
fn child_text(parent: Node<'_, '_>, name: &str) -> String {
    child(parent, name).map(text_content).unwrap_or_default()
}

fn text_content(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}
