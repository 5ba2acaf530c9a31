//! [`Greenhouse`] → canonical XML encoding.
//!
//! Output is byte-for-byte deterministic: fixed declaration, fixed element
//! order, two-space indentation, `\n` line endings, trailing newline.

use greenhub_domain::greenhouse::Greenhouse;
use greenhub_domain::reading::Reading;
use greenhub_domain::sensor::Sensor;

use crate::tags;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "  ";

/// Serialize `greenhouse` to canonical XML. Never fails.
///
/// A sensor whose id is `None` is written without an `id` attribute so the
/// absence survives a round trip through [`crate::decode::decode`].
#[must_use]
pub fn encode(greenhouse: &Greenhouse) -> String {
    let mut out = Writer::default();
    out.line(0, DECLARATION);
    out.open(0, tags::ROOT);
    out.text_element(1, tags::NAME, &greenhouse.name);
    out.text_element(1, tags::LOCATION, &greenhouse.location);

    out.open(1, tags::SENSORS);
    for sensor in &greenhouse.sensors {
        out.sensor(sensor);
    }
    out.close(1, tags::SENSORS);

    out.open(1, tags::READINGS);
    for reading in &greenhouse.readings {
        out.reading(reading);
    }
    out.close(1, tags::READINGS);

    out.close(0, tags::ROOT);
    out.buf
}

#[derive(Default)]
struct Writer {
    buf: String,
}

impl Writer {
    fn sensor(&mut self, sensor: &Sensor) {
        self.indent(2);
        self.buf.push('<');
        self.buf.push_str(tags::SENSOR);
        if let Some(id) = &sensor.id {
            self.attribute(tags::SENSOR_ID, id);
        }
        self.buf.push_str(">\n");
        self.text_element(3, tags::SENSOR_TYPE, &sensor.kind);
        self.text_element(3, tags::SENSOR_UNIT, &sensor.unit);
        self.close(2, tags::SENSOR);
    }

    fn reading(&mut self, reading: &Reading) {
        self.open(2, tags::READING);
        self.text_element(3, tags::READING_TIMESTAMP, &reading.timestamp);
        self.indent(3);
        self.buf.push('<');
        self.buf.push_str(tags::READING_SENSOR_REF);
        self.attribute(tags::READING_SENSOR_REF_ATTR, &reading.sensor_ref);
        self.buf.push_str("/>\n");
        self.text_element(3, tags::READING_VALUE, &reading.value);
        self.close(2, tags::READING);
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buf.push_str(INDENT);
        }
    }

    fn line(&mut self, depth: usize, raw: &str) {
        self.indent(depth);
        self.buf.push_str(raw);
        self.buf.push('\n');
    }

    fn open(&mut self, depth: usize, tag: &str) {
        self.indent(depth);
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn close(&mut self, depth: usize, tag: &str) {
        self.indent(depth);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn text_element(&mut self, depth: usize, tag: &str, text: &str) {
        self.indent(depth);
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push('>');
        escape_into(&mut self.buf, text);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn attribute(&mut self, name: &str, value: &str) {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        escape_into(&mut self.buf, value);
        self.buf.push('"');
    }
}

/// Escape the five XML-significant characters. Whitespace controls are
/// written as character references so parsers do not normalise them away;
/// characters XML 1.0 cannot represent at all are dropped.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
