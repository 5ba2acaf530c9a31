//! Rendering of findings and JSON payloads for the terminal.

use std::io::{self, Write};

use greenhub_domain::finding::Finding;
use serde::Serialize;

use crate::config::ReportFormat;

/// Write `findings` in the requested format.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn write_findings<W: Write>(
    mut out: W,
    format: ReportFormat,
    findings: &[Finding],
) -> io::Result<()> {
    match format {
        ReportFormat::Text if findings.is_empty() => writeln!(out, "no findings"),
        ReportFormat::Text => {
            for finding in findings {
                writeln!(out, "{finding}")?;
            }
            Ok(())
        }
        ReportFormat::Json => write_json(out, &findings),
    }
}

/// Write `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if serialization or writing fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)
}
