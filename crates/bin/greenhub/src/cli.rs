//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use greenhub_domain::query::ReadingQuery;
use greenhub_domain::record::ReadingStatus;
use greenhub_domain::time::{self, Timestamp};

use crate::config::{self, ReportFormat};

/// Import, validate and export greenhouse sensor documents.
#[derive(Debug, Parser)]
#[command(name = "greenhub", version, about)]
pub struct Cli {
    /// Configuration file.
    #[arg(long, global = true, default_value = config::DEFAULT_PATH)]
    pub config: PathBuf,

    /// Output format for findings (overrides the configuration).
    #[arg(long, global = true, value_enum)]
    pub format: Option<ReportFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a document and print its findings.
    Check {
        file: PathBuf,
    },
    /// Validate a document and write it back as canonical XML.
    Export {
        file: PathBuf,
        /// Destination file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the classified readings of a document as JSON.
    Records {
        file: PathBuf,
    },
    /// Submit documents to an in-memory backend and query their readings.
    Query(QueryArgs),
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Documents to submit before querying.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only readings from sensors of this type, e.g. `temperatura`.
    #[arg(long = "type")]
    pub sensor_type: Option<String>,

    /// Only readings with this status: ok, `out_of_range` or `unknown_range`.
    #[arg(long, value_parser = parse_status)]
    pub status: Option<ReadingStatus>,

    /// Inclusive lower bound (RFC 3339).
    #[arg(long, value_parser = parse_timestamp)]
    pub from: Option<Timestamp>,

    /// Inclusive upper bound (RFC 3339).
    #[arg(long, value_parser = parse_timestamp)]
    pub to: Option<Timestamp>,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size; the configured default when omitted.
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl QueryArgs {
    /// Build the domain query, falling back to `default_per_page`.
    pub fn to_query(&self, default_per_page: u32) -> ReadingQuery {
        ReadingQuery {
            sensor_type: self.sensor_type.clone(),
            from: self.from,
            to: self.to,
            status: self.status,
            page: self.page,
            per_page: self.per_page.unwrap_or(default_per_page),
        }
    }
}

fn parse_status(s: &str) -> Result<ReadingStatus, String> {
    s.parse::<ReadingStatus>().map_err(|err| err.to_string())
}

fn parse_timestamp(s: &str) -> Result<Timestamp, String> {
    time::parse(s).ok_or_else(|| format!("'{s}' is not an RFC 3339 timestamp"))
}
