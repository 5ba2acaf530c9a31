//! # greenhub — greenhouse document tool
//!
//! Composition root that wires the XML codec, the in-memory backend and the
//! application services behind a command-line front end.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialize logging
//! - Construct adapters and application services
//! - Run one command and map its outcome to an exit code
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;
mod report;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use greenhub_adapter_memory::InMemoryBackend;
use greenhub_adapter_xml::XmlCodec;
use greenhub_app::services::document_service::DocumentService;
use greenhub_app::services::submission_service::SubmissionService;
use greenhub_domain::error::GreenhubError;
use greenhub_domain::greenhouse::Greenhouse;
use greenhub_domain::record;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, QueryArgs};
use crate::config::{Config, ReportFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(io::stderr)
        .init();

    let format = cli.format.unwrap_or(config.report.format);
    let documents = DocumentService::new(XmlCodec);

    match cli.command {
        Command::Check { file } => check(&documents, &file, format),
        Command::Export { file, output } => export(&documents, &file, output.as_deref(), format),
        Command::Records { file } => {
            let greenhouse = import(&documents, &file)?;
            report::write_json(io::stdout().lock(), &record::classify(&greenhouse))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Query(args) => query(&args, config.query.per_page).await,
    }
}

fn import(documents: &DocumentService<XmlCodec>, file: &Path) -> anyhow::Result<Greenhouse> {
    let text =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    documents
        .import(&text)
        .with_context(|| format!("failed to import {}", file.display()))
}

fn check(
    documents: &DocumentService<XmlCodec>,
    file: &Path,
    format: ReportFormat,
) -> anyhow::Result<ExitCode> {
    let greenhouse = import(documents, file)?;
    let findings = documents.check(&greenhouse);
    report::write_findings(io::stdout().lock(), format, &findings)?;
    Ok(if findings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn export(
    documents: &DocumentService<XmlCodec>,
    file: &Path,
    output: Option<&Path>,
    format: ReportFormat,
) -> anyhow::Result<ExitCode> {
    let greenhouse = import(documents, file)?;
    let xml = match documents.export(&greenhouse) {
        Ok(xml) => xml,
        Err(GreenhubError::Rejected(rejected)) => {
            report::write_findings(io::stderr().lock(), format, &rejected.findings)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    match output {
        Some(path) => {
            fs::write(path, xml).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "document exported");
        }
        None => io::stdout().lock().write_all(xml.as_bytes())?,
    }
    Ok(ExitCode::SUCCESS)
}

async fn query(args: &QueryArgs, default_per_page: u32) -> anyhow::Result<ExitCode> {
    let submissions = SubmissionService::new(XmlCodec, InMemoryBackend::new(XmlCodec));

    for file in &args.files {
        let text = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        match submissions.ingest(text).await {
            Ok(id) => tracing::debug!(file = %file.display(), document_id = %id, "accepted"),
            Err(err @ (GreenhubError::Rejected(_) | GreenhubError::Parse(_))) => {
                tracing::warn!(
                    file = %file.display(),
                    findings = err.findings().len(),
                    error = %err,
                    "skipping document"
                );
            }
            Err(err) => return Err(err.into()),
        }
    }

    let page = submissions.query(args.to_query(default_per_page)).await?;
    report::write_json(io::stdout().lock(), &page)?;
    Ok(ExitCode::SUCCESS)
}
