//! # greenhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DocumentCodec` — text ⇄ [`Greenhouse`](greenhub_domain::greenhouse::Greenhouse)
//!   - `ReadingBackend` — upload accepted documents, query reading records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DocumentService` — import, check, export, render
//!   - `SubmissionService` — validate-then-upload, query
//! - Enforce the acceptance policy: a document is only exported or submitted
//!   when validation yields no findings
//!
//! ## Dependency rule
//! Depends on `greenhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
