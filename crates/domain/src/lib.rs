//! # greenhub-domain
//!
//! Pure domain model for the greenhub greenhouse monitoring system.
//!
//! ## Responsibilities
//! - Foundational types: document identifiers, error conventions, timestamps
//! - Define the **Greenhouse** document (name, location, sensors, readings)
//! - Define **Sensors** (typed measurement devices) and **Readings** (observations)
//! - Define the **range table** mapping sensor types to inclusive bounds
//! - Define **Findings** and the ordered **validation** rule set
//! - Classify readings into **records** and filter them with **queries**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod finding;
pub mod greenhouse;
pub mod query;
pub mod range;
pub mod reading;
pub mod record;
pub mod sensor;
pub mod validation;
