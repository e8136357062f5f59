//! Incident knowledge-base lookup
//!
//! Describe a problem in free text, get back the closest past incidents from a
//! hosted search index together with their root cause and resolution. Two
//! front ends share one [`search::IncidentSearch`] handle: a terminal menu
//! ([`shell`]) and a single-field web form ([`web`]).

pub mod config;
pub mod error;
pub mod report;
pub mod search;
pub mod shell;
pub mod telemetry;
pub mod web;

pub use error::{AppError, Result};
