//! BOLA scanner — flags callers that touch more than one object id in an access log.
//!
//! Modular structure:
//! - [`record`] — Access-log record shape and line parsing
//! - [`extract`] — Caller identity / resource id extraction
//! - [`tracker`] — Per-caller access history and classification
//! - [`scanner`] — Sequential line pipeline producing a scan report
//! - [`report`] — Text / NDJSON reporting sink
//! - [`logging`] — Structured logging setup

pub mod config;
pub mod error;
pub mod record;
pub mod extract;
pub mod tracker;
pub mod scanner;
pub mod report;
pub mod logging;

pub use config::ScanConfig;
pub use error::ScanError;
pub use record::LogRecord;
pub use extract::{extract_caller_identity, extract_resource_identifier};
pub use tracker::{AccessHistory, Classification};
pub use scanner::{Finding, ScanReport, Scanner};
pub use report::Reporter;
pub use logging::StructuredLogger;
