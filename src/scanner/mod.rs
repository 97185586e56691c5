//! Sequential scan of an access log: lines -> records -> extracted pair -> classification.

mod pipeline;

pub use pipeline::Scanner;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A line judged suspicious, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line number in the source
    pub line_number: usize,
    pub caller: String,
    pub resource_id: String,
    /// Source line, surrounding whitespace trimmed
    pub line: String,
}

/// Malformed line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line_number: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub lines_read: usize,
    pub blank: usize,
    pub malformed: usize,
    /// Parsed, but identity or resource id missing
    pub unclassifiable: usize,
    pub classified: usize,
    pub findings: usize,
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub source: String,
    pub findings: Vec<Finding>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ScanStats,
    /// Mid-stream read failure; findings collected before it still stand
    pub read_error: Option<String>,
}

impl ScanReport {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            source: source.into(),
            findings: Vec::new(),
            diagnostics: Vec::new(),
            stats: ScanStats::default(),
            read_error: None,
        }
    }

    pub fn finding_lines(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().map(|f| f.line.as_str())
    }
}
