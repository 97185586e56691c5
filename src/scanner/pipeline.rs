//! Line pipeline. Classification is strictly in source order; every scan starts
//! from an empty history.

use super::{Diagnostic, Finding, ScanReport};
use crate::error::ScanError;
use crate::extract::{extract_caller_identity, extract_resource_identifier};
use crate::record::LogRecord;
use crate::tracker::{AccessHistory, Classification};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct Scanner {
    history: AccessHistory,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// History left by the most recent scan.
    pub fn history(&self) -> &AccessHistory {
        &self.history
    }

    /// Open `path` and scan it to the end (or the first read error).
    pub fn scan_path(&mut self, path: &Path) -> Result<ScanReport, ScanError> {
        let file = File::open(path).map_err(|source| ScanError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.scan_reader(BufReader::new(file), path.display().to_string()))
    }

    /// Non-UTF-8 bytes are replaced rather than treated as a read failure.
    pub fn scan_reader(&mut self, mut reader: impl BufRead, source: impl Into<String>) -> ScanReport {
        let mut buf = Vec::new();
        let lines = std::iter::from_fn(move || {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => None,
                Ok(_) => Some(Ok(String::from_utf8_lossy(&buf).into_owned())),
                Err(e) => Some(Err(e)),
            }
        });
        self.scan_lines(lines, source)
    }

    pub fn scan_lines<I>(&mut self, lines: I, source: impl Into<String>) -> ScanReport
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        self.history = AccessHistory::new();
        let mut report = ScanReport::new(source);
        info!(run_id = %report.run_id, source = %report.source, "scan starting");

        for (idx, line) in lines.into_iter().enumerate() {
            let line_number = idx + 1;
            let raw = match line {
                Ok(l) => l,
                Err(e) => {
                    let err = ScanError::SourceRead(e);
                    warn!(line_number, error = %err, "read failed; stopping");
                    report.read_error = Some(err.to_string());
                    break;
                }
            };
            report.stats.lines_read += 1;
            self.process_line(raw.trim(), line_number, &mut report);
        }

        report.stats.findings = report.findings.len();
        info!(
            run_id = %report.run_id,
            lines = report.stats.lines_read,
            malformed = report.stats.malformed,
            findings = report.stats.findings,
            callers = self.history.caller_count(),
            "scan complete"
        );
        report
    }

    fn process_line(&mut self, line: &str, line_number: usize, report: &mut ScanReport) {
        if line.is_empty() {
            report.stats.blank += 1;
            return;
        }

        let record = match LogRecord::parse(line, line_number) {
            Ok(r) => r,
            Err(e) => {
                warn!(line_number, error = %e, "skipping malformed line");
                report.stats.malformed += 1;
                report.diagnostics.push(Diagnostic {
                    line_number,
                    message: e.to_string(),
                });
                return;
            }
        };

        let caller = extract_caller_identity(record.header_block());
        let resource_id = extract_resource_identifier(record.request_target());

        let verdict = self.history.observe(&caller, &resource_id);
        debug!(line_number, caller = %caller, resource_id = %resource_id, verdict = ?verdict, "classified");
        match verdict {
            Classification::Unclassifiable => report.stats.unclassifiable += 1,
            Classification::Suspicious => {
                report.stats.classified += 1;
                report.findings.push(Finding {
                    line_number,
                    caller,
                    resource_id,
                    line: line.to_string(),
                });
            }
            Classification::FirstAccess | Classification::Repeat => report.stats.classified += 1,
        }
    }
}
