//! Reporting sink: header + verbatim finding lines, or NDJSON for ingestion.

use crate::config::{ReportConfig, ReportFormat};
use crate::error::ScanError;
use crate::scanner::{ScanReport, ScanStats};
use serde::Serialize;
use std::io::Write;
use uuid::Uuid;

#[derive(Serialize)]
struct FindingLine<'a> {
    run_id: Uuid,
    line_number: usize,
    caller: &'a str,
    resource_id: &'a str,
    line: &'a str,
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    run_id: Uuid,
    source: &'a str,
    started_at: String,
    #[serde(flatten)]
    stats: &'a ScanStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    read_error: Option<&'a str>,
}

pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn write(&self, report: &ScanReport, w: &mut impl Write) -> Result<(), ScanError> {
        let written = match self.config.format {
            ReportFormat::Text => self.write_text(report, w),
            ReportFormat::Json => Self::write_json(report, w),
        };
        written.map_err(ScanError::Report)
    }

    fn write_text(&self, report: &ScanReport, w: &mut impl Write) -> std::io::Result<()> {
        writeln!(w, "{}", self.config.header)?;
        for line in report.finding_lines() {
            writeln!(w, "{}", line)?;
        }
        w.flush()
    }

    fn write_json(report: &ScanReport, w: &mut impl Write) -> std::io::Result<()> {
        for f in &report.findings {
            emit_json(
                &FindingLine {
                    run_id: report.run_id,
                    line_number: f.line_number,
                    caller: &f.caller,
                    resource_id: &f.resource_id,
                    line: &f.line,
                },
                w,
            )?;
        }
        emit_json(
            &SummaryLine {
                run_id: report.run_id,
                source: &report.source,
                started_at: report.started_at.to_rfc3339(),
                stats: &report.stats,
                read_error: report.read_error.as_deref(),
            },
            w,
        )?;
        w.flush()
    }
}

fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
    let line = serde_json::to_string(event)?;
    writeln!(w, "{}", line)
}
