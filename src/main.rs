//! bola-scan entrypoint: resolve the log source, scan it once, print findings.
//! Source comes from the first argument, then config `source`, then an stdin prompt.

use bola_scan::{
    config::ScanConfig,
    error::ScanError,
    logging::StructuredLogger,
    report::Reporter,
    scanner::Scanner,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

fn prompt_for_path() -> std::io::Result<Option<PathBuf>> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "Enter the full path of the access log file:")?;
    stdout.flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.split_whitespace().next().map(PathBuf::from))
}

fn resolve_source(config: &ScanConfig) -> std::io::Result<Option<PathBuf>> {
    if let Some(arg) = std::env::args_os().nth(1) {
        return Ok(Some(PathBuf::from(arg)));
    }
    if let Some(path) = &config.source {
        return Ok(Some(path.clone()));
    }
    prompt_for_path()
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("BOLA_SCAN_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("bola-scan.json"));
    let config = ScanConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let Some(source) = resolve_source(&config)? else {
        error!("no log source given");
        std::process::exit(1);
    };

    let mut scanner = Scanner::new();
    let report = match scanner.scan_path(&source) {
        Ok(r) => r,
        Err(e @ ScanError::SourceUnavailable { .. }) => {
            error!(error = %e, "cannot scan");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(read_error) = &report.read_error {
        warn!(error = %read_error, "log source ended early");
        eprintln!("Error reading log file: {}", read_error);
    }

    let reporter = Reporter::new(config.report.clone());
    reporter.write(&report, &mut std::io::stdout().lock())?;

    info!(findings = report.findings.len(), "bola-scan finished");
    Ok(())
}
