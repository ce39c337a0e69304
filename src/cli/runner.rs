use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use staff_report::report::write_invalid_section;
use staff_report::{
    read_lines, InvalidLines, OutputFormat, OutputTarget, Report, ReportConfig, Session,
};

use super::args::CliArgs;
use super::errors::AppError;

/// Validate options, ingest the staff file and emit the report
///
/// Only configuration errors are returned. I/O failures are reported on
/// stderr and the affected step is skipped.
pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    let config = ReportConfig::new(
        &args.sort,
        &args.order,
        &args.output,
        &args.format,
        args.path,
    )?;
    info!(
        sort = config.sort.as_str(),
        order = config.order.as_str(),
        input = %args.input.display(),
        "starting run"
    );

    let lines = match read_lines(&args.input) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error reading input: {:#}", e);
            Vec::new()
        }
    };

    let mut session = Session::new();
    session.ingest(&lines);
    session.sort(config.sort, config.order);

    let report = Report::build(session.registry());
    emit(&config, &report, session.invalid_lines());

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn emit(config: &ReportConfig, report: &Report, invalid: &InvalidLines) {
    match (config.output, config.path.as_deref()) {
        (OutputTarget::File, Some(path)) => {
            if let Err(e) = write_file(path, config.format, report, invalid) {
                eprintln!("Error writing file: {:#}", e);
            }
        }
        _ => {
            if let Err(e) = write_console(config.format, report, invalid) {
                eprintln!("Error writing report: {:#}", e);
            }
        }
    }
}

fn write_console(format: OutputFormat, report: &Report, invalid: &InvalidLines) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => {
            report.write_text(&mut out)?;
            if !invalid.is_empty() {
                write_invalid_section(&mut out, invalid, false)?;
            }
        }
        OutputFormat::Json => report.write_json(&mut out, invalid)?,
    }

    out.flush()?;
    Ok(())
}

/// Report overwrites the file; rejected lines are appended afterwards
fn write_file(
    path: &Path,
    format: OutputFormat,
    report: &Report,
    invalid: &InvalidLines,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Text => report.write_text(&mut writer)?,
        OutputFormat::Json => report.write_json(&mut writer, invalid)?,
    }
    writer.flush()?;
    info!(path = %path.display(), departments = report.departments.len(), "report written");

    if format == OutputFormat::Text && !invalid.is_empty() {
        append_invalid(path, invalid)?;
    }

    Ok(())
}

fn append_invalid(path: &Path, invalid: &InvalidLines) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for append", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_invalid_section(&mut writer, invalid, true)?;
    writer.flush()?;
    Ok(())
}
