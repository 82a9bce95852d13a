//! Output formatting for lint results.

use std::io::{self, Write};

use anyhow::Result;
use little_lint::{LintResult, Severity};

use crate::OutputFormat;

const RESET: &str = "\x1b[0m";

/// Prints lint results to stdout in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, color: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(&mut out, result, format, color)?;
    out.flush()?;
    Ok(())
}

/// Writes lint results in the specified format.
pub fn write(
    out: &mut impl Write,
    result: &LintResult,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, result, color)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
        OutputFormat::Compact => write_compact(out, result)?,
    }
    Ok(())
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Advisory => "\x1b[36m",
    }
}

fn write_text(out: &mut impl Write, result: &LintResult, color: bool) -> io::Result<()> {
    let paint = |text: &str, code: &str| {
        if color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    };

    for (file, violation) in result.violations() {
        writeln!(
            out,
            "{}:{}: {} {}",
            file.path.display(),
            violation.line,
            violation.code(),
            violation.kind.name(),
        )?;
        let severity = violation.severity.to_string();
        writeln!(
            out,
            "  {}: {}",
            paint(&severity, severity_color(violation.severity)),
            violation.message
        )?;
        writeln!(out)?;
    }

    let (errors, warnings, advisories) = result.count_by_severity();
    let summary_color = if errors > 0 {
        severity_color(Severity::Error)
    } else if warnings > 0 {
        severity_color(Severity::Warning)
    } else {
        "\x1b[32m"
    };
    let summary = format!(
        "Found {} violation(s): {errors} error(s), {warnings} warning(s), \
         {advisories} advisory(ies) in {} file(s)",
        result.total(),
        result.files_checked
    );
    writeln!(out, "{}", paint(&summary, summary_color))
}

fn write_compact(out: &mut impl Write, result: &LintResult) -> io::Result<()> {
    for (file, violation) in result.violations() {
        writeln!(
            out,
            "{}:{}: {} [{}] {}",
            file.path.display(),
            violation.line,
            violation.severity,
            violation.code(),
            violation.message,
        )?;
    }
    Ok(())
}
