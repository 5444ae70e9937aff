//! Shared output formatting for lint reports.
//!
//! Provides JSON and plain-text formatters for `LintReport`.
//! Color/terminal formatting is intentionally excluded from this core module —
//! that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::LintReport;

/// Format a `LintReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &LintReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `LintReport` as human-readable plain text to a writer.
///
/// Color/ANSI formatting is the responsibility of the caller (CLI layer).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &LintReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  GUIDE CORPUS LINTER")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files scanned:  {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:   {}", report.failed_files)?;
    if report.skipped_files > 0 {
        writeln!(writer, "  Files skipped:  {}", report.skipped_files)?;
    }
    writeln!(writer, "  Errors found:   {}", report.errors_count())?;
    writeln!(writer)?;

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  SCAN ERRORS (files that could not be linted)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if !report.lint_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  LINT ERRORS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for error in &report.lint_errors {
            writeln!(writer, "{}", error.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files passed linting",
            report.scanned_files
        )?;
    } else {
        if !report.scan_errors.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} file(s) could not be scanned \u{2014} CI must treat this as a failure",
                report.failed_files
            )?;
        }
        if !report.lint_errors.is_empty() {
            writeln!(writer, "\u{2717} {} lint error(s) found", report.errors_count())?;
            writeln!(writer)?;
            writeln!(writer, "  To fix:")?;

            let has_field_error = report.lint_errors.iter().any(|e| !e.field.is_empty());
            let has_fence_error = report
                .lint_errors
                .iter()
                .any(|e| e.error.contains("fence"));
            let has_block_error = report
                .lint_errors
                .iter()
                .any(|e| e.error.contains("front-matter block"));

            if has_block_error {
                writeln!(
                    writer,
                    "    - Every guide starts with a `---` YAML block closed by a second `---`"
                )?;
            }
            if has_field_error {
                writeln!(
                    writer,
                    "    - Required fields: title, description, type, category, tags, publishedAt"
                )?;
                writeln!(writer, "    - publishedAt must be a YYYY-MM-DD date")?;
                writeln!(writer, "    - tags must be a non-empty list of strings")?;
            }
            if has_fence_error {
                writeln!(
                    writer,
                    "    - Close every ``` / ~~~ code block before the end of the file"
                )?;
            }
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintError;
    use std::path::PathBuf;

    fn sample_report(ok: bool) -> LintReport {
        let lint_errors = if ok {
            vec![]
        } else {
            vec![LintError {
                file: PathBuf::from("guides/docker.md"),
                line: 0,
                column: 0,
                field: "publishedAt".to_owned(),
                raw_value: String::new(),
                error: "required field is missing".to_owned(),
                context: "publishedAt".to_owned(),
            }]
        };
        LintReport {
            scanned_files: 2,
            failed_files: 0,
            skipped_files: 0,
            ok,
            lint_errors,
            scan_errors: vec![],
        }
    }

    #[test]
    fn test_write_json_round_trips() {
        let mut buf = Vec::new();
        write_json(&sample_report(false), &mut buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["scanned_files"], 2);
        assert_eq!(parsed["ok"], false);
        assert_eq!(parsed["lint_errors"][0]["field"], "publishedAt");
    }

    #[test]
    fn test_write_human_ok() {
        let mut buf = Vec::new();
        write_human(&sample_report(true), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("All 2 files passed linting"));
    }

    #[test]
    fn test_write_human_with_errors_includes_hints() {
        let mut buf = Vec::new();
        write_human(&sample_report(false), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("LINT ERRORS"));
        assert!(text.contains("guides/docker.md"));
        assert!(text.contains("YYYY-MM-DD"));
    }
}
