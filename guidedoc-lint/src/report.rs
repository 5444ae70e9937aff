//! Lint report types.

use serde::Serialize;

use crate::error::{LintError, ScanError};

/// Result of a lint run.
///
/// CI pipelines must check both `lint_errors` and `scan_errors`.
/// A non-empty `scan_errors` means the linter did not fully run —
/// treat this as a build failure regardless of `lint_errors`.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct LintReport {
    /// Number of files successfully scanned (read + checked).
    pub scanned_files: usize,
    /// Number of files that could not be scanned (read/parse failures).
    pub failed_files: usize,
    /// Number of files skipped as non-guides (`FrontMatterMode::Optional`).
    pub skipped_files: usize,
    /// Whether all scanned files passed linting AND no scan errors occurred.
    pub ok: bool,
    /// Individual lint errors found in scanned files.
    pub lint_errors: Vec<LintError>,
    /// Scan-level errors: files that could not be read or parsed.
    /// Non-empty means the linter did not fully cover the corpus.
    pub scan_errors: Vec<ScanError>,
}

impl LintReport {
    /// Total number of files attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Number of lint errors found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.lint_errors.len()
    }
}
