//! Error types for guide linting.

use std::path::PathBuf;

use serde::Serialize;

/// The kind of scan-level failure that prevented a file from being linted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// The front-matter block could not be parsed as YAML.
    YamlParseError,
    /// The resolved path is outside the corpus root (symlink escape).
    OutsideCorpus,
    /// A resource limit (`max_files` or `max_total_bytes`) was reached, truncating the scan.
    LimitExceeded,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
}

/// A scan-level error: a file that could not be linted at all.
///
/// These are distinct from `LintError` (a problem found in a file that was
/// read and parsed). A `ScanError` means the file could not even be read or
/// its front-matter could not be parsed — CI must treat these as failures.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

/// A single lint error found in a guide document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct LintError {
    /// File path where the error was found
    pub file: PathBuf,
    /// Line number (1-indexed) — for body errors; 0 for front-matter field errors
    pub line: usize,
    /// Column number (1-indexed) — for body errors; 0 for front-matter field errors
    pub column: usize,
    /// Front-matter field name (e.g., "publishedAt") — empty for body errors
    pub field: String,
    /// The offending raw text, where one exists (e.g. a bad date string)
    pub raw_value: String,
    /// Human-readable error description
    pub error: String,
    /// Surrounding context (for body errors: the line content; for field errors: the field name)
    pub context: String,
}

impl LintError {
    /// Format the error for human-readable output.
    ///
    /// For body errors: `{file}:{line}:{column}: {error} [{raw_value}]`
    /// For front-matter errors: `{file}: {error} ({field})`
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        if self.line > 0 && self.column > 0 {
            if self.raw_value.is_empty() {
                format!("{}:{}:{}: {}", self.file.display(), self.line, self.column, self.error)
            } else {
                format!(
                    "{}:{}:{}: {} [{}]",
                    self.file.display(),
                    self.line,
                    self.column,
                    self.error,
                    self.raw_value
                )
            }
        } else if !self.field.is_empty() {
            format!("{}: {} ({})", self.file.display(), self.error, self.field)
        } else {
            format!("{}: {}", self.file.display(), self.error)
        }
    }
}
