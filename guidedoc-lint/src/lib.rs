//! # guidedoc-lint
//!
//! Front-matter and content linter for Markdown guide corpora.
//!
//! This crate provides a clean separation between the **core lint engine**
//! (input-agnostic checks in `guidedoc`) and **input strategies** (starting
//! with filesystem scanning).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use guidedoc_lint::{lint_fs, CategoryPolicy, FsSourceConfig, LintConfig};
//!
//! let mut fs_config = FsSourceConfig::default();
//! fs_config.paths = vec![PathBuf::from("guides")];
//! fs_config.exclude = vec!["drafts/*".to_owned()];
//!
//! let mut lint_config = LintConfig::default();
//! lint_config.category_policy = CategoryPolicy::MustMatch("Security".to_owned());
//!
//! let report = lint_fs(&fs_config, &lint_config).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Lint errors: {}", report.errors_count());
//! println!("Scan errors: {}", report.scan_errors.len());
//! println!("OK: {}", report.ok);
//! ```

mod checks;
mod config;
mod error;
pub mod output;
mod report;
mod strategy;

pub use config::{CategoryPolicy, FrontMatterMode, FsSourceConfig, LintConfig};
pub use error::{LintError, ScanError, ScanErrorKind};
pub use report::LintReport;

use checks::front_matter::DocCheck;
use strategy::fs::{ScanResult, find_files, read_file_bounded};
use tracing::debug;

/// Lint guide documents on disk.
///
/// This is the primary public API.
///
/// # Arguments
///
/// * `fs_config` - Filesystem-specific source options (paths, exclude, max file size, limits)
/// * `lint_config` - Core lint config (category policy, allowed types, front-matter mode)
///
/// # Errors
///
/// Returns an error if `fs_config.paths` is empty or if any provided path does not exist.
/// Returns `Ok` with `scanned_files: 0` if paths exist but contain no guide files.
/// Scan failures (unreadable files, unparseable front-matter, etc.) are reported in
/// `report.scan_errors` and never silently discarded.
pub fn lint_fs(
    fs_config: &FsSourceConfig,
    lint_config: &LintConfig,
) -> anyhow::Result<LintReport> {
    if fs_config.paths.is_empty() {
        anyhow::bail!("No paths provided for linting");
    }

    for path in &fs_config.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let (files, mut scan_errors) = find_files(fs_config);

    if files.is_empty() && scan_errors.is_empty() {
        return Ok(LintReport {
            scanned_files: 0,
            failed_files: 0,
            skipped_files: 0,
            ok: true,
            lint_errors: vec![],
            scan_errors: vec![],
        });
    }

    let mut lint_errors = Vec::new();
    let mut scanned_files: usize = 0;
    let mut skipped_files: usize = 0;
    // Discovery-stage failures (walk errors, boundary violations, canonicalization errors)
    // are already in scan_errors from find_files. Count them as failed files upfront.
    let mut failed_files: usize = scan_errors.len();
    let mut total_bytes: u64 = 0;

    for file_path in &files {
        if scanned_files + failed_files >= fs_config.max_files {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Scan aborted: max_files limit ({}) reached; remaining files not scanned",
                    fs_config.max_files
                ),
            });
            failed_files += 1;
            break;
        }

        let content = match read_file_bounded(file_path, fs_config.max_file_size) {
            ScanResult::Ok(c) => c,
            ScanResult::Err(e) => {
                scan_errors.push(e);
                failed_files += 1;
                continue;
            }
        };

        let file_bytes = content.len() as u64;
        if total_bytes.saturating_add(file_bytes) > fs_config.max_total_bytes {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Scan aborted: max_total_bytes limit ({}) reached; remaining files not scanned",
                    fs_config.max_total_bytes
                ),
            });
            failed_files += 1;
            break;
        }
        total_bytes = total_bytes.saturating_add(file_bytes);

        match checks::front_matter::check_document(&content, file_path, lint_config) {
            DocCheck::Skipped => {
                debug!(file = %file_path.display(), "no front-matter, skipped");
                skipped_files += 1;
            }
            DocCheck::Failed(scan_err) => {
                scan_errors.push(scan_err);
                failed_files += 1;
            }
            DocCheck::Checked {
                errors,
                body,
                body_start_line,
            } => {
                scanned_files += 1;
                lint_errors.extend(errors);
                lint_errors.extend(checks::body::check_fences(
                    &body,
                    file_path,
                    body_start_line,
                ));
            }
        }
    }

    let ok = lint_errors.is_empty() && scan_errors.is_empty();
    Ok(LintReport {
        scanned_files,
        failed_files,
        skipped_files,
        ok,
        lint_errors,
        scan_errors,
    })
}
