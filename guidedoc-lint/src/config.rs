//! Configuration types for guide linting.
//!
//! Split into core lint config (universal) and source-specific config
//! (how content is discovered). This ensures the core API does not leak
//! filesystem concerns.

use std::path::PathBuf;

/// Category matching policy for guide front-matter.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub enum CategoryPolicy {
    /// Accept any non-empty category (no enforcement).
    #[default]
    Any,
    /// All guides must carry this exact category.
    MustMatch(String),
    /// All guides must carry one of the listed categories.
    AllowList(Vec<String>),
}

/// Controls how files without a leading front-matter block are treated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrontMatterMode {
    /// A Markdown file without a front-matter block is a lint error (default).
    #[default]
    Required,
    /// Files without a front-matter block are skipped, not counted as scanned.
    /// Use for mixed corpora where only some files are guides.
    Optional,
}

/// Core lint config — applies regardless of input source.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct LintConfig {
    /// Category matching policy for all guides.
    pub category_policy: CategoryPolicy,
    /// Allowed values for the `type` field.
    /// Empty means any non-empty `type` passes (default).
    pub allowed_types: Vec<String>,
    /// Whether a missing front-matter block is an error or a skip.
    pub front_matter: FrontMatterMode,
}

/// Filesystem-specific source options.
///
/// NOTE: `paths` is required and must be non-empty. Default scan roots are a
/// CLI/wrapper concern, not baked into the library — keeps `guidedoc-lint`
/// repo-layout-agnostic.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Paths to scan (files or directories). Required, must be non-empty.
    pub paths: Vec<PathBuf>,
    /// Exclude patterns (glob format).
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`** — following symlinks allows escaping the
    /// corpus root, traversing system directories, and reading secrets in CI
    /// environments. Only enable if you explicitly trust all symlinks.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
    /// Maximum total number of files to scan (default: `100_000`).
    /// Prevents memory exhaustion on pathological corpora.
    pub max_files: usize,
    /// Maximum total bytes to read across all files (default: 512 MB).
    /// Prevents memory exhaustion when many large files are present.
    pub max_total_bytes: u64,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
            max_total_bytes: 536_870_912,
        }
    }
}
