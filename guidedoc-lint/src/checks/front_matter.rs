//! Front-matter extraction and metadata checks for a single guide file.
//!
//! Layering:
//! - document split errors (missing/unterminated/empty block) are lint
//!   errors, except in `FrontMatterMode::Optional` where a missing block
//!   means "not a guide" and the file is skipped;
//! - YAML that does not parse at all is a `ScanError` — the file could not
//!   be checked, CI must treat it as a failure;
//! - schema issues from `guidedoc::check_meta` plus the configured
//!   category/type policies become field-level lint errors.

use std::path::Path;

use guidedoc::{Document, DocumentError, MetaIssue, check_meta, parse_front_matter};
use serde_json::Value;

use crate::config::{CategoryPolicy, FrontMatterMode, LintConfig};
use crate::error::{LintError, ScanError, ScanErrorKind};

/// Outcome of checking one file's front-matter layer.
pub enum DocCheck {
    /// No front-matter block and the mode is `Optional` — not a guide.
    Skipped,
    /// The front-matter could not be parsed; the file was not checked.
    Failed(ScanError),
    /// The file was checked. `body` and `body_start_line` feed body checks.
    Checked {
        errors: Vec<LintError>,
        body: String,
        body_start_line: usize,
    },
}

/// Run front-matter checks over a file's content.
pub fn check_document(content: &str, path: &Path, config: &LintConfig) -> DocCheck {
    let doc = match Document::parse(content) {
        Ok(doc) => doc,
        Err(DocumentError::MissingFrontMatter)
            if config.front_matter == FrontMatterMode::Optional =>
        {
            return DocCheck::Skipped;
        }
        Err(e @ DocumentError::MissingFrontMatter) => {
            // No metadata to check; the whole file is body.
            return DocCheck::Checked {
                errors: vec![document_error(path, &e)],
                body: content.to_owned(),
                body_start_line: 1,
            };
        }
        Err(e) => {
            // Unterminated or empty block: the body boundary is unknown,
            // so body checks cannot run either.
            return DocCheck::Checked {
                errors: vec![document_error(path, &e)],
                body: String::new(),
                body_start_line: 1,
            };
        }
    };

    let value = match parse_front_matter(&doc.raw_front_matter) {
        Ok(value) => value,
        Err(e) => {
            return DocCheck::Failed(ScanError {
                file: path.to_owned(),
                kind: ScanErrorKind::YamlParseError,
                message: e.to_string(),
            });
        }
    };

    let mut errors: Vec<LintError> = check_meta(&value)
        .into_iter()
        .map(|issue| meta_issue_to_error(path, issue))
        .collect();
    errors.extend(check_policies(&value, path, config));

    DocCheck::Checked {
        errors,
        body: doc.body,
        body_start_line: doc.body_start_line,
    }
}

fn document_error(path: &Path, error: &DocumentError) -> LintError {
    LintError {
        file: path.to_owned(),
        line: 1,
        column: 1,
        field: String::new(),
        raw_value: String::new(),
        error: error.to_string(),
        context: String::new(),
    }
}

fn meta_issue_to_error(path: &Path, issue: MetaIssue) -> LintError {
    LintError {
        file: path.to_owned(),
        line: 0,
        column: 0,
        field: issue.field.clone(),
        raw_value: String::new(),
        error: issue.message,
        context: issue.field,
    }
}

/// Policy checks layered on top of the schema: category and type
/// enforcement. Missing/empty fields are already reported by `check_meta`,
/// so policies only fire on present, non-empty values.
fn check_policies(value: &Value, path: &Path, config: &LintConfig) -> Vec<LintError> {
    let mut errors = Vec::new();

    if let Some(category) = str_field(value, "category") {
        match &config.category_policy {
            CategoryPolicy::Any => {}
            CategoryPolicy::MustMatch(expected) => {
                if category != expected {
                    errors.push(policy_error(
                        path,
                        "category",
                        category,
                        format!("Category mismatch: expected '{expected}', found '{category}'"),
                    ));
                }
            }
            CategoryPolicy::AllowList(allowed) => {
                if !allowed.iter().any(|a| a == category) {
                    errors.push(policy_error(
                        path,
                        "category",
                        category,
                        format!("Category '{category}' is not in the allowed set"),
                    ));
                }
            }
        }
    }

    if !config.allowed_types.is_empty()
        && let Some(doc_type) = str_field(value, "type")
        && !config.allowed_types.iter().any(|t| t == doc_type)
    {
        errors.push(policy_error(
            path,
            "type",
            doc_type,
            format!(
                "Type '{doc_type}' is not allowed (allowed: {})",
                config.allowed_types.join(", ")
            ),
        ));
    }

    errors
}

fn str_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn policy_error(path: &Path, field: &str, raw: &str, message: String) -> LintError {
    LintError {
        file: path.to_owned(),
        line: 0,
        column: 0,
        field: field.to_owned(),
        raw_value: raw.to_owned(),
        error: message,
        context: field.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_DOC: &str = "\
---
title: Docker Security
description: Hardening containers
type: Guide
category: Security
tags: [docker, containers]
publishedAt: \"2024-03-01\"
---
# Docker Security

Run containers as non-root.
";

    fn check(content: &str, config: &LintConfig) -> DocCheck {
        check_document(content, Path::new("test.md"), config)
    }

    #[test]
    fn test_valid_document_clean() {
        match check(VALID_DOC, &LintConfig::default()) {
            DocCheck::Checked {
                errors,
                body,
                body_start_line,
            } => {
                assert!(errors.is_empty(), "unexpected errors: {errors:?}");
                assert!(body.contains("non-root"));
                assert_eq!(body_start_line, 9);
            }
            _ => panic!("expected Checked"),
        }
    }

    #[test]
    fn test_missing_front_matter_required_mode() {
        match check("# No metadata\n", &LintConfig::default()) {
            DocCheck::Checked { errors, body, .. } => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].error.contains("front-matter"));
                // The whole file is still available for body checks.
                assert!(body.contains("No metadata"));
            }
            _ => panic!("expected Checked"),
        }
    }

    #[test]
    fn test_missing_front_matter_optional_mode_skips() {
        let mut config = LintConfig::default();
        config.front_matter = FrontMatterMode::Optional;
        assert!(matches!(
            check("# No metadata\n", &config),
            DocCheck::Skipped
        ));
    }

    #[test]
    fn test_unterminated_front_matter() {
        match check("---\ntitle: T\nbody without closing\n", &LintConfig::default()) {
            DocCheck::Checked { errors, body, .. } => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].error.contains("never closed"));
                assert!(body.is_empty());
            }
            _ => panic!("expected Checked"),
        }
    }

    #[test]
    fn test_unparseable_yaml_is_scan_error() {
        let content = "---\n: : :\n  - [unclosed\n---\nBody\n";
        match check(content, &LintConfig::default()) {
            DocCheck::Failed(e) => assert_eq!(e.kind, ScanErrorKind::YamlParseError),
            _ => panic!("expected Failed"),
        }
    }

    #[test]
    fn test_schema_issues_become_field_errors() {
        let content = "---\ntitle: Only a title\n---\nBody\n";
        match check(content, &LintConfig::default()) {
            DocCheck::Checked { errors, .. } => {
                assert!(errors.iter().any(|e| e.field == "publishedAt"));
                assert!(errors.iter().any(|e| e.field == "tags"));
                assert!(errors.iter().all(|e| e.line == 0));
            }
            _ => panic!("expected Checked"),
        }
    }

    #[test]
    fn test_category_must_match() {
        let mut config = LintConfig::default();
        config.category_policy = CategoryPolicy::MustMatch("Networking".to_owned());
        match check(VALID_DOC, &config) {
            DocCheck::Checked { errors, .. } => {
                assert!(
                    errors
                        .iter()
                        .any(|e| e.error.contains("Category mismatch")),
                    "got: {errors:?}"
                );
            }
            _ => panic!("expected Checked"),
        }
    }

    #[test]
    fn test_category_allow_list() {
        let mut config = LintConfig::default();
        config.category_policy =
            CategoryPolicy::AllowList(vec!["Security".to_owned(), "Networking".to_owned()]);
        match check(VALID_DOC, &config) {
            DocCheck::Checked { errors, .. } => {
                assert!(errors.is_empty(), "got: {errors:?}");
            }
            _ => panic!("expected Checked"),
        }
    }

    #[test]
    fn test_type_allow_list() {
        let mut config = LintConfig::default();
        config.allowed_types = vec!["Tutorial".to_owned()];
        match check(VALID_DOC, &config) {
            DocCheck::Checked { errors, .. } => {
                assert!(
                    errors.iter().any(|e| e.field == "type"
                        && e.error.contains("not allowed")),
                    "got: {errors:?}"
                );
            }
            _ => panic!("expected Checked"),
        }
    }

    #[test]
    fn test_policy_skipped_when_field_missing() {
        // check_meta already reports the missing category; the policy must
        // not pile a second error on top.
        let content = "---\ntitle: T\n---\nBody\n";
        let mut config = LintConfig::default();
        config.category_policy = CategoryPolicy::MustMatch("Security".to_owned());
        match check(content, &config) {
            DocCheck::Checked { errors, .. } => {
                let category_errors: Vec<_> =
                    errors.iter().filter(|e| e.field == "category").collect();
                assert_eq!(category_errors.len(), 1, "got: {category_errors:?}");
                assert!(category_errors[0].error.contains("missing"));
            }
            _ => panic!("expected Checked"),
        }
    }
}
