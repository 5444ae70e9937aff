//! Front-matter metadata schema and field-level checks.
//!
//! Two consumption paths:
//! 1. [`GuideMeta::from_yaml`] — typed deserialization for programmatic
//!    consumers; fails as a whole on any schema violation.
//! 2. [`parse_front_matter`] + [`check_meta`] — parse into a
//!    [`serde_json::Value`] tree and report every field problem
//!    individually. Linters want this path: one document with three missing
//!    fields yields three issues, not one opaque deserialization error.
//!
//! Unknown extra fields are tolerated on both paths — guide corpora grow
//! fields over time.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fields every guide document must carry.
pub const REQUIRED_STRING_FIELDS: &[&str] = &["title", "description", "type", "category"];

/// Date format for `publishedAt`.
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%d";

/// Hex color: `#RGB` or `#RRGGBB`.
static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid hex color regex: {err}"),
    }
});

/// The front-matter block could not be parsed as YAML.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("front-matter YAML parse error: {0}")]
pub struct MetaParseError(pub String);

/// Typed view of a guide's front-matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideMeta {
    /// Document title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Document kind, e.g. "Guide".
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Corpus category, e.g. "Security".
    pub category: String,
    /// Free-form labels. Must be non-empty.
    pub tags: Vec<String>,
    /// Symbol or emoji shown in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Accent color as a hex code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Publication date, `YYYY-MM-DD`.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

impl GuideMeta {
    /// Deserialize front-matter YAML into a typed `GuideMeta`.
    ///
    /// # Errors
    ///
    /// Returns [`MetaParseError`] if the YAML does not parse or does not
    /// match the schema. Use [`parse_front_matter`] + [`check_meta`] for
    /// field-granular diagnostics instead.
    pub fn from_yaml(raw: &str) -> Result<Self, MetaParseError> {
        serde_saphyr::from_str(raw).map_err(|e| MetaParseError(e.to_string()))
    }

    /// Publication date as a parsed calendar date.
    ///
    /// # Errors
    ///
    /// Returns a [`chrono::ParseError`] if `publishedAt` is not a valid
    /// `YYYY-MM-DD` date.
    pub fn published_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(&self.published_at, PUBLISHED_AT_FORMAT)
    }
}

/// A single field-level metadata problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct MetaIssue {
    /// The front-matter field the issue concerns, e.g. "tags".
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl MetaIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            message: message.into(),
        }
    }
}

/// Parse raw front-matter YAML into a JSON value tree.
///
/// YAML deserializes through `serde_json::Value` so the same field checks
/// apply regardless of how consumers obtained the metadata.
///
/// # Errors
///
/// Returns [`MetaParseError`] if the YAML does not parse at all.
pub fn parse_front_matter(raw: &str) -> Result<Value, MetaParseError> {
    serde_saphyr::from_str::<Value>(raw).map_err(|e| MetaParseError(e.to_string()))
}

/// Check a parsed front-matter tree against the guide schema.
///
/// Returns one [`MetaIssue`] per violated field. An empty vec means the
/// metadata is schema-clean.
#[must_use]
pub fn check_meta(value: &Value) -> Vec<MetaIssue> {
    let Some(map) = value.as_object() else {
        return vec![MetaIssue::new(
            "",
            "front-matter is not a key-value mapping",
        )];
    };

    let mut issues = Vec::new();

    for field in REQUIRED_STRING_FIELDS {
        match map.get(*field) {
            None => issues.push(MetaIssue::new(field, "required field is missing")),
            Some(Value::String(s)) if s.trim().is_empty() => {
                issues.push(MetaIssue::new(field, "field is empty"));
            }
            Some(Value::String(_)) => {}
            Some(other) => issues.push(MetaIssue::new(
                field,
                format!("expected a string, found {}", value_kind(other)),
            )),
        }
    }

    check_tags(map.get("tags"), &mut issues);
    check_published_at(map.get("publishedAt"), &mut issues);

    // Optional fields: only checked when present.
    if let Some(icon) = map.get("icon") {
        match icon {
            Value::String(s) if s.trim().is_empty() => {
                issues.push(MetaIssue::new("icon", "field is empty"));
            }
            Value::String(_) => {}
            other => issues.push(MetaIssue::new(
                "icon",
                format!("expected a string, found {}", value_kind(other)),
            )),
        }
    }
    if let Some(color) = map.get("color") {
        match color {
            Value::String(s) if HEX_COLOR_PATTERN.is_match(s) => {}
            Value::String(s) => issues.push(MetaIssue::new(
                "color",
                format!("'{s}' is not a hex color (#RGB or #RRGGBB)"),
            )),
            other => issues.push(MetaIssue::new(
                "color",
                format!("expected a string, found {}", value_kind(other)),
            )),
        }
    }

    issues
}

fn check_tags(tags: Option<&Value>, issues: &mut Vec<MetaIssue>) {
    let Some(tags) = tags else {
        issues.push(MetaIssue::new("tags", "required field is missing"));
        return;
    };
    let Some(items) = tags.as_array() else {
        issues.push(MetaIssue::new(
            "tags",
            format!("expected a sequence of strings, found {}", value_kind(tags)),
        ));
        return;
    };
    if items.is_empty() {
        issues.push(MetaIssue::new("tags", "tag sequence is empty"));
        return;
    }

    let mut seen: Vec<&str> = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match item {
            Value::String(s) if s.trim().is_empty() => {
                issues.push(MetaIssue::new("tags", format!("tag {} is empty", idx + 1)));
            }
            Value::String(s) => {
                if seen.contains(&s.as_str()) {
                    issues.push(MetaIssue::new("tags", format!("duplicate tag '{s}'")));
                } else {
                    seen.push(s);
                }
            }
            other => issues.push(MetaIssue::new(
                "tags",
                format!("tag {} is not a string ({})", idx + 1, value_kind(other)),
            )),
        }
    }
}

fn check_published_at(published: Option<&Value>, issues: &mut Vec<MetaIssue>) {
    let Some(published) = published else {
        issues.push(MetaIssue::new("publishedAt", "required field is missing"));
        return;
    };
    let Some(s) = published.as_str() else {
        issues.push(MetaIssue::new(
            "publishedAt",
            format!("expected a date string, found {}", value_kind(published)),
        ));
        return;
    };
    if NaiveDate::parse_from_str(s, PUBLISHED_AT_FORMAT).is_err() {
        issues.push(MetaIssue::new(
            "publishedAt",
            format!("'{s}' is not a valid YYYY-MM-DD date"),
        ));
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
