//! Per-file lint checks.
//!
//! Each sub-module handles one layer of a guide document:
//! - `front_matter` — YAML block extraction and metadata schema checks
//! - `body` — Markdown body checks (fence balance)

pub mod body;
pub mod front_matter;
