//! # guidedoc
//!
//! Document model for Markdown guides that carry a YAML front-matter block.
//!
//! A guide document is one leading front-matter block delimited by `---`
//! lines, followed by a Markdown body. This crate splits documents, models
//! the metadata schema (title, description, type, category, tags, icon,
//! color, publishedAt), and provides field-level metadata checks. It is
//! input-agnostic: filesystem discovery and reporting live in
//! `guidedoc-lint`.
//!
//! ## Quick Start
//!
//! ```rust
//! use guidedoc::{Document, GuideMeta};
//!
//! let content = "---\n\
//!     title: Docker Security\n\
//!     description: Hardening containers\n\
//!     type: Guide\n\
//!     category: Security\n\
//!     tags: [docker, containers]\n\
//!     publishedAt: 2024-03-01\n\
//!     ---\n\
//!     # Docker Security\n";
//!
//! let doc = Document::parse(content).unwrap();
//! let meta = GuideMeta::from_yaml(&doc.raw_front_matter).unwrap();
//! assert_eq!(meta.title, "Docker Security");
//! assert_eq!(doc.body_start_line, 9);
//! ```

pub mod document;
pub mod meta;

pub use document::{Document, DocumentError};
pub use meta::{GuideMeta, MetaIssue, check_meta, parse_front_matter};
