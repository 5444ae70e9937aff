//! Lint source strategies.
//!
//! Only the filesystem strategy exists (`fs` module) behind the concrete
//! `lint_fs()` public API. A source trait may be introduced when a second
//! concrete strategy demands it; until then the design stays concrete to
//! avoid speculative abstraction.

pub mod fs;
