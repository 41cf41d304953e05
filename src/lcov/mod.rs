//! LCOV coverage report parsing.
//!
//! The module is layered: plain data at the bottom, per-directive state
//! transformations above it, and the line-level driver on top. Reading the
//! report from disk or a subprocess happens in [`crate::collector`].
//!
//! - [`types`] - Parsed record definitions (pure data)
//! - [`handlers`] - Per-directive state transformations (pure functions)
//! - [`parser`] - Line splitting and dispatch over the whole report
//!
//! ```text
//!     types.rs
//!        ↓
//!   handlers.rs
//!        ↓
//!    parser.rs (fold over lines)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use lcovgate::lcov::parse_lcov;
//!
//! let records = parse_lcov("SF:src/a.rs\nFNF:2\nFNH:1\nend_of_record\n");
//! assert_eq!(records[0].functions.found, 2);
//! assert_eq!(records[0].functions.hit, 1);
//! ```

pub mod handlers;
pub mod parser;
pub mod types;

pub use handlers::parse_count;
pub use parser::{parse_lcov, split_directive};
pub use types::{
    BranchDetail, BranchSection, CoverageRecord, FunctionDetail, FunctionSection, LineDetail,
    LineSection, Section,
};
