//! Core data types for parsed LCOV records.
//!
//! These are plain values produced by the parser and consumed by the
//! summary aggregator. Counters are kept exactly as the report states them;
//! nothing here derives `found` or `hit` from the detail lists.

/// Execution count for a single instrumented line (`DA:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDetail {
    pub line: u32,
    pub hit: u64,
}

/// A function definition (`FN:`) and its execution count (`FNDA:`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDetail {
    pub name: String,
    pub line: u32,
    pub hit: u64,
}

/// A single branch arm (`BRDA:`). A `-` taken count is stored as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchDetail {
    pub line: u32,
    pub block: u32,
    pub branch: u32,
    pub taken: u64,
}

/// Reported counters plus the detail entries for one coverage kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<D> {
    /// Number of instrumented items (`LF`, `FNF`, `BRF`)
    pub found: u64,
    /// Number of items executed at least once (`LH`, `FNH`, `BRH`)
    pub hit: u64,
    pub details: Vec<D>,
}

impl<D> Default for Section<D> {
    fn default() -> Self {
        Self {
            found: 0,
            hit: 0,
            details: Vec::new(),
        }
    }
}

pub type LineSection = Section<LineDetail>;
pub type FunctionSection = Section<FunctionDetail>;
pub type BranchSection = Section<BranchDetail>;

/// Coverage data for one source file, terminated by `end_of_record`.
///
/// # Example
///
/// ```
/// use lcovgate::lcov::parse_lcov;
///
/// let records = parse_lcov("SF:src/lib.rs\nLF:4\nLH:3\nend_of_record\n");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].file, "src/lib.rs");
/// assert_eq!(records[0].lines.found, 4);
/// assert_eq!(records[0].lines.hit, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRecord {
    /// Test name from `TN:`, if one was given
    pub title: Option<String>,
    /// Source file path from `SF:`
    pub file: String,
    pub lines: LineSection,
    pub functions: FunctionSection,
    pub branches: BranchSection,
}

impl CoverageRecord {
    /// Create an empty record for a source file.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            title: None,
            file: file.into(),
            lines: LineSection::default(),
            functions: FunctionSection::default(),
            branches: BranchSection::default(),
        }
    }
}
