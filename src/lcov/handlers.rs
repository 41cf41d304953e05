//! Pure handler functions for LCOV directives.
//!
//! Each handler takes the parser state and the directive's value and
//! updates the record being accumulated. Handlers never fail: a directive
//! that arrives before `SF:` or carries a malformed number is dropped and
//! parsing carries on with the next line.
//!
//! # Handler Types
//!
//! - `handle_test_name` - TN: records
//! - `handle_source_file` - SF: records
//! - `handle_counter` - FNF/FNH/LF/LH/BRF/BRH records
//! - `handle_function_name` - FN: records
//! - `handle_function_data` - FNDA: records
//! - `handle_line_data` - DA: records
//! - `handle_branch_data` - BRDA: records
//! - `handle_end_of_record` - end_of_record markers

use super::types::{
    BranchDetail, BranchSection, CoverageRecord, FunctionDetail, FunctionSection, LineDetail,
    LineSection, Section,
};

/// The record being assembled between `SF:` and `end_of_record`.
///
/// Sections stay `None` until `SF:` initializes them, which is what lets
/// stray counters before the first source file fall through silently.
#[derive(Debug, Default)]
pub(crate) struct PartialRecord {
    pub title: Option<String>,
    pub file: Option<String>,
    pub lines: Option<LineSection>,
    pub functions: Option<FunctionSection>,
    pub branches: Option<BranchSection>,
}

impl PartialRecord {
    /// Turn the accumulator into a finished record, if it names a file.
    pub fn finish(self) -> Option<CoverageRecord> {
        let file = self.file?;
        Some(CoverageRecord {
            title: self.title,
            file,
            lines: self.lines.unwrap_or_default(),
            functions: self.functions.unwrap_or_default(),
            branches: self.branches.unwrap_or_default(),
        })
    }
}

/// State threaded through the fold over report lines.
#[derive(Debug, Default)]
pub(crate) struct LcovParserState {
    /// Records closed by `end_of_record`, in source order
    pub records: Vec<CoverageRecord>,
    /// Record currently being accumulated
    pub current: PartialRecord,
}

impl LcovParserState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Which reported counter a directive sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Counter {
    Found,
    Hit,
}

/// Best-effort integer parse over the leading digits of a field.
///
/// Surrounding whitespace and a leading `+` are accepted and trailing junk
/// is ignored, so `"12abc"` reads as 12. Returns `None` when the field does
/// not start with a digit or the value overflows.
pub fn parse_count(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().ok()
}

/// Parse a numeric field of a detail entry, recording malformed values as 0.
fn detail_number<T>(value: &str) -> T
where
    T: TryFrom<u64> + Default,
{
    parse_count(value)
        .and_then(|n| T::try_from(n).ok())
        .unwrap_or_default()
}

/// Split `<number>,<name>` where the name may itself contain commas.
fn split_number_and_name(value: &str) -> (&str, &str) {
    value.split_once(',').unwrap_or((value, ""))
}

/// Handle TN: set the test name on the current record.
pub(crate) fn handle_test_name(state: &mut LcovParserState, value: &str) {
    state.current.title = Some(value.to_string());
}

/// Handle SF: name the file and start fresh sections.
///
/// A title set by an earlier `TN:` is kept; only `end_of_record` clears it.
pub(crate) fn handle_source_file(state: &mut LcovParserState, value: &str) {
    state.current.file = Some(value.to_string());
    state.current.lines = Some(LineSection::default());
    state.current.functions = Some(FunctionSection::default());
    state.current.branches = Some(BranchSection::default());
}

/// Handle a found/hit counter for one section.
///
/// Ignored when the section has not been initialized or the value is not a
/// number; the previously reported value then stays in place.
pub(crate) fn handle_counter<D>(section: Option<&mut Section<D>>, counter: Counter, value: &str) {
    let Some(section) = section else {
        log::trace!("Ignoring {:?} counter outside of a source file", counter);
        return;
    };
    let Some(count) = parse_count(value) else {
        log::trace!("Ignoring malformed {:?} counter: {:?}", counter, value);
        return;
    };
    match counter {
        Counter::Found => section.found = count,
        Counter::Hit => section.hit = count,
    }
}

/// Handle FN: register a function with a zero hit count.
pub(crate) fn handle_function_name(state: &mut LcovParserState, value: &str) {
    let Some(functions) = state.current.functions.as_mut() else {
        return;
    };
    let (line, name) = split_number_and_name(value);
    functions.details.push(FunctionDetail {
        name: name.to_string(),
        line: detail_number(line),
        hit: 0,
    });
}

/// Handle FNDA: set the hit count of the first function with this name.
pub(crate) fn handle_function_data(state: &mut LcovParserState, value: &str) {
    let Some(functions) = state.current.functions.as_mut() else {
        return;
    };
    let (hits, name) = split_number_and_name(value);
    match functions.details.iter_mut().find(|f| f.name == name) {
        Some(function) => function.hit = detail_number(hits),
        None => log::trace!("FNDA for unknown function {:?}", name),
    }
}

/// Handle DA: append a line execution count.
pub(crate) fn handle_line_data(state: &mut LcovParserState, value: &str) {
    let Some(lines) = state.current.lines.as_mut() else {
        return;
    };
    let (line, hit) = value.split_once(',').unwrap_or((value, ""));
    lines.details.push(LineDetail {
        line: detail_number(line),
        hit: detail_number(hit),
    });
}

/// Handle BRDA: append a branch arm, reading a `-` taken count as 0.
pub(crate) fn handle_branch_data(state: &mut LcovParserState, value: &str) {
    let Some(branches) = state.current.branches.as_mut() else {
        return;
    };
    let mut fields = value.splitn(4, ',');
    let mut next = || fields.next().unwrap_or("");
    let (line, block, branch, taken) = (next(), next(), next(), next());
    branches.details.push(BranchDetail {
        line: detail_number(line),
        block: detail_number(block),
        branch: detail_number(branch),
        taken: if taken.trim() == "-" {
            0
        } else {
            detail_number(taken)
        },
    });
}

/// Handle end_of_record: emit the record if it has a file, then reset.
pub(crate) fn handle_end_of_record(state: &mut LcovParserState) {
    match std::mem::take(&mut state.current).finish() {
        Some(record) => state.records.push(record),
        None => log::trace!("Discarding end_of_record without a source file"),
    }
}
