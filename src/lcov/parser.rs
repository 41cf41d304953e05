//! LCOV text parser - the imperative shell.
//!
//! Splits the report into directives and dispatches each one to the pure
//! handlers in [`super::handlers`]. The parser state is folded over the
//! lines, so a parse call owns its accumulator from start to finish.
//!
//! # Example
//!
//! ```
//! use lcovgate::lcov::parse_lcov;
//!
//! let report = "TN:unit\nSF:src/main.rs\nDA:1,1\nLF:1\nLH:1\nend_of_record\n";
//! let records = parse_lcov(report);
//! assert_eq!(records[0].title.as_deref(), Some("unit"));
//! assert_eq!(records[0].lines.details.len(), 1);
//! ```

use super::handlers::{
    handle_branch_data, handle_counter, handle_end_of_record, handle_function_data,
    handle_function_name, handle_line_data, handle_source_file, handle_test_name, Counter,
    LcovParserState,
};
use super::types::CoverageRecord;

/// Split a report line into its tag and trimmed value.
///
/// Only the first `:` separates the two, so values such as Windows paths
/// keep their own colons. A line without `:` is a bare tag with an empty
/// value. Returns `None` for blank lines.
pub fn split_directive(line: &str) -> Option<(&str, &str)> {
    if line.trim().is_empty() {
        return None;
    }
    let line = line.trim_end_matches('\r');
    Some(match line.split_once(':') {
        Some((tag, value)) => (tag, value.trim()),
        None => (line, ""),
    })
}

/// Apply one report line to the parser state.
fn apply_line(mut state: LcovParserState, line: &str) -> LcovParserState {
    let Some((tag, value)) = split_directive(line) else {
        return state;
    };

    match tag {
        "TN" => handle_test_name(&mut state, value),
        "SF" => handle_source_file(&mut state, value),
        "FNF" => handle_counter(state.current.functions.as_mut(), Counter::Found, value),
        "FNH" => handle_counter(state.current.functions.as_mut(), Counter::Hit, value),
        "FN" => handle_function_name(&mut state, value),
        "FNDA" => handle_function_data(&mut state, value),
        "LF" => handle_counter(state.current.lines.as_mut(), Counter::Found, value),
        "LH" => handle_counter(state.current.lines.as_mut(), Counter::Hit, value),
        "DA" => handle_line_data(&mut state, value),
        "BRF" => handle_counter(state.current.branches.as_mut(), Counter::Found, value),
        "BRH" => handle_counter(state.current.branches.as_mut(), Counter::Hit, value),
        "BRDA" => handle_branch_data(&mut state, value),
        "end_of_record" => handle_end_of_record(&mut state),
        other => log::trace!("Ignoring unknown LCOV tag {:?}", other),
    }

    state
}

/// Parse LCOV text into per-file records.
///
/// Never fails: unknown tags, directives outside a record and malformed
/// numbers are skipped. Records are only emitted on `end_of_record`, so a
/// report that stops mid-record loses that record.
pub fn parse_lcov(content: &str) -> Vec<CoverageRecord> {
    let state = content.lines().fold(LcovParserState::new(), apply_line);

    if state.current.file.is_some() {
        log::debug!("LCOV input ended inside an unterminated record; it was dropped");
    }
    log::debug!("Parsed {} LCOV records", state.records.len());

    state.records
}
