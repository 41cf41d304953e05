//! Terminal table rendering of a coverage summary.

use crate::summary::{CoverageMetrics, CoverageSummary};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};

const HEADERS: [&str; 4] = ["File", "Branch", "Line", "Function"];

/// Final path segment of a file path, or the whole path when it has none.
pub fn short_file_name(file: &str) -> &str {
    match file.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => file,
    }
}

/// Percentage rounded half away from zero, without decimals.
fn rounded_percentage(percentage: f64) -> String {
    format!("{:.0}", percentage.round())
}

fn metric_cells(metrics: &CoverageMetrics) -> [String; 3] {
    [
        rounded_percentage(metrics.branches.percentage),
        rounded_percentage(metrics.lines.percentage),
        rounded_percentage(metrics.functions.percentage),
    ]
}

/// Render the summary as a table with one row per file and a `Total` row.
pub fn format_summary(summary: &CoverageSummary) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(HEADERS);

    for entry in summary.files() {
        let [branch, line, function] = metric_cells(&entry.metrics);
        table.add_row(vec![
            short_file_name(&entry.file).to_string(),
            branch,
            line,
            function,
        ]);
    }

    let [branch, line, function] = metric_cells(&summary.total);
    table.add_row(vec!["Total".to_string(), branch, line, function]);

    for index in 1..HEADERS.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}
