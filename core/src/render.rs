//! Markdown rendering of a [`BenchmarkTable`] and the end-to-end report run.

use crate::config::ReportConfig;
use crate::discovery::Discovery;
use crate::error::{ReportError, Result};
use crate::extract::build_table;
use crate::table::{BenchmarkTable, Row};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Title, description and table header. Has no trailing newline; every data
/// row is prefixed with one instead.
const README_TEMPLATE: &str = include_str!("readme_template.md");
const TITLE_PLACEHOLDER: &str = "__TITLE__";
const DESCRIPTION_PLACEHOLDER: &str = "__DESCRIPTION__";

/// Escape characters that markdown would interpret inside a table cell.
pub fn escape_cell(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '_' => out.push_str("\\_"),
            '|' => out.push_str("\\|"),
            other => out.push(other),
        }
    }
    out
}

fn write_row(out: &mut String, row: &Row<'_>) {
    let _ = write!(
        out,
        "\n{} | {} | {:6.1} | {:6.1}",
        escape_cell(row.group_id),
        escape_cell(row.function_id),
        row.record.runtime_ns,
        row.record.throughput()
    );
}

/// Render the report text. Rows are ordered by group, then function.
pub fn render(table: &BenchmarkTable, config: &ReportConfig) -> String {
    let mut out = README_TEMPLATE
        .replace(TITLE_PLACEHOLDER, &config.title)
        .replace(DESCRIPTION_PLACEHOLDER, &config.description);
    for row in table.rows() {
        write_row(&mut out, &row);
    }
    out
}

/// Overwrite `path` with the report, creating its directory if needed.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    fs::write(path, contents.as_bytes()).map_err(|e| ReportError::io(path, e))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub output_path: PathBuf,
    pub rows: usize,
    pub groups: usize,
}

/// Collect every benchmark under `config.criterion_dir` and render the report.
///
/// Nothing is written; see [`generate`].
pub fn collect(config: &ReportConfig) -> Result<(BenchmarkTable, String)> {
    let discovery = Discovery::new(&config.criterion_dir);
    let table = build_table(&discovery)?;
    tracing::info!(
        root = %config.criterion_dir.display(),
        benchmarks = table.len(),
        groups = table.group_count(),
        "collected benchmark results"
    );
    let text = render(&table, config);
    Ok((table, text))
}

/// Build the table, render it and write it to `config.output_path`.
///
/// The output file is only opened once every input has been read, so a
/// failing run leaves any previous report untouched.
pub fn generate(config: &ReportConfig) -> Result<ReportSummary> {
    let (table, text) = collect(config)?;
    write_report(&config.output_path, &text)?;
    tracing::info!(output = %config.output_path.display(), "wrote benchmark summary");
    Ok(ReportSummary {
        output_path: config.output_path.clone(),
        rows: table.len(),
        groups: table.group_count(),
    })
}
