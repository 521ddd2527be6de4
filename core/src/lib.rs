//! Summarize Criterion benchmark results into a markdown table.
//!
//! The pipeline is [`discovery`] (find `new/` result directories), [`extract`]
//! (read `benchmark.json` and `estimates.json`), and [`render`] (sort and
//! write the table). [`render::generate`] runs all three.

pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod render;
pub mod table;

#[cfg(test)]
mod test_util;

pub use config::ReportConfig;
pub use discovery::{BenchmarkFiles, Discovery};
pub use error::ReportError;
pub use extract::{build_table, extract};
pub use render::{ReportSummary, generate, render};
pub use table::{BenchmarkKey, BenchmarkRecord, BenchmarkTable};
