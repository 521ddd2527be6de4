//! Reading the Criterion JSON files of one benchmark.
//!
//! The files are deserialized into lenient schema types first; required
//! values are then checked in one place per file ([`BenchmarkMeta::key`],
//! [`Estimates::runtime`]) so a missing value always becomes
//! [`ReportError::MissingField`] while a value of the wrong type is a
//! [`ReportError::Parse`].

use crate::discovery::{BenchmarkFiles, Discovery};
use crate::error::{ReportError, Result};
use crate::table::{BenchmarkKey, BenchmarkRecord, BenchmarkTable};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Contents of `benchmark.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchmarkMeta {
    pub group_id: Option<String>,
    pub function_id: Option<String>,
}

impl BenchmarkMeta {
    /// `function_id` falls back to `group_id` when it is absent, `null` or empty.
    pub fn key(self, path: &Path) -> Result<BenchmarkKey> {
        let group_id = self
            .group_id
            .ok_or_else(|| ReportError::missing_field(path, "group_id"))?;
        let function_id = match self.function_id {
            Some(function_id) if !function_id.is_empty() => function_id,
            _ => group_id.clone(),
        };
        Ok(BenchmarkKey { group_id, function_id })
    }
}

/// Contents of `estimates.json`. Only the slope estimate is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Estimates {
    #[serde(rename = "Slope", alias = "slope")]
    pub slope: Option<Estimate>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Estimate {
    pub point_estimate: Option<f64>,
}

impl Estimates {
    /// Slope point estimate in nanoseconds.
    ///
    /// Zero, negative and non-finite values are rejected since no throughput
    /// can be derived from them.
    pub fn runtime(&self, path: &Path) -> Result<f64> {
        let value = self
            .slope
            .and_then(|slope| slope.point_estimate)
            .ok_or_else(|| ReportError::missing_field(path, "Slope.point_estimate"))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(ReportError::InvalidRuntime {
                path: path.to_path_buf(),
                value,
            });
        }
        Ok(value)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| ReportError::parse(path, e))
}

/// Turn one pair of result files into a table entry.
pub fn extract(files: &BenchmarkFiles) -> Result<(BenchmarkKey, BenchmarkRecord)> {
    let meta: BenchmarkMeta = read_json(&files.metadata)?;
    let key = meta.key(&files.metadata)?;

    let estimates: Estimates = read_json(&files.estimates)?;
    let runtime_ns = estimates.runtime(&files.estimates)?;

    Ok((key, BenchmarkRecord::new(runtime_ns)))
}

/// Extract every benchmark under the discovery root.
///
/// Stops at the first failing benchmark. When two directories report the same
/// key, the one visited later wins.
pub fn build_table(discovery: &Discovery) -> Result<BenchmarkTable> {
    let mut table = BenchmarkTable::new();
    for files in discovery.iter() {
        let (key, record) = extract(&files)?;
        tracing::trace!(
            group = %key.group_id,
            function = %key.function_id,
            runtime_ns = record.runtime_ns,
            "extracted benchmark"
        );
        if let Some(previous) = table.insert(key.clone(), record) {
            tracing::debug!(
                group = %key.group_id,
                function = %key.function_id,
                previous_ns = previous.runtime_ns,
                source = %files.estimates.display(),
                "duplicate benchmark key, keeping the later result"
            );
        }
    }
    Ok(table)
}
