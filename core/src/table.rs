use std::collections::BTreeMap;

/// Identifies one benchmark: its Criterion group and the function inside it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BenchmarkKey {
    pub group_id: String,
    pub function_id: String,
}

impl BenchmarkKey {
    pub fn new(group_id: impl Into<String>, function_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            function_id: function_id.into(),
        }
    }
}

/// Measured cost of one operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkRecord {
    /// Slope point estimate reported by Criterion, in nanoseconds.
    pub runtime_ns: f64,
}

impl BenchmarkRecord {
    pub fn new(runtime_ns: f64) -> Self {
        Self { runtime_ns }
    }

    /// Millions of operations per second.
    pub fn throughput(&self) -> f64 {
        1000.0 / self.runtime_ns
    }
}

/// One line of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    pub group_id: &'a str,
    pub function_id: &'a str,
    pub record: BenchmarkRecord,
}

/// Results of a run, grouped by `group_id` and then `function_id`.
///
/// Both levels are ordered maps so rows always come out sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTable {
    groups: BTreeMap<String, BTreeMap<String, BenchmarkRecord>>,
}

impl BenchmarkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, returning the one it replaced for the same key.
    pub fn insert(&mut self, key: BenchmarkKey, record: BenchmarkRecord) -> Option<BenchmarkRecord> {
        self.groups
            .entry(key.group_id)
            .or_default()
            .insert(key.function_id, record)
    }

    pub fn get(&self, group_id: &str, function_id: &str) -> Option<&BenchmarkRecord> {
        self.groups.get(group_id)?.get(function_id)
    }

    /// Number of benchmarks.
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.groups.iter().flat_map(|(group_id, functions)| {
            functions.iter().map(move |(function_id, record)| Row {
                group_id: group_id.as_str(),
                function_id: function_id.as_str(),
                record: *record,
            })
        })
    }
}
