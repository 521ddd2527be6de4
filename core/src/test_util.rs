use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// Lay out `<root>/<bench_dir>/new/{benchmark,estimates}.json` like Criterion does.
pub fn write_bench_dir(root: &Path, bench_dir: &str, meta: &str, estimates: &str) -> PathBuf {
    let dir = root.join(bench_dir).join("new");
    fs::create_dir_all(&dir).expect("create bench dir");
    fs::write(dir.join("benchmark.json"), meta).expect("write benchmark.json");
    fs::write(dir.join("estimates.json"), estimates).expect("write estimates.json");
    dir
}

pub fn meta_json(group_id: &str, function_id: Option<&str>) -> String {
    json!({
        "group_id": group_id,
        "function_id": function_id,
        "value_str": null,
        "throughput": null,
        "full_id": format!("{}/{}", group_id, function_id.unwrap_or_default()),
        "directory_name": group_id,
    })
    .to_string()
}

pub fn estimates_json(slope_ns: f64) -> String {
    let estimate = |value: f64| {
        json!({
            "confidence_interval": {
                "confidence_level": 0.95,
                "lower_bound": value * 0.98,
                "upper_bound": value * 1.02,
            },
            "point_estimate": value,
            "standard_error": value * 0.01,
        })
    };
    json!({
        "Mean": estimate(slope_ns * 1.01),
        "Median": estimate(slope_ns),
        "MedianAbsDev": estimate(slope_ns * 0.05),
        "Slope": estimate(slope_ns),
        "StdDev": estimate(slope_ns * 0.1),
    })
    .to_string()
}

pub fn add_bench(root: &Path, bench_dir: &str, group_id: &str, function_id: Option<&str>, slope_ns: f64) -> PathBuf {
    write_bench_dir(root, bench_dir, &meta_json(group_id, function_id), &estimates_json(slope_ns))
}
