use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::Context;
use bench_readme_core::{ReportConfig, config::CONFIG_FILE_NAME, render};
use clap::Parser;

#[cfg(test)]
mod main_test;

static TRACE_INIT: Once = Once::new();
const TRACE_ENV: &str = "BENCH_README_TRACE";
const DEFAULT_TRACE_FILTER: &str = "bench_readme_core=debug,bench_readme=info";

#[derive(Debug, Parser)]
#[command(
    name = "bench-readme",
    author,
    version,
    about = "Summarize Criterion benchmark results into a markdown table",
    long_about = None
)]
struct CliArgs {
    /// TOML configuration file (default: `bench-readme.toml` in the project directory, if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Project directory the default paths are relative to
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Criterion output directory to scan
    #[arg(long, value_name = "DIR")]
    criterion_dir: Option<PathBuf>,

    /// Markdown file to write
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the report instead of writing it
    #[arg(long)]
    stdout: bool,
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn maybe_init_tracing() {
    let raw = match std::env::var(TRACE_ENV) {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

/// Precedence: command line flags, then the config file, then built-in defaults.
fn resolve_config(args: &CliArgs) -> anyhow::Result<ReportConfig> {
    let root = args.root.as_deref().unwrap_or_else(|| Path::new(""));

    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => Some(root.join(CONFIG_FILE_NAME)).filter(|path| path.is_file()),
    };

    let mut config = match config_path {
        Some(path) => ReportConfig::load(&path)?,
        None => ReportConfig::with_root(root),
    };

    if let Some(dir) = &args.criterion_dir {
        config = config.with_criterion_dir(dir);
    }
    if let Some(path) = &args.output {
        config = config.with_output_path(path);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();
    let args = CliArgs::parse();
    let config = resolve_config(&args)?;
    tracing::debug!(?config, "resolved configuration");

    if args.stdout {
        let (_, text) = render::collect(&config)
            .with_context(|| format!("summarize benchmarks under {}", config.criterion_dir.display()))?;
        println!("{}", text);
        return Ok(());
    }

    let summary = render::generate(&config)
        .with_context(|| format!("summarize benchmarks under {}", config.criterion_dir.display()))?;
    println!(
        "Benchmark summary updated -> {} ({} benchmarks in {} groups)",
        summary.output_path.display(),
        summary.rows,
        summary.groups
    );
    Ok(())
}
