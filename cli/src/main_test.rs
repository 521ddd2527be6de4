mod tests {
    use crate::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_args_default_to_nothing() {
        let args = CliArgs::try_parse_from(["bench-readme"]).expect("should parse");
        assert!(args.config.is_none());
        assert!(args.root.is_none());
        assert!(args.criterion_dir.is_none());
        assert!(args.output.is_none());
        assert!(!args.stdout);
    }

    #[test]
    fn test_cli_args_rejects_positional() {
        assert!(CliArgs::try_parse_from(["bench-readme", "extra"]).is_err());
    }

    #[test]
    fn test_resolve_config_root_only() {
        let dir = tempdir().expect("tempdir");
        let args = CliArgs::try_parse_from(["bench-readme", "--root", dir.path().to_str().unwrap()]).expect("parse");
        let config = resolve_config(&args).expect("resolve");
        assert_eq!(config.criterion_dir, dir.path().join("target/criterion"));
        assert_eq!(config.output_path, dir.path().join("benches/README.md"));
    }

    #[test]
    fn test_resolve_config_picks_up_project_file() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("bench-readme.toml"), "title = \"From file\"\n").expect("write config");
        let args = CliArgs::try_parse_from(["bench-readme", "--root", dir.path().to_str().unwrap()]).expect("parse");
        let config = resolve_config(&args).expect("resolve");
        assert_eq!(config.title, "From file");
        assert_eq!(config.criterion_dir, dir.path().join("target/criterion"));
    }

    #[test]
    fn test_resolve_config_flags_override_file() {
        let dir = tempdir().expect("tempdir");
        let config_path = dir.path().join("custom.toml");
        fs::write(&config_path, "output_path = \"docs/BENCH.md\"\n").expect("write config");
        let args = CliArgs::try_parse_from([
            "bench-readme",
            "--config",
            config_path.to_str().unwrap(),
            "--criterion-dir",
            "/tmp/criterion",
        ])
        .expect("parse");
        let config = resolve_config(&args).expect("resolve");
        assert_eq!(config.output_path, dir.path().join("docs/BENCH.md"));
        assert_eq!(config.criterion_dir, PathBuf::from("/tmp/criterion"));
    }

    #[test]
    fn test_resolve_config_missing_explicit_file_fails() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let args = CliArgs::try_parse_from(["bench-readme", "--config", missing.to_str().unwrap()]).expect("parse");
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn test_trace_env_toggle() {
        assert!(!env_toggle_enabled(""));
        assert!(!env_toggle_enabled("off"));
        assert!(!env_toggle_enabled("0"));
        assert!(env_toggle_enabled("1"));
        assert!(env_toggle_enabled("bench_readme_core=trace"));
        assert_eq!(filter_expr_from("true"), None);
        assert_eq!(
            filter_expr_from(" bench_readme_core=trace "),
            Some("bench_readme_core=trace".to_string())
        );
    }
}
