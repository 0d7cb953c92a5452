// tests/config_options.rs

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use fda_monitor::cli::{parse_args, resolve_options, CliError};
use fda_monitor::config::consts::{DATA_FILE, DEFAULT_OUT_DIR};
use fda_monitor::config::file::{apply_file, apply_text};
use fda_monitor::config::options::{
    AppOptions, ConfigError, DataSource, ExportOptions, Locale, Location, ViewMode,
};

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn remote_base_gets_trailing_slash_before_join() {
    let src = DataSource::parse("https://example.org/fda-monitor").unwrap();
    match src.data_location() {
        Location::Url(u) => assert_eq!(u.as_str(), "https://example.org/fda-monitor/data.json"),
        other => panic!("expected url, got {other:?}"),
    }

    let src = DataSource::parse("  HTTP://example.org/  ").unwrap();
    assert!(matches!(src, DataSource::Remote(_)));
}

#[test]
fn bad_bases_are_rejected() {
    assert!(matches!(DataSource::parse(""), Err(ConfigError::InvalidBase(..))));
    assert!(matches!(DataSource::parse("ftp://example.org/"), Err(ConfigError::InvalidBase(..))));
    assert!(matches!(DataSource::parse("https://"), Err(ConfigError::InvalidBase(..))));
}

#[test]
fn local_base_resolves_to_file_in_dir() {
    let src = DataSource::parse("public").unwrap();
    assert_eq!(src, DataSource::Local(PathBuf::from("public")));
    assert_eq!(src.data_location(), Location::Path(PathBuf::from("public").join(DATA_FILE)));
}

#[test]
fn local_base_pointing_at_a_file_is_rejected() {
    let dir = std::env::temp_dir().join(format!("fda_monitor_cfg_file_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("plain.txt");
    fs::write(&file, "x").unwrap();

    let err = DataSource::parse(file.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("not a directory"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn mode_and_locale_parse() {
    assert_eq!(ViewMode::parse("Changed").unwrap(), ViewMode::ShowChanged);
    assert_eq!(ViewMode::parse(" all ").unwrap(), ViewMode::ShowAll);
    assert!(ViewMode::parse("some").is_err());

    assert_eq!(Locale::parse("zh_TW").unwrap(), Locale::ZhTw);
    assert_eq!(Locale::parse("en").unwrap(), Locale::En);
    assert!(Locale::parse("fr").is_err());
}

#[test]
fn config_text_applies_known_keys() {
    let mut opts = AppOptions::default();
    apply_text(
        &mut opts,
        "# comment\n\
         base = https://example.org/x/\n\
         timeout_secs=30\n\
         mode=changed\n\
         out_dir=reports\n\
         prefix=weekly\n\
         locale=zh-tw\n\
         colour=blue\n\
         no equals sign here\n",
    )
    .unwrap();

    assert!(matches!(opts.source.base, DataSource::Remote(ref u) if u.as_str() == "https://example.org/x/"));
    assert_eq!(opts.source.timeout, Duration::from_secs(30));
    assert_eq!(opts.view, ViewMode::ShowChanged);
    assert_eq!(opts.export.out_dir, PathBuf::from("reports"));
    assert_eq!(opts.export.prefix(), "weekly");
    assert_eq!(opts.export.locale, Locale::ZhTw);
}

#[test]
fn config_rejects_bad_values() {
    let mut opts = AppOptions::default();
    let err = apply_text(&mut opts, "timeout_secs=0").unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: "timeout_secs".into(), value: "0".into() });
    assert!(apply_text(&mut opts, "mode=sometimes").is_err());
}

#[test]
fn missing_config_file_is_not_an_error() {
    let mut opts = AppOptions::default();
    let path = std::env::temp_dir().join("fda_monitor_no_such_config.cfg");
    assert!(!apply_file(&mut opts, &path).unwrap());
    assert_eq!(opts.export.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
}

#[test]
fn report_file_name_uses_prefix_and_date() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let mut e = ExportOptions::default();
    assert_eq!(e.file_name(d), "report_2024-01-02.xlsx");

    e.set_prefix("  ");
    assert_eq!(e.file_name(d), "report_2024-01-02.xlsx");

    e.set_prefix("a/b:c");
    assert_eq!(e.file_name(d), "abc_2024-01-02.xlsx");

    e.locale = Locale::ZhTw;
    e.set_prefix("");
    assert_eq!(e.file_name(d), "仿單異動檢查表_2024-01-02.xlsx");
}

#[test]
fn cli_flags_collect_overrides_in_order() {
    let a = parse_args(args(&["--base", "dir", "--changed", "--export", "-o", "x", "--all"])).unwrap();
    assert!(a.export);
    assert!(!a.help);
    assert_eq!(
        a.overrides,
        vec![
            ("base", "dir".to_string()),
            ("mode", "changed".to_string()),
            ("out_dir", "x".to_string()),
            ("mode", "all".to_string()),
        ]
    );
}

#[test]
fn cli_usage_errors() {
    assert!(matches!(parse_args(args(&["--bogus"])), Err(CliError::Usage(_))));
    assert!(matches!(parse_args(args(&["--base"])), Err(CliError::Usage(m)) if m.contains("--base")));
}

#[test]
fn cli_overrides_win_over_config_file() {
    let dir = std::env::temp_dir().join(format!("fda_monitor_cfg_cli_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let cfg = dir.join("fda_monitor.cfg");
    fs::write(&cfg, "mode=changed\nprefix=from_file\nlocale=zh-tw\n").unwrap();

    let mut a = parse_args(args(&["--all", "--prefix", "from_cli"])).unwrap();
    a.config = Some(cfg);
    let opts = resolve_options(&a).unwrap();
    assert_eq!(opts.view, ViewMode::ShowAll);
    assert_eq!(opts.export.prefix(), "from_cli");
    assert_eq!(opts.export.locale, Locale::ZhTw);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn explicit_missing_config_is_a_usage_error() {
    let mut a = parse_args(Vec::new()).unwrap();
    a.config = Some(std::env::temp_dir().join("fda_monitor_missing_explicit.cfg"));
    assert!(matches!(resolve_options(&a), Err(CliError::Usage(_))));
}
