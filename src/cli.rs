// src/cli.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::{
    config::{
        consts::CONFIG_FILE,
        file::apply_pair,
        options::{AppOptions, ConfigError},
    },
    core::sanitize::normalize_ws,
    export::{self, ExportError},
    filter,
    loader::{self, LoadError},
    state::{reduce, Event, LoadStatus, MonitorState},
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    /// Config-file keys overridden on the command line, in order.
    pub overrides: Vec<(&'static str, String)>,
    pub export: bool,
    pub help: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    let value = |flag: &str, args: &mut I::IntoIter| {
        args.next().ok_or_else(|| CliError::Usage(format!("Missing value for {flag}")))
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--base" => { let v = value(&a, &mut args)?; out.overrides.push(("base", v)); }
            "--timeout" => { let v = value(&a, &mut args)?; out.overrides.push(("timeout_secs", v)); }
            "--out" | "-o" => { let v = value(&a, &mut args)?; out.overrides.push(("out_dir", v)); }
            "--prefix" => { let v = value(&a, &mut args)?; out.overrides.push(("prefix", v)); }
            "--locale" => { let v = value(&a, &mut args)?; out.overrides.push(("locale", v)); }
            "--config" => out.config = Some(PathBuf::from(value(&a, &mut args)?)),
            "--changed" => out.overrides.push(("mode", s!("changed"))),
            "--all" | "-a" => out.overrides.push(("mode", s!("all"))),
            "--export" => out.export = true,
            "-h" | "--help" => out.help = true,
            _ => return Err(CliError::Usage(format!("Unknown arg: {a}"))),
        }
    }
    Ok(out)
}

/// Config file first, then command-line overrides on top.
pub fn resolve_options(args: &CliArgs) -> Result<AppOptions, CliError> {
    let path = args.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    if args.config.is_some() && !path.exists() {
        return Err(CliError::Usage(format!("Config file not found: {}", path.display())));
    }
    let mut opts = AppOptions::load(&path)?;
    for (key, val) in &args.overrides {
        apply_pair(&mut opts, key, val)?;
    }
    Ok(opts)
}

pub fn run() -> Result<(), CliError> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    let opts = resolve_options(&args)?;
    logf!("CLI: source={:?} mode={:?} export={}", opts.source.base, opts.view, args.export);

    let mut state = reduce(MonitorState::new(opts.view), Event::LoadRequested);
    state = match loader::load(&opts.source) {
        Ok(ds) => reduce(state, Event::LoadSucceeded(ds)),
        Err(e) => reduce(state, Event::LoadFailed(e)),
    };
    if let LoadStatus::Failed(e) = &state.status {
        return Err(e.clone().into());
    }

    let shown = filter::visible(&state.dataset, state.mode);
    println!("Last updated: {}", state.dataset.last_updated);
    for e in &shown {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            e.license,
            e.code,
            normalize_ws(&e.name),
            opts.export.locale.changed_label(e.is_changed),
            e.change_date().unwrap_or("-"),
        );
    }
    println!(
        "{} of {} entries shown ({} changed)",
        shown.len(),
        state.dataset.len(),
        filter::changed_count(&state.dataset)
    );

    if args.export {
        let today = chrono::Local::now().date_naive();
        let path = export::export_report(&opts.export, shown.iter().copied(), today)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
