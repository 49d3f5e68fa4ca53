//! `affected` command: resolve and report affected projects.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::{AffectedOptions, ChangeRequest};
use crate::config::{Config, OutputFormat};
use crate::presentation::cli::AffectedArgs;
use crate::presentation::create_affected_use_case;
use crate::presentation::output::{
    append_github_output, emit_event, render_text, AffectedEvent, RenderOptions,
};

pub fn cmd_affected(root: &Path, args: &AffectedArgs, json: bool) -> Result<()> {
    let (config, warnings) = Config::load_or_default(root, args.config.as_deref())
        .context("failed to load configuration")?;
    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown config key"
        );
    }

    let options = build_options(&config, args);
    let use_case = create_affected_use_case(root)?;
    let report = use_case.execute(&options)?;

    let render = RenderOptions {
        trace: args.trace,
        explain: args.explain.clone(),
    };
    if json || config.output.format == OutputFormat::Json {
        emit_event(&AffectedEvent::new(&report, &render))?;
    } else {
        println!("{}", render_text(&report, &render));
    }

    if let Some(path) = &args.github_output {
        append_github_output(path, &report.directory_names())
            .with_context(|| format!("failed to write CI output to {}", path.display()))?;
    }

    Ok(())
}

/// Whether `affected` reports as NDJSON: `--json`, or `output.format = "json"`
/// from the config file or environment. An unloadable config falls back to
/// the environment alone.
pub fn wants_json(root: &Path, args: &AffectedArgs, json: bool) -> bool {
    if json {
        return true;
    }
    let config = match Config::load_or_default(root, args.config.as_deref()) {
        Ok((config, _)) => config,
        Err(_) => Config::default().with_env_overrides(),
    };
    config.output.format == OutputFormat::Json
}

/// Merge CLI flags over the loaded configuration.
pub fn build_options(config: &Config, args: &AffectedArgs) -> AffectedOptions {
    let mut config = config.clone();

    if !args.changed_files.is_empty() {
        config.changes.files = args.changed_files.clone();
    }
    if args.base_ref.is_some() {
        config.changes.base_ref = args.base_ref.clone();
    }
    if args.head_ref.is_some() {
        config.changes.head_ref = args.head_ref.clone();
    }
    if !args.include.is_empty() {
        config.filter.include = args.include.clone();
    }
    if !args.exclude.is_empty() {
        config.filter.exclude = args.exclude.clone();
    }
    if args.resolve_root {
        config.resolver.resolve_root = true;
    }
    if !args.ignore_paths.is_empty() {
        config.resolver.ignore_paths = args.ignore_paths.clone();
    }

    AffectedOptions {
        resolver: config.resolver_config(),
        changes: ChangeRequest {
            files: config.changes.files,
            base_ref: config.changes.base_ref,
            head_ref: config.changes.head_ref,
        },
        include: config.filter.include,
        exclude: config.filter.exclude,
    }
}
