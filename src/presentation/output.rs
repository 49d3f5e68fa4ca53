//! Output Rendering
//!
//! Text and NDJSON rendering of affected-project reports, plus the CI output
//! sink.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::application::AffectedReport;
use crate::domain::services::{DirectoryRole, ResolutionStep, TraceSummary};

/// Key written to the CI output file.
pub const GITHUB_OUTPUT_KEY: &str = "changed-directories";

/// What to include beyond the directory list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub trace: bool,
    pub explain: Option<String>,
}

/// How a single directory entered the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub directory: String,
    pub affected: bool,
    pub chain: Vec<String>,
}

impl Explanation {
    pub fn for_directory(report: &AffectedReport, directory: &str) -> Self {
        Self {
            directory: directory.to_string(),
            affected: report.directory_names().iter().any(|d| d == directory),
            chain: report.resolution.trace.dependency_chain(directory),
        }
    }
}

/// Render the human-readable report.
pub fn render_text(report: &AffectedReport, options: &RenderOptions) -> String {
    let directories = report.directory_names();
    let mut lines = vec![format!("Found {} affected project(s)", directories.len())];
    lines.extend(directories.iter().map(|d| format!("  - {}", d)));

    if options.trace {
        let trace = &report.resolution.trace;
        lines.push(String::new());
        lines.push("Resolution trace:".to_string());
        if trace.is_empty() {
            lines.push("  (no steps recorded)".to_string());
        }
        lines.extend(trace.render_lines().into_iter().map(|l| format!("  {}", l)));

        let summary = trace.summary();
        lines.push(format!(
            "  {} step(s), {} path(s) in {}ms",
            summary.total_steps,
            summary.total_paths,
            summary.duration.as_millis()
        ));
        for (action, count) in &summary.by_action {
            lines.push(format!("    {}: {}", action, count));
        }
    }

    if let Some(directory) = &options.explain {
        let explanation = Explanation::for_directory(report, directory);
        lines.push(String::new());
        if explanation.chain.is_empty() {
            lines.push(format!("{} was not reached by this change", directory));
        } else {
            lines.push(format!("Why {}:", directory));
            lines.extend(explanation.chain.iter().map(|c| format!("  {}", c)));
            if !explanation.affected {
                lines.push("  (visited, not reported as a project)".to_string());
            }
        }
    }

    lines.join("\n")
}

/// Render `classify` output, one `<dir>: <role>` line per directory.
pub fn render_classification(entries: &[(String, DirectoryRole)]) -> String {
    entries
        .iter()
        .map(|(dir, role)| format!("{}: {}", dir, role))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Event emitted once per `affected` run.
#[derive(Debug, Clone, Serialize)]
pub struct AffectedEvent<'a> {
    pub event: &'static str,
    pub changed_files: usize,
    pub directories: Vec<String>,
    pub summary: TraceSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<&'a [ResolutionStep]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<Explanation>,
}

impl<'a> AffectedEvent<'a> {
    pub fn new(report: &'a AffectedReport, options: &RenderOptions) -> Self {
        Self {
            event: "affected",
            changed_files: report.changed_files.len(),
            directories: report.directory_names(),
            summary: report.resolution.trace.summary(),
            trace: options.trace.then(|| report.resolution.trace.steps()),
            explain: options
                .explain
                .as_deref()
                .map(|dir| Explanation::for_directory(report, dir)),
        }
    }
}

/// Event emitted per directory by `classify`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedEvent<'a> {
    pub event: &'static str,
    pub directory: &'a str,
    pub role: DirectoryRole,
}

impl<'a> ClassifiedEvent<'a> {
    pub fn new(directory: &'a str, role: DirectoryRole) -> Self {
        Self {
            event: "classified",
            directory,
            role,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// Write a typed event as one NDJSON line.
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// The `changed-directories=<json array>` line for CI output files.
pub fn github_output_line(directories: &[String]) -> io::Result<String> {
    let json = serde_json::to_string(directories)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(format!("{}={}", GITHUB_OUTPUT_KEY, json))
}

/// Append the directory list to a CI output file, creating it if needed.
pub fn append_github_output(path: &Path, directories: &[String]) -> io::Result<()> {
    let line = github_output_line(directories)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}
