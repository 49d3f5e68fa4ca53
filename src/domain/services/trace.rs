//! Resolution trace
//!
//! Append-only record of how the resolver reached its result. The trace is an
//! explicit value threaded through a resolution call; the host decides whether
//! to print it, serialize it, or just log it.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

/// What the resolver did at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    /// Directories of the changed files, seeded into the worklist.
    Discovered,
    /// Directories whose files mention a shared module path.
    ModuleDependency,
    /// Directories declaring a project module as their `source`.
    ProjectDependency,
    /// A project directory taken as affected without further lookup.
    DirectProject,
}

impl StepAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepAction::Discovered => "discovered",
            StepAction::ModuleDependency => "module_dependency",
            StepAction::ProjectDependency => "project_dependency",
            StepAction::DirectProject => "direct_project",
        }
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionStep {
    /// 1-based sequence number.
    pub step: usize,
    pub action: StepAction,
    pub paths: Vec<String>,
    /// Time since the trace was started.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub total_steps: usize,
    pub total_paths: usize,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Number of paths recorded per action.
    pub by_action: BTreeMap<StepAction, usize>,
}

#[derive(Debug, Clone)]
pub struct ResolutionTrace {
    started: Instant,
    steps: Vec<ResolutionStep>,
}

impl Default for ResolutionTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionTrace {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            steps: Vec::new(),
        }
    }

    /// Append a step. Recording an empty path set is a no-op.
    pub fn record<I, P>(&mut self, action: StepAction, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: ToString,
    {
        let paths: Vec<String> = paths.into_iter().map(|p| p.to_string()).collect();
        if paths.is_empty() {
            return;
        }

        self.steps.push(ResolutionStep {
            step: self.steps.len() + 1,
            action,
            paths,
            elapsed: self.started.elapsed(),
        });
    }

    pub fn steps(&self) -> &[ResolutionStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn summary(&self) -> TraceSummary {
        let mut by_action = BTreeMap::new();
        for step in &self.steps {
            *by_action.entry(step.action).or_insert(0) += step.paths.len();
        }

        TraceSummary {
            total_steps: self.steps.len(),
            total_paths: self.steps.iter().map(|s| s.paths.len()).sum(),
            duration: self.started.elapsed(),
            by_action,
        }
    }

    /// First step that mentions `target`.
    pub fn first_step_for(&self, target: &str) -> Option<&ResolutionStep> {
        self.steps
            .iter()
            .find(|step| step.paths.iter().any(|p| p == target))
    }

    /// How `target` entered the resolution, as `"<action>: <target>"` entries.
    ///
    /// Empty when the target never appeared.
    pub fn dependency_chain(&self, target: &str) -> Vec<String> {
        self.first_step_for(target)
            .map(|step| vec![format!("{}: {}", step.action, target)])
            .unwrap_or_default()
    }

    /// Human-readable lines, one per step plus one per path for multi-path steps.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for step in &self.steps {
            let paths = match step.paths.as_slice() {
                [single] => single.clone(),
                many => format!("[{} paths]", many.len()),
            };
            lines.push(format!(
                "Step {} (+{}ms): {} → {}",
                step.step,
                step.elapsed.as_millis(),
                step.action,
                paths
            ));
            if step.paths.len() > 1 {
                lines.extend(step.paths.iter().map(|p| format!("  - {}", p)));
            }
        }
        lines
    }

    /// Write the trace and its summary to the debug log.
    pub fn log_debug(&self) {
        if self.steps.is_empty() {
            tracing::debug!(target: "tfaffected::trace", "no dependency resolution steps recorded");
            return;
        }

        let _span = tracing::debug_span!(target: "tfaffected::trace", "resolution_trace").entered();
        for line in self.render_lines() {
            tracing::debug!(target: "tfaffected::trace", "{}", line);
        }

        let summary = self.summary();
        tracing::debug!(
            target: "tfaffected::trace",
            total_steps = summary.total_steps,
            total_paths = summary.total_paths,
            duration_ms = summary.duration.as_millis() as u64,
            "resolution summary"
        );
        for (action, count) in &summary.by_action {
            tracing::debug!(target: "tfaffected::trace", "  {}: {}", action, count);
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}
