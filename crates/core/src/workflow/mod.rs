//! Typed GitHub Actions workflow model.
//!
//! The model mirrors the workflow file layout closely; turning it into YAML is
//! the job of the `actionsmith-github` crate.
//! See: <https://docs.github.com/en/actions/using-workflows/workflow-syntax-for-github-actions>

mod job;
mod runner;
mod step;
mod trigger;

pub use job::Job;
pub use runner::RunnerType;
pub use step::{Step, StepKind};
pub use trigger::{
    Cron, InputType, PullRequestTrigger, PushTrigger, ReleaseTrigger, Trigger,
    WorkflowDispatchTrigger, WorkflowInput,
};

use crate::args::CustomArguments;
use crate::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use std::path::PathBuf;

/// Concurrency configuration to prevent duplicate workflow runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concurrency {
    /// Concurrency group name (use expressions like `${{ github.workflow }}`)
    pub group: String,
    /// Whether to cancel in-progress runs when a new run is triggered
    pub cancel_in_progress: bool,
}

impl Concurrency {
    /// Group runs without cancelling the ones in progress
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            cancel_in_progress: false,
        }
    }

    /// Cancel in-progress runs of the same group
    #[must_use]
    pub const fn cancel_in_progress(mut self) -> Self {
        self.cancel_in_progress = true;
        self
    }
}

/// A GitHub Actions workflow definition.
///
/// Represents the complete structure of a workflow file that can be committed
/// to `.github/workflows/`, plus where it comes from (`source_file`) and where
/// it goes (`target_file_name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    /// Workflow name displayed in GitHub UI
    pub name: Option<String>,
    /// Triggers, rendered in this order. Each event may appear once.
    pub on: Vec<Trigger>,
    /// Environment variables available to all jobs
    pub env: IndexMap<String, String>,
    /// The executable definition that produces this workflow
    pub source_file: Option<PathBuf>,
    /// File name under `.github/workflows/`
    pub target_file_name: Option<String>,
    /// Concurrency settings
    pub concurrency: Option<Concurrency>,
    /// Condition for the generated consistency check job
    pub yaml_consistency_job_condition: Option<String>,
    /// Jobs, rendered in this order
    pub jobs: Vec<Job>,
    /// Top-level keys the typed model doesn't know about
    pub custom_arguments: CustomArguments,
}

impl Workflow {
    /// Create a workflow with the given triggers and nothing else
    #[must_use]
    pub fn new(on: Vec<Trigger>) -> Self {
        Self {
            name: None,
            on,
            env: IndexMap::new(),
            source_file: None,
            target_file_name: None,
            concurrency: None,
            yaml_consistency_job_condition: None,
            jobs: Vec::new(),
            custom_arguments: CustomArguments::new(),
        }
    }

    /// Set the workflow name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a workflow-level environment variable
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the definition file this workflow is generated from
    #[must_use]
    pub fn with_source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file = Some(path.into());
        self
    }

    /// Set the output file name under `.github/workflows/`
    #[must_use]
    pub fn with_target_file_name(mut self, name: impl Into<String>) -> Self {
        self.target_file_name = Some(name.into());
        self
    }

    /// Set concurrency settings
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: Concurrency) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Set the condition of the generated consistency check job
    #[must_use]
    pub fn with_consistency_job_condition(mut self, condition: impl Into<String>) -> Self {
        self.yaml_consistency_job_condition = Some(condition.into());
        self
    }

    /// Append a job
    #[must_use]
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Add a top-level custom argument
    #[must_use]
    pub fn with_custom_argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_arguments.insert(key, value);
        self
    }

    /// Look up a job by id
    #[must_use]
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Check the structural invariants of the workflow.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if there are no triggers, an event is
    /// triggered twice, two jobs share an id, or a job depends on a job that
    /// isn't defined.
    pub fn validate(&self) -> Result<()> {
        if self.on.is_empty() {
            return Err(Error::validation("workflow must have at least one trigger"));
        }

        let mut events = IndexSet::with_capacity(self.on.len());
        for trigger in &self.on {
            if !events.insert(trigger.event_name()) {
                return Err(Error::validation(format!(
                    "duplicate trigger for event '{}'",
                    trigger.event_name()
                )));
            }
        }

        let mut ids = IndexSet::with_capacity(self.jobs.len());
        for job in &self.jobs {
            if !ids.insert(job.id.as_str()) {
                return Err(Error::validation(format!("duplicate job id '{}'", job.id)));
            }
        }

        for job in &self.jobs {
            if let Some(missing) = job.needs.iter().find(|dep| !ids.contains(dep.as_str())) {
                return Err(Error::validation(format!(
                    "job '{}' depends on non-existent job '{missing}'",
                    job.id
                )));
            }
        }

        tracing::debug!(jobs = self.jobs.len(), "workflow validated");
        Ok(())
    }
}
