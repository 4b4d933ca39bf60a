//! Jobs of a workflow.

use super::{RunnerType, Step};
use crate::actions::Action;
use crate::args::CustomArguments;
use indexmap::{IndexMap, IndexSet};

/// A job in a workflow.
///
/// Jobs run in parallel by default unless `needs` dependencies are specified.
/// Once a job is part of a workflow it is treated as a value: rendering never
/// changes it, it derives new jobs instead (see [`Job::with_added_dependency`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Job key under `jobs:`
    pub id: String,
    /// Display name
    pub name: Option<String>,
    /// Runner label(s)
    pub runs_on: RunnerType,
    /// Jobs that must complete first, in declaration order
    pub needs: IndexSet<String>,
    /// Conditional execution expression
    pub condition: Option<String>,
    /// Job-level environment variables
    pub env: IndexMap<String, String>,
    /// Job timeout in minutes
    pub timeout_minutes: Option<u32>,
    /// Continue workflow if this job fails
    pub continue_on_error: Option<bool>,
    /// Keys the typed model doesn't know about
    pub custom_arguments: CustomArguments,
    /// Steps, executed sequentially
    pub steps: Vec<Step>,
}

impl Job {
    /// Create a job without steps
    pub fn new(id: impl Into<String>, runs_on: RunnerType) -> Self {
        Self {
            id: id.into(),
            name: None,
            runs_on,
            needs: IndexSet::new(),
            condition: None,
            env: IndexMap::new(),
            timeout_minutes: None,
            continue_on_error: None,
            custom_arguments: CustomArguments::new(),
            steps: Vec::new(),
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Depend on another job
    #[must_use]
    pub fn needs(mut self, job_id: impl Into<String>) -> Self {
        self.needs.insert(job_id.into());
        self
    }

    /// Set a condition
    #[must_use]
    pub fn with_if(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Add an environment variable
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the timeout
    #[must_use]
    pub const fn with_timeout_minutes(mut self, minutes: u32) -> Self {
        self.timeout_minutes = Some(minutes);
        self
    }

    /// Keep the workflow going if this job fails
    #[must_use]
    pub const fn continue_on_error(mut self) -> Self {
        self.continue_on_error = Some(true);
        self
    }

    /// Add a custom argument
    #[must_use]
    pub fn with_custom_argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_arguments.insert(key, value);
        self
    }

    /// Append a step as is
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append a named step using `action`, with an id of `step-<index>`
    #[must_use]
    pub fn uses(self, name: impl Into<String>, action: &impl Action) -> Self {
        let step = Step::uses(action).with_name(name);
        self.with_numbered_step(step)
    }

    /// Append a named step running `command`, with an id of `step-<index>`
    #[must_use]
    pub fn run(self, name: impl Into<String>, command: impl Into<String>) -> Self {
        let step = Step::run(command).with_name(name);
        self.with_numbered_step(step)
    }

    fn with_numbered_step(mut self, step: Step) -> Self {
        let id = format!("step-{}", self.steps.len());
        self.steps.push(step.with_id(id));
        self
    }

    /// Return a copy of this job that also depends on `job_id`.
    ///
    /// The new dependency comes first; existing dependencies follow in their
    /// original order. A dependency that is already present is not repeated.
    #[must_use]
    pub fn with_added_dependency(&self, job_id: &str) -> Self {
        let mut needs = IndexSet::with_capacity(self.needs.len() + 1);
        needs.insert(job_id.to_string());
        needs.extend(self.needs.iter().cloned());

        Self {
            needs,
            ..self.clone()
        }
    }
}
