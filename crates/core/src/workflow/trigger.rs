//! Workflow triggers (`on:`).
//!
//! See: <https://docs.github.com/en/actions/using-workflows/events-that-trigger-workflows>

use crate::args::CustomArguments;
use indexmap::IndexMap;

/// An event that starts the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// `push`
    Push(PushTrigger),
    /// `pull_request`
    PullRequest(PullRequestTrigger),
    /// `pull_request_target`
    PullRequestTarget(PullRequestTrigger),
    /// `release`
    Release(ReleaseTrigger),
    /// `schedule`
    Schedule(Vec<Cron>),
    /// `workflow_dispatch`
    WorkflowDispatch(WorkflowDispatchTrigger),
}

impl Trigger {
    /// The event name used as key under `on:`
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::PullRequest(_) => "pull_request",
            Self::PullRequestTarget(_) => "pull_request_target",
            Self::Release(_) => "release",
            Self::Schedule(_) => "schedule",
            Self::WorkflowDispatch(_) => "workflow_dispatch",
        }
    }

    /// `push` without filters
    #[must_use]
    pub fn push() -> Self {
        Self::Push(PushTrigger::default())
    }

    /// `pull_request` without filters
    #[must_use]
    pub fn pull_request() -> Self {
        Self::PullRequest(PullRequestTrigger::default())
    }

    /// `workflow_dispatch` without inputs
    #[must_use]
    pub fn workflow_dispatch() -> Self {
        Self::WorkflowDispatch(WorkflowDispatchTrigger::default())
    }

    /// `schedule` with the given cron expressions
    pub fn schedule<I, S>(crons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Schedule(crons.into_iter().map(|c| Cron(c.into())).collect())
    }
}

/// Push event trigger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushTrigger {
    /// Branch patterns to trigger on
    pub branches: Vec<String>,
    /// Branch patterns to skip
    pub branches_ignore: Vec<String>,
    /// Tag patterns to trigger on
    pub tags: Vec<String>,
    /// Tag patterns to skip
    pub tags_ignore: Vec<String>,
    /// Path patterns that must be matched to trigger
    pub paths: Vec<String>,
    /// Path patterns to ignore
    pub paths_ignore: Vec<String>,
    /// Keys the typed model doesn't know about
    pub custom_arguments: CustomArguments,
}

/// Pull request event trigger configuration.
///
/// Shared by `pull_request` and `pull_request_target`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestTrigger {
    /// Activity types to trigger on (e.g., "opened", "synchronize")
    pub types: Vec<String>,
    /// Target branch patterns to trigger on
    pub branches: Vec<String>,
    /// Target branch patterns to skip
    pub branches_ignore: Vec<String>,
    /// Path patterns that must be matched to trigger
    pub paths: Vec<String>,
    /// Path patterns to ignore
    pub paths_ignore: Vec<String>,
    /// Keys the typed model doesn't know about
    pub custom_arguments: CustomArguments,
}

/// Release event trigger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseTrigger {
    /// Activity types to trigger on (e.g., "published", "created")
    pub types: Vec<String>,
    /// Keys the typed model doesn't know about
    pub custom_arguments: CustomArguments,
}

/// A cron expression for the `schedule` trigger, e.g. `0 0 * * *`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cron(pub String);

/// Manual trigger with optional inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowDispatchTrigger {
    /// Input parameters, in declaration order
    pub inputs: IndexMap<String, WorkflowInput>,
    /// Keys the typed model doesn't know about
    pub custom_arguments: CustomArguments,
}

impl WorkflowDispatchTrigger {
    /// Add an input
    #[must_use]
    pub fn with_input(mut self, name: impl Into<String>, input: WorkflowInput) -> Self {
        self.inputs.insert(name.into(), input);
        self
    }
}

/// Type of a `workflow_dispatch` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// `string`
    String,
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `choice`, with the options listed on the input
    Choice,
    /// `environment`
    Environment,
}

impl InputType {
    /// Name used in the `type:` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Choice => "choice",
            Self::Environment => "environment",
        }
    }
}

/// Input definition for `workflow_dispatch` triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowInput {
    /// Human-readable description of the input
    pub description: String,
    /// Input type
    pub input_type: InputType,
    /// Whether the input is required
    pub required: bool,
    /// Default value for the input
    pub default: Option<String>,
    /// Allowed values for `choice` inputs
    pub options: Vec<String>,
}

impl WorkflowInput {
    /// Optional string input
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            input_type: InputType::String,
            required: false,
            default: None,
            options: Vec::new(),
        }
    }

    /// Required choice input
    pub fn choice<I, S>(description: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            input_type: InputType::Choice,
            required: true,
            default: None,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Trigger::push().event_name(), "push");
        assert_eq!(Trigger::pull_request().event_name(), "pull_request");
        assert_eq!(
            Trigger::PullRequestTarget(PullRequestTrigger::default()).event_name(),
            "pull_request_target"
        );
        assert_eq!(Trigger::schedule(["0 0 * * *"]).event_name(), "schedule");
        assert_eq!(Trigger::workflow_dispatch().event_name(), "workflow_dispatch");
    }

    #[test]
    fn test_choice_input() {
        let input = WorkflowInput::choice("Target", ["staging", "production"])
            .with_default("staging");

        assert!(input.required);
        assert_eq!(input.input_type.as_str(), "choice");
        assert_eq!(input.options.len(), 2);
        assert_eq!(input.default.as_deref(), Some("staging"));
    }
}
