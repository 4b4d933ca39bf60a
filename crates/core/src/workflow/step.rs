//! Steps inside a job.

use crate::actions::Action;
use crate::args::CustomArguments;
use indexmap::IndexMap;

/// What a step does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    /// Invoke an action (`uses:` + `with:`)
    Uses {
        /// Rendered action reference, e.g. `actions/checkout@v3`
        action: String,
        /// Resolved `with:` inputs
        arguments: IndexMap<String, String>,
    },
    /// Run a shell command (`run:`)
    Run {
        /// Command text
        command: String,
        /// Shell override, e.g. `bash` or `pwsh`
        shell: Option<String>,
        /// Working directory for the command
        working_directory: Option<String>,
    },
}

/// A single step of a job.
///
/// Steps either `uses` an action or `run` a shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Identifier for referencing step outputs
    pub id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Action invocation or command
    pub kind: StepKind,
    /// Conditional execution expression
    pub condition: Option<String>,
    /// Step environment variables
    pub env: IndexMap<String, String>,
    /// Continue on error (don't fail the job)
    pub continue_on_error: Option<bool>,
    /// Step timeout in minutes
    pub timeout_minutes: Option<u32>,
    /// Keys the typed model doesn't know about
    pub custom_arguments: CustomArguments,
}

impl Step {
    /// Create a step that uses an action, resolving its inputs now
    pub fn uses(action: &impl Action) -> Self {
        Self::with_kind(StepKind::Uses {
            action: action.uses_string(),
            arguments: action.to_yaml_arguments(),
        })
    }

    /// Create a step that runs a shell command
    pub fn run(command: impl Into<String>) -> Self {
        Self::with_kind(StepKind::Run {
            command: command.into(),
            shell: None,
            working_directory: None,
        })
    }

    fn with_kind(kind: StepKind) -> Self {
        Self {
            id: None,
            name: None,
            kind,
            condition: None,
            env: IndexMap::new(),
            continue_on_error: None,
            timeout_minutes: None,
            custom_arguments: CustomArguments::new(),
        }
    }

    /// Set the step name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the step ID
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    /// Keep the job going if this step fails
    #[must_use]
    pub const fn continue_on_error(mut self) -> Self {
        self.continue_on_error = Some(true);
        self
    }

    /// Set the shell. Ignored for `uses` steps.
    #[must_use]
    pub fn with_shell(mut self, value: impl Into<String>) -> Self {
        if let StepKind::Run { shell, .. } = &mut self.kind {
            *shell = Some(value.into());
        }
        self
    }

    /// Set working directory. Ignored for `uses` steps.
    #[must_use]
    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        if let StepKind::Run {
            working_directory, ..
        } = &mut self.kind
        {
            *working_directory = Some(dir.into());
        }
        self
    }

    /// Add a custom argument
    #[must_use]
    pub fn with_custom_argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_arguments.insert(key, value);
        self
    }
}
