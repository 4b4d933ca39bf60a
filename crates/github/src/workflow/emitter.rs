//! GitHub Actions workflow document assembly.
//!
//! Turns the typed [`Workflow`] into an ordered [`Node`] tree. Absent fields
//! are pruned through [`present_arguments`], so the tree only contains keys that
//! carry a value.
//!
//! # Model to YAML mapping
//!
//! | Model | GitHub Actions |
//! |-------|----------------|
//! | `workflow.name` | `name:` |
//! | `workflow.on` | `on:` |
//! | `workflow.concurrency` | `concurrency: {group, cancel-in-progress}` |
//! | `workflow.env` | `env:` |
//! | `workflow.custom_arguments` | extra top-level keys before `jobs:` |
//! | `job.id` | job key under `jobs:` |
//! | `job.runs_on` | `runs-on:` |
//! | `job.condition` | `if:` |
//! | `job.needs` | `needs:` |

use super::triggers::triggers_to_node;
use crate::document::Node;
use actionsmith_core::args::{non_empty, present_arguments};
use actionsmith_core::workflow::{Concurrency, Job, RunnerType, Step, StepKind, Workflow};
use actionsmith_core::CustomArguments;
use indexmap::IndexMap;

/// Build the document for `workflow`, using `jobs` in place of `workflow.jobs`.
///
/// `jobs` is the list after any consistency check job has been injected;
/// the workflow's own job list is ignored.
#[must_use]
pub fn workflow_to_node(workflow: &Workflow, jobs: &[Job]) -> Node {
    Node::Mapping(present_arguments(
        [
            ("name", workflow.name.as_deref().map(Node::from)),
            ("on", Some(triggers_to_node(&workflow.on))),
            ("concurrency", workflow.concurrency.as_ref().map(concurrency_to_node)),
            ("env", non_empty(&workflow.env).map(|env| Node::from(env.clone()))),
        ]
        .into_iter()
        .chain(custom_pairs(&workflow.custom_arguments))
        .chain([("jobs", Some(jobs_to_node(jobs)))]),
    ))
}

fn custom_pairs(custom: &CustomArguments) -> impl Iterator<Item = (&str, Option<Node>)> {
    custom
        .iter()
        .map(|(key, value)| (key.as_str(), Some(Node::from(value.as_str()))))
}

fn concurrency_to_node(concurrency: &Concurrency) -> Node {
    let mut entries = IndexMap::new();
    entries.insert("group".to_string(), Node::from(concurrency.group.as_str()));
    entries.insert(
        "cancel-in-progress".to_string(),
        Node::from(concurrency.cancel_in_progress),
    );
    Node::Mapping(entries)
}

/// Render the `jobs:` mapping, keyed by job id in list order.
#[must_use]
pub fn jobs_to_node(jobs: &[Job]) -> Node {
    Node::Mapping(
        jobs.iter()
            .map(|job| (job.id.clone(), job_to_node(job)))
            .collect(),
    )
}

/// Render a single job record.
#[must_use]
pub fn job_to_node(job: &Job) -> Node {
    Node::Mapping(present_arguments(
        [
            ("name", job.name.as_deref().map(Node::from)),
            ("runs-on", Some(runner_to_node(&job.runs_on))),
            ("if", job.condition.as_deref().map(Node::from)),
            (
                "needs",
                (!job.needs.is_empty()).then(|| Node::strings(job.needs.iter().cloned())),
            ),
            ("env", non_empty(&job.env).map(|env| Node::from(env.clone()))),
            ("timeout-minutes", job.timeout_minutes.map(Node::from)),
            ("continue-on-error", job.continue_on_error.map(Node::from)),
        ]
        .into_iter()
        .chain(custom_pairs(&job.custom_arguments))
        .chain([(
            "steps",
            Some(Node::Sequence(job.steps.iter().map(step_to_node).collect())),
        )]),
    ))
}

fn runner_to_node(runner: &RunnerType) -> Node {
    match runner {
        RunnerType::Labels(labels) => Node::strings(labels.iter().cloned()),
        single => Node::from(single.to_string()),
    }
}

/// Render a single step record.
#[must_use]
pub fn step_to_node(step: &Step) -> Node {
    let (action_fields, run_fields) = match &step.kind {
        StepKind::Uses { action, arguments } => (
            [
                ("uses", Some(Node::from(action.as_str()))),
                ("with", non_empty(arguments).map(|args| Node::from(args.clone()))),
            ],
            [("shell", None), ("working-directory", None)],
        ),
        StepKind::Run {
            command,
            shell,
            working_directory,
        } => (
            [("run", Some(Node::from(command.as_str()))), ("with", None)],
            [
                ("shell", shell.as_deref().map(Node::from)),
                ("working-directory", working_directory.as_deref().map(Node::from)),
            ],
        ),
    };

    Node::Mapping(present_arguments(
        [
            ("id", step.id.as_deref().map(Node::from)),
            ("name", step.name.as_deref().map(Node::from)),
        ]
        .into_iter()
        .chain(action_fields)
        .chain(run_fields)
        .chain([
            ("env", non_empty(&step.env).map(|env| Node::from(env.clone()))),
            ("if", step.condition.as_deref().map(Node::from)),
            ("continue-on-error", step.continue_on_error.map(Node::from)),
            ("timeout-minutes", step.timeout_minutes.map(Node::from)),
        ])
        .chain(custom_pairs(&step.custom_arguments)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::to_yaml_string;
    use actionsmith_core::Trigger;
    use actionsmith_core::actions::{CheckoutV3, FetchDepth};

    fn keys(node: &Node) -> Vec<&str> {
        node.as_mapping()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_minimal_workflow_keys() {
        let workflow = Workflow::new(vec![Trigger::push()]);
        let node = workflow_to_node(&workflow, &workflow.jobs);

        assert_eq!(keys(&node), vec!["on", "jobs"]);
        assert_eq!(to_yaml_string(&node).unwrap(), "on:\n  push: {}\njobs: {}\n");
    }

    #[test]
    fn test_full_top_level_order() {
        let workflow = Workflow::new(vec![Trigger::push()])
            .with_name("CI")
            .with_concurrency(
                Concurrency::new("${{ github.workflow }}-${{ github.ref }}").cancel_in_progress(),
            )
            .with_env("RUST_BACKTRACE", "1")
            .with_custom_argument("permissions", "read-all")
            .with_custom_argument("defaults-shell", "bash")
            .with_job(Job::new("build", RunnerType::UbuntuLatest).run("Build", "cargo build"));
        let node = workflow_to_node(&workflow, &workflow.jobs);

        assert_eq!(
            keys(&node),
            vec!["name", "on", "concurrency", "env", "permissions", "defaults-shell", "jobs"]
        );
        let concurrency = node.get("concurrency").unwrap();
        assert_eq!(keys(concurrency), vec!["group", "cancel-in-progress"]);
        assert_eq!(concurrency.get("cancel-in-progress"), Some(&Node::Bool(true)));
    }

    #[test]
    fn test_concurrency_always_emits_cancel_flag() {
        let workflow = Workflow::new(vec![Trigger::push()]).with_concurrency(Concurrency::new("g"));
        let yaml = to_yaml_string(&workflow_to_node(&workflow, &[])).unwrap();
        assert!(yaml.contains("concurrency:\n  group: g\n  cancel-in-progress: false\n"));
    }

    #[test]
    fn test_injected_jobs_replace_workflow_jobs() {
        let workflow = Workflow::new(vec![Trigger::push()])
            .with_job(Job::new("ignored", RunnerType::UbuntuLatest));
        let jobs = vec![Job::new("used", RunnerType::UbuntuLatest)];
        let node = workflow_to_node(&workflow, &jobs);

        assert_eq!(keys(node.get("jobs").unwrap()), vec!["used"]);
    }

    #[test]
    fn test_job_key_order() {
        let job = Job::new("test", RunnerType::UbuntuLatest)
            .with_name("Test")
            .with_if("github.event_name == 'push'")
            .needs("build")
            .with_env("CI", "true")
            .with_timeout_minutes(30)
            .with_custom_argument("environment", "production")
            .run("Test", "cargo test");
        let node = job_to_node(&job);

        assert_eq!(
            keys(&node),
            vec![
                "name",
                "runs-on",
                "if",
                "needs",
                "env",
                "timeout-minutes",
                "environment",
                "steps"
            ]
        );
        assert_eq!(node.get("needs"), Some(&Node::strings(["build"])));
        assert_eq!(node.get("timeout-minutes"), Some(&Node::Integer(30)));
    }

    #[test]
    fn test_job_without_optional_fields() {
        let job = Job::new("lint", RunnerType::MacOsLatest);
        let yaml = to_yaml_string(&job_to_node(&job)).unwrap();
        assert_eq!(yaml, "runs-on: macos-latest\nsteps: []\n");
    }

    #[test]
    fn test_runner_labels() {
        let single = job_to_node(&Job::new("a", RunnerType::label("self-hosted")));
        assert_eq!(single.get("runs-on"), Some(&Node::from("self-hosted")));

        let multiple = job_to_node(&Job::new(
            "b",
            RunnerType::Labels(vec!["self-hosted".into(), "arm64".into()]),
        ));
        assert_eq!(
            multiple.get("runs-on"),
            Some(&Node::strings(["self-hosted", "arm64"]))
        );
    }

    #[test]
    fn test_uses_step() {
        let step = Step::uses(&CheckoutV3::new().with_fetch_depth(FetchDepth::Infinite))
            .with_id("step-0")
            .with_name("Check out");
        let node = step_to_node(&step);

        assert_eq!(keys(&node), vec!["id", "name", "uses", "with"]);
        assert_eq!(node.get("uses"), Some(&Node::from("actions/checkout@v3")));
        assert_eq!(
            node.get("with").and_then(|w| w.get("fetch-depth")),
            Some(&Node::from("0"))
        );
    }

    #[test]
    fn test_uses_step_without_arguments_has_no_with() {
        let node = step_to_node(&Step::uses(&CheckoutV3::new()));
        assert_eq!(keys(&node), vec!["uses"]);
    }

    #[test]
    fn test_run_step_key_order() {
        let step = Step::run("cargo test")
            .with_name("Test")
            .with_working_directory("crates/core")
            .with_shell("bash")
            .with_env("RUST_LOG", "debug")
            .with_if("success()")
            .continue_on_error()
            .with_timeout_minutes(10)
            .with_custom_argument("x-extra", "1");
        let node = step_to_node(&step);

        assert_eq!(
            keys(&node),
            vec![
                "name",
                "run",
                "shell",
                "working-directory",
                "env",
                "if",
                "continue-on-error",
                "timeout-minutes",
                "x-extra"
            ]
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let workflow = Workflow::new(vec![Trigger::push(), Trigger::pull_request()])
            .with_env("B", "second")
            .with_env("A", "first")
            .with_job(Job::new("one", RunnerType::UbuntuLatest).run("Echo", "echo one"))
            .with_job(Job::new("two", RunnerType::UbuntuLatest).needs("one"));

        let first = to_yaml_string(&workflow_to_node(&workflow, &workflow.jobs)).unwrap();
        let second = to_yaml_string(&workflow_to_node(&workflow, &workflow.jobs)).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("env:\n  B: second\n  A: first\n"));
    }
}
