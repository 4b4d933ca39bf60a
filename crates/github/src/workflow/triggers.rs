//! Rendering of `on:`.

use crate::document::Node;
use actionsmith_core::CustomArguments;
use actionsmith_core::args::{filter_arguments, non_empty};
use actionsmith_core::workflow::{
    Cron, PullRequestTrigger, PushTrigger, ReleaseTrigger, Trigger, WorkflowDispatchTrigger,
    WorkflowInput,
};
use indexmap::IndexMap;

/// Render the trigger list as the `on:` mapping.
///
/// Each trigger becomes `<event>: <fields>`; a trigger without fields is an
/// empty mapping. [`Workflow::validate`](actionsmith_core::Workflow::validate)
/// rejects a trigger list naming the same event twice.
#[must_use]
pub fn triggers_to_node(triggers: &[Trigger]) -> Node {
    let entries: IndexMap<String, Node> = triggers
        .iter()
        .map(|trigger| (trigger.event_name().to_string(), trigger_to_node(trigger)))
        .collect();
    Node::Mapping(entries)
}

fn trigger_to_node(trigger: &Trigger) -> Node {
    match trigger {
        Trigger::Push(push) => push_to_node(push),
        Trigger::PullRequest(pr) | Trigger::PullRequestTarget(pr) => pull_request_to_node(pr),
        Trigger::Release(release) => release_to_node(release),
        Trigger::Schedule(crons) => schedule_to_node(crons),
        Trigger::WorkflowDispatch(dispatch) => dispatch_to_node(dispatch),
    }
}

fn push_to_node(push: &PushTrigger) -> Node {
    mapping(
        [
            ("branches", patterns(&push.branches)),
            ("branches-ignore", patterns(&push.branches_ignore)),
            ("tags", patterns(&push.tags)),
            ("tags-ignore", patterns(&push.tags_ignore)),
            ("paths", patterns(&push.paths)),
            ("paths-ignore", patterns(&push.paths_ignore)),
        ],
        &push.custom_arguments,
    )
}

fn pull_request_to_node(pr: &PullRequestTrigger) -> Node {
    mapping(
        [
            ("types", patterns(&pr.types)),
            ("branches", patterns(&pr.branches)),
            ("branches-ignore", patterns(&pr.branches_ignore)),
            ("paths", patterns(&pr.paths)),
            ("paths-ignore", patterns(&pr.paths_ignore)),
        ],
        &pr.custom_arguments,
    )
}

fn release_to_node(release: &ReleaseTrigger) -> Node {
    mapping(
        [("types", patterns(&release.types))],
        &release.custom_arguments,
    )
}

fn schedule_to_node(crons: &[Cron]) -> Node {
    Node::Sequence(
        crons
            .iter()
            .map(|Cron(expression)| {
                let mut entry = IndexMap::new();
                entry.insert("cron".to_string(), Node::from(expression.as_str()));
                Node::Mapping(entry)
            })
            .collect(),
    )
}

fn dispatch_to_node(dispatch: &WorkflowDispatchTrigger) -> Node {
    let inputs = non_empty(&dispatch.inputs).map(|inputs| {
        Node::Mapping(
            inputs
                .iter()
                .map(|(name, input)| (name.clone(), input_to_node(input)))
                .collect(),
        )
    });

    mapping([("inputs", inputs)], &dispatch.custom_arguments)
}

fn input_to_node(input: &WorkflowInput) -> Node {
    mapping(
        [
            ("description", Some(Node::from(input.description.as_str()))),
            ("type", Some(Node::from(input.input_type.as_str()))),
            ("required", Some(Node::from(input.required))),
            ("default", input.default.as_deref().map(Node::from)),
            ("options", non_empty(&input.options).map(|o| Node::strings(o.iter().cloned()))),
        ],
        &CustomArguments::new(),
    )
}

fn patterns(values: &[String]) -> Option<Node> {
    non_empty(values).map(|v| Node::strings(v.iter().cloned()))
}

fn mapping<const N: usize>(
    fields: [(&'static str, Option<Node>); N],
    custom: &CustomArguments,
) -> Node {
    Node::Mapping(filter_arguments(
        fields,
        custom
            .iter()
            .map(|(k, v)| (k.clone(), Node::from(v.as_str()))),
    ))
}
