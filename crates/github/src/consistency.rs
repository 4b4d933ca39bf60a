//! YAML consistency check job.
//!
//! A generated workflow can carry an extra job that regenerates itself from the
//! workflow definition and fails when the result differs from the committed
//! file. Every other job depends on it, so nothing runs on a stale workflow.

use crate::git::relative_to_root;
use actionsmith_core::actions::CheckoutV3;
use actionsmith_core::workflow::{Job, RunnerType, Workflow};
use actionsmith_core::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Job key of the consistency check job.
pub const CONSISTENCY_JOB_ID: &str = "check_yaml_consistency";

/// Display name of the consistency check job.
pub const CONSISTENCY_JOB_NAME: &str = "Check YAML consistency";

/// How the check job compares the committed file with a fresh rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyMode {
    /// Pipe the definition's output into `diff -u` against the committed file
    DirectDiff,
    /// Delete the committed file, regenerate it in place, then `git diff --exit-code`
    RegenerateAndDiff,
}

impl ConsistencyMode {
    /// Pick the mode from a "use git diff" flag
    #[must_use]
    pub const fn from_git_diff(use_git_diff: bool) -> Self {
        if use_git_diff {
            Self::RegenerateAndDiff
        } else {
            Self::DirectDiff
        }
    }
}

/// Build the consistency check job for `workflow`.
///
/// # Errors
///
/// Returns `Error::Configuration` if the workflow has no source file or target
/// file name, no git root is known, or the source file lies outside the root.
pub fn consistency_job(
    workflow: &Workflow,
    git_root: Option<&Path>,
    mode: ConsistencyMode,
) -> Result<Job> {
    let (Some(git_root), Some(source_file)) = (git_root, workflow.source_file.as_deref()) else {
        return Err(Error::configuration(
            "consistency check requires a valid source_file and git root directory",
        ));
    };

    let Some(target_file_name) = workflow.target_file_name.as_deref() else {
        return Err(Error::configuration(
            "consistency check requires a target_file_name",
        ));
    };

    let source_path = relative_to_root(source_file, git_root)?;
    let target_path = format!(".github/workflows/{target_file_name}");
    debug!(?mode, source = %source_path, target = %target_path, "Building consistency check job");

    let mut job = Job::new(CONSISTENCY_JOB_ID, RunnerType::UbuntuLatest)
        .with_name(CONSISTENCY_JOB_NAME)
        .uses("Check out", &CheckoutV3::new());

    if let Some(condition) = &workflow.yaml_consistency_job_condition {
        job = job.with_if(condition.clone());
    }

    let job = match mode {
        ConsistencyMode::RegenerateAndDiff => job
            .run(
                "Execute script",
                format!("rm '{target_path}' && '{source_path}'"),
            )
            .run(
                "Consistency check",
                format!("git diff --exit-code '{target_path}'"),
            ),
        ConsistencyMode::DirectDiff => job.run(
            "Consistency check",
            format!("diff -u '{target_path}' <('{source_path}')"),
        ),
    };

    Ok(job)
}

/// Prepend the consistency check job and make every other job depend on it.
///
/// The workflow's jobs are not modified; the returned list holds updated
/// copies in the original order.
///
/// # Errors
///
/// Returns `Error::Configuration` under the same conditions as
/// [`consistency_job`], or if a job already uses the id `check_yaml_consistency`.
pub fn inject_consistency_check(
    workflow: &Workflow,
    git_root: Option<&Path>,
    mode: ConsistencyMode,
) -> Result<Vec<Job>> {
    if workflow.job(CONSISTENCY_JOB_ID).is_some() {
        return Err(Error::configuration(format!(
            "job id '{CONSISTENCY_JOB_ID}' is reserved for the consistency check"
        )));
    }

    let check = consistency_job(workflow, git_root, mode)?;

    let mut jobs = Vec::with_capacity(workflow.jobs.len() + 1);
    jobs.push(check);
    jobs.extend(
        workflow
            .jobs
            .iter()
            .map(|job| job.with_added_dependency(CONSISTENCY_JOB_ID)),
    );
    Ok(jobs)
}
