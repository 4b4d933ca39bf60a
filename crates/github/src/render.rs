//! Rendering entry points.
//!
//! [`render`] produces the YAML text of a workflow, [`persist`] writes it to
//! `<git root>/.github/workflows/<target file name>`. Both are also available
//! as methods through [`WorkflowYamlExt`].

use crate::consistency::{ConsistencyMode, inject_consistency_check};
use crate::document::to_yaml_string;
use crate::git::{find_git_root, relative_to_root};
use crate::preamble::Preamble;
use crate::workflow::emitter::workflow_to_node;
use actionsmith_core::workflow::Workflow;
use actionsmith_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory generated workflow files live in, relative to the git root.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Options for [`render`] and [`persist`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether to add the consistency check job.
    ///
    /// `None` adds it when the workflow has a source file.
    pub add_consistency_check: Option<bool>,
    /// Repository root. `None` discovers it from the workflow's source file.
    pub git_root: Option<PathBuf>,
    /// Leading comment block
    pub preamble: Preamble,
}

impl RenderOptions {
    /// Create options with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the consistency check job on or off
    #[must_use]
    pub const fn with_consistency_check(mut self, enabled: bool) -> Self {
        self.add_consistency_check = Some(enabled);
        self
    }

    /// Use `root` as the repository root instead of discovering it
    #[must_use]
    pub fn with_git_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.git_root = Some(root.into());
        self
    }

    /// Set the leading comment block
    #[must_use]
    pub fn with_preamble(mut self, preamble: Preamble) -> Self {
        self.preamble = preamble;
        self
    }

    fn consistency_check_for(&self, workflow: &Workflow) -> bool {
        self.add_consistency_check
            .unwrap_or(workflow.source_file.is_some())
    }

    fn resolve_git_root(&self, workflow: &Workflow) -> Option<PathBuf> {
        if let Some(root) = &self.git_root {
            return Some(root.clone());
        }

        let source = workflow.source_file.as_deref()?;
        match find_git_root(source) {
            Ok(root) => Some(root),
            Err(e) => {
                debug!(source = %source.display(), error = %e, "No git root for source file");
                None
            }
        }
    }
}

/// Render `workflow` to YAML text.
///
/// A requested consistency check compares the committed file directly with
/// the output of the workflow definition.
///
/// The preamble names the source file only when it lies under the git root.
///
/// # Errors
///
/// Returns `Error::Validation` for a malformed workflow, `Error::Configuration`
/// if the consistency check is requested without a source file, target file
/// name or git root, and `Error::Serialization` if YAML emission fails.
pub fn render(workflow: &Workflow, options: &RenderOptions) -> Result<String> {
    let git_root = options.resolve_git_root(workflow);
    render_with_mode(workflow, options, git_root.as_deref(), false)
}

/// Render `workflow` and write it to `<git root>/.github/workflows/<target>`.
///
/// Parent directories are created and an existing file is overwritten. A
/// requested consistency check regenerates the file in place and diffs it
/// with git. Returns the path written to.
///
/// # Errors
///
/// Returns `Error::Configuration` if no git root can be resolved or the
/// workflow has no target file name, `Error::Io` if the file can't be written,
/// and any error [`render`] can return.
pub fn persist(workflow: &Workflow, options: &RenderOptions) -> Result<PathBuf> {
    let Some(git_root) = options.resolve_git_root(workflow) else {
        return Err(Error::configuration(
            "writing a workflow requires a git root directory; set git_root or a source_file inside a repository",
        ));
    };
    let Some(target_file_name) = workflow.target_file_name.as_deref() else {
        return Err(Error::configuration(
            "writing a workflow requires a target_file_name",
        ));
    };

    let yaml = render_with_mode(workflow, options, Some(&git_root), true)?;

    let dir = git_root.join(WORKFLOWS_DIR);
    std::fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

    let path = dir.join(target_file_name);
    std::fs::write(&path, yaml).map_err(|e| Error::io(&path, e))?;

    info!(path = %path.display(), "Wrote workflow file");
    Ok(path)
}

fn render_with_mode(
    workflow: &Workflow,
    options: &RenderOptions,
    git_root: Option<&Path>,
    use_git_diff: bool,
) -> Result<String> {
    workflow.validate()?;

    let add_check = options.consistency_check_for(workflow);
    let jobs = if add_check {
        inject_consistency_check(workflow, git_root, ConsistencyMode::from_git_diff(use_git_diff))?
    } else {
        workflow.jobs.clone()
    };

    // Only a repository-relative locator is named; anything else gets the
    // generic provenance text so output doesn't depend on the local checkout.
    let source_path = match (workflow.source_file.as_deref(), git_root) {
        (Some(source), Some(root)) => match relative_to_root(source, root) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "Source file not named in preamble");
                None
            }
        },
        _ => None,
    };

    debug!(
        name = workflow.name.as_deref().unwrap_or_default(),
        jobs = jobs.len(),
        consistency_check = add_check,
        "Rendering workflow"
    );

    let body = to_yaml_string(&workflow_to_node(workflow, &jobs))?;
    let mut output = options.preamble.compose(source_path.as_deref());
    output.push_str(&body);
    Ok(output)
}

/// Rendering methods on [`Workflow`].
pub trait WorkflowYamlExt {
    /// Render to YAML text. See [`render`].
    ///
    /// # Errors
    ///
    /// Same as [`render`].
    fn to_yaml(&self, options: &RenderOptions) -> Result<String>;

    /// Write the YAML file into the repository. See [`persist`].
    ///
    /// # Errors
    ///
    /// Same as [`persist`].
    fn write_to_file(&self, options: &RenderOptions) -> Result<PathBuf>;
}

impl WorkflowYamlExt for Workflow {
    fn to_yaml(&self, options: &RenderOptions) -> Result<String> {
        render(self, options)
    }

    fn write_to_file(&self, options: &RenderOptions) -> Result<PathBuf> {
        persist(self, options)
    }
}
