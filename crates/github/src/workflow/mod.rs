//! GitHub Actions workflow documents.
//!
//! Builds the ordered document tree of a workflow file from the typed model.
//!
//! # Example
//!
//! ```
//! use actionsmith_core::{Job, RunnerType, Trigger, Workflow};
//! use actionsmith_github::document::to_yaml_string;
//! use actionsmith_github::workflow::workflow_to_node;
//!
//! let workflow = Workflow::new(vec![Trigger::push()])
//!     .with_job(Job::new("build", RunnerType::UbuntuLatest).run("Build", "make"));
//!
//! let yaml = to_yaml_string(&workflow_to_node(&workflow, &workflow.jobs))?;
//! assert!(yaml.starts_with("on:\n  push: {}\njobs:\n"));
//! # Ok::<(), actionsmith_core::Error>(())
//! ```

pub mod emitter;
pub mod triggers;

pub use emitter::{job_to_node, jobs_to_node, step_to_node, workflow_to_node};
pub use triggers::triggers_to_node;
