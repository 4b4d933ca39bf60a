//! GitHub Actions YAML rendering for actionsmith.
//!
//! This crate turns an [`actionsmith_core::Workflow`] into a workflow file:
//! - [`workflow`]: the document tree of a workflow (`on:`, `jobs:`, steps)
//! - [`preamble`]: the leading comment block
//! - [`consistency`]: the optional job that checks the committed file is up to date
//! - [`render`](mod@render): [`render()`](fn@render), [`persist`] and [`WorkflowYamlExt`]
//!
//! # Example
//!
//! ```no_run
//! use actionsmith_core::actions::CheckoutV3;
//! use actionsmith_core::{Job, RunnerType, Trigger, Workflow};
//! use actionsmith_github::{RenderOptions, WorkflowYamlExt};
//!
//! let workflow = Workflow::new(vec![Trigger::push(), Trigger::pull_request()])
//!     .with_name("CI")
//!     .with_source_file(".github/workflows/ci.main.kts")
//!     .with_target_file_name("ci.yml")
//!     .with_job(
//!         Job::new("test", RunnerType::UbuntuLatest)
//!             .uses("Check out", &CheckoutV3::new())
//!             .run("Test", "cargo test"),
//!     );
//!
//! let path = workflow.write_to_file(&RenderOptions::new())?;
//! println!("wrote {}", path.display());
//! # Ok::<(), actionsmith_core::Error>(())
//! ```

#![warn(missing_docs)]

pub mod consistency;
pub mod document;
pub mod git;
pub mod preamble;
pub mod render;
pub mod workflow;

pub use consistency::{ConsistencyMode, inject_consistency_check};
pub use document::Node;
pub use preamble::Preamble;
pub use render::{RenderOptions, WorkflowYamlExt, persist, render};
