//! Core types for actionsmith.
//!
//! This crate provides:
//! - [`workflow`]: the typed GitHub Actions workflow model ([`Workflow`], [`Job`], [`Step`], triggers)
//! - [`actions`]: the [`Action`] trait and typed action wrappers
//! - [`args`]: ordered argument maps with absent values pruned
//! - [`Error`] and [`Result`] shared by every actionsmith crate

#![warn(missing_docs)]

pub mod actions;
pub mod args;
pub mod error;
pub mod workflow;

pub use actions::Action;
pub use args::CustomArguments;
pub use error::{Error, Result};
pub use workflow::{Concurrency, Job, RunnerType, Step, StepKind, Trigger, Workflow};
