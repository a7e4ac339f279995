//! Command Line Interface (CLI) layer for droidicon.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It resolves the project layout
//! and optional JSON config into `GenerateParams` and hands them to
//! `droidicon::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
