//! Command Line Interface (CLI) layer for AUTOCROP.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) for the in-place crop flow. It wires user-provided options to
//! the underlying library functionality exposed via `autocrop::api`.
//!
//! If you are embedding AUTOCROP into another application, prefer using
//! the high-level `autocrop::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
