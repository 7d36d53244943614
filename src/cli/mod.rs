//! CLI module for the compute filter.
//!
//! Provides command-line interface parsing and the command that drives the
//! pipeline.

pub mod args;
pub mod commands;

pub use args::{COMMAND_TOKEN, Cli, strip_command_token};
