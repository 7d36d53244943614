//! Input/Output handling for the CLI.
//!
//! This module provides consistent exit codes. Value parsing lives in
//! [`crate::input`] and value formatting in [`crate::output`].

pub mod exit_code;

pub use exit_code::ExitCode;
