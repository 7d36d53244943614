//! Threshold-and-limit numeric filter.
//!
//! Values are read from a line-oriented stream, validated against
//! [`Bounds`], transformed by a [`ConstraintApplier`] and printed with a
//! fixed number of fractional digits followed by their total.

pub mod cli;
pub mod config;
pub mod constraint;
pub mod error;
pub mod input;
pub mod io;
pub mod logging;
pub mod output;

pub use config::{Bounds, LoggingConfig, Settings};
pub use constraint::{ConstraintApplier, OutputSequence};
pub use error::{ComputeError, ComputeResult};
pub use input::InputReader;
pub use io::ExitCode;
