//! Error types for argument resolution, input validation and output.
//!
//! Every variant is fatal: the driver maps it to a non-zero exit status and
//! suppresses all standard output.

use thiserror::Error;

use crate::io::ExitCode;

#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("{name} must be between {min:.1} and {max:.1}, got {value}")]
    ArgumentRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("line {line}: '{token}' is not a valid decimal number")]
    InputParse { line: usize, token: String },

    #[error("line {line}: value {value} is outside the range {min:.1} to {max:.1}")]
    InputRange {
        line: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("line {line}: '{token}' has more than {max_places} fractional digit(s)")]
    InputPrecision {
        line: usize,
        token: String,
        max_places: usize,
    },

    #[error("line {line}: too many input values, at most {max} are accepted")]
    InputCount { line: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ComputeError {
    /// Short machine-readable name of the failure kind, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArgumentRange { .. } => "argument_range",
            Self::InputParse { .. } => "input_parse",
            Self::InputRange { .. } => "input_range",
            Self::InputPrecision { .. } => "input_precision",
            Self::InputCount { .. } => "input_count",
            Self::Io(_) => "io",
            Self::Config(_) => "config",
        }
    }

    /// All failures share one exit status; the message tells them apart.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::GeneralError
    }
}

pub type ComputeResult<T> = Result<T, ComputeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_token() {
        let err = ComputeError::InputPrecision {
            line: 3,
            token: "10.12".to_string(),
            max_places: 1,
        };
        assert_eq!(
            err.to_string(),
            "line 3: '10.12' has more than 1 fractional digit(s)"
        );

        let err = ComputeError::ArgumentRange {
            name: "threshold",
            value: -1.0,
            min: 0.0,
            max: 1_000_000_000.0,
        };
        assert_eq!(
            err.to_string(),
            "threshold must be between 0.0 and 1000000000.0, got -1"
        );
    }

    #[test]
    fn test_every_kind_maps_to_general_error() {
        let errors = [
            ComputeError::InputParse {
                line: 1,
                token: "abc".to_string(),
            },
            ComputeError::InputCount { line: 101, max: 100 },
            ComputeError::Config("bad".to_string()),
            ComputeError::Io(std::io::Error::other("closed")),
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), ExitCode::GeneralError, "{}", err.kind());
        }
    }
}
