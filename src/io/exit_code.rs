//! Process exit codes.

/// Exit status reported by the `compute` binary.
///
/// Usage errors keep clap's conventional status so wrappers can tell a bad
/// invocation apart from rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    UsageError = 2,
}

impl ExitCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ExitCode::Success.as_u8(), 0);
        assert_eq!(ExitCode::GeneralError.as_u8(), 1);
        assert_eq!(ExitCode::UsageError.as_u8(), 2);
        assert!(ExitCode::Success.is_success());
        assert!(!ExitCode::GeneralError.is_success());
    }
}
