//! Process exit codes for the pivnet CLI
//!
//! Codes follow the BSD sysexits.h conventions where one fits, so scripts
//! can tell a bad invocation apart from a failing server.

/// Exit codes returned by the `pivnet` binary
///
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivnetExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// Command line usage error (64) - Invalid flag or flag combination
    UsageError = 64,

    /// Data format error (65) - Response or output could not be (de)serialized
    DataError = 65,

    /// Addressee unknown (67) - A slug, version or name did not resolve
    NotFound = 67,

    /// Configuration error (78) - The configuration file could not be used
    ConfigError = 78,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API answered with an unexpected status code
    ApiError = 102,
}

impl PivnetExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<PivnetExitCode> for i32 {
    fn from(code: PivnetExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(PivnetExitCode::Success.code(), 0);
        assert_eq!(PivnetExitCode::UsageError.code(), 64);
        assert_eq!(i32::from(PivnetExitCode::ApiError), 102);
        assert_eq!(PivnetExitCode::NotFound.code(), 67);
    }
}
