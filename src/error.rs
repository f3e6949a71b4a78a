//! Error types for the echo fixture and the verification harness.

use std::path::PathBuf;

/// The only distinguished outcome of the echo fixture.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EchoError {
    /// Two or more arguments were supplied. `total` counts the invocation name too.
    #[error("too many args passed! expected <= 2, got {total}")]
    TooManyArguments { total: usize },
}

impl EchoError {
    /// Process exit status used to report this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            EchoError::TooManyArguments { .. } => 1,
        }
    }
}

/// Failures while driving the fixture from the harness
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Failed to spawn fixture process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Scenario '{scenario}' timed out after {timeout_ms}ms")]
    Timeout { scenario: String, timeout_ms: u64 },

    #[error("Scenario '{scenario}' was terminated by a signal")]
    Signaled { scenario: String },

    #[error("Fixture binary not found: {0}")]
    BinaryNotFound(PathBuf),
}

impl HarnessError {
    /// Check if this error is related to I/O operations
    pub fn is_io_error(&self) -> bool {
        matches!(self, HarnessError::Spawn(_) | HarnessError::BinaryNotFound(_))
    }

    /// Get error category for programmatic handling
    pub fn error_category(&self) -> &'static str {
        match self {
            HarnessError::Spawn(_) | HarnessError::BinaryNotFound(_) => "IO",
            HarnessError::Timeout { .. } => "TIMEOUT",
            HarnessError::Signaled { .. } => "PROCESS",
        }
    }
}
