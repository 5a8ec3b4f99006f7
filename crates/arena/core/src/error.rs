//! Error infrastructure for arena-core.
//!
//! Degenerate numeric input (empty rosters, zero maxima, out-of-range distances) is
//! handled by value inside the curve library and never surfaces here. Errors are
//! reserved for inputs the engine cannot interpret at all: a malformed constant
//! table or a roster that does not contain the agent being asked to act.

use std::fmt;

use crate::stats::AgentId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: zero weight total in the curve table, unknown acting agent
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: a cached snapshot refers to an opponent missing from the roster
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the decision engine.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ArenaError {
    /// A curve constant failed validation.
    #[error("invalid curve constant `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    /// The acting agent is not part of the roster.
    #[error("agent {0} is not part of the roster")]
    UnknownAgent(AgentId),

    /// Two participants share the same identifier.
    #[error("agent {0} appears more than once in the roster")]
    DuplicateAgent(AgentId),

    /// A snapshot refers to an opponent the roster no longer contains.
    #[error("snapshot refers to opponent {0} which is missing from the roster")]
    StaleSnapshot(AgentId),
}

impl ArenaError {
    /// Returns the severity level of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfig { .. } | Self::UnknownAgent(_) | Self::DuplicateAgent(_) => {
                ErrorSeverity::Validation
            }
            Self::StaleSnapshot(_) => ErrorSeverity::Internal,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "ARENA_INVALID_CONFIG",
            Self::UnknownAgent(_) => "ARENA_UNKNOWN_AGENT",
            Self::DuplicateAgent(_) => "ARENA_DUPLICATE_AGENT",
            Self::StaleSnapshot(_) => "ARENA_STALE_SNAPSHOT",
        }
    }
}

/// Result alias used throughout arena-core.
pub type ArenaResult<T> = Result<T, ArenaError>;
