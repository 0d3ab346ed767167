//! Error types for the access gate.

use std::fmt;

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

/// Errors that can occur around gate evaluation.
///
/// Per-request evaluation itself never fails: missing data is treated
/// permissively (absent address allows, absent config signals
/// unconfigured). Errors here surface lifecycle misuse and a broken host
/// environment, both of which are startup-time conditions.
#[derive(Debug)]
pub enum GateError {
    /// Invalid settings.
    InvalidSettings(String),

    /// The gate is in the wrong state for the requested operation.
    InvalidState {
        /// Current state of the gate.
        current: String,
        /// Expected state for the operation.
        expected: String,
    },

    /// The host environment exposes no request information at all.
    HostEnvironment(String),
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSettings(msg) => write!(f, "invalid settings: {msg}"),
            Self::InvalidState { current, expected } => {
                write!(f, "invalid state: current={current}, expected={expected}")
            },
            Self::HostEnvironment(msg) => write!(f, "host environment error: {msg}"),
        }
    }
}

impl std::error::Error for GateError {}
