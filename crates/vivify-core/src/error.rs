//! Error types for the Vivify engine.

use serde::{Deserialize, Serialize};

/// Everything that can fail across load, verification and playback control.
///
/// Errors are terminal for the triggering operation only: held state is never
/// corrupted and the engine remains usable afterwards. Display strings double
/// as the host-facing status messages.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum VivifyError {
    /// Malformed input text (JSON config, CSV-like trace, SVG schematic).
    #[error("{what} is not valid: {reason}")]
    Format { what: String, reason: String },

    /// A required config key is absent.
    #[error("'{field}' missing from config.")]
    MissingField { field: String },

    /// A mapped target names both an element and a group.
    #[error("\"{name}\" is both an element and a group.")]
    AmbiguousTarget { name: String },

    /// A mapped target names neither an element nor a group.
    #[error("\"{name}\" is neither an element nor a group.")]
    UnknownTarget { name: String },

    /// play/step/jump issued before a successful verification.
    #[error("{reason}")]
    Precondition { reason: String },
}

impl VivifyError {
    pub(crate) fn format(what: &str, reason: impl Into<String>) -> Self {
        VivifyError::Format {
            what: what.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(reason: &str) -> Self {
        VivifyError::Precondition {
            reason: reason.to_string(),
        }
    }
}
