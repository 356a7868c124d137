//! The uniform result value of every engine operation.

use std::fmt;

use super::message::{ErrorMessage, InfoMessage};

/// Success or failure, plus the exact text shown to the user.
///
/// Constructors only accept catalog messages, so a failed outcome can
/// never carry an empty or ad-hoc explanation and a successful one always
/// carries a confirmation. No operation reports partial success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    succeeded: bool,
    message: String,
}

impl Outcome {
    /// A successful operation with its confirmation text.
    pub fn success(message: InfoMessage) -> Self {
        Self {
            succeeded: true,
            message: message.to_string(),
        }
    }

    /// A failed operation with its explanation.
    pub fn failure(message: ErrorMessage) -> Self {
        Self {
            succeeded: false,
            message: message.to_string(),
        }
    }

    /// Whether the operation succeeded.
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// The user-facing message, verbatim from the catalog.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
