//! Status bar actions

use crate::state::StatusKind;

/// Notifications shown at the bottom of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusBarAction {
    /// Show a message
    Push {
        kind: StatusKind,
        message: String,
        /// Short name of what produced the message, e.g. "sync"
        source: String,
    },
}

impl StatusBarAction {
    pub fn info(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::push(StatusKind::Info, message, source)
    }

    pub fn success(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::push(StatusKind::Success, message, source)
    }

    pub fn error(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::push(StatusKind::Error, message, source)
    }

    fn push(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}
