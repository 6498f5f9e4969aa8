//! Status bar reducer
//!
//! Records sync results and dialog errors in the message history.

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusKind, StatusMessage};

pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    let StatusBarAction::Push {
        kind,
        message,
        source,
    } = action;

    // Messages are mirrored into the log file
    match kind {
        StatusKind::Error => log::warn!("[{}] {}", source, message),
        StatusKind::Success | StatusKind::Info => log::info!("[{}] {}", source, message),
    }

    state.push(StatusMessage::new(*kind, message.as_str(), source.as_str()));
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_becomes_latest() {
        let state = reduce_status_bar(
            StatusBarState::default(),
            &StatusBarAction::success("Added plugin", "playground"),
        );
        let state = reduce_status_bar(state, &StatusBarAction::error("Sync failed", "playground"));

        let latest = state.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Error);
        assert_eq!(latest.message, "Sync failed");
        assert_eq!(latest.source, "playground");
        assert_eq!(state.messages.len(), 2);
    }
}
