//! Playground reducer
//!
//! Content only changes after the middleware has persisted it.

use crate::actions::PlaygroundAction;
use crate::state::PlaygroundState;

pub fn reduce_playground(mut state: PlaygroundState, action: &PlaygroundAction) -> PlaygroundState {
    match action {
        PlaygroundAction::ContentChanged(content) => {
            state.content = content.clone();
        }
        PlaygroundAction::Synced(id) => {
            state.snapshot_id = Some(id.clone());
            state.last_synced = Some(chrono::Local::now());
        }
        // Side effects, handled by PlaygroundMiddleware
        PlaygroundAction::UpdateConfig { .. }
        | PlaygroundAction::AddFont { .. }
        | PlaygroundAction::Sync => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::PlaygroundContent;

    #[test]
    fn test_synced_records_id() {
        let state = reduce_playground(
            PlaygroundState::new("3"),
            &PlaygroundAction::Synced("abc".to_string()),
        );
        assert_eq!(state.snapshot_id.as_deref(), Some("abc"));
        assert!(state.last_synced.is_some());
    }

    #[test]
    fn test_update_config_alone_changes_nothing() {
        let state = reduce_playground(
            PlaygroundState::new("3"),
            &PlaygroundAction::UpdateConfig {
                action: "add plugin".to_string(),
                payload: "@tailwindcss/forms".to_string(),
            },
        );
        assert_eq!(state.content, PlaygroundContent::default());
    }
}
