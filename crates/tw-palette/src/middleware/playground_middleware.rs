//! Playground Middleware
//!
//! Applies config and font edits to the playground content and persists every
//! change through the sync service. State only changes once the snapshot is
//! stored; failures are reported in the status bar.

use crate::actions::{Action, PlaygroundAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::PlaygroundContent;
use crate::menu::ADD_PLUGIN_ACTION;
use crate::middleware::Middleware;
use crate::state::AppState;
use tw_playground_sync::{SnapshotStore, SyncService};

const STATUS_SOURCE: &str = "playground";

pub struct PlaygroundMiddleware<S: SnapshotStore> {
    service: SyncService<S>,
}

impl<S: SnapshotStore> PlaygroundMiddleware<S> {
    pub fn new(service: SyncService<S>) -> Self {
        Self { service }
    }

    /// Store `content` and publish it on success
    fn persist(
        &mut self,
        content: PlaygroundContent,
        success_message: String,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) {
        let playground = &state.playground;
        let request = content.to_sync_request(
            playground.snapshot_id.as_deref(),
            &playground.tailwind_version,
        );

        match self.service.sync(request) {
            Ok(id) => {
                dispatcher.dispatch(Action::Playground(PlaygroundAction::ContentChanged(content)));
                dispatcher.dispatch(Action::Playground(PlaygroundAction::Synced(id.clone())));
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("{} (snapshot {})", success_message, id),
                    STATUS_SOURCE,
                )));
            }
            Err(e) => {
                log::error!("Failed to sync playground: {}", e);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("Sync failed: {}", e),
                    STATUS_SOURCE,
                )));
            }
        }
    }

    /// Outcome of an edit: persist the new content or report why nothing happened
    fn apply_edit(
        &mut self,
        edit: anyhow::Result<Option<PlaygroundContent>>,
        success_message: String,
        unchanged_message: String,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) {
        match edit {
            Ok(Some(content)) => self.persist(content, success_message, state, dispatcher),
            Ok(None) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    unchanged_message,
                    STATUS_SOURCE,
                )));
            }
            Err(e) => {
                log::warn!("Playground edit failed: {:#}", e);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    e.to_string(),
                    STATUS_SOURCE,
                )));
            }
        }
    }
}

impl<S: SnapshotStore + Send> Middleware for PlaygroundMiddleware<S> {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Playground(playground_action) = action else {
            return true;
        };
        let content = &state.playground.content;

        match playground_action {
            PlaygroundAction::UpdateConfig { action, payload } if action == ADD_PLUGIN_ACTION => {
                self.apply_edit(
                    content.with_plugin(payload),
                    format!("Added plugin {}", payload),
                    format!("Plugin {} is already installed", payload),
                    state,
                    dispatcher,
                );
                false
            }
            PlaygroundAction::UpdateConfig { action, .. } => {
                log::warn!("Unknown config action: {}", action);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("Unknown config action '{}'", action),
                    STATUS_SOURCE,
                )));
                false
            }
            PlaygroundAction::AddFont { css_embed, rules } => {
                let names = rules
                    .iter()
                    .map(|r| r.key.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.apply_edit(
                    content.with_font(css_embed, rules),
                    format!("Added font {}", names),
                    format!("Font {} is already configured", names),
                    state,
                    dispatcher,
                );
                false
            }
            PlaygroundAction::Sync => {
                self.persist(content.clone(), "Synced".to_string(), state, dispatcher);
                false
            }
            // Results of a sync go to the reducer
            PlaygroundAction::ContentChanged(_) | PlaygroundAction::Synced(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::FontRule;
    use crate::middleware::test_support::{app_state, dispatcher, dispatched};
    use crate::state::StatusKind;
    use tw_playground_sync::{Commit, MemorySnapshotStore, Snapshot, SyncError};

    fn middleware() -> PlaygroundMiddleware<MemorySnapshotStore> {
        PlaygroundMiddleware::new(SyncService::new(MemorySnapshotStore::new()))
    }

    fn add_plugin(plugin: &str) -> Action {
        Action::Playground(PlaygroundAction::UpdateConfig {
            action: ADD_PLUGIN_ACTION.to_string(),
            payload: plugin.to_string(),
        })
    }

    #[test]
    fn test_add_plugin_persists_and_publishes() {
        let mut middleware = middleware();
        let (dispatcher, rx) = dispatcher();

        let passed = middleware.handle(&add_plugin("@tailwindcss/forms"), &app_state(), &dispatcher);
        assert!(!passed);

        let actions = dispatched(&rx);
        let id = match actions.as_slice() {
            [
                Action::Playground(PlaygroundAction::ContentChanged(content)),
                Action::Playground(PlaygroundAction::Synced(id)),
                Action::StatusBar(StatusBarAction::Push { kind: StatusKind::Success, .. }),
            ] => {
                assert_eq!(content.plugins(), vec!["@tailwindcss/forms"]);
                id.clone()
            }
            other => panic!("unexpected actions: {:?}", other),
        };

        let stored = middleware.service.load(&id).unwrap();
        assert!(stored.config.contains("require('@tailwindcss/forms')"));
        assert_eq!(stored.version, "3");
    }

    #[test]
    fn test_later_syncs_reuse_snapshot_id() {
        let mut middleware = middleware();
        let mut state = app_state();
        state.playground.snapshot_id = Some("existing".to_string());
        let (dispatcher, rx) = dispatcher();

        middleware.handle(&Action::Playground(PlaygroundAction::Sync), &state, &dispatcher);

        assert!(dispatched(&rx).iter().any(|a| matches!(
            a,
            Action::Playground(PlaygroundAction::Synced(id)) if id == "existing"
        )));
        assert_eq!(middleware.service.store().len(), 1);
    }

    #[test]
    fn test_installed_plugin_is_reported() {
        let mut state = app_state();
        state.playground.content = state
            .playground
            .content
            .with_plugin("@tailwindcss/forms")
            .unwrap()
            .unwrap();
        let (dispatcher, rx) = dispatcher();

        middleware().handle(&add_plugin("@tailwindcss/forms"), &state, &dispatcher);

        assert!(matches!(
            dispatched(&rx).as_slice(),
            [Action::StatusBar(StatusBarAction::Push { kind: StatusKind::Info, .. })]
        ));
    }

    #[test]
    fn test_add_font() {
        let (dispatcher, rx) = dispatcher();
        let action = Action::Playground(PlaygroundAction::AddFont {
            css_embed: "@import url(roboto);".to_string(),
            rules: vec![FontRule {
                key: "roboto".to_string(),
                families: vec!["Roboto".to_string()],
            }],
        });

        middleware().handle(&action, &app_state(), &dispatcher);

        match dispatched(&rx).first() {
            Some(Action::Playground(PlaygroundAction::ContentChanged(content))) => {
                assert!(content.css.starts_with("@import url(roboto);"));
                assert!(content.config.contains("'roboto': ['Roboto'],"));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_config_action() {
        let (dispatcher, rx) = dispatcher();
        let action = Action::Playground(PlaygroundAction::UpdateConfig {
            action: "remove plugin".to_string(),
            payload: "x".to_string(),
        });

        middleware().handle(&action, &app_state(), &dispatcher);

        assert!(matches!(
            dispatched(&rx).as_slice(),
            [Action::StatusBar(StatusBarAction::Push { kind: StatusKind::Error, .. })]
        ));
    }

    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn put(&mut self, _id: &str, _snapshot: &Snapshot) -> Result<(), SyncError> {
            Err(std::io::Error::other("disk full").into())
        }

        fn get(&self, id: &str) -> Result<Snapshot, SyncError> {
            Err(SyncError::NotFound(id.to_string()))
        }

        fn record_commit(&mut self, _id: &str, _commit: &Commit) -> Result<(), SyncError> {
            Ok(())
        }

        fn commits(&self, _id: &str) -> Result<Vec<Commit>, SyncError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_failed_sync_leaves_content_alone() {
        let mut middleware = PlaygroundMiddleware::new(SyncService::new(BrokenStore));
        let (dispatcher, rx) = dispatcher();

        middleware.handle(&add_plugin("@tailwindcss/forms"), &app_state(), &dispatcher);

        assert!(matches!(
            dispatched(&rx).as_slice(),
            [Action::StatusBar(StatusBarAction::Push { kind: StatusKind::Error, .. })]
        ));
    }

    #[test]
    fn test_sync_results_reach_reducer() {
        let (dispatcher, _rx) = dispatcher();
        assert!(middleware().handle(
            &Action::Playground(PlaygroundAction::Synced("abc".to_string())),
            &app_state(),
            &dispatcher
        ));
    }
}
