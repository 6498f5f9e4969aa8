//! Playground State

use crate::domain_models::PlaygroundContent;
use chrono::{DateTime, Local};
use tw_playground_sync::to_valid_tailwind_version;

/// Playground content and its sync status
#[derive(Debug, Clone)]
pub struct PlaygroundState {
    pub content: PlaygroundContent,
    /// Tailwind version recorded with each snapshot
    pub tailwind_version: String,
    /// Identifier of the stored snapshot, once synced
    pub snapshot_id: Option<String>,
    pub last_synced: Option<DateTime<Local>>,
}

impl PlaygroundState {
    pub fn new(tailwind_version: &str) -> Self {
        Self {
            content: PlaygroundContent::default(),
            tailwind_version: to_valid_tailwind_version(tailwind_version),
            snapshot_id: None,
            last_synced: None,
        }
    }
}
