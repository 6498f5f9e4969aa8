//! Playground actions

use crate::domain_models::{FontRule, PlaygroundContent};

/// Actions that change or persist the playground content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundAction {
    /// Apply a configuration change, e.g. `("add plugin", "@tailwindcss/forms")`
    UpdateConfig { action: String, payload: String },
    /// Add a Google font: CSS embed plus the parsed `font-family` rules
    AddFont { css_embed: String, rules: Vec<FontRule> },
    /// Persist the current content
    Sync,
    /// New content, dispatched after it was persisted
    ContentChanged(PlaygroundContent),
    /// Content is stored under this snapshot ID
    Synced(String),
}
