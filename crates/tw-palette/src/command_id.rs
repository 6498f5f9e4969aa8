//! Command identifiers
//!
//! This module defines all command IDs as an enum for type-safe command
//! references that can be serialized/deserialized.

use serde::{Deserialize, Serialize};

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `PlaygroundSync` -> `"playground_sync"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Command palette ===
    /// Open the command palette
    CommandPaletteOpen,

    // === Playground ===
    /// Open the Google fonts dialog directly
    FontDialogOpen,
    /// Persist the playground content
    PlaygroundSync,

    // === General ===
    /// Close the current view
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command to the action it triggers
    pub fn to_action(self) -> crate::actions::Action {
        use crate::actions::{
            Action, CommandPaletteAction, FontDialogAction, GlobalAction, PlaygroundAction,
        };

        match self {
            Self::CommandPaletteOpen => Action::CommandPalette(CommandPaletteAction::Open),
            Self::FontDialogOpen => Action::FontDialog(FontDialogAction::Open),
            Self::PlaygroundSync => Action::Playground(PlaygroundAction::Sync),
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short title shown in key hints
    pub fn title(&self) -> &'static str {
        match self {
            Self::CommandPaletteOpen => "command palette",
            Self::FontDialogOpen => "add font",
            Self::PlaygroundSync => "sync",
            Self::GlobalClose => "close",
            Self::GlobalQuit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, PlaygroundAction};

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&CommandId::PlaygroundSync).unwrap();
        assert_eq!(json, "\"playground_sync\"");
    }

    #[test]
    fn test_to_action() {
        assert!(matches!(
            CommandId::PlaygroundSync.to_action(),
            Action::Playground(PlaygroundAction::Sync)
        ));
    }
}
