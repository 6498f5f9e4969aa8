//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::command_id::CommandId;
use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Emoji/icon for the status
    pub emoji: &'static str,
    /// The message text
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// What produced the message
    pub source: String,
    /// Foreground style (color based on kind)
    pub message_style: Style,
    /// Background color for the bar
    pub bg_color: Color,
    /// Style for metadata (timestamp, source)
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        if let Some(msg) = state.status_bar.latest() {
            let fg_color = match msg.kind {
                StatusKind::Success => theme.status_success,
                StatusKind::Error => theme.status_error,
                StatusKind::Info => theme.status_info,
            };

            Self {
                emoji: msg.kind.emoji(),
                message: msg.message.clone(),
                timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                source: msg.source.clone(),
                message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                bg_color: theme.bg_primary,
                metadata_style,
            }
        } else {
            // Usage hint when no status messages
            let hint = state
                .keymap
                .hint_for(CommandId::CommandPaletteOpen)
                .unwrap_or("Ctrl+K");
            Self {
                emoji: "👋",
                message: format!("Press {} to open the command palette", hint),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::playground_menu;
    use crate::state::StatusMessage;
    use tw_palette_config::AppConfig;

    fn app_state() -> AppState {
        let config = AppConfig::default();
        let menu = playground_menu(&config).unwrap();
        AppState::new(config, menu)
    }

    #[test]
    fn test_welcome_hint() {
        let vm = StatusBarViewModel::from_state(&app_state());
        assert_eq!(vm.message, "Press Ctrl+K to open the command palette");
        assert!(vm.timestamp.is_empty());
    }

    #[test]
    fn test_latest_message() {
        let mut state = app_state();
        state
            .status_bar
            .push(StatusMessage::new(StatusKind::Error, "Sync failed", "playground"));

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "Sync failed");
        assert_eq!(vm.source, "playground");
        assert_eq!(vm.emoji, StatusKind::Error.emoji());
        assert_eq!(vm.timestamp.len(), 8);
    }
}
