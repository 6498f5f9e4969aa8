//! View model for command palette
//!
//! Pre-computes all display data for the command palette view, separating
//! data preparation from rendering logic.

use crate::state::AppState;
use tw_palette_menu::{match_range, Transition};

const BREADCRUMB_SEPARATOR: &str = " › ";

/// View model for the command palette
#[derive(Debug, Clone)]
pub struct CommandPaletteViewModel {
    /// Menu path, e.g. "Home › Plugins"
    pub title: String,
    /// Pre-formatted input text for display
    pub input_text: String,
    /// Is input empty (for placeholder styling)
    pub input_is_empty: bool,
    /// Placeholder shown while the input is empty
    pub placeholder: String,
    /// Visible option rows (after filtering, never empty)
    pub rows: Vec<OptionRow>,
    /// Whether a back gesture leads anywhere
    pub can_go_back: bool,
    /// Footer hints for navigation
    pub footer_hints: FooterHints,
}

/// Pre-computed footer hints for keyboard shortcuts
#[derive(Debug, Clone)]
pub struct FooterHints {
    pub select: String,
    pub navigate: String,
    pub back: String,
    pub close: String,
}

/// A single row in the option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub is_selected: bool,
    /// Selection indicator ("> " or "  ")
    pub indicator: &'static str,
    /// Label split around the part matching the query
    pub label_before: String,
    pub label_match: String,
    pub label_after: String,
    pub is_disabled: bool,
    /// Marker for options opening another level
    pub submenu_marker: &'static str,
}

impl CommandPaletteViewModel {
    /// Build view model from application state
    pub fn from_state(state: &AppState) -> Self {
        let palette = &state.command_palette;
        let menu = &palette.menu;
        let query = menu.query();

        let rows = menu
            .visible_options()
            .into_iter()
            .enumerate()
            .map(|(idx, option)| {
                let is_selected = idx == palette.selected_index;
                let label = option.label.as_str();
                let (label_before, label_match, label_after) = match match_range(label, query) {
                    Some(range) => (
                        label[..range.start].to_string(),
                        label[range.clone()].to_string(),
                        label[range.end..].to_string(),
                    ),
                    None => (label.to_string(), String::new(), String::new()),
                };
                let opens_submenu = matches!(option.action, Some(Transition::Navigate(_)));

                OptionRow {
                    is_selected,
                    indicator: if is_selected { "> " } else { "  " },
                    label_before,
                    label_match,
                    label_after,
                    is_disabled: option.disabled,
                    submenu_marker: if opens_submenu { " ›" } else { "" },
                }
            })
            .collect();

        Self {
            title: menu.breadcrumb().join(BREADCRUMB_SEPARATOR),
            input_text: query.to_string(),
            input_is_empty: query.is_empty(),
            placeholder: format!("Search {}...", menu.current_label()),
            rows,
            can_go_back: !menu.is_at_root(),
            footer_hints: FooterHints {
                select: "Enter".to_string(),
                navigate: "↑/↓".to_string(),
                back: "←/Backspace".to_string(),
                close: "Esc".to_string(),
            },
        }
    }
}
