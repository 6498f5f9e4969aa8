//! Command palette reducer
//!
//! Handles CommandPalette-specific actions. Opening and closing also touch
//! the view stack, so those are handled by the app reducer.

use crate::actions::CommandPaletteAction;
use crate::state::CommandPaletteState;

/// Reducer for command palette state.
///
/// This is a pure state transformation - no side effects or dispatching.
pub fn reduce_command_palette(
    mut state: CommandPaletteState,
    action: &CommandPaletteAction,
) -> CommandPaletteState {
    match action {
        CommandPaletteAction::Char(c) => {
            let mut query = state.menu.query().to_string();
            query.push(*c);
            state.menu.set_query(query);
            state.selected_index = 0;
        }

        CommandPaletteAction::Backspace => {
            if state.menu.query().is_empty() {
                // Nothing left to delete: step out of the current level
                state.menu.go_back();
            } else {
                let mut query = state.menu.query().to_string();
                query.pop();
                state.menu.set_query(query);
            }
            state.selected_index = 0;
        }

        CommandPaletteAction::Clear => {
            state.menu.set_query("");
            state.selected_index = 0;
        }

        CommandPaletteAction::Back => {
            state.menu.go_back();
            state.selected_index = 0;
        }

        CommandPaletteAction::NavigateNext => {
            let last = state.visible_len().saturating_sub(1);
            state.selected_index = (state.selected_index + 1).min(last);
        }

        CommandPaletteAction::NavigatePrev => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }

        CommandPaletteAction::SelectionApplied(menu) => {
            state.menu = menu.clone();
            state.selected_index = 0;
        }

        CommandPaletteAction::Open => {
            state.menu.open();
            state.selected_index = 0;
        }

        CommandPaletteAction::Close => {
            state.menu.close();
            state.selected_index = 0;
        }

        // The middleware runs the selection
        CommandPaletteAction::Execute => {}
    }

    state
}
