use crate::actions::{Action, CommandPaletteAction, FontDialogAction, GlobalAction};
use crate::reducers::{
    command_palette_reducer::reduce_command_palette, font_dialog_reducer::reduce_font_dialog,
    playground_reducer::reduce_playground, status_bar_reducer::reduce_status_bar,
};
use crate::state::{AppState, FontDialogState};
use crate::views::{CommandPaletteView, FontDialogView, View, ViewId};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            // Quit from any view
            state.running = false;
        }
        Action::Global(GlobalAction::Close) => {
            // Close the top-most view
            // If there's only one view left, quit the application
            if state.view_stack.len() > 1 {
                if let Some(popped) = state.view_stack.pop() {
                    log::debug!("Closed view: {:?}", popped.view_id());
                    state = reset_view_state(state, popped.view_id());
                }
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        Action::CommandPalette(palette_action) => {
            match palette_action {
                CommandPaletteAction::Open => {
                    push_view(&mut state, Box::new(CommandPaletteView::new()));
                }
                CommandPaletteAction::Close => {
                    remove_view(&mut state, ViewId::CommandPalette);
                }
                _ => {}
            }
            state.command_palette = reduce_command_palette(state.command_palette, palette_action);
        }
        Action::FontDialog(dialog_action) => {
            match dialog_action {
                FontDialogAction::Open => {
                    push_view(&mut state, Box::new(FontDialogView::new()));
                }
                FontDialogAction::Close => {
                    remove_view(&mut state, ViewId::FontDialog);
                }
                _ => {}
            }
            state.font_dialog = reduce_font_dialog(state.font_dialog, dialog_action);
        }
        Action::Playground(playground_action) => {
            state.playground = reduce_playground(state.playground, playground_action);
        }
        Action::StatusBar(status_action) => {
            state.status_bar = reduce_status_bar(state.status_bar, status_action);
        }
        // Translated by middleware before they reach here
        Action::Global(GlobalAction::KeyPressed(_))
        | Action::Navigate(_)
        | Action::TextInput(_) => {}
    }

    state
}

/// Push a view unless it is already on the stack
fn push_view(state: &mut AppState, view: Box<dyn View>) {
    if state.is_open(view.view_id()) {
        log::debug!("View {:?} is already open", view.view_id());
        return;
    }
    log::debug!("Pushing view onto stack: {:?}", view.view_id());
    state.view_stack.push(view);
}

/// Remove a view wherever it is in the stack
fn remove_view(state: &mut AppState, id: ViewId) {
    state.view_stack.retain(|v| v.view_id() != id);
    log::debug!("Removed view {:?}", id);
}

/// A closed overlay starts from scratch next time
fn reset_view_state(mut state: AppState, id: ViewId) -> AppState {
    match id {
        ViewId::CommandPalette => {
            state.command_palette =
                reduce_command_palette(state.command_palette, &CommandPaletteAction::Close);
        }
        ViewId::FontDialog => {
            state.font_dialog = FontDialogState::default();
        }
        ViewId::Playground => {}
    }
    state
}
