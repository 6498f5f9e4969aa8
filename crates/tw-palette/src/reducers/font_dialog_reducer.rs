//! Font dialog reducer

use crate::actions::FontDialogAction;
use crate::state::FontDialogState;

/// Reducer for the font dialog form
pub fn reduce_font_dialog(mut state: FontDialogState, action: &FontDialogAction) -> FontDialogState {
    match action {
        FontDialogAction::Char(c) => {
            state.focused_value_mut().push(*c);
            state.error = None;
        }
        FontDialogAction::Backspace => {
            state.focused_value_mut().pop();
            state.error = None;
        }
        FontDialogAction::ClearField => {
            state.focused_value_mut().clear();
            state.error = None;
        }
        FontDialogAction::NextField => {
            state.focused_field = state.focused_field.next();
        }
        FontDialogAction::PrevField => {
            state.focused_field = state.focused_field.prev();
        }
        FontDialogAction::Rejected(reason) => {
            state.error = Some(reason.clone());
        }
        // Every open starts from an empty form
        FontDialogAction::Open | FontDialogAction::Close => {
            state = FontDialogState::default();
        }
        // The middleware parses and forwards the form
        FontDialogAction::Submit => {}
    }
    state
}
