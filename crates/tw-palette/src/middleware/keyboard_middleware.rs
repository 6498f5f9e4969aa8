//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//!
//! ## Layer 2: Capabilities
//! Route keys based on view capabilities. Views with TEXT_INPUT capability
//! receive character keys as text rather than as keybindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.
//! This prevents actions from "leaking" to reducers when a different view is active.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event using the three-layer approach
    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        // Ctrl+C: Emergency quit - always works
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        // Esc: text views decide themselves, everything else closes
        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape (view has TEXT_INPUT)");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            if let KeyCode::Char(c) = key.code {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    log::debug!("Layer 2: TEXT_INPUT - routing char '{}' to TextInput", c);
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                    return false;
                }

                // Ctrl+U - Unix line kill (clear line)
                if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'u' {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    return false;
                }
            }

            if key.code == KeyCode::Backspace {
                if key.modifiers.contains(KeyModifiers::SUPER) {
                    // Cmd+Backspace on Mac - clear entire line
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                } else {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                }
                return false;
            }

            if key.code == KeyCode::Enter {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                return false;
            }

            if capabilities.supports_item_navigation() {
                match key.code {
                    KeyCode::Down => {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Next));
                        return false;
                    }
                    KeyCode::Up => {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                        return false;
                    }
                    _ => {}
                }
            }

            if capabilities.supports_back_navigation() && key.code == KeyCode::Left {
                dispatcher.dispatch(Action::Navigate(NavigationAction::Back));
                return false;
            }

            // Tab for field navigation in text input mode
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                    } else {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Next));
                    }
                    return false;
                }
                KeyCode::BackTab => {
                    dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                    return false;
                }
                _ => {}
            }

            // Other keys in text input mode go through Layer 3 (Ctrl+ combinations)
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        for cmd_id in state.keymap.match_key(&key) {
            let action = cmd_id.to_action();

            match view {
                Some(view) if view.accepts_action(&action) => {
                    log::debug!("Layer 3: Command {:?} accepted by view, dispatching", cmd_id);
                    dispatcher.dispatch(action);
                    return false;
                }
                Some(view) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
                None => {
                    dispatcher.dispatch(action);
                    return false;
                }
            }
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, state, dispatcher);
        }

        // All other actions pass through
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CommandPaletteAction, PlaygroundAction};
    use crate::middleware::test_support::{app_state, dispatcher, dispatched};
    use crate::views::CommandPaletteView;

    fn press(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        let (dispatcher, rx) = dispatcher();
        let key = KeyEvent::new(code, modifiers);
        KeyboardMiddleware::new().handle(
            &Action::Global(GlobalAction::KeyPressed(key)),
            state,
            &dispatcher,
        );
        dispatched(&rx)
    }

    fn with_palette() -> AppState {
        let mut state = app_state();
        state.view_stack.push(Box::new(CommandPaletteView::new()));
        state
    }

    #[test]
    fn test_ctrl_k_opens_palette() {
        let actions = press(&app_state(), KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert!(matches!(
            actions.as_slice(),
            [Action::CommandPalette(CommandPaletteAction::Open)]
        ));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let actions = press(&with_palette(), KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_chars_are_text_in_palette() {
        let actions = press(&with_palette(), KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Char('q'))]
        ));
    }

    #[test]
    fn test_q_closes_on_playground() {
        let actions = press(&app_state(), KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }

    #[test]
    fn test_palette_keys() {
        let state = with_palette();
        assert!(matches!(
            press(&state, KeyCode::Down, KeyModifiers::NONE).as_slice(),
            [Action::Navigate(NavigationAction::Next)]
        ));
        assert!(matches!(
            press(&state, KeyCode::Left, KeyModifiers::NONE).as_slice(),
            [Action::Navigate(NavigationAction::Back)]
        ));
        assert!(matches!(
            press(&state, KeyCode::Enter, KeyModifiers::NONE).as_slice(),
            [Action::TextInput(TextInputAction::Confirm)]
        ));
        assert!(matches!(
            press(&state, KeyCode::Esc, KeyModifiers::NONE).as_slice(),
            [Action::TextInput(TextInputAction::Escape)]
        ));
    }

    #[test]
    fn test_sync_is_gated_by_active_view() {
        let actions = press(&app_state(), KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(matches!(
            actions.as_slice(),
            [Action::Playground(PlaygroundAction::Sync)]
        ));

        let actions = press(&with_palette(), KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(actions.is_empty());
    }
}
