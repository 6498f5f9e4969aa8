//! Command Palette Middleware
//!
//! Runs the highlighted menu option when CommandPalette::Execute is dispatched.
//! Text input and navigation are handled via view translation (translate_text_input/translate_navigation).

use crate::actions::{Action, CommandPaletteAction, FontDialogAction, PlaygroundAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use tw_palette_menu::{Effect, EffectHandler};

/// Collects the actions requested by menu effects, in order
#[derive(Debug, Default)]
struct EffectActions {
    actions: Vec<Action>,
}

impl EffectHandler for EffectActions {
    fn handle(&mut self, effect: &Effect) {
        let action = match effect {
            Effect::UpdateConfig { action, payload } => {
                Action::Playground(PlaygroundAction::UpdateConfig {
                    action: action.clone(),
                    payload: payload.clone(),
                })
            }
            Effect::OpenFontDialog => Action::FontDialog(FontDialogAction::Open),
            Effect::ClosePalette => Action::CommandPalette(CommandPaletteAction::Close),
        };
        self.actions.push(action);
    }
}

/// Middleware that handles command palette selection
pub struct CommandPaletteMiddleware;

impl CommandPaletteMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandPaletteMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CommandPaletteMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::CommandPalette(CommandPaletteAction::Execute) = action {
            let palette = &state.command_palette;
            let mut menu = palette.menu.clone();
            let mut effects = EffectActions::default();

            menu.select(palette.selected_index, &mut effects);
            log::debug!(
                "Command palette selection {} at '{}' requested {} effect(s)",
                palette.selected_index,
                palette.menu.current_label(),
                effects.actions.len()
            );

            // Menu state first, so effects see the level the selection led to
            dispatcher.dispatch(Action::CommandPalette(
                CommandPaletteAction::SelectionApplied(menu),
            ));
            for action in effects.actions {
                dispatcher.dispatch(action);
            }
            return false;
        }

        // All other actions pass through
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::test_support::{app_state, dispatcher, dispatched};

    fn execute(state: &AppState) -> Vec<Action> {
        let (dispatcher, rx) = dispatcher();
        let passed = CommandPaletteMiddleware::new().handle(
            &Action::CommandPalette(CommandPaletteAction::Execute),
            state,
            &dispatcher,
        );
        assert!(!passed);
        dispatched(&rx)
    }

    #[test]
    fn test_navigate_option() {
        let actions = execute(&app_state());
        match actions.as_slice() {
            [Action::CommandPalette(CommandPaletteAction::SelectionApplied(menu))] => {
                assert_eq!(menu.current_label(), "Plugins");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_google_fonts_option() {
        let mut state = app_state();
        state.command_palette.selected_index = 1;

        let actions = execute(&state);
        assert!(matches!(
            actions.as_slice(),
            [
                Action::CommandPalette(CommandPaletteAction::SelectionApplied(_)),
                Action::CommandPalette(CommandPaletteAction::Close),
                Action::FontDialog(FontDialogAction::Open),
            ]
        ));
    }

    #[test]
    fn test_plugin_option() {
        let mut state = app_state();
        state.command_palette.menu.set_query("plug");
        state.command_palette.menu.select(0, &mut tw_palette_menu::EffectQueue::default());
        state.command_palette.selected_index = 1;

        let actions = execute(&state);
        match actions.as_slice() {
            [
                Action::CommandPalette(CommandPaletteAction::SelectionApplied(menu)),
                Action::Playground(PlaygroundAction::UpdateConfig { action, payload }),
                Action::CommandPalette(CommandPaletteAction::Close),
            ] => {
                assert!(menu.is_at_root());
                assert_eq!(action, "add plugin");
                assert_eq!(payload, "@tailwindcss/forms");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_disabled_option_only_reports_menu() {
        let mut state = app_state();
        state.command_palette.selected_index = 2;

        let actions = execute(&state);
        match actions.as_slice() {
            [Action::CommandPalette(CommandPaletteAction::SelectionApplied(menu))] => {
                assert!(menu.is_at_root());
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }
}
