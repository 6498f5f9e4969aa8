//! Navigation Translation Middleware
//!
//! Translates generic Navigation actions into view-specific actions
//! using the active view's translate_navigation method.
//!
//! This ensures translated actions go through the full middleware chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates Navigation actions via the active view
pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Navigate(nav) = action {
            if let Some(view) = state.active_view() {
                if let Some(translated) = view.translate_navigation(*nav) {
                    log::debug!(
                        "NavigationMiddleware: Translating {:?} to {:?}",
                        nav,
                        translated
                    );
                    dispatcher.dispatch(translated);
                    return false;
                }
            }
            log::debug!("Navigation action not handled by active view: {:?}", nav);
            return false;
        }

        // Pass through all other actions
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CommandPaletteAction, NavigationAction};
    use crate::middleware::test_support::{app_state, dispatcher, dispatched};
    use crate::views::CommandPaletteView;

    #[test]
    fn test_translates_for_palette() {
        let mut state = app_state();
        state.view_stack.push(Box::new(CommandPaletteView::new()));
        let (dispatcher, rx) = dispatcher();

        let consumed = !NavigationMiddleware::new().handle(
            &Action::Navigate(NavigationAction::Back),
            &state,
            &dispatcher,
        );

        assert!(consumed);
        assert!(matches!(
            dispatched(&rx).as_slice(),
            [Action::CommandPalette(CommandPaletteAction::Back)]
        ));
    }

    #[test]
    fn test_untranslated_navigation_is_dropped() {
        let (dispatcher, rx) = dispatcher();
        let passed = NavigationMiddleware::new().handle(
            &Action::Navigate(NavigationAction::Next),
            &app_state(),
            &dispatcher,
        );
        assert!(!passed);
        assert!(dispatched(&rx).is_empty());
    }
}
