use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod command_palette_middleware;
pub mod font_dialog_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod navigation_middleware;
pub mod playground_middleware;
pub mod text_input_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::actions::Action;
    use crate::dispatcher::Dispatcher;
    use crate::menu::playground_menu;
    use crate::state::AppState;
    use std::sync::mpsc::{self, Receiver};
    use tw_palette_config::AppConfig;

    pub fn app_state() -> AppState {
        let config = AppConfig::default();
        let menu = playground_menu(&config).unwrap();
        AppState::new(config, menu)
    }

    pub fn dispatcher() -> (Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Dispatcher::new(tx), rx)
    }

    /// Everything dispatched so far
    pub fn dispatched(rx: &Receiver<Action>) -> Vec<Action> {
        rx.try_iter().collect()
    }
}
