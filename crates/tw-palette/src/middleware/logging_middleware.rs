//! LoggingMiddleware - logs all actions for debugging

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions that pass through the system
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Keys are logged by KeyboardMiddleware
        if !matches!(action, Action::Global(GlobalAction::KeyPressed(_))) {
            log::debug!("Action: {:?}", action);
        }
        // Always continue to next middleware
        true
    }
}
