//! Actions handled by the app reducer itself

use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Terminal key event, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Pop the topmost view; popping the playground ends the session
    Close,
    /// Leave the event loop
    Quit,
}
