//! Navigation actions - shared across multiple screens
//!
//! These are generic navigation actions that views can translate
//! into their screen-specific actions.

/// Generic navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (down arrow, Tab)
    Next,
    /// Navigate to previous item (up arrow, Shift+Tab)
    Previous,
    /// Navigate one level out (left arrow)
    Back,
}
