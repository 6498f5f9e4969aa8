//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular screen

// Shared action types
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod command_palette;
pub mod font_dialog;
pub mod playground;
pub mod status_bar;

// Re-export all action types for convenience
pub use command_palette::CommandPaletteAction;
pub use font_dialog::FontDialogAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use playground::PlaygroundAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
///
/// Actions are categorized as:
/// - `Navigate` / `TextInput`: Generic actions that need translation by the active view
/// - `Global`: Application-wide actions (quit, view management)
/// - Screen-specific variants: Already targeted to a specific screen's reducer
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    // Global actions (no translation needed)
    /// Global application actions
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// Command Palette actions
    CommandPalette(CommandPaletteAction),
    /// Google fonts dialog actions
    FontDialog(FontDialogAction),
    /// Playground content and sync actions
    Playground(PlaygroundAction),
    /// Status Bar actions
    StatusBar(StatusBarAction),
}
