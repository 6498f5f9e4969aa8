//! Command Palette screen actions
//!
//! Actions specific to the command palette overlay.

use tw_palette_menu::CommandMenuController;

/// Actions for the Command Palette screen
#[derive(Debug, Clone)]
pub enum CommandPaletteAction {
    /// Show the palette at the root level with an empty query
    Open,
    /// Hide the palette and reset its menu state
    Close,

    // Navigation (translated from NavigationAction)
    /// Highlight the next visible option
    NavigateNext,
    /// Highlight the previous visible option
    NavigatePrev,
    /// Go back to the parent menu (only when the query is empty)
    Back,

    // Text input (translated from TextInputAction)
    /// Character typed into search field
    Char(char),
    /// Backspace pressed in search field; goes back a level when the query is empty
    Backspace,
    /// Clear entire query
    Clear,

    /// Select the highlighted option
    Execute,
    /// Menu state after a selection ran (dispatched by the middleware)
    SelectionApplied(CommandMenuController),
}
