//! Command Palette State

use tw_palette_menu::{CommandMenuController, MenuTree};

/// Command palette state
#[derive(Debug, Clone)]
pub struct CommandPaletteState {
    /// Menu level and query
    pub menu: CommandMenuController,
    /// Highlighted row among the visible options
    pub selected_index: usize,
}

impl CommandPaletteState {
    pub fn new(tree: MenuTree) -> Self {
        Self {
            menu: CommandMenuController::new(tree),
            selected_index: 0,
        }
    }

    /// Number of rows currently shown (never zero)
    pub fn visible_len(&self) -> usize {
        self.menu.visible_options().len()
    }
}
