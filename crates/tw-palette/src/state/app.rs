//! Application State

use crate::keybindings::{default_keymap, Keymap};
use crate::theme::Theme;
use crate::views::{PlaygroundView, View, ViewId};
use tw_palette_config::AppConfig;
use tw_palette_menu::MenuTree;

use super::{CommandPaletteState, FontDialogState, PlaygroundState, StatusBarState};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub command_palette: CommandPaletteState,
    pub font_dialog: FontDialogState,
    pub playground: PlaygroundState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig, menu: MenuTree) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(PlaygroundView::new())],
            command_palette: CommandPaletteState::new(menu),
            font_dialog: FontDialogState::default(),
            playground: PlaygroundState::new(&app_config.tailwind_version),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    /// Whether a view with this id is on the stack
    pub fn is_open(&self, id: ViewId) -> bool {
        self.view_stack.iter().any(|v| v.view_id() == id)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("command_palette", &self.command_palette)
            .field("font_dialog", &self.font_dialog)
            .field("playground", &self.playground)
            .field("status_bar", &self.status_bar)
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            command_palette: self.command_palette.clone(),
            font_dialog: self.font_dialog.clone(),
            playground: self.playground.clone(),
            status_bar: self.status_bar.clone(),
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            app_config: self.app_config.clone(),
        }
    }
}
