//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod command_palette;
mod font_dialog;
mod playground;
mod status_bar;

pub use app::AppState;
pub use command_palette::CommandPaletteState;
pub use font_dialog::{FontDialogField, FontDialogState};
pub use playground::PlaygroundState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
