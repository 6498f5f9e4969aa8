//! View models
//!
//! Pre-computed display data, separating data preparation from rendering.

pub mod command_palette;
pub mod status_bar;

pub use command_palette::{CommandPaletteViewModel, OptionRow};
pub use status_bar::StatusBarViewModel;
