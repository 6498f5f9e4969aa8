//! Reducers
//!
//! Pure functions producing new state from current state + action.

pub mod app_reducer;
pub mod command_palette_reducer;
pub mod font_dialog_reducer;
pub mod playground_reducer;
pub mod status_bar_reducer;
