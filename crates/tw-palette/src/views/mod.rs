use crate::actions::{Action, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::StatusBarViewModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub mod command_palette_view;
pub mod font_dialog_view;
pub mod playground_view;
pub mod status_bar;

// Re-export concrete view types for convenience
pub use command_palette_view::CommandPaletteView;
pub use font_dialog_view::FontDialogView;
pub use playground_view::PlaygroundView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Playground,
    CommandPalette,
    FontDialog,
}

/// View trait - defines the interface that all views must implement
///
/// This allows the application to interact with views polymorphically through
/// trait objects (Box<dyn View>), so the trait must stay object-safe.
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    ///
    /// The default implementation returns None, indicating the view doesn't
    /// handle navigation.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    ///
    /// The default implementation returns None, indicating the view doesn't
    /// handle text input.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Whether a keymap command may be dispatched while this view is on top
    fn accepts_action(&self, action: &Action) -> bool;
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views render bottom-up over the main area, overlays using `Clear` keep
/// the rest of the views below visible. The status bar takes the last row.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    for view in &state.view_stack {
        view.render(state, chunks[0], f);
    }

    let status = StatusBarViewModel::from_state(state);
    f.render_widget(status_bar::StatusBarWidget(&status), chunks[1]);
}

/// Centered popup area of the given size, clamped to `area`
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
