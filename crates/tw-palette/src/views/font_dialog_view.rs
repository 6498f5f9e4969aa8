//! Google Fonts View
//!
//! A floating form taking the embed and CSS rule snippets from Google Fonts.

use crate::actions::{Action, FontDialogAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, FontDialogField, FontDialogState};
use crate::theme::Theme;
use crate::views::{centered_rect, View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Font dialog view - floating form for adding a Google font
#[derive(Debug, Clone)]
pub struct FontDialogView;

impl FontDialogView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FontDialogView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for FontDialogView {
    fn view_id(&self) -> ViewId {
        ViewId::FontDialog
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&state.font_dialog, &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => FontDialogAction::NextField,
            NavigationAction::Previous => FontDialogAction::PrevField,
            NavigationAction::Back => return None,
        };
        Some(Action::FontDialog(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => FontDialogAction::Char(c),
            TextInputAction::Backspace => FontDialogAction::Backspace,
            TextInputAction::ClearLine => FontDialogAction::ClearField,
            TextInputAction::Escape => FontDialogAction::Close,
            TextInputAction::Confirm => FontDialogAction::Submit,
        };
        Some(Action::FontDialog(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::FontDialog(_) | Action::Navigate(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}

/// Render the font dialog as a centered floating window
fn render(form: &FontDialogState, theme: &Theme, area: Rect, f: &mut Frame) {
    let overlay = Block::default().style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);

    let popup_width = (area.width * 65 / 100).clamp(50, 90);
    let popup_area = centered_rect(area, popup_width, 12);

    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Tab", theme.key_hint()),
        Span::styled(" switch field  ", theme.muted()),
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" add  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Google fonts ")
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Instructions
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Embed label
            Constraint::Length(1), // Embed field
            Constraint::Length(1), // Rule label
            Constraint::Length(1), // Rule field
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Error
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Paste the snippets from fonts.google.com:",
            theme.text_secondary(),
        )),
        chunks[0],
    );

    render_field(
        f,
        [chunks[2], chunks[3]],
        "CSS embed",
        &form.css_embed,
        form.focused_field == FontDialogField::CssEmbed,
        theme,
        "@import url('https://fonts.googleapis.com/css2?family=...",
    );
    render_field(
        f,
        [chunks[4], chunks[5]],
        "CSS rule",
        &form.css_rule,
        form.focused_field == FontDialogField::CssRule,
        theme,
        "font-family: 'font_name', font-type;",
    );

    if let Some(error) = &form.error {
        f.render_widget(
            Paragraph::new(Span::styled(error.as_str(), theme.error())),
            chunks[7],
        );
    }
}

/// Render a labelled single-line field
fn render_field(
    f: &mut Frame,
    [label_area, value_area]: [Rect; 2],
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    placeholder: &str,
) {
    let indicator = if focused { "> " } else { "  " };
    let label_style = if focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.muted()
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(indicator, theme.key_hint()),
            Span::styled(label, label_style),
        ])),
        label_area,
    );

    let mut spans = vec![Span::raw("  ")];
    if value.is_empty() {
        spans.push(Span::styled(placeholder, theme.muted().italic()));
    } else {
        spans.push(Span::styled(value, theme.text()));
    }
    if focused {
        spans.push(Span::styled("█", theme.key_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), value_area);
}
