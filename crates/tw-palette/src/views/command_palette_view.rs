use crate::actions::{Action, CommandPaletteAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{CommandPaletteViewModel, OptionRow};
use crate::views::{centered_rect, View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Command palette view - searchable, nested menu
#[derive(Debug, Clone)]
pub struct CommandPaletteView;

impl CommandPaletteView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandPaletteView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CommandPaletteView {
    fn view_id(&self) -> ViewId {
        ViewId::CommandPalette
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = CommandPaletteViewModel::from_state(state);
        render(&vm, &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        // Characters go to the search field, arrows move the highlight and
        // step out of submenus
        PanelCapabilities::TEXT_INPUT
            | PanelCapabilities::ITEM_NAVIGATION
            | PanelCapabilities::BACK_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CommandPaletteAction::NavigateNext,
            NavigationAction::Previous => CommandPaletteAction::NavigatePrev,
            NavigationAction::Back => CommandPaletteAction::Back,
        };
        Some(Action::CommandPalette(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => CommandPaletteAction::Char(c),
            TextInputAction::Backspace => CommandPaletteAction::Backspace,
            TextInputAction::ClearLine => CommandPaletteAction::Clear,
            TextInputAction::Escape => CommandPaletteAction::Close,
            TextInputAction::Confirm => CommandPaletteAction::Execute,
        };
        Some(Action::CommandPalette(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::CommandPalette(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(_)
        )
    }
}

/// Render the command palette as a centered floating panel
fn render(vm: &CommandPaletteViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    // Dimmed overlay over the entire screen to create modal effect
    let overlay = Block::default().style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);

    let popup_width = (area.width * 60 / 100).clamp(40, 80);
    let popup_height = (vm.rows.len() as u16 + 7).min(area.height);
    let popup_area = centered_rect(area, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let mut footer = vec![
        Span::styled(format!(" {}", vm.footer_hints.select), theme.key_hint()),
        Span::styled(" select  ", theme.muted()),
        Span::styled(vm.footer_hints.navigate.as_str(), theme.key_hint()),
        Span::styled(" navigate  ", theme.muted()),
    ];
    if vm.can_go_back {
        footer.push(Span::styled(vm.footer_hints.back.as_str(), theme.key_hint()));
        footer.push(Span::styled(" back  ", theme.muted()));
    }
    footer.push(Span::styled(vm.footer_hints.close.as_str(), theme.key_hint()));
    footer.push(Span::styled(" close ", theme.muted()));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title())
        .title_bottom(Line::from(footer))
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
            Constraint::Length(3), // Input box
            Constraint::Min(1),    // Options
        ])
        .split(inner);

    let input = if vm.input_is_empty {
        Line::from(Span::styled(vm.placeholder.as_str(), theme.muted().italic()))
    } else {
        Line::from(Span::styled(vm.input_text.as_str(), theme.text()))
    };
    let input_paragraph = Paragraph::new(input).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.muted())
            .style(theme.panel_background()),
    );
    f.render_widget(input_paragraph, chunks[0]);

    let items: Vec<ListItem> = vm.rows.iter().map(|row| option_item(row, theme)).collect();
    f.render_widget(List::new(items).style(theme.panel_background()), chunks[1]);
}

fn option_item<'a>(row: &'a OptionRow, theme: &Theme) -> ListItem<'a> {
    let base = if row.is_disabled {
        theme.disabled()
    } else if row.is_selected {
        theme.selected()
    } else {
        theme.text()
    };

    let mut spans = vec![
        Span::styled(row.indicator, base),
        Span::styled(row.label_before.as_str(), base),
    ];
    if !row.label_match.is_empty() {
        spans.push(Span::styled(
            row.label_match.as_str(),
            base.patch(theme.query_match()),
        ));
    }
    spans.push(Span::styled(row.label_after.as_str(), base));
    spans.push(Span::styled(row.submenu_marker, theme.muted()));

    let item = ListItem::new(Line::from(spans));
    if row.is_selected && !row.is_disabled {
        item.style(theme.selected())
    } else {
        item
    }
}
