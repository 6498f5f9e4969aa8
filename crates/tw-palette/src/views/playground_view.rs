//! Playground View
//!
//! Base view showing the three playground sources side by side with the
//! snapshot status on top.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, PlaygroundState};
use crate::theme::Theme;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct PlaygroundView;

impl PlaygroundView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlaygroundView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PlaygroundView {
    fn view_id(&self) -> ViewId {
        ViewId::Playground
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&state.playground, &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::CommandPalette(_)
                | Action::FontDialog(_)
                | Action::Playground(_)
                | Action::Global(_)
        )
    }
}

fn render(playground: &PlaygroundState, theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(theme.text().bg(theme.bg_primary)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_header(playground, theme, rows[0], f);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(rows[1]);

    let content = &playground.content;
    render_source(" HTML ", &content.html, theme, panes[0], f);
    render_source(" CSS ", &content.css, theme, panes[1], f);
    render_source(" tailwind.config.js ", &content.config, theme, panes[2], f);
}

fn render_header(playground: &PlaygroundState, theme: &Theme, area: Rect, f: &mut Frame) {
    let snapshot = match (&playground.snapshot_id, &playground.last_synced) {
        (Some(id), Some(at)) => Span::styled(
            format!("snapshot {} (synced {})", id, at.format("%H:%M:%S")),
            theme.success(),
        ),
        (Some(id), None) => Span::styled(format!("snapshot {}", id), theme.success()),
        _ => Span::styled("not synced", theme.muted()),
    };

    let plugins = playground.content.plugins();
    let plugins = if plugins.is_empty() {
        "none".to_string()
    } else {
        plugins.join(", ")
    };

    let line = Line::from(vec![
        Span::styled("Tailwind ", theme.muted()),
        Span::styled(playground.tailwind_version.as_str(), theme.text()),
        Span::styled("  │  ", theme.muted()),
        snapshot,
        Span::styled("  │  plugins: ", theme.muted()),
        Span::styled(plugins, theme.text_secondary()),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tailwind Playground ")
            .title_style(theme.panel_title())
            .border_style(theme.panel_border()),
    );
    f.render_widget(header, area);
}

fn render_source(title: &str, source: &str, theme: &Theme, area: Rect, f: &mut Frame) {
    let paragraph = Paragraph::new(source)
        .style(theme.editor())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, theme.section_header()))
                .border_style(theme.muted()),
        );
    f.render_widget(paragraph, area);
}
