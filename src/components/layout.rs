// ABOUTME: Main layout component arranging sidebar, terminal pane, and bottom status bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use crate::app::{AppState, FocusedPane};
use crate::session::ConnectionState;
use super::{HelpComponent, SidebarComponent, TerminalPaneComponent};

const SIDEBAR_WIDTH: u16 = 30;

pub struct LayoutComponent {
    sidebar: SidebarComponent,
    terminal_pane: TerminalPaneComponent,
    help: HelpComponent,
    /// Where the sidebar was last drawn, for mouse hit-testing
    sidebar_area: Rect,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarComponent::new(),
            terminal_pane: TerminalPaneComponent::new(),
            help: HelpComponent::new(),
            sidebar_area: Rect::default(),
        }
    }

    pub fn sidebar_area(&self) -> Rect {
        self.sidebar_area
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),     // Main content
                Constraint::Length(3),  // Bottom status bar
            ])
            .split(frame.size());

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SIDEBAR_WIDTH), // Menu
                Constraint::Min(0),                // Terminal
            ])
            .split(main_chunks[0]);

        self.sidebar_area = content_chunks[0];
        self.sidebar.render(frame, content_chunks[0], state);
        self.terminal_pane.render(frame, content_chunks[1], state);

        self.render_status_bar(frame, main_chunks[1], state);

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let status_color = match state.connection {
            ConnectionState::Connecting => Color::Yellow,
            ConnectionState::Connected { .. } => Color::Green,
            ConnectionState::Disconnected { .. } => Color::Red,
        };

        let hints = match state.focused_pane {
            FocusedPane::Terminal => "[Tab]menu [PgUp/PgDn]scroll [F1]help [Ctrl+C]quit",
            FocusedPane::Menu => "[Tab]terminal [Enter]toggle [?]help [q]uit",
        };

        let line = Line::from(vec![
            Span::styled(
                format!("● {}", state.connection.label()),
                Style::default().fg(status_color),
            ),
            Span::raw("  "),
            Span::styled(state.server_url.as_str(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(hints, Style::default().fg(Color::Yellow)),
        ]);

        let status = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(status, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
