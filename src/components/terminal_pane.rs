// ABOUTME: Terminal pane component showing server output above the prompt and input line

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AppState, FocusedPane};

pub struct TerminalPaneComponent;

impl TerminalPaneComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Output
                Constraint::Length(3), // Prompt + input
            ])
            .split(area);

        self.render_output(frame, chunks[0], state);
        self.render_input(frame, chunks[1], state);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let view = &state.terminal.view;
        let width = usize::from(area.width.saturating_sub(2));
        let height = usize::from(area.height.saturating_sub(2));

        let lines: Vec<Line> = view
            .visible_rows(width, height)
            .into_iter()
            .map(Line::raw)
            .collect();

        let title = if view.scroll_back() > 0 {
            format!("Terminal (scrolled back {} lines)", view.scroll_back())
        } else {
            "Terminal".to_string()
        };

        let border_color = if state.focused_pane == FocusedPane::Terminal {
            Color::Cyan
        } else {
            Color::Gray
        };

        let output = Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(output, area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let input = &state.terminal.input;
        let enabled = input.is_enabled();

        let prompt = Span::styled(
            input.prompt(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        );
        let value_style = if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value = Span::styled(input.value(), value_style);

        let title = if enabled { "Input" } else { "Input (waiting for server)" };
        let border_color = if enabled { Color::Yellow } else { Color::Gray };

        // Keep the cursor column inside the field by scrolling the line sideways
        let before_cursor: String = input.value().chars().take(input.cursor()).collect();
        let cursor_column = prompt.width() + Span::raw(before_cursor).width();
        let field_width = usize::from(area.width.saturating_sub(2));
        let offset = (cursor_column + 1).saturating_sub(field_width);
        let offset_cols = u16::try_from(offset).unwrap_or(u16::MAX);

        let paragraph = Paragraph::new(Line::from(vec![prompt, value]))
            .scroll((0, offset_cols))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );

        frame.render_widget(paragraph, area);

        // Focus: the cursor sits in the field while it accepts input
        if enabled && state.focused_pane == FocusedPane::Terminal && !state.help_visible {
            let column = u16::try_from(cursor_column.saturating_sub(offset)).unwrap_or(u16::MAX);
            let max_x = area.x + area.width.saturating_sub(2);
            let x = (area.x + 1).saturating_add(column).min(max_x);
            frame.set_cursor(x, area.y + 1);
        }
    }
}

impl Default for TerminalPaneComponent {
    fn default() -> Self {
        Self::new()
    }
}
