// ABOUTME: Help overlay component displaying keyboard shortcuts

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    style::{Color, Modifier, Style},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Terminal:").style(heading),
            ListItem::new("  Enter      Send the line to the server"),
            ListItem::new("  ←/→        Move the cursor"),
            ListItem::new("  Home/End   Start/end of line"),
            ListItem::new("  PgUp/PgDn  Scroll output"),
            ListItem::new("  Ctrl+End   Jump to latest output"),
            ListItem::new(""),
            ListItem::new("Menu:").style(heading),
            ListItem::new("  j/↓        Next section"),
            ListItem::new("  k/↑        Previous section"),
            ListItem::new("  Enter/Spc  Expand or collapse section"),
            ListItem::new("  Click      Expand or collapse section"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  Tab        Switch between terminal and menu"),
            ListItem::new("  F1 / ?     Toggle this help (? in menu only)"),
            ListItem::new("  q/Esc      Quit (from the menu)"),
            ListItem::new("  Ctrl+C     Quit"),
        ];

        let help_list = List::new(help_items)
            .block(
                Block::default()
                    .title("Help - Press F1 or Esc to close")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            );

        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}