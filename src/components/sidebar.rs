// ABOUTME: Sidebar component rendering the accordion menu

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::{AppState, FocusedPane};
use crate::models::MenuRow;

pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focused_pane == FocusedPane::Menu;
        let (border_color, title_color) = if focused {
            (Color::Cyan, Color::Yellow)
        } else {
            (Color::Gray, Color::Blue)
        };

        let items: Vec<ListItem> = state
            .menu
            .rows()
            .into_iter()
            .map(|row| Self::row_item(row, state, focused))
            .collect();

        // Rendered without list state so row N always sits at inner y + N
        let list = List::new(items).block(
            Block::default()
                .title("Menu")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title_style(Style::default().fg(title_color)),
        );

        frame.render_widget(list, area);
    }

    fn row_item<'a>(row: MenuRow, state: &'a AppState, focused: bool) -> ListItem<'a> {
        let sections = state.menu.sections();
        match row {
            MenuRow::Title(index) => {
                let marker = if state.menu.is_open(index) { "▾" } else { "▸" };
                let mut style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
                if focused && state.menu.cursor() == index {
                    style = style.bg(Color::DarkGray);
                }
                ListItem::new(format!("{} {}", marker, sections[index].title)).style(style)
            }
            MenuRow::Item { section, item } => {
                ListItem::new(format!("    {}", sections[section].items[item]))
                    .style(Style::default().fg(Color::Gray))
            }
        }
    }
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}
