// ABOUTME: Event handling system for keyboard and mouse input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::state::FocusedPane;
use crate::app::AppState;

const SCROLL_PAGE: usize = 10;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    ToggleFocus,
    ScrollUp,
    ScrollDown,
    ScrollToBottom,
    MenuNext,
    MenuPrevious,
    MenuToggle,
    /// Click on the title of section `n`
    MenuClick(usize),
    /// Key for the terminal input field
    TerminalKey(KeyEvent),
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::F(1) => return Some(AppEvent::ToggleHelp),
            KeyCode::Tab | KeyCode::BackTab => return Some(AppEvent::ToggleFocus),
            KeyCode::PageUp => return Some(AppEvent::ScrollUp),
            KeyCode::PageDown => return Some(AppEvent::ScrollDown),
            KeyCode::End if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(AppEvent::ScrollToBottom);
            }
            _ => {}
        }

        match state.focused_pane {
            FocusedPane::Menu => Self::handle_menu_keys(key_event),
            FocusedPane::Terminal => Self::handle_terminal_keys(key_event, state),
        }
    }

    fn handle_menu_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::MenuNext),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::MenuPrevious),
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::MenuToggle),
            _ => None,
        }
    }

    fn handle_terminal_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // The field is disabled until the server asks for input
        if state.terminal.input.is_enabled() {
            Some(AppEvent::TerminalKey(key_event))
        } else {
            None
        }
    }

    /// Map a left click inside the sidebar to a section title
    pub fn handle_mouse_event(
        mouse_event: MouseEvent,
        state: &AppState,
        sidebar: Rect,
    ) -> Option<AppEvent> {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        // Rows start inside the sidebar border
        let inner_left = sidebar.x + 1;
        let inner_right = sidebar.x + sidebar.width.saturating_sub(1);
        let inner_top = sidebar.y + 1;
        let inner_bottom = sidebar.y + sidebar.height.saturating_sub(1);

        if mouse_event.column < inner_left
            || mouse_event.column >= inner_right
            || mouse_event.row < inner_top
            || mouse_event.row >= inner_bottom
        {
            return None;
        }

        let row = usize::from(mouse_event.row - inner_top);
        state.menu.title_at(row).map(AppEvent::MenuClick)
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::ToggleFocus => state.toggle_focus(),
            AppEvent::ScrollUp => state.terminal.view.scroll_up(SCROLL_PAGE),
            AppEvent::ScrollDown => state.terminal.view.scroll_down(SCROLL_PAGE),
            AppEvent::ScrollToBottom => state.terminal.view.scroll_to_bottom(),
            AppEvent::MenuNext => state.menu.next(),
            AppEvent::MenuPrevious => state.menu.previous(),
            AppEvent::MenuToggle => state.menu.toggle_selected(),
            AppEvent::MenuClick(section) => {
                state.menu.select(section);
                state.menu.toggle(section);
            }
            AppEvent::TerminalKey(key_event) => {
                if let Some(outbound) = state.terminal.handle_key(key_event) {
                    state.outbox.push(outbound);
                }
            }
        }
    }
}
