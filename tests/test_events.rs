// ABOUTME: Unit tests for event handling to ensure keyboard and mouse inputs map to correct app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dashterm::app::{AppEvent, AppState, EventHandler, FocusedPane};
use dashterm::session::SessionEvent;
use ratatui::layout::Rect;

fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(create_key_event(code), state) {
        EventHandler::process_event(event, state);
    }
}

fn click(row: u16, column: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn menu_state() -> AppState {
    let mut state = AppState::default();
    state.focused_pane = FocusedPane::Menu;
    state
}

#[test]
fn test_ctrl_c_quits_from_any_pane() {
    let mut state = AppState::default();
    let ctrl_c = create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert!(matches!(EventHandler::handle_key_event(ctrl_c, &mut state), Some(AppEvent::Quit)));

    state.focused_pane = FocusedPane::Menu;
    assert!(matches!(EventHandler::handle_key_event(ctrl_c, &mut state), Some(AppEvent::Quit)));

    state.apply_session_event(SessionEvent::InputRequest("> ".into()));
    assert!(matches!(EventHandler::handle_key_event(ctrl_c, &mut state), Some(AppEvent::Quit)));
}

#[test]
fn test_menu_quit_keys() {
    let mut state = menu_state();

    let quit_event1 = EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state);
    assert!(matches!(quit_event1, Some(AppEvent::Quit)));

    let quit_event2 = EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &mut state);
    assert!(matches!(quit_event2, Some(AppEvent::Quit)));
}

#[test]
fn test_menu_navigation_keys() {
    let mut state = menu_state();

    for code in [KeyCode::Char('j'), KeyCode::Down] {
        let event = EventHandler::handle_key_event(create_key_event(code), &mut state);
        assert!(matches!(event, Some(AppEvent::MenuNext)));
    }
    for code in [KeyCode::Char('k'), KeyCode::Up] {
        let event = EventHandler::handle_key_event(create_key_event(code), &mut state);
        assert!(matches!(event, Some(AppEvent::MenuPrevious)));
    }
    for code in [KeyCode::Enter, KeyCode::Char(' ')] {
        let event = EventHandler::handle_key_event(create_key_event(code), &mut state);
        assert!(matches!(event, Some(AppEvent::MenuToggle)));
    }
}

#[test]
fn test_keys_are_ignored_while_input_is_disabled() {
    let mut state = AppState::default();
    assert_eq!(state.focused_pane, FocusedPane::Terminal);

    let typed = EventHandler::handle_key_event(create_key_event(KeyCode::Char('x')), &mut state);
    assert!(typed.is_none());

    let enter = EventHandler::handle_key_event(create_key_event(KeyCode::Enter), &mut state);
    assert!(enter.is_none());
}

#[test]
fn test_keys_go_to_terminal_once_input_is_requested() {
    let mut state = AppState::default();
    state.apply_session_event(SessionEvent::InputRequest("> ".into()));

    // 'q' is text for the field, not quit
    let typed = EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state);
    assert!(matches!(typed, Some(AppEvent::TerminalKey(_))));
}

#[test]
fn test_tab_switches_focus() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.focused_pane, FocusedPane::Menu);
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.focused_pane, FocusedPane::Terminal);
}

#[test]
fn test_help_visible_only_responds_to_help_and_esc() {
    let mut state = menu_state();
    state.help_visible = true;

    let help_event = EventHandler::handle_key_event(create_key_event(KeyCode::Char('?')), &mut state);
    assert!(help_event.is_some());

    let esc_event = EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &mut state);
    assert!(matches!(esc_event, Some(AppEvent::ToggleHelp)));

    let other_event = EventHandler::handle_key_event(create_key_event(KeyCode::Char('j')), &mut state);
    assert!(other_event.is_none());
}

#[test]
fn test_process_help_toggle_event() {
    let mut state = AppState::default();
    assert!(!state.help_visible);

    press(&mut state, KeyCode::F(1));
    assert!(state.help_visible);

    press(&mut state, KeyCode::Esc);
    assert!(!state.help_visible);
}

#[test]
fn test_process_quit_event() {
    let mut state = menu_state();
    assert!(!state.should_quit);

    press(&mut state, KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_enter_on_menu_toggles_section_under_cursor() {
    let mut state = menu_state();
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.menu.open_section(), Some(1));

    press(&mut state, KeyCode::Char(' '));
    assert_eq!(state.menu.open_section(), None);
}

#[test]
fn test_mouse_click_on_title_toggles_section() {
    let mut state = AppState::default();
    let sidebar = Rect::new(0, 0, 30, 20);

    // Row 0 inside the border is the first title
    let event = EventHandler::handle_mouse_event(click(1, 5), &state, sidebar);
    assert!(matches!(event, Some(AppEvent::MenuClick(0))));
    EventHandler::process_event(event.unwrap(), &mut state);
    assert_eq!(state.menu.open_section(), Some(0));

    // With section 0 open its four items push section 1 down to row 5
    let item_row = EventHandler::handle_mouse_event(click(2, 5), &state, sidebar);
    assert!(item_row.is_none());

    let event = EventHandler::handle_mouse_event(click(6, 5), &state, sidebar);
    assert!(matches!(event, Some(AppEvent::MenuClick(1))));
    EventHandler::process_event(event.unwrap(), &mut state);
    assert_eq!(state.menu.open_section(), Some(1));
    assert_eq!(state.menu.cursor(), 1);
}

#[test]
fn test_mouse_outside_sidebar_is_ignored() {
    let state = AppState::default();
    let sidebar = Rect::new(0, 0, 30, 20);

    assert!(EventHandler::handle_mouse_event(click(1, 40), &state, sidebar).is_none());
    assert!(EventHandler::handle_mouse_event(click(0, 5), &state, sidebar).is_none());

    let right_click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        ..click(1, 5)
    };
    assert!(EventHandler::handle_mouse_event(right_click, &state, sidebar).is_none());
}

#[test]
fn test_page_keys_scroll_output() {
    let mut state = AppState::default();
    let text: String = (0..50).map(|i| format!("line {i}\n")).collect();
    state.apply_session_event(SessionEvent::TextOutput(text));

    press(&mut state, KeyCode::PageUp);
    assert_eq!(state.terminal.view.scroll_back(), 10);

    press(&mut state, KeyCode::PageDown);
    assert_eq!(state.terminal.view.scroll_back(), 0);

    press(&mut state, KeyCode::PageUp);
    let ctrl_end = create_key_event_with_modifiers(KeyCode::End, KeyModifiers::CONTROL);
    if let Some(event) = EventHandler::handle_key_event(ctrl_end, &mut state) {
        EventHandler::process_event(event, &mut state);
    }
    assert_eq!(state.terminal.view.scroll_back(), 0);
}
