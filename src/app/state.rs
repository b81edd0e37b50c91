// ABOUTME: Application state for the terminal client and the App driving it
// Owns the terminal session, the sidebar menu, connection status, and outbound queue

use crate::config::AppConfig;
use crate::models::MenuState;
use crate::session::{
    ClientEvent, ConnectionState, Framing, InputSink, SessionEvent, SessionHandle, SocketSession,
};
use crate::terminal::TerminalSession;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Terminal,
    Menu,
}

#[derive(Debug)]
pub struct AppState {
    pub terminal: TerminalSession,
    pub menu: MenuState,
    pub connection: ConnectionState,
    pub server_url: String,
    pub focused_pane: FocusedPane,
    pub help_visible: bool,
    pub should_quit: bool,
    /// Submissions waiting to be handed to the socket
    pub outbox: Vec<ClientEvent>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            terminal: TerminalSession::new(config.terminal.disconnect_notice.clone()),
            menu: MenuState::new(config.menu.sections.clone()),
            connection: ConnectionState::Connecting,
            server_url: config.server.endpoint(),
            focused_pane: FocusedPane::Terminal,
            help_visible: false,
            should_quit: false,
            outbox: Vec::new(),
        }
    }

    /// Apply one socket event to the connection status and the terminal
    pub fn apply_session_event(&mut self, event: SessionEvent) {
        match &event {
            SessionEvent::Connected { sid } => {
                self.connection = ConnectionState::Connected { sid: sid.clone() };
            }
            SessionEvent::Disconnected { reason } => {
                info!("Connection lost: {}", reason);
                self.connection = ConnectionState::Disconnected { reason: reason.clone() };
            }
            SessionEvent::TextOutput(_) | SessionEvent::InputRequest(_) => {}
        }

        if self.terminal.apply(&event) {
            self.focused_pane = FocusedPane::Terminal;
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn toggle_focus(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::Terminal => FocusedPane::Menu,
            FocusedPane::Menu => FocusedPane::Terminal,
        };
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

pub struct App {
    pub state: AppState,
    session: Option<SessionHandle>,
    events: Option<mpsc::UnboundedReceiver<SessionEvent>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            session: None,
            events: None,
        }
    }

    /// Open the socket session to the configured server
    pub fn connect(&mut self, framing: Framing) {
        info!("Connecting to {}", self.state.server_url);
        let (handle, events) = SocketSession::new(self.state.server_url.clone(), framing).spawn();
        self.state.connection = ConnectionState::Connecting;
        self.session = Some(handle);
        self.events = Some(events);
    }

    /// Use an existing event stream instead of a live socket
    pub fn attach_events(&mut self, events: mpsc::UnboundedReceiver<SessionEvent>) {
        self.events = Some(events);
    }

    /// Apply pending socket events in arrival order, then send queued submissions
    pub fn tick(&mut self) {
        self.drain_events();
        if let Some(session) = &self.session {
            Self::flush_outbox(&mut self.state, session);
        }
    }

    fn drain_events(&mut self) {
        let Some(events) = self.events.as_mut() else {
            return;
        };

        loop {
            match events.try_recv() {
                Ok(event) => self.state.apply_session_event(event),
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    self.events = None;
                    break;
                }
            }
        }
    }

    pub fn flush_outbox(state: &mut AppState, sink: &impl InputSink) {
        for event in state.outbox.drain(..) {
            if let Err(e) = sink.submit(event) {
                warn!("Failed to send input: {}", e);
            }
        }
    }

    pub fn shutdown(&mut self) {
        if let Some(session) = self.session.take() {
            session.shutdown();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
