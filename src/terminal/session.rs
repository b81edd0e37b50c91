// ABOUTME: Terminal session tying the output view to the input controller
// Applies inbound socket events and key presses, producing outbound submissions

use crate::session::{ClientEvent, SessionEvent};
use crate::terminal::input::{InputController, KeyOutcome};
use crate::terminal::view::TerminalView;
use crossterm::event::KeyEvent;
use tracing::debug;

pub const DEFAULT_DISCONNECT_NOTICE: &str = "\n[CONNECTION LOST]\n";

#[derive(Debug, Clone)]
pub struct TerminalSession {
    pub view: TerminalView,
    pub input: InputController,
    disconnect_notice: String,
}

impl TerminalSession {
    pub fn new(disconnect_notice: impl Into<String>) -> Self {
        Self {
            view: TerminalView::new(),
            input: InputController::new(),
            disconnect_notice: disconnect_notice.into(),
        }
    }

    /// Apply one inbound event. Returns true when the input field wants focus.
    pub fn apply(&mut self, event: &SessionEvent) -> bool {
        match event {
            SessionEvent::TextOutput(text) => {
                self.view.display(text);
                false
            }
            SessionEvent::InputRequest(prompt) => {
                debug!("Input requested with prompt {:?}", prompt);
                self.input.request_input(prompt.as_str());
                true
            }
            SessionEvent::Disconnected { .. } => {
                self.view.display(&self.disconnect_notice);
                self.input.disconnect();
                false
            }
            SessionEvent::Connected { .. } => false,
        }
    }

    /// Feed a key to the input field; Enter while Ready echoes the line and yields the submission
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ClientEvent> {
        match self.input.handle_key(key) {
            KeyOutcome::Submitted(submission) => {
                self.view.display(&submission.echo);
                Some(ClientEvent::terminal_input(submission.data))
            }
            KeyOutcome::Edited | KeyOutcome::Ignored => None,
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new(DEFAULT_DISCONNECT_NOTICE)
    }
}
