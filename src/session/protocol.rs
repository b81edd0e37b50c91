// ABOUTME: Named-event protocol definitions shared by the socket client and the UI
// Inbound server events, the outbound submission event, and connection state

use serde::{Deserialize, Serialize};

// ============================================
// Payloads
// ============================================

/// Payload of `terminal_output` and `terminal_input`.
///
/// Missing fields decode as empty strings; payloads are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextPayload {
    pub data: String,
}

/// Payload of `request_input`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptPayload {
    pub prompt: String,
}

// ============================================
// Server → Client Events
// ============================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// Text to append to the terminal view
    TerminalOutput(TextPayload),
    /// Show a prompt and enable the input field
    RequestInput(PromptPayload),
}

impl ServerEvent {
    pub const TERMINAL_OUTPUT: &'static str = "terminal_output";
    pub const REQUEST_INPUT: &'static str = "request_input";

    pub fn name(&self) -> &'static str {
        match self {
            Self::TerminalOutput(_) => Self::TERMINAL_OUTPUT,
            Self::RequestInput(_) => Self::REQUEST_INPUT,
        }
    }
}

// ============================================
// Client → Server Events
// ============================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// The line the user submitted
    TerminalInput(TextPayload),
}

impl ClientEvent {
    pub const TERMINAL_INPUT: &'static str = "terminal_input";

    /// Create a submission event for an entered line
    pub fn terminal_input(data: impl Into<String>) -> Self {
        Self::TerminalInput(TextPayload { data: data.into() })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TerminalInput(_) => Self::TERMINAL_INPUT,
        }
    }

    pub fn payload(&self) -> &TextPayload {
        match self {
            Self::TerminalInput(payload) => payload,
        }
    }
}

// ============================================
// Events delivered to the UI loop
// ============================================

/// Everything the UI loop learns from the socket, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Connected { sid: Option<String> },
    Disconnected { reason: String },
    TextOutput(String),
    InputRequest(String),
}

impl From<ServerEvent> for SessionEvent {
    fn from(event: ServerEvent) -> Self {
        match event {
            ServerEvent::TerminalOutput(payload) => Self::TextOutput(payload.data),
            ServerEvent::RequestInput(payload) => Self::InputRequest(payload.prompt),
        }
    }
}

// ============================================
// Connection State
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Connected { sid: Option<String> },
    Disconnected { reason: String },
}

impl ConnectionState {
    /// Short label for the status bar
    pub fn label(&self) -> String {
        match self {
            Self::Connecting => "connecting".to_string(),
            Self::Connected { sid: Some(sid) } => format!("connected ({sid})"),
            Self::Connected { sid: None } => "connected".to_string(),
            Self::Disconnected { reason } => format!("disconnected: {reason}"),
        }
    }
}
