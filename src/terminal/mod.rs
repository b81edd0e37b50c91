// ABOUTME: Terminal module for the line-oriented remote terminal
// Output view, input state machine, and the session that joins them

pub mod input;
pub mod session;
pub mod view;

pub use input::{InputController, InputState, KeyOutcome, Submission};
pub use session::{TerminalSession, DEFAULT_DISCONNECT_NOTICE};
pub use view::TerminalView;
