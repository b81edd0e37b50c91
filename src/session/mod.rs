// ABOUTME: Socket session module for the persistent connection to the terminal server
// Provides typed named events, wire framing, and the WebSocket client task

pub mod client;
pub mod codec;
pub mod error;
pub mod protocol;

pub use client::{InputSink, SessionHandle, SocketSession};
pub use codec::Framing;
pub use error::{CodecError, SessionError};
pub use protocol::{ClientEvent, ConnectionState, ServerEvent, SessionEvent};
