// ABOUTME: Wire framing for named events carried in WebSocket text frames
// Supports a plain JSON envelope and Engine.IO v4 / Socket.IO v5 text packets

use crate::session::error::CodecError;
use crate::session::protocol::{ClientEvent, PromptPayload, ServerEvent, TextPayload};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Socket.IO packet joining the default namespace
pub const SOCKETIO_CONNECT: &str = "40";
/// Engine.IO pong, the answer to a server ping
pub const ENGINEIO_PONG: &str = "3";

/// How named events are encoded in text frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// One `{"event": ..., "data": ...}` object per frame
    #[default]
    Json,
    /// Engine.IO / Socket.IO text packets
    #[value(name = "socketio")]
    SocketIo,
}

/// A decoded text frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Engine.IO open packet; the client must join the namespace next
    Open { sid: String },
    /// The session is established
    Connected { sid: Option<String> },
    Event(ServerEvent),
    Ping,
    /// The server ended the session
    Disconnect,
    /// The server refused the namespace connection
    ConnectError(String),
    /// Nothing to do (pong, noop, upgrade)
    Ignored,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct OpenPacket {
    sid: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConnectPacket {
    sid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConnectErrorPacket {
    message: String,
}

pub fn decode(framing: Framing, text: &str) -> Result<Inbound, CodecError> {
    match framing {
        Framing::Json => decode_envelope(text),
        Framing::SocketIo => decode_engineio(text),
    }
}

pub fn encode(framing: Framing, event: &ClientEvent) -> Result<String, CodecError> {
    let data = serde_json::to_value(event.payload())?;
    match framing {
        Framing::Json => Ok(serde_json::to_string(&Envelope {
            event: event.name().to_string(),
            data,
        })?),
        Framing::SocketIo => Ok(format!(
            "42{}",
            serde_json::to_string(&(event.name(), data))?
        )),
    }
}

fn decode_envelope(text: &str) -> Result<Inbound, CodecError> {
    if text.trim().is_empty() {
        return Err(CodecError::Empty);
    }
    let envelope: Envelope = serde_json::from_str(text)?;
    Ok(Inbound::Event(server_event(&envelope.event, envelope.data)?))
}

fn decode_engineio(text: &str) -> Result<Inbound, CodecError> {
    let mut chars = text.chars();
    let packet_type = chars.next().ok_or(CodecError::Empty)?;
    let rest = chars.as_str();

    match packet_type {
        '0' => {
            let open: OpenPacket = serde_json::from_str(rest)?;
            Ok(Inbound::Open { sid: open.sid })
        }
        '1' => Ok(Inbound::Disconnect),
        '2' => Ok(Inbound::Ping),
        '3' | '5' | '6' => Ok(Inbound::Ignored),
        '4' => decode_socketio(rest),
        _ => Err(CodecError::UnsupportedPacket(text.to_string())),
    }
}

fn decode_socketio(text: &str) -> Result<Inbound, CodecError> {
    let mut chars = text.chars();
    let packet_type = chars.next().ok_or(CodecError::Empty)?;
    let body = strip_ack_id(strip_namespace(chars.as_str()));

    match packet_type {
        '0' => {
            let connect: ConnectPacket = optional_json(body)?;
            Ok(Inbound::Connected { sid: connect.sid })
        }
        '1' => Ok(Inbound::Disconnect),
        '2' => {
            let mut parts: Vec<Value> = serde_json::from_str(body)?;
            if parts.is_empty() {
                return Err(CodecError::UnsupportedPacket(text.to_string()));
            }
            let name = match parts.remove(0) {
                Value::String(name) => name,
                other => return Err(CodecError::UnknownEvent(other.to_string())),
            };
            let data = if parts.is_empty() { Value::Null } else { parts.remove(0) };
            Ok(Inbound::Event(server_event(&name, data)?))
        }
        '4' => {
            let error: ConnectErrorPacket = optional_json(body)?;
            Ok(Inbound::ConnectError(error.message))
        }
        _ => Err(CodecError::UnsupportedPacket(text.to_string())),
    }
}

/// Drops a `/namespace,` prefix.
fn strip_namespace(body: &str) -> &str {
    if body.starts_with('/') {
        body.split_once(',').map_or("", |(_, rest)| rest)
    } else {
        body
    }
}

/// Drops a numeric acknowledgement id preceding the payload.
fn strip_ack_id(body: &str) -> &str {
    body.trim_start_matches(|c: char| c.is_ascii_digit())
}

fn optional_json<T: DeserializeOwned + Default>(body: &str) -> Result<T, CodecError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(body)?)
}

fn payload<T: DeserializeOwned + Default>(value: Value) -> Result<T, CodecError> {
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value)?)
}

fn server_event(name: &str, data: Value) -> Result<ServerEvent, CodecError> {
    match name {
        ServerEvent::TERMINAL_OUTPUT => {
            Ok(ServerEvent::TerminalOutput(payload::<TextPayload>(data)?))
        }
        ServerEvent::REQUEST_INPUT => {
            Ok(ServerEvent::RequestInput(payload::<PromptPayload>(data)?))
        }
        other => Err(CodecError::UnknownEvent(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output(data: &str) -> Inbound {
        Inbound::Event(ServerEvent::TerminalOutput(TextPayload { data: data.into() }))
    }

    #[test]
    fn json_envelope_decodes_both_server_events() {
        let text = r#"{"event":"terminal_output","data":{"data":"Menu:\n1. Add\n"}}"#;
        assert_eq!(decode(Framing::Json, text).unwrap(), output("Menu:\n1. Add\n"));

        let text = r#"{"event":"request_input","data":{"prompt":"Option: "}}"#;
        assert_eq!(
            decode(Framing::Json, text).unwrap(),
            Inbound::Event(ServerEvent::RequestInput(PromptPayload { prompt: "Option: ".into() }))
        );
    }

    #[test]
    fn missing_payload_fields_decode_as_empty() {
        let text = r#"{"event":"request_input"}"#;
        assert_eq!(
            decode(Framing::Json, text).unwrap(),
            Inbound::Event(ServerEvent::RequestInput(PromptPayload::default()))
        );
        let text = r#"{"event":"terminal_output","data":{}}"#;
        assert_eq!(decode(Framing::Json, text).unwrap(), output(""));
    }

    #[test]
    fn unknown_events_and_garbage_are_errors() {
        let text = r#"{"event":"shutdown","data":{}}"#;
        assert!(matches!(
            decode(Framing::Json, text),
            Err(CodecError::UnknownEvent(name)) if name == "shutdown"
        ));
        assert!(matches!(decode(Framing::Json, "not json"), Err(CodecError::Json(_))));
        assert!(matches!(decode(Framing::Json, "  "), Err(CodecError::Empty)));
    }

    #[test]
    fn json_encode_produces_terminal_input_envelope() {
        let text = encode(Framing::Json, &ClientEvent::terminal_input("3")).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!({"event": "terminal_input", "data": {"data": "3"}}));
    }

    #[test]
    fn socketio_handshake_packets() {
        let open = r#"0{"sid":"eio-1","upgrades":[],"pingInterval":25000,"pingTimeout":20000}"#;
        assert_eq!(decode(Framing::SocketIo, open).unwrap(), Inbound::Open { sid: "eio-1".into() });

        let connect = r#"40{"sid":"sock-9"}"#;
        assert_eq!(
            decode(Framing::SocketIo, connect).unwrap(),
            Inbound::Connected { sid: Some("sock-9".into()) }
        );
        assert_eq!(decode(Framing::SocketIo, "40").unwrap(), Inbound::Connected { sid: None });
        assert_eq!(decode(Framing::SocketIo, "2").unwrap(), Inbound::Ping);
        assert_eq!(decode(Framing::SocketIo, "3").unwrap(), Inbound::Ignored);
        assert_eq!(decode(Framing::SocketIo, "41").unwrap(), Inbound::Disconnect);
        assert_eq!(decode(Framing::SocketIo, "1").unwrap(), Inbound::Disconnect);
    }

    #[test]
    fn socketio_event_packets() {
        let text = r#"42["terminal_output",{"data":"hello\n"}]"#;
        assert_eq!(decode(Framing::SocketIo, text).unwrap(), output("hello\n"));

        let with_namespace = r#"42/admin,["terminal_output",{"data":"x"}]"#;
        assert_eq!(decode(Framing::SocketIo, with_namespace).unwrap(), output("x"));

        let with_ack = r#"4217["terminal_output",{"data":"y"}]"#;
        assert_eq!(decode(Framing::SocketIo, with_ack).unwrap(), output("y"));

        let connect_error = r#"44{"message":"Not authorized"}"#;
        assert_eq!(
            decode(Framing::SocketIo, connect_error).unwrap(),
            Inbound::ConnectError("Not authorized".into())
        );
    }

    #[test]
    fn socketio_encode_produces_event_packet() {
        let text = encode(Framing::SocketIo, &ClientEvent::terminal_input("ls")).unwrap();
        assert_eq!(text, r#"42["terminal_input",{"data":"ls"}]"#);
    }

    #[test]
    fn socketio_rejects_unsupported_packets() {
        assert!(matches!(decode(Framing::SocketIo, ""), Err(CodecError::Empty)));
        assert!(matches!(decode(Framing::SocketIo, "9"), Err(CodecError::UnsupportedPacket(_))));
        assert!(matches!(decode(Framing::SocketIo, "43[]"), Err(CodecError::UnsupportedPacket(_))));
    }
}
