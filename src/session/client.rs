// ABOUTME: WebSocket client holding the one persistent connection to the terminal server
// Spawns the connection task, forwards inbound events in arrival order, sends submissions

use crate::session::codec::{self, Framing, Inbound};
use crate::session::error::SessionError;
use crate::session::protocol::{ClientEvent, SessionEvent};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite};
use tracing::{debug, error, info, warn};

/// Destination for lines the user submits.
#[cfg_attr(test, mockall::automock)]
pub trait InputSink {
    fn submit(&self, event: ClientEvent) -> Result<(), SessionError>;
}

pub struct SocketSession {
    /// WebSocket URL of the terminal server
    url: String,

    /// Wire framing used for named events
    framing: Framing,
}

/// Owner-side handle of a running session.
pub struct SessionHandle {
    outbound: mpsc::UnboundedSender<ClientEvent>,
    task: JoinHandle<()>,
}

impl SocketSession {
    pub fn new(url: impl Into<String>, framing: Framing) -> Self {
        Self {
            url: url.into(),
            framing,
        }
    }

    /// Spawn the connection task.
    ///
    /// The receiver yields every inbound event in the order the transport
    /// delivered it. The last event is always `Disconnected`. There is no
    /// reconnection: once the connection ends the task ends.
    pub fn spawn(self) -> (SessionHandle, mpsc::UnboundedReceiver<SessionEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

        info!("Spawning socket session for {} ({:?} framing)", self.url, self.framing);

        let task = tokio::spawn(async move {
            let outcome =
                Self::connection_handler(&self.url, self.framing, outbound_rx, &event_tx).await;
            let reason = match outcome {
                Ok(()) => {
                    info!("Socket session closed");
                    "connection closed".to_string()
                }
                Err(e) => {
                    error!("Socket session ended with error: {}", e);
                    e.to_string()
                }
            };

            // The UI may already be gone
            let _ = event_tx.send(SessionEvent::Disconnected { reason });
        });

        (
            SessionHandle {
                outbound: outbound_tx,
                task,
            },
            event_rx,
        )
    }

    /// Drive a single WebSocket connection until it closes
    async fn connection_handler(
        url: &str,
        framing: Framing,
        mut outbound_rx: mpsc::UnboundedReceiver<ClientEvent>,
        events: &mpsc::UnboundedSender<SessionEvent>,
    ) -> Result<(), SessionError> {
        debug!("Attempting WebSocket handshake with {}", url);

        let (ws_stream, response) = connect_async(url)
            .await
            .map_err(|e| SessionError::Handshake(Box::new(e)))?;

        debug!("WebSocket response status: {:?}", response.status());

        let (mut ws_sender, mut ws_receiver) = ws_stream.split();

        // Socket.IO reports the connection once the namespace ack arrives
        if framing == Framing::Json {
            info!("Connected to server at {}", url);
            if events.send(SessionEvent::Connected { sid: None }).is_err() {
                return Ok(());
            }
        }

        loop {
            tokio::select! {
                Some(event) = outbound_rx.recv() => {
                    let text = codec::encode(framing, &event)?;
                    ws_sender.send(tungstenite::Message::Text(text)).await?;
                    debug!("Sent {} event", event.name());
                }

                frame = ws_receiver.next() => {
                    let text = match frame {
                        Some(Ok(tungstenite::Message::Text(text))) => text,
                        Some(Ok(tungstenite::Message::Close(_))) | None => {
                            info!("WebSocket closed by server");
                            return Ok(());
                        }
                        Some(Ok(_)) => {
                            // Binary, ping and pong frames carry no events
                            continue;
                        }
                        Some(Err(e)) => return Err(e.into()),
                    };

                    let inbound = match codec::decode(framing, &text) {
                        Ok(inbound) => inbound,
                        Err(e) => {
                            warn!("Skipping frame: {}", e);
                            continue;
                        }
                    };

                    let event = match inbound {
                        Inbound::Open { sid } => {
                            debug!("Engine.IO session opened: {}", sid);
                            let connect = codec::SOCKETIO_CONNECT.to_string();
                            ws_sender.send(tungstenite::Message::Text(connect)).await?;
                            continue;
                        }
                        Inbound::Ping => {
                            ws_sender
                                .send(tungstenite::Message::Text(codec::ENGINEIO_PONG.to_string()))
                                .await?;
                            continue;
                        }
                        Inbound::Ignored => continue,
                        Inbound::Disconnect => {
                            info!("Server ended the session");
                            return Ok(());
                        }
                        Inbound::ConnectError(message) => {
                            return Err(SessionError::Rejected(message));
                        }
                        Inbound::Connected { sid } => {
                            info!(
                                "Connected to server with SID: {}",
                                sid.as_deref().unwrap_or("-")
                            );
                            SessionEvent::Connected { sid }
                        }
                        Inbound::Event(event) => {
                            debug!("Received {} event", event.name());
                            event.into()
                        }
                    };

                    if events.send(event).is_err() {
                        debug!("Event receiver dropped, ending session");
                        return Ok(());
                    }
                }
            }
        }
    }
}

impl SessionHandle {
    /// Queue a line for the server
    pub fn submit_line(&self, data: impl Into<String>) -> Result<(), SessionError> {
        self.submit(ClientEvent::terminal_input(data))
    }

    /// Stop the connection task
    pub fn shutdown(&self) {
        info!("Shutting down socket session");
        self.task.abort();
    }
}

impl InputSink for SessionHandle {
    fn submit(&self, event: ClientEvent) -> Result<(), SessionError> {
        self.outbound.send(event).map_err(|_| SessionError::NotConnected)
    }
}
