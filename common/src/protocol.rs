use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Outcome, Snapshot};

/// Default-channel payload: the whole board plus the match result once the
/// game has concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdate {
    pub gamestate: Snapshot,
    pub outcome: Option<Outcome>,
}

/// Everything the server can push over the event stream. Decoded at the
/// boundary so adding or removing a channel is a compile-checked change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    State(StateUpdate),
    Notification(String),
    Credentials(String),
    StartGame,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed payload on {channel:?} channel: {source}")]
    Payload {
        channel: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown stream channel {0:?}")]
    UnknownChannel(String),
}

impl StreamEvent {
    /// Decodes one push-stream event from its channel name and raw payload.
    /// The default channel arrives with an empty or `"message"` event name.
    pub fn decode(event: &str, data: &str) -> Result<Self, ProtocolError> {
        match event {
            "" | "message" => {
                let update = serde_json::from_str(data).map_err(|source| {
                    ProtocolError::Payload {
                        channel: "message",
                        source,
                    }
                })?;
                Ok(StreamEvent::State(update))
            }
            "notification" => Ok(StreamEvent::Notification(data.to_owned())),
            "credentials" => Ok(StreamEvent::Credentials(data.to_owned())),
            "startgame" => Ok(StreamEvent::StartGame),
            other => Err(ProtocolError::UnknownChannel(other.to_owned())),
        }
    }
}
