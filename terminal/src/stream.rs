use common::StreamEvent;
use futures_util::StreamExt;
use reqwest_eventsource::{Error, Event, EventSource};
use tokio::sync::mpsc;
use url::Url;

use crate::app::AppEvent;

/// The single subscription to the server's push stream. Decoded events are
/// forwarded to the UI loop in arrival order; reconnect and retry belong to
/// the event source itself, so a dropped connection just shows up here as a
/// logged error followed by a fresh `Open`. Ends when the UI side goes away.
pub async fn run(events_url: Url, tx: mpsc::Sender<AppEvent>) {
    let mut source = EventSource::get(events_url);
    while let Some(item) = source.next().await {
        match item {
            Ok(Event::Open) => tracing::info!("push stream connected"),
            Ok(Event::Message(message)) => {
                match StreamEvent::decode(&message.event, &message.data) {
                    Ok(event) => {
                        if tx.send(AppEvent::Stream(event)).await.is_err() {
                            break;
                        }
                    }
                    // A trusted-server defect: log loudly, keep the stream.
                    Err(err) => tracing::error!(%err, "out-of-contract stream event skipped"),
                }
            }
            Err(Error::StreamEnded) => tracing::warn!("push stream ended, reconnecting"),
            Err(err) => tracing::warn!(%err, "push stream error"),
        }
    }
}
