use anyhow::Result;
use reqwest::StatusCode;
use url::Url;

/// HTTP client for the two outbound requests the game needs. Both are
/// fire-and-forget from the board's point of view: success only ever shows
/// up as a later state update on the push stream, so the returned status is
/// for logging, not for rendering.
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    /// `POST {index}/{credentials}`, resolved against the match URL the same
    /// way the browser resolves a relative fetch.
    pub fn move_url(&self, index: usize, credentials: &str) -> Result<Url> {
        debug_assert!(index < common::CELLS);
        Ok(self.base.join(&format!("{index}/{credentials}"))?)
    }

    /// `GET rematch/{credentials}`.
    pub fn rematch_url(&self, credentials: &str) -> Result<Url> {
        Ok(self.base.join(&format!("rematch/{credentials}"))?)
    }

    /// The push-stream endpoint.
    pub fn events_url(&self) -> Result<Url> {
        Ok(self.base.join("events")?)
    }

    /// Submits a move intent for one cell. No body, no retry, no optimistic
    /// board mutation; a rejected move simply produces no state update.
    pub async fn submit_move(&self, index: usize, credentials: &str) -> Result<StatusCode> {
        let response = self.http.post(self.move_url(index, credentials)?).send().await?;
        Ok(response.status())
    }

    /// Requests a rematch. A 200-class status lets the caller clear the
    /// end-of-match overlay before the `startgame` event arrives.
    pub async fn request_rematch(&self, credentials: &str) -> Result<StatusCode> {
        let response = self.http.get(self.rematch_url(credentials)?).send().await?;
        Ok(response.status())
    }
}
