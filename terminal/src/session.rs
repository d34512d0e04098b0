use common::{Outcome, Snapshot, StreamEvent};

use crate::reconcile::{diff, CellChange};
use crate::victory;

/// End-of-match overlay state. Once shown it stays shown until the next
/// `startgame` (or the optimistic clear after an accepted rematch); a state
/// update without an outcome never hides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Hidden,
    Shown { line: u8 },
}

/// All mutable client state for one match session: the board mirror, the
/// session credentials, the overlay, and the current notification line.
/// The server is the sole source of truth; nothing in here is ever computed
/// from game rules locally.
#[derive(Debug)]
pub struct GameSession {
    mirror: Snapshot,
    credentials: Option<String>,
    overlay: Overlay,
    notification: String,
    board_active: bool,
    invite_visible: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            mirror: Snapshot::empty(),
            credentials: None,
            overlay: Overlay::Hidden,
            notification: String::new(),
            board_active: false,
            invite_visible: true,
        }
    }

    /// The last-applied snapshot, cell for cell.
    pub fn mirror(&self) -> &Snapshot {
        &self.mirror
    }

    pub fn credentials(&self) -> Option<&str> {
        self.credentials.as_deref()
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn notification(&self) -> &str {
        &self.notification
    }

    pub fn board_active(&self) -> bool {
        self.board_active
    }

    pub fn invite_visible(&self) -> bool {
        self.invite_visible
    }

    /// Applies one stream event and returns the cell mutations it caused.
    /// Events are handled in arrival order and never coalesced; a replayed
    /// snapshot after a transport reconnect diffs to nothing.
    pub fn apply(&mut self, event: StreamEvent) -> Vec<CellChange> {
        match event {
            StreamEvent::State(update) => {
                let changes = diff(&self.mirror, &update.gamestate);
                self.mirror = update.gamestate;
                if let Some(outcome) = update.outcome {
                    self.show_outcome(&outcome);
                }
                changes
            }
            StreamEvent::Notification(text) => {
                self.notification = text;
                Vec::new()
            }
            StreamEvent::Credentials(token) => {
                self.credentials = Some(token);
                Vec::new()
            }
            StreamEvent::StartGame => {
                self.start_game();
                Vec::new()
            }
        }
    }

    /// Optimistic clear after an accepted rematch request. Idempotent with
    /// the `startgame` reset that usually follows it.
    pub fn clear_overlay(&mut self) {
        self.overlay = Overlay::Hidden;
    }

    fn show_outcome(&mut self, outcome: &Outcome) {
        match victory::overlay_symbol(outcome.line) {
            Some(_) => {
                self.overlay = Overlay::Shown { line: outcome.line };
                self.notification = victory::outcome_message(outcome);
            }
            // Decode already validates the line id, so this only fires if
            // the contract and the validation ever drift apart.
            None => tracing::error!(line = outcome.line, "outcome carries an unknown line id"),
        }
    }

    fn start_game(&mut self) {
        self.invite_visible = false;
        self.board_active = true;
        self.mirror = Snapshot::empty();
        self.overlay = Overlay::Hidden;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
