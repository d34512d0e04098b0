use common::StreamEvent;
use crossterm::event::{KeyCode, KeyEvent};

use crate::session::{GameSession, Overlay};
use crate::share::ShareData;

/// What the main loop should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    SubmitMove(usize),
    RequestRematch,
    CopyInvite,
}

/// Everything that can wake the UI loop besides keyboard input.
#[derive(Debug)]
pub enum AppEvent {
    Stream(StreamEvent),
    /// The rematch request came back 2xx; clear the overlay optimistically.
    RematchAccepted,
}

pub struct App {
    pub session: GameSession,
    pub cursor: usize,
    pub share: ShareData,
}

impl App {
    pub fn new(share: ShareData) -> Self {
        Self {
            session: GameSession::new(),
            cursor: 4,
            share,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            KeyCode::Char('c') => Some(AppCommand::CopyInvite),
            KeyCode::Char('r') if matches!(self.session.overlay(), Overlay::Shown { .. }) => {
                Some(AppCommand::RequestRematch)
            }
            // Direct cell selection, 1-9 in row-major order.
            KeyCode::Char(c @ '1'..='9') if self.session.board_active() => {
                Some(AppCommand::SubmitMove(c as usize - '1' as usize))
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.session.board_active() => {
                Some(AppCommand::SubmitMove(self.cursor))
            }
            KeyCode::Left if self.session.board_active() => {
                if self.cursor % 3 > 0 {
                    self.cursor -= 1;
                }
                None
            }
            KeyCode::Right if self.session.board_active() => {
                if self.cursor % 3 < 2 {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Up if self.session.board_active() => {
                if self.cursor >= 3 {
                    self.cursor -= 3;
                }
                None
            }
            KeyCode::Down if self.session.board_active() => {
                if self.cursor < 6 {
                    self.cursor += 3;
                }
                None
            }
            _ => None,
        }
    }

    pub fn apply_stream_event(&mut self, event: StreamEvent) {
        let changes = self.session.apply(event);
        for change in changes {
            tracing::debug!(index = change.index, mark = %change.mark, "cell updated");
        }
    }
}
