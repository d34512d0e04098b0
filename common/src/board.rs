use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

pub const CELLS: usize = 9;

/// One of the eight three-in-a-row geometries, in the server's enumeration
/// order. This table is the shared contract with the server and is never
/// re-derived from board contents.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // horizontal
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // vertical
    [0, 4, 8],
    [2, 4, 6], // diagonal
];

/// Line id the server sends for a drawn match, with no line to highlight.
pub const DRAW_LINE_ID: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
            Self::Empty => write!(f, " "),
        }
    }
}

/// Full authoritative board state at one instant, row-major over the 3x3
/// grid. The server always sends the whole board, never a partial patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(pub [Mark; CELLS]);

impl Snapshot {
    pub fn empty() -> Self {
        Snapshot([Mark::Empty; CELLS])
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("line id {0} is out of contract")]
    LineId(u8),
    #[error("winner {0:?} does not match line id {1}")]
    WinnerMismatch(Mark, u8),
}

/// Match result as the server reports it: the winning mark (or `Empty` for a
/// draw) plus the win-line id. Only present once the match has concluded.
///
/// Sent on the wire as a `[mark, lineId]` tuple; validated on the way in so
/// the resolver never sees an out-of-contract pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(Mark, u8)", into = "(Mark, u8)")]
pub struct Outcome {
    pub winner: Mark,
    pub line: u8,
}

impl Outcome {
    pub fn is_draw(&self) -> bool {
        self.line == DRAW_LINE_ID
    }

    /// Cell indices of the winning line, `None` for a draw.
    pub fn line_cells(&self) -> Option<[usize; 3]> {
        WIN_LINES.get(self.line as usize).copied()
    }
}

impl TryFrom<(Mark, u8)> for Outcome {
    type Error = OutcomeError;

    fn try_from((winner, line): (Mark, u8)) -> Result<Self, Self::Error> {
        match line {
            0..=7 if winner != Mark::Empty => Ok(Outcome { winner, line }),
            DRAW_LINE_ID if winner == Mark::Empty => Ok(Outcome { winner, line }),
            0..=7 | DRAW_LINE_ID => Err(OutcomeError::WinnerMismatch(winner, line)),
            _ => Err(OutcomeError::LineId(line)),
        }
    }
}

impl From<Outcome> for (Mark, u8) {
    fn from(outcome: Outcome) -> Self {
        (outcome.winner, outcome.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_wire_names() {
        assert_eq!(serde_json::to_string(&Mark::Empty).unwrap(), "\"Empty\"");
        assert_eq!(serde_json::to_string(&Mark::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&Mark::O).unwrap(), "\"O\"");
    }

    #[test]
    fn snapshot_parses_as_bare_array() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"["X","O","X","Empty","X","Empty","Empty","Empty","Empty"]"#)
                .unwrap();
        assert_eq!(snapshot.0[0], Mark::X);
        assert_eq!(snapshot.0[1], Mark::O);
        assert_eq!(snapshot.0[3], Mark::Empty);
    }

    #[test]
    fn snapshot_rejects_wrong_length() {
        assert!(serde_json::from_str::<Snapshot>(r#"["X","O"]"#).is_err());
        let ten = r#"["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]"#;
        assert!(serde_json::from_str::<Snapshot>(ten).is_err());
    }

    #[test]
    fn snapshot_rejects_unknown_mark() {
        let bad = r#"["X","O","X","Empty","Z","Empty","Empty","Empty","Empty"]"#;
        assert!(serde_json::from_str::<Snapshot>(bad).is_err());
    }

    #[test]
    fn outcome_parses_from_tuple() {
        let outcome: Outcome = serde_json::from_str(r#"["X",6]"#).unwrap();
        assert_eq!(outcome.winner, Mark::X);
        assert_eq!(outcome.line, 6);
        assert!(!outcome.is_draw());
        assert_eq!(outcome.line_cells(), Some([0, 4, 8]));
    }

    #[test]
    fn draw_outcome_uses_sentinel() {
        let outcome: Outcome = serde_json::from_str(r#"["Empty",10]"#).unwrap();
        assert!(outcome.is_draw());
        assert_eq!(outcome.line_cells(), None);
    }

    #[test]
    fn out_of_contract_line_ids_are_rejected() {
        assert!(serde_json::from_str::<Outcome>(r#"["X",8]"#).is_err());
        assert!(serde_json::from_str::<Outcome>(r#"["X",9]"#).is_err());
        assert!(serde_json::from_str::<Outcome>(r#"["O",11]"#).is_err());
    }

    #[test]
    fn winner_must_match_line_kind() {
        // A real line needs a real winner, the draw sentinel needs Empty.
        assert!(serde_json::from_str::<Outcome>(r#"["Empty",3]"#).is_err());
        assert!(serde_json::from_str::<Outcome>(r#"["X",10]"#).is_err());
    }

    #[test]
    fn win_line_table_matches_server_enumeration() {
        assert_eq!(WIN_LINES[0], [0, 1, 2]);
        assert_eq!(WIN_LINES[5], [2, 5, 8]);
        assert_eq!(WIN_LINES[6], [0, 4, 8]);
        assert_eq!(WIN_LINES[7], [2, 4, 6]);
    }
}
