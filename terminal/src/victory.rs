use common::{Outcome, DRAW_LINE_ID};

/// Which overlay asset to draw for a concluded match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlaySymbol {
    /// Horizontal stroke through row 0..=2.
    RowStroke(usize),
    /// Vertical stroke through column 0..=2.
    ColumnStroke(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
    /// Drawn match, no line to highlight.
    DrawScribble,
}

/// Selects the overlay asset for a line id. Ids 0..=7 are the eight win
/// lines in server enumeration order, 10 is the draw sentinel; anything
/// else is out of contract.
pub fn overlay_symbol(line: u8) -> Option<OverlaySymbol> {
    match line {
        0..=2 => Some(OverlaySymbol::RowStroke(line as usize)),
        3..=5 => Some(OverlaySymbol::ColumnStroke(line as usize - 3)),
        6 => Some(OverlaySymbol::Diagonal),
        7 => Some(OverlaySymbol::AntiDiagonal),
        DRAW_LINE_ID => Some(OverlaySymbol::DrawScribble),
        _ => None,
    }
}

/// End-of-match message, with the rematch affordance appended.
pub fn outcome_message(outcome: &Outcome) -> String {
    if outcome.is_draw() {
        "It's a draw! Press r for a rematch.".to_owned()
    } else {
        format!("Player {} wins! Press r for a rematch.", outcome.winner)
    }
}
