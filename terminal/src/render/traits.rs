use common::Mark;

use super::types::CharPattern;
use crate::victory::OverlaySymbol;

/// Pure lookup from a mark or a victory symbol to its visual asset. Carries
/// no state; swapping the glyph set swaps the whole look of the board.
pub trait SymbolRenderer {
    /// Cell-sized pattern for one mark. `Empty` must return a fully blank
    /// pattern so stamping it clears the cell.
    fn cell_symbol(&self, mark: Mark) -> CharPattern;

    /// Full-board pattern for an end-of-match overlay.
    fn overlay_symbol(&self, symbol: OverlaySymbol) -> CharPattern;
}
