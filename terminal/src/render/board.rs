use common::Snapshot;

use super::traits::SymbolRenderer;
use super::types::BoardGrid;
use crate::session::Overlay;
use crate::victory;

/// Composes the nine cell symbols, the selection cursor, and the victory
/// overlay into printable lines.
pub struct BoardRenderer<R: SymbolRenderer> {
    symbols: R,
}

impl<R: SymbolRenderer> BoardRenderer<R> {
    pub fn new(symbols: R) -> Self {
        Self { symbols }
    }

    pub fn render(&self, snapshot: &Snapshot, overlay: Overlay, cursor: Option<usize>) -> Vec<String> {
        let mut grid = BoardGrid::new();
        for (index, &mark) in snapshot.0.iter().enumerate() {
            grid.stamp_cell(index, &self.symbols.cell_symbol(mark));
        }
        if let Some(index) = cursor {
            grid.mark_cursor(index);
        }
        if let Overlay::Shown { line } = overlay {
            if let Some(symbol) = victory::overlay_symbol(line) {
                grid.stamp_overlay(&self.symbols.overlay_symbol(symbol));
            }
        }
        grid.into_lines()
    }
}
