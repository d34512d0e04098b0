use common::Mark;

use super::traits::SymbolRenderer;
use super::types::{CharPattern, CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH};
use crate::victory::OverlaySymbol;

/// The default glyph set: box-drawing marks and full-board victory strokes.
pub struct StandardSymbols;

impl SymbolRenderer for StandardSymbols {
    fn cell_symbol(&self, mark: Mark) -> CharPattern {
        match mark {
            Mark::X => CharPattern::from_rows(&[" ╲ ╱ ", "  ╳  ", " ╱ ╲ "]),
            Mark::O => CharPattern::from_rows(&[" ╭─╮ ", " │ │ ", " ╰─╯ "]),
            Mark::Empty => CharPattern::blank(CELL_WIDTH, CELL_HEIGHT),
        }
    }

    fn overlay_symbol(&self, symbol: OverlaySymbol) -> CharPattern {
        let mut chars = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];
        match symbol {
            OverlaySymbol::RowStroke(row) => {
                let y = row * (CELL_HEIGHT + 1) + 1;
                for cell in chars[y].iter_mut() {
                    *cell = '═';
                }
            }
            OverlaySymbol::ColumnStroke(column) => {
                let x = column * (CELL_WIDTH + 1) + 2;
                for row in chars.iter_mut() {
                    row[x] = '║';
                }
            }
            OverlaySymbol::Diagonal => {
                for y in 0..GRID_HEIGHT {
                    let x = y * (GRID_WIDTH - 1) / (GRID_HEIGHT - 1);
                    chars[y][x] = '╲';
                }
            }
            OverlaySymbol::AntiDiagonal => {
                for y in 0..GRID_HEIGHT {
                    let x = (GRID_WIDTH - 1) - y * (GRID_WIDTH - 1) / (GRID_HEIGHT - 1);
                    chars[y][x] = '╱';
                }
            }
            OverlaySymbol::DrawScribble => {
                // A zigzag across the middle of the board.
                for x in 0..GRID_WIDTH {
                    let phase = x % 6;
                    let offset = if phase < 3 { phase } else { 6 - phase };
                    chars[3 + offset][x] = '~';
                }
            }
        }
        CharPattern::new(chars)
    }
}
