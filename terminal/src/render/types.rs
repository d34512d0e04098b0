/// Character cell size of one board cell.
pub const CELL_WIDTH: usize = 5;
pub const CELL_HEIGHT: usize = 3;

/// Physical grid size: three cells per axis plus the separator lines.
pub const GRID_WIDTH: usize = CELL_WIDTH * 3 + 2;
pub const GRID_HEIGHT: usize = CELL_HEIGHT * 3 + 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>) -> Self {
        Self { chars }
    }

    pub fn from_rows(rows: &[&str]) -> Self {
        Self {
            chars: rows.iter().map(|row| row.chars().collect()).collect(),
        }
    }

    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            chars: vec![vec![' '; width]; height],
        }
    }
}

/// The 3x3 board as a character grid: nine stamped cell patterns, separator
/// lines between them, and optionally a full-board overlay on top.
pub struct BoardGrid {
    grid: Vec<Vec<char>>,
}

impl BoardGrid {
    pub fn new() -> Self {
        let mut grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];
        let separator_cols = [CELL_WIDTH, 2 * CELL_WIDTH + 1];
        let separator_rows = [CELL_HEIGHT, 2 * CELL_HEIGHT + 1];
        for row in grid.iter_mut() {
            for &x in &separator_cols {
                row[x] = '│';
            }
        }
        for &y in &separator_rows {
            for (x, cell) in grid[y].iter_mut().enumerate() {
                *cell = if separator_cols.contains(&x) { '┼' } else { '─' };
            }
        }
        Self { grid }
    }

    /// Stamps a cell pattern at a board index, spaces included, so an
    /// emptied cell loses its previous mark.
    pub fn stamp_cell(&mut self, index: usize, pattern: &CharPattern) {
        let start_x = (index % 3) * (CELL_WIDTH + 1);
        let start_y = (index / 3) * (CELL_HEIGHT + 1);
        for (dy, row) in pattern.chars.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                if let Some(cell) = self
                    .grid
                    .get_mut(start_y + dy)
                    .and_then(|grid_row| grid_row.get_mut(start_x + dx))
                {
                    *cell = ch;
                }
            }
        }
    }

    /// Stamps a full-board pattern; only non-space characters land, so the
    /// victory stroke cuts across marks without erasing them.
    pub fn stamp_overlay(&mut self, pattern: &CharPattern) {
        for (y, row) in pattern.chars.iter().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                if ch != ' ' {
                    if let Some(cell) = self.grid.get_mut(y).and_then(|grid_row| grid_row.get_mut(x)) {
                        *cell = ch;
                    }
                }
            }
        }
    }

    /// Marks the selection cursor by ticking the four corners of a cell.
    pub fn mark_cursor(&mut self, index: usize) {
        let start_x = (index % 3) * (CELL_WIDTH + 1);
        let start_y = (index / 3) * (CELL_HEIGHT + 1);
        for (dx, dy) in [
            (0, 0),
            (CELL_WIDTH - 1, 0),
            (0, CELL_HEIGHT - 1),
            (CELL_WIDTH - 1, CELL_HEIGHT - 1),
        ] {
            self.grid[start_y + dy][start_x + dx] = '+';
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        self.grid
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect()
    }
}

impl Default for BoardGrid {
    fn default() -> Self {
        Self::new()
    }
}
