pub mod board;
pub mod standard;
pub mod traits;
pub mod types;

pub use board::BoardRenderer;
pub use standard::StandardSymbols;
pub use traits::SymbolRenderer;
pub use types::{BoardGrid, CharPattern, CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH};
