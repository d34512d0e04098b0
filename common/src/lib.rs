mod board;
mod protocol;

pub use board::*;
pub use protocol::*;
