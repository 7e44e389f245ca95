pub mod board;
pub mod state;

pub use board::{Board, BoardError, Cell, Player};
pub use state::{Game, Phase, Signal};
