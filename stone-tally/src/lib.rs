pub mod adapter;
pub mod board;
pub mod error;
pub mod moves;
pub mod solver;
pub mod tally;
pub mod types;

pub use board::{find_winner, Board};
pub use error::RuleError;
pub use moves::{apply_move, check_sizes, get_valid_moves, is_valid_move, Catalogue, Move};
pub use solver::{solve, Solver};
pub use tally::Tally;
pub use types::Player;
