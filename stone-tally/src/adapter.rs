//! Entry points taking plain integer arrays, converted 1:1 into
//! [`Board`] and [`Catalogue`] before searching.

use crate::{
    board::Board,
    error::RuleError,
    moves::{Catalogue, Move},
    solver::solve,
    tally::Tally,
    types::{Delta, Stones},
};

pub fn solve_slices<M: AsRef<[Delta]>>(
    board: &[Stones],
    moves: &[M],
) -> Result<Tally, RuleError> {
    let board = Board::try_from(board)?;
    let catalogue = Catalogue::new(moves.iter().map(|deltas| Move::from(deltas.as_ref())));
    solve(&board, &catalogue)
}

/// same as [`solve_slices`], sizes agree by construction
pub fn solve_arrays<const N: usize>(
    board: [Stones; N],
    moves: &[[Delta; N]],
) -> Result<Tally, RuleError> {
    solve_slices(&board, moves)
}
