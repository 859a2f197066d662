use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    board::{find_winner, Board},
    error::RuleError,
    moves::{apply_move, get_valid_moves, Catalogue},
    tally::Tally,
};

/// Counts terminal boards per winner over every possible play-through.
///
/// The same board is usually reachable through many orderings of the same
/// moves, so results are memoized per board value. The cache belongs to one
/// top-level [`Solver::solve`] call and is dropped with it.
///
/// NOTE: there is no depth limit, the recursion is as deep as the longest
/// play-through. A long enough line (e.g. draining a pile of 200_000 stones one
/// at a time) overflows the stack, and a catalogue that never lets a board run
/// out of valid moves (e.g. an all zero move) never terminates. The caller has
/// to rule both out.
pub struct Solver<'c> {
    catalogue: &'c Catalogue,
    cache: HashMap<Board, Tally>,
    cache_hits: u64,
}

impl<'c> Solver<'c> {
    const INITIAL_CACHE_CAPACITY: usize = 1_024;

    pub fn new(catalogue: &'c Catalogue) -> Self {
        Self {
            catalogue,
            cache: HashMap::with_capacity(Self::INITIAL_CACHE_CAPACITY),
            cache_hits: 0,
        }
    }

    pub fn solve(mut self, board: &Board) -> Result<Tally, RuleError> {
        let tally = self.solve_board(board)?;
        debug!(
            "solved {board}: {tally} ({} distinct boards, {} cache hits)",
            self.cache.len(),
            self.cache_hits
        );
        Ok(tally)
    }

    fn solve_board(&mut self, board: &Board) -> Result<Tally, RuleError> {
        if let Some(cached) = self.cache.get(board) {
            self.cache_hits += 1;
            return Ok(*cached);
        }

        let valid_moves = get_valid_moves(board, self.catalogue)?;
        let tally = if valid_moves.is_empty() {
            let winner = find_winner(board);
            trace!("terminal board {board}, winner {winner:?}");
            let mut tally = Tally::default();
            tally.record_win(winner)?;
            tally
        } else {
            let mut tally = Tally::default();
            for move_ in valid_moves {
                let child = apply_move(board, move_)?;
                tally.merge(&self.solve_board(&child)?)?;
            }
            tally
        };

        // only reached once the whole subtree resolved, so every board is inserted once
        let previous = self.cache.insert(board.clone(), tally);
        debug_assert!(previous.is_none());
        Ok(tally)
    }
}

/// Win counts for every play-through starting at `board`, using a fresh cache.
pub fn solve(board: &Board, catalogue: &Catalogue) -> Result<Tally, RuleError> {
    Solver::new(catalogue).solve(board)
}
