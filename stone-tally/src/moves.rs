use im::Vector;
use itertools::Itertools;

use crate::{
    board::Board,
    error::RuleError,
    types::{Delta, Stones},
};

/// Per pile delta, same length as the boards it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move(Vec<Delta>);

impl Move {
    pub fn new(deltas: impl IntoIterator<Item = Delta>) -> Self {
        Self(deltas.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn deltas(&self) -> &[Delta] {
        &self.0
    }
}

impl From<&[Delta]> for Move {
    fn from(deltas: &[Delta]) -> Self {
        Self(deltas.to_vec())
    }
}

/// Every move of the game, fixed for a whole search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue(Vec<Move>);

impl Catalogue {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self(moves.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn check_sizes(board: &Board, move_: &Move) -> Result<(), RuleError> {
    if board.len() != move_.len() {
        return Err(RuleError::SizeMismatch {
            board_len: board.len(),
            move_len: move_.len(),
        });
    }
    Ok(())
}

/// A move is valid if no pile ends up below zero.
pub fn is_valid_move(board: &Board, move_: &Move) -> Result<bool, RuleError> {
    check_sizes(board, move_)?;
    // i64 holds every u32 + i32 sum, so this can not overflow
    Ok(board
        .iter()
        .zip_eq(move_.deltas())
        .all(|(stones, delta)| stones as i64 + *delta as i64 >= 0))
}

/// Builds the successor board. Validity is not re-checked, call
/// [`is_valid_move`] first; a pile leaving the `Stones` range is an error
/// since a board can not hold it.
pub fn apply_move(board: &Board, move_: &Move) -> Result<Board, RuleError> {
    check_sizes(board, move_)?;
    let piles = board
        .iter()
        .zip_eq(move_.deltas())
        .enumerate()
        .map(|(index, (stones, delta))| {
            stones
                .checked_add_signed(*delta)
                .ok_or(RuleError::PileOutOfRange { index })
        })
        .collect::<Result<Vector<Stones>, _>>()?;
    Ok(Board::from_piles_unchecked(piles))
}

/// Valid moves in catalogue order.
pub fn get_valid_moves<'c>(
    board: &Board,
    catalogue: &'c Catalogue,
) -> Result<Vec<&'c Move>, RuleError> {
    let mut valid = Vec::with_capacity(catalogue.len());
    for move_ in catalogue {
        if is_valid_move(board, move_)? {
            valid.push(move_);
        }
    }
    Ok(valid)
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::{apply_move, get_valid_moves, is_valid_move, Catalogue, Move};
    use crate::board::Board;

    fn board_and_moves() -> impl Strategy<Value = (Vec<u32>, Vec<Vec<i32>>)> {
        (1usize..6).prop_flat_map(|len| {
            (
                prop::collection::vec(0u32..20, len),
                prop::collection::vec(prop::collection::vec(-20i32..20, len), 0..6),
            )
        })
    }

    proptest! {
        #[test]
        fn apply_is_pointwise_sum((piles, moves) in board_and_moves()) {
            let board = Board::try_from(piles.as_slice()).unwrap();
            for deltas in moves {
                let move_ = Move::from(deltas.as_slice());
                if is_valid_move(&board, &move_).unwrap() {
                    let applied = apply_move(&board, &move_).unwrap();
                    for (idx, delta) in deltas.iter().enumerate() {
                        prop_assert_eq!(applied.get(idx).unwrap() as i64, piles[idx] as i64 + *delta as i64);
                    }
                }
            }
        }

        #[test]
        fn valid_iff_min_non_negative((piles, moves) in board_and_moves()) {
            let board = Board::try_from(piles.as_slice()).unwrap();
            for deltas in moves {
                let min = piles.iter().zip(&deltas).map(|(s, d)| *s as i64 + *d as i64).min().unwrap();
                prop_assert_eq!(is_valid_move(&board, &Move::from(deltas.as_slice())).unwrap(), min >= 0);
            }
        }

        #[test]
        fn valid_moves_is_ordered_subset((piles, moves) in board_and_moves()) {
            let board = Board::try_from(piles.as_slice()).unwrap();
            let catalogue = Catalogue::new(moves.iter().map(|deltas| Move::from(deltas.as_slice())));
            let expected: Vec<&Move> = catalogue
                .iter()
                .filter(|move_| is_valid_move(&board, move_).unwrap())
                .collect();
            prop_assert_eq!(get_valid_moves(&board, &catalogue).unwrap(), expected);
        }
    }
}
