use std::fmt::Display;

use im::Vector;
use itertools::Itertools;

use crate::{
    error::RuleError,
    types::{Player, Stones},
};

/// Stone count per pile. Pile 0 belongs to player 1, the last pile to player 2,
/// everything in between is shared.
///
/// Boards are never changed in place, applying a move builds a new one
/// (see [`crate::moves::apply_move`]). Equality and hashing are by value so
/// two boards reached via different move orders share one cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board(Vector<Stones>);

impl Board {
    pub fn new(piles: impl IntoIterator<Item = Stones>) -> Result<Self, RuleError> {
        let piles: Vector<Stones> = piles.into_iter().collect();
        if piles.is_empty() {
            return Err(RuleError::EmptyBoard);
        }
        Ok(Self(piles))
    }

    /// caller guarantees at least one pile
    pub(crate) fn from_piles_unchecked(piles: Vector<Stones>) -> Self {
        debug_assert!(!piles.is_empty());
        Self(piles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// never true for a board built through [`Board::new`]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, pile: usize) -> Option<Stones> {
        self.0.get(pile).copied()
    }

    pub fn first(&self) -> Stones {
        self.0[0]
    }

    pub fn last(&self) -> Stones {
        self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Stones> + '_ {
        self.0.iter().copied()
    }

    /// Only meaningful on a terminal board, but does not check for it.
    /// Player 1 wins with strictly more stones in the first pile than in the
    /// last one, ties go to player 2.
    pub fn winner(&self) -> Player {
        if self.first() > self.last() {
            Player::Player1
        } else {
            Player::Player2
        }
    }
}

pub fn find_winner(board: &Board) -> Player {
    board.winner()
}

impl TryFrom<&[Stones]> for Board {
    type Error = RuleError;

    fn try_from(piles: &[Stones]) -> Result<Self, Self::Error> {
        Self::new(piles.iter().copied())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(","))
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{find_winner, Board};
    use crate::{error::RuleError, types::Player};

    fn board(piles: &[u32]) -> Board {
        Board::try_from(piles).unwrap()
    }

    #[test]
    fn winner_first_pile_larger() {
        assert_eq!(find_winner(&board(&[2, 0, 0, 1])), Player::Player1);
    }

    #[test]
    fn winner_last_pile_larger() {
        assert_eq!(find_winner(&board(&[1, 0, 0, 2])), Player::Player2);
    }

    #[test]
    fn tie_goes_to_player2() {
        assert_eq!(find_winner(&board(&[2, 0, 0, 2])), Player::Player2);
        assert_eq!(find_winner(&board(&[7])), Player::Player2);
    }

    #[test]
    fn winner_ignores_shared_piles() {
        assert_eq!(find_winner(&board(&[2, 4, 5, 1])), Player::Player1);
        assert_eq!(find_winner(&board(&[1, 5, 4, 2])), Player::Player2);
        assert_eq!(find_winner(&board(&[2, 3, 6, 2])), Player::Player2);
    }

    #[test]
    fn empty_board_rejected() {
        assert_eq!(Board::new(Vec::new()), Err(RuleError::EmptyBoard));
    }

    #[test]
    fn equal_contents_hash_equal() {
        let mut seen = HashSet::new();
        seen.insert(board(&[6, 4, 2, 4]));
        assert!(seen.contains(&Board::new(vec![6, 4, 2, 4]).unwrap()));
        assert!(!seen.contains(&board(&[6, 4, 2, 5])));
    }

    #[test]
    fn display_lists_piles() {
        assert_eq!(board(&[6, 4, 2, 4]).to_string(), "[6,4,2,4]");
        assert_eq!(board(&[0]).to_string(), "[0]");
    }
}
