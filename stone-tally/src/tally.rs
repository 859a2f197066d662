use std::fmt::Display;

use crate::{error::RuleError, types::Player};

/// u128 since play-throughs grow combinatorially while memoization keeps the
/// number of visited boards small
pub type WinCount = u128;

/// Wins per player over every terminal board reachable from a position.
/// Only ever grows, either by one win or by merging another tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tally {
    wins: [WinCount; 2],
}

impl Tally {
    pub const fn new(player1_wins: WinCount, player2_wins: WinCount) -> Self {
        Self {
            wins: [player1_wins, player2_wins],
        }
    }

    pub fn record_win(&mut self, winner: Player) -> Result<(), RuleError> {
        let wins = &mut self.wins[winner.index()];
        *wins = wins.checked_add(1).ok_or(RuleError::TallyOverflow)?;
        Ok(())
    }

    /// Leaves `self` untouched when either count would overflow.
    pub fn merge(&mut self, other: &Tally) -> Result<(), RuleError> {
        *self = self.checked_add(other)?;
        Ok(())
    }

    pub fn checked_add(&self, other: &Tally) -> Result<Tally, RuleError> {
        let player1 = self.wins[0].checked_add(other.wins[0]);
        let player2 = self.wins[1].checked_add(other.wins[1]);
        match (player1, player2) {
            (Some(player1), Some(player2)) => Ok(Tally::new(player1, player2)),
            _ => Err(RuleError::TallyOverflow),
        }
    }

    pub const fn player1_wins(&self) -> WinCount {
        self.wins[0]
    }

    pub const fn player2_wins(&self) -> WinCount {
        self.wins[1]
    }

    pub const fn wins(&self, player: Player) -> WinCount {
        self.wins[player.index()]
    }

    /// number of distinct play-throughs, `None` if it does not fit
    pub const fn total(&self) -> Option<WinCount> {
        self.wins[0].checked_add(self.wins[1])
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player 1 wins: {}, player 2 wins: {}",
            self.player1_wins(),
            self.player2_wins()
        )
    }
}
