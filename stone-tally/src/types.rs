use crate::error::RuleError;

/// stones on a single pile, never negative
pub type Stones = u32;
/// per pile change applied by a move
pub type Delta = i32;

/// see [`Player`]
pub type PlayerU8 = u8;
pub const PLAYER1_U8: PlayerU8 = 0;
pub const PLAYER2_U8: PlayerU8 = 1;
/// 0 = Player1, 1 = Player2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Player1 = PLAYER1_U8,
    Player2 = PLAYER2_U8,
}

impl Player {
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<u8> for Player {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            PLAYER1_U8 => Ok(Player::Player1),
            PLAYER2_U8 => Ok(Player::Player2),
            invalid => Err(RuleError::InvalidPlayer(invalid)),
        }
    }
}
