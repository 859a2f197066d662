use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("size of the move ({move_len}) does not match size of the board ({board_len})")]
    SizeMismatch { board_len: usize, move_len: usize },
    /// only two players exist, 0 and 1
    #[error("expected player 0 or 1, got {0}")]
    InvalidPlayer(u8),
    #[error("pile {index} would leave the representable range of stones")]
    PileOutOfRange { index: usize },
    #[error("win count does not fit into the tally")]
    TallyOverflow,
    #[error("a board needs at least one pile")]
    EmptyBoard,
}
