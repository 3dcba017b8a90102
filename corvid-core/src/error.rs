use thiserror::Error;

/// Errors raised while parsing a FEN string or applying a move to a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a FEN string must have exactly 6 space-separated fields, found {0}")]
    WrongFieldCount(usize),

    #[error("the piece placement section must describe 8 ranks, found {0}")]
    WrongRankCount(usize),

    #[error("invalid piece character '{0}' in FEN piece placement")]
    InvalidPieceChar(char),

    #[error("invalid side to move '{0}', expected \"w\" or \"b\"")]
    InvalidTurn(String),

    #[error("invalid castling rights character '{0}'")]
    InvalidCastlingChar(char),

    #[error("invalid square notation \"{0}\"")]
    InvalidSquare(String),

    #[error("invalid file index {0}, expected 0..=7")]
    InvalidFile(u8),

    #[error("invalid rank index {0}, expected 0..=7")]
    InvalidRank(u8),

    #[error("invalid move notation \"{0}\"")]
    InvalidMoveNotation(String),

    #[error("invalid halfmove clock \"{0}\"")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number \"{0}\"")]
    InvalidFullmoveNumber(String),

    #[error("white must have exactly one king")]
    MissingWhiteKing,

    #[error("black must have exactly one king")]
    MissingBlackKing,

    #[error("illegal move: {0}")]
    IllegalMove(String),
}
