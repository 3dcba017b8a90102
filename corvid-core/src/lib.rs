mod attacks;
mod board;
mod error;
mod fen;
mod game_elements;
mod zobrist;

pub use board::{Board, Pieces, BitBoard};
pub use error::BoardError;
pub use fen::DEFAULT_FEN;
pub use game_elements::{CastlingRights, Color, Move, PieceType, Square};
pub use zobrist::init_zobrist_keys;
