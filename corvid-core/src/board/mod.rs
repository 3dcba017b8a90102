mod chess_board;
mod bitboard;
mod movegen;
mod perft;

pub use chess_board::{Board, Pieces};
pub use bitboard::BitBoard;
