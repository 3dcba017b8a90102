mod leapers;
mod rays;

use crate::board::BitBoard;
use crate::game_elements::Color;

pub use leapers::{ep_attackers, king_moves, knight_moves, pawn_attacks, pawn_pushes};
pub use rays::{bishop_attacks as bishop_moves, rook_attacks as rook_moves};

pub fn queen_moves(square: u8, occupancy: BitBoard) -> BitBoard {
    rays::rook_attacks(square, occupancy) | rays::bishop_attacks(square, occupancy)
}
