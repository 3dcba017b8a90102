use std::sync::OnceLock;
use rand::Rng;

use crate::game_elements::CastlingRights;
use crate::{Color, PieceType};

// The N_KEYS elements of the table are logically distributed as follows:
// - 768 for all possible squares of all types of pieces (0-767)
//    - The index of any given piece is: 64 * (2 * kind_of_piece + color) + square
// - 16 for all possible castling rights combinations (768-783)
// - 8 for the file of the current e.p. square, if any (784-791)
// - 1 to signal that White is to move (792)
const N_KEYS: usize = 64 * 12 + 16 + 8 + 1;

static ZOBRIST_VALUES: OnceLock<[u64; N_KEYS]> = OnceLock::new();

/// Forces the Zobrist table to be generated now rather than lazily on first
/// use. Unlike a shipped engine, this process never needs two runs to agree
/// on the same keys, so the table is seeded from the OS RNG instead of a
/// compiled-in constant.
pub fn init_zobrist_keys() {
    values();
}

fn values() -> &'static [u64; N_KEYS] {
    ZOBRIST_VALUES.get_or_init(|| {
        let mut rng = rand::thread_rng();
        let mut values = [0u64; N_KEYS];
        values.iter_mut().for_each(|v| *v = rng.gen());
        values
    })
}

pub fn get_key_for_piece(piece: PieceType, color: Color, square: u8) -> u64 {
    values()[64 * (2 * piece.to_index() + color.to_index()) + square as usize]
}

pub fn get_key_castling(cr: &CastlingRights) -> u64 {
    values()[768 + cr.index()]
}

pub fn get_key_ep_square(square: u8) -> u64 {
    values()[784 + (square as usize % 8)]
}

pub fn get_key_white_turn() -> u64 {
    values()[792]
}
