use std::sync::OnceLock;

use crate::board::BitBoard;
use crate::game_elements::Color;

fn offset_table(offsets: &[(i8, i8)]) -> [BitBoard; 64] {
    let mut table = [BitBoard::new(0); 64];
    for (square, entry) in table.iter_mut().enumerate() {
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;
        let mut bb = BitBoard::new(0);
        for &(df, dr) in offsets {
            let f = file + df;
            let r = rank + dr;
            if (0..8).contains(&f) && (0..8).contains(&r) {
                bb |= BitBoard::from_square((r * 8 + f) as u8);
            }
        }
        *entry = bb;
    }
    table
}

fn knight_table() -> &'static [BitBoard; 64] {
    static TABLE: OnceLock<[BitBoard; 64]> = OnceLock::new();
    TABLE.get_or_init(|| offset_table(&[
        (1, 2), (2, 1), (2, -1), (1, -2),
        (-1, -2), (-2, -1), (-2, 1), (-1, 2),
    ]))
}

fn king_table() -> &'static [BitBoard; 64] {
    static TABLE: OnceLock<[BitBoard; 64]> = OnceLock::new();
    TABLE.get_or_init(|| offset_table(&[
        (1, 0), (1, 1), (0, 1), (-1, 1),
        (-1, 0), (-1, -1), (0, -1), (1, -1),
    ]))
}

fn white_pawn_attack_table() -> &'static [BitBoard; 64] {
    static TABLE: OnceLock<[BitBoard; 64]> = OnceLock::new();
    TABLE.get_or_init(|| offset_table(&[(1, 1), (-1, 1)]))
}

fn black_pawn_attack_table() -> &'static [BitBoard; 64] {
    static TABLE: OnceLock<[BitBoard; 64]> = OnceLock::new();
    TABLE.get_or_init(|| offset_table(&[(1, -1), (-1, -1)]))
}

fn white_pawn_push_table() -> &'static [BitBoard; 64] {
    static TABLE: OnceLock<[BitBoard; 64]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = offset_table(&[(0, 1)]);
        for square in 8..16 {
            table[square] |= BitBoard::from_square((square + 16) as u8);
        }
        table
    })
}

fn black_pawn_push_table() -> &'static [BitBoard; 64] {
    static TABLE: OnceLock<[BitBoard; 64]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = offset_table(&[(0, -1)]);
        for square in 48..56 {
            table[square] |= BitBoard::from_square((square - 16) as u8);
        }
        table
    })
}

fn ep_attacker_table() -> &'static [BitBoard; 64] {
    static TABLE: OnceLock<[BitBoard; 64]> = OnceLock::new();
    TABLE.get_or_init(|| offset_table(&[(1, 1), (-1, 1), (1, -1), (-1, -1)]))
}

pub fn knight_moves(square: u8) -> BitBoard {
    knight_table()[square as usize]
}

pub fn king_moves(square: u8) -> BitBoard {
    king_table()[square as usize]
}

pub fn pawn_attacks(square: u8, color: Color) -> BitBoard {
    match color {
        Color::White => white_pawn_attack_table()[square as usize],
        Color::Black => black_pawn_attack_table()[square as usize],
    }
}

/// Single and (where applicable) double push target squares, ignoring
/// occupancy. Callers are responsible for masking out blocked squares,
/// including the intermediate square for a double push.
pub fn pawn_pushes(square: u8, color: Color) -> BitBoard {
    match color {
        Color::White => white_pawn_push_table()[square as usize],
        Color::Black => black_pawn_push_table()[square as usize],
    }
}

/// The squares from which a pawn of either color could capture en passant
/// onto `square`. Meant to be intersected with one side's actual pawns.
pub fn ep_attackers(square: u8) -> BitBoard {
    ep_attacker_table()[square as usize]
}
