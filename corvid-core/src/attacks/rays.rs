use crate::board::BitBoard;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn ray_attacks(square: u8, occupancy: BitBoard, directions: &[(i8, i8)]) -> BitBoard {
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;
    let mut attacks = BitBoard::new(0);

    for &(df, dr) in directions {
        let mut f = file + df;
        let mut r = rank + dr;

        while (0..8).contains(&f) && (0..8).contains(&r) {
            let target = (r * 8 + f) as u8;
            attacks |= BitBoard::from_square(target);

            if occupancy.contains(target) {
                break;
            }

            f += df;
            r += dr;
        }
    }

    attacks
}

/// Classical ray-casting attack generation, walking each direction until
/// blocked. Slower than a magic-bitboard lookup but needs no precomputed
/// tables, which this crate doesn't ship.
pub fn rook_attacks(square: u8, occupancy: BitBoard) -> BitBoard {
    ray_attacks(square, occupancy, &ROOK_DIRECTIONS)
}

pub fn bishop_attacks(square: u8, occupancy: BitBoard) -> BitBoard {
    ray_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}
