use corvid_core::{Board, BitBoard, Color::*, PieceType, PieceType::*};

/// Material value of each piece type, in centipawns. The king has no material
/// value since it can never be captured.
const fn material_value(piece: PieceType) -> i32 {
    match piece {
        Pawn => 100,
        Knight => 320,
        Bishop => 330,
        Rook => 500,
        Queen => 900,
        King => 0,
    }
}

// Piece-square tables, indexed by square assuming White to move (square 0 is
// a1, square 63 is h8). Black's bonus for a piece on square `s` is read from
// `sq XOR 56`, the vertical mirror. There is deliberately no separate
// endgame table: these are mid-game weights used for the whole game.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

fn piece_square_table(piece: PieceType) -> &'static [i32; 64] {
    match piece {
        Pawn => &PAWN_TABLE,
        Knight => &KNIGHT_TABLE,
        Bishop => &BISHOP_TABLE,
        Rook => &ROOK_TABLE,
        Queen => &QUEEN_TABLE,
        King => &KING_TABLE,
    }
}

/// Centipawn evaluation of a position, White-positive regardless of the side
/// to move. `eval(P) == -eval(mirror(P))` for any position `P` and its
/// color-swapped, rank-reflected mirror `mirror(P)`.
pub fn evaluate(board: &Board) -> i32 {
    material_and_position(board, White) - material_and_position(board, Black) + mobility(board)
}

fn material_and_position(board: &Board, color: corvid_core::Color) -> i32 {
    let pieces = board.get_pieces(color);

    [Pawn, Knight, Bishop, Rook, Queen, King]
        .into_iter()
        .map(|piece_type| {
            let bb: BitBoard = pieces.get_pieces_of_type(piece_type);
            let table = piece_square_table(piece_type);
            bb.piece_indices()
                .map(|sq| {
                    let table_index = if color == White { sq } else { sq ^ 56 };
                    material_value(piece_type) + table[table_index as usize]
                })
                .sum::<i32>()
        })
        .sum()
}

// +1 centipawn per legal move available to the side to move, signed so that
// it favors whoever is to move.
fn mobility(board: &Board) -> i32 {
    let n_moves = board.legal_moves().len() as i32;
    match board.turn() {
        White => n_moves,
        Black => -n_moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvid_core::Board;

    #[test]
    fn starting_position_is_balanced() {
        // Mobility is symmetric for both sides on move 1, but it's White's
        // turn, so the only asymmetry is the +n/-n mobility term itself,
        // which should exactly cancel with the mirrored mobility figure.
        let eval = evaluate(&Board::default());
        assert_eq!(eval, 20);
    }

    #[test]
    fn mirrored_positions_negate() {
        let board = Board::from_fen("8/8/8/8/8/8/4r3/4Q3 w - - 0 1").unwrap();
        let mirror = Board::from_fen("8/4q3/8/8/8/8/8/4R3 b - - 0 1").unwrap();
        assert_eq!(evaluate(&board), -evaluate(&mirror));
        assert!(evaluate(&board) > 0);
    }
}
