use corvid_core::{Board, Move};

// Regression coverage for the castling square arithmetic: `castle()` and
// `update_castling_rights()` must agree with `Square`'s ascending a=0..h=7
// file convention, not the reversed one the arithmetic briefly carried over
// from the teacher's internal representation. Asserting on the resulting FEN
// pins down the exact king/rook destination squares, rather than relying on
// an aggregate perft count to notice a wrong-square bug.

#[test]
fn white_short_castle_moves_king_and_rook_to_g1_f1() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let after = board.try_move(&Move::ShortCastle).unwrap();
    assert_eq!(after.fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
}

#[test]
fn white_long_castle_moves_king_and_rook_to_c1_d1() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let after = board.try_move(&Move::LongCastle).unwrap();
    assert_eq!(after.fen(), "r3k2r/8/8/8/8/8/8/2KR3R b kq - 1 1");
}

#[test]
fn black_short_castle_moves_king_and_rook_to_g8_f8() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let after = board.try_move(&Move::ShortCastle).unwrap();
    assert_eq!(after.fen(), "r4rk1/8/8/8/8/8/8/R3K2R w KQ - 1 2");
}

#[test]
fn black_long_castle_moves_king_and_rook_to_c8_d8() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let after = board.try_move(&Move::LongCastle).unwrap();
    assert_eq!(after.fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2");
}

#[test]
fn rook_move_off_its_actual_home_square_revokes_that_sides_rights() {
    // The a1 rook (queenside) steps out; queenside rights must be revoked,
    // kingside rights must be untouched.
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let after = board.try_move(&Move::Normal { from: 0, to: 8 }).unwrap();
    assert_eq!(after.fen(), "r3k2r/8/8/8/8/8/R7/4K2R b Kkq - 1 1");
}

#[test]
fn capturing_a_rook_on_its_real_home_square_revokes_that_sides_rights() {
    // A white rook on h7 captures on h8, the black rook's actual kingside
    // square; Black's kingside rights must be revoked, queenside rights kept.
    let board = Board::from_fen("r3k2r/7R/8/8/8/8/8/4K2R w Kkq - 0 1").unwrap();
    let after = board.try_move(&Move::Normal { from: 55, to: 63 }).unwrap();
    assert_eq!(after.fen(), "r3k2R/8/8/8/8/8/8/4K2R b Kq - 0 1");
}
