use corvid_core::{Board, Move, DEFAULT_FEN};

// Zobrist keys are seeded at random per process, so there's nothing to check
// against a known constant. What must hold is internal consistency: two
// paths to the same position agree, and incremental updates never drift
// from a from-scratch recomputation.

fn key_via_moves(moves: &[&str]) -> u64 {
    let mut board = Board::default();
    for mv in moves {
        board = board.make_move(&Move::from_notation(mv).unwrap());
    }
    board.zobrist_key()
}

#[test]
fn initial_position_matches_default_fen() {
    let from_default = Board::default().zobrist_key();
    let from_fen = Board::from_fen(DEFAULT_FEN).unwrap().zobrist_key();
    assert_eq!(from_default, from_fen);
}

#[test]
fn incremental_key_matches_from_scratch_key() {
    let incremental = key_via_moves(&["e2e4", "d7d5", "e4e5", "f7f5"]);
    let from_scratch = Board::from_fen(
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3"
    ).unwrap().zobrist_key();

    assert_eq!(incremental, from_scratch);
}

#[test]
fn transposition_reaches_the_same_key() {
    // 1. e4 Nf6 2. Nc3 vs 1. Nc3 Nf6 2. e4 reach the same position
    let a = key_via_moves(&["e2e4", "g8f6", "b1c3"]);
    let b = key_via_moves(&["b1c3", "g8f6", "e2e4"]);
    assert_eq!(a, b);
}

#[test]
fn different_positions_get_different_keys() {
    let start = Board::default().zobrist_key();
    let after_e4 = key_via_moves(&["e2e4"]);
    assert_ne!(start, after_e4);
}
