use std::time::Duration;

use corvid_core::Board;
use corvid_engine::{
    quiesce, search_best_move, search_best_move_parallel, BoardUiExt, SearchContext, SearchOptions, INF,
};

fn options(depth: u8, time_limit: Duration) -> SearchOptions {
    SearchOptions { max_depth: depth, time_limit, ..SearchOptions::default() }
}

#[test]
fn mate_in_one_is_found() {
    corvid_core::init_zobrist_keys();
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    let mut ctx = SearchContext::new();
    let best = search_best_move(&mut ctx, &board, options(2, Duration::from_secs(5)));

    let ((from_row, from_col), (to_row, to_col), _) = best.expect("a mating move must be found");
    // a1a8: a1 is (7,0), a8 is (0,0)
    assert_eq!((from_row, from_col), (7, 0));
    assert_eq!((to_row, to_col), (0, 0));
}

#[test]
fn side_to_move_quiescence_flips_sign() {
    corvid_core::init_zobrist_keys();
    let white_to_move = Board::from_fen("8/8/8/8/8/8/4r3/4Q3 w - - 0 1").unwrap();
    let mut ctx = SearchContext::new();
    let white_score = quiesce(&mut ctx, &white_to_move, -INF, INF).unwrap();
    assert!(white_score > 0);

    let black_to_move = Board::from_fen("8/8/8/8/8/8/4r3/4Q3 b - - 0 1").unwrap();
    let black_score = quiesce(&mut ctx, &black_to_move, -INF, INF).unwrap();
    assert!(black_score < 0);
}

#[test]
fn legal_opening_move_is_found() {
    corvid_core::init_zobrist_keys();
    let board = Board::default();
    let mut ctx = SearchContext::new();
    let best = search_best_move(&mut ctx, &board, options(2, Duration::from_secs(1)));

    let legal = board.legal_moves_ui();
    assert!(legal.contains(&best.expect("depth 2 from the initial position must return a move")));
}

#[test]
fn time_limit_is_honored() {
    corvid_core::init_zobrist_keys();
    let board = Board::default();
    let mut ctx = SearchContext::new();
    let start = std::time::Instant::now();
    let _ = search_best_move(&mut ctx, &board, options(10, Duration::from_millis(100)));
    assert!(start.elapsed() < Duration::from_millis(200));
}

#[test]
fn tt_grows_monotonically_across_depths() {
    corvid_core::init_zobrist_keys();
    let board = Board::default();
    let mut ctx = SearchContext::new();

    let _ = search_best_move(&mut ctx, &board, options(2, Duration::from_secs(5)));
    let size_at_depth_2 = ctx.tt().len();

    let _ = search_best_move(&mut ctx, &board, options(3, Duration::from_secs(5)));
    let size_at_depth_3 = ctx.tt().len();

    assert!(size_at_depth_3 >= size_at_depth_2);
}

#[test]
fn root_parallel_driver_returns_legal_move() {
    corvid_core::init_zobrist_keys();
    let board = Board::default();
    let best = search_best_move_parallel(&board, options(2, Duration::from_secs(2)));
    let legal = board.legal_moves_ui();
    assert!(legal.contains(&best.expect("root-parallel driver must return a move")));
}
