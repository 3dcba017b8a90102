use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use corvid_core::Board;

use super::context::SearchContext;
use super::core::alphabeta;
use crate::config::{SearchOptions, ASPIRATION_WINDOW, INF};
use crate::ui::{move_to_ui, UiMove};

/// Iterative deepening with aspiration windows, owning the TT/killers/history
/// through `ctx` across the whole call so repeated re-searches at a depth
/// reuse prior work. Returns the best move found translated to UI form, or
/// `None` if not even depth 1 completed in time.
pub fn search_best_move(ctx: &mut SearchContext, board: &Board, options: SearchOptions) -> Option<UiMove> {
    ctx.reset_for_search(options.time_limit);
    let deadline = Instant::now() + options.time_limit;

    let root_moves = board.legal_moves();
    if root_moves.is_empty() {
        return None;
    }
    if root_moves.len() == 1 {
        return Some(move_to_ui(&root_moves[0], board));
    }

    let mut best_move = None;
    let mut score = 0;

    for depth in 1..=options.max_depth {
        let mut window = ASPIRATION_WINDOW;
        let mut alpha = score - window;
        let mut beta = score + window;

        let result = loop {
            match alphabeta(ctx, board, depth as i32, alpha, beta) {
                Ok(value) if value <= alpha => {
                    alpha -= window;
                    window *= 2;
                }
                Ok(value) if value >= beta => {
                    beta += window;
                    window *= 2;
                }
                Ok(value) => break Some(value),
                Err(_timeout) => break None,
            }
        };

        match result {
            Some(value) => score = value,
            None => {
                debug!(depth, "search timed out mid-depth, returning best move so far");
                break;
            }
        }

        if let Some(entry) = ctx.tt().probe(board.zobrist_key()) {
            best_move = entry.best_move;
        }

        info!(depth, score, nodes = ctx.node_count(), "completed iterative deepening depth");

        if Instant::now() >= deadline {
            break;
        }
    }

    best_move.map(|mv| move_to_ui(&mv, board))
}

/// Alternate driver that parallelizes only at the root: each root move gets
/// its own freshly-constructed `SearchContext` (no shared TT/killers/history
/// across workers), dispatched to a rayon thread pool. Deepens one ply at a
/// time like the sequential driver, but cannot benefit from TT reuse between
/// depths since every depth restarts every worker's context.
pub fn search_best_move_parallel(board: &Board, options: SearchOptions) -> Option<UiMove> {
    let start = Instant::now();
    let root_moves = board.legal_moves();

    if root_moves.is_empty() {
        return None;
    }
    if root_moves.len() == 1 {
        return Some(move_to_ui(&root_moves[0], board));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers)
        .build()
        .expect("failed to build root-parallel search thread pool");

    let mut best_move = None;
    let mut depth = 1u8;

    while depth <= options.max_depth && start.elapsed() < options.time_limit {
        let remaining = options.time_limit.saturating_sub(start.elapsed());

        let scored: Vec<_> = pool.install(|| {
            root_moves
                .par_iter()
                .filter_map(|mv| {
                    let mut ctx = SearchContext::new();
                    ctx.reset_for_search(remaining);
                    let child = board.make_move(mv);
                    let score = alphabeta(&mut ctx, &child, depth as i32 - 1, -INF, INF).ok()?;
                    Some((*mv, -score))
                })
                .collect()
        });

        match scored.into_iter().max_by_key(|(_, score)| *score) {
            Some((mv, score)) => {
                best_move = Some(mv);
                info!(depth, score, "completed root-parallel depth");
            }
            // Every worker timed out at this depth; keep whatever the
            // previous depth found.
            None => break,
        }

        depth += 1;
    }

    best_move.map(|mv| move_to_ui(&mv, board))
}
