use corvid_core::{Board, Move};

use super::context::SearchContext;
use super::move_ordering::order_moves;
use crate::evaluation::evaluate;
use crate::transposition::{NodeType, TTEntry};
use crate::{SearchError, INF};

/// Quiescence search: continues searching only captures and checking moves
/// past the nominal horizon, to avoid misjudging a position that's about to
/// lose material one ply past where the main search stopped.
pub fn quiesce(ctx: &mut SearchContext, board: &Board, mut alpha: i32, beta: i32) -> Result<i32, SearchError> {
    if !ctx.visit_node() {
        return Err(SearchError::Timeout);
    }

    let stand = evaluate(board) * board.turn().sign() as i32;
    if stand >= beta {
        return Ok(beta);
    }
    if stand > alpha {
        alpha = stand;
    }

    for mv in board.legal_moves() {
        if !mv.is_capture(board) && !mv.gives_check(board) {
            continue;
        }

        let child = board.make_move(&mv);
        let score = -quiesce(ctx, &child, -beta, -alpha)?;

        if score >= beta {
            return Ok(beta);
        }
        if score > alpha {
            alpha = score;
        }
    }

    Ok(alpha)
}

/// Negamax alpha-beta search over `depth` plies, with transposition table
/// lookups, null-move pruning, late move reductions and killer/history move
/// ordering feedback. Returns the side-to-move-relative score.
pub fn alphabeta(ctx: &mut SearchContext, board: &Board, depth: i32, mut alpha: i32, beta: i32) -> Result<i32, SearchError> {
    if !ctx.visit_node() {
        return Err(SearchError::Timeout);
    }

    let original_alpha = alpha;
    let zobrist = board.zobrist_key();
    let mut tt_move = None;

    if let Some(entry) = ctx.tt.probe(zobrist) {
        tt_move = entry.best_move;

        if entry.depth as i32 >= depth {
            match entry.node_type {
                NodeType::Exact => return Ok(entry.score),
                NodeType::Lower if entry.score >= beta => return Ok(entry.score),
                NodeType::Upper if entry.score <= alpha => return Ok(entry.score),
                _ => {}
            }
        }
    }

    if depth <= 0 {
        return quiesce(ctx, board, alpha, beta);
    }

    let in_check = board.is_check(board.turn());

    if depth >= 3 && !in_check && !board.has_legal_en_passant() {
        let null_board = board.make_null_move();
        let null_score = -alphabeta(ctx, &null_board, depth - 3, -beta, -beta + 1)?;
        if null_score >= beta {
            return Ok(beta);
        }
    }

    let killers = *ctx.killers.get(depth as usize);
    let moves = order_moves(board.legal_moves(), board, tt_move, &killers, &ctx.history);

    if moves.is_empty() {
        let score = if in_check { -INF + board.current_ply() as i32 } else { 0 };
        return Ok(score);
    }

    let mut best_score = -INF;
    let mut best_move = moves[0];
    let mut quiets_seen: Vec<Move> = Vec::new();
    let mut quiets_before_best: Vec<Move> = Vec::new();

    for (i, mv) in moves.iter().enumerate() {
        let is_quiet = !mv.is_capture(board);

        let child = board.make_move(mv);
        let mut reduced_depth = depth - 1;
        if i >= 6 && depth >= 5 && !in_check {
            reduced_depth -= 1;
        }

        let score = -alphabeta(ctx, &child, reduced_depth, -beta, -alpha)?;

        if score > best_score {
            best_score = score;
            best_move = *mv;
            if is_quiet {
                quiets_before_best = quiets_seen.clone();
            }
        }

        if score > alpha {
            alpha = score;
        }

        if is_quiet {
            quiets_seen.push(*mv);
        }

        if alpha >= beta {
            if is_quiet {
                ctx.killers.push(depth as usize, *mv);
            }
            break;
        }
    }

    if !best_move.is_capture(board) {
        let bonus = depth * depth;
        ctx.history.add_bonus(board.turn(), &best_move, bonus);
        for quiet in quiets_before_best.iter().filter(|m| **m != best_move) {
            ctx.history.add_bonus(board.turn(), quiet, -bonus);
        }
    }

    let node_type = if best_score <= original_alpha {
        NodeType::Upper
    } else if best_score >= beta {
        NodeType::Lower
    } else {
        NodeType::Exact
    };

    ctx.tt.store(TTEntry {
        zobrist,
        depth: depth.max(0) as u8,
        node_type,
        score: best_score,
        best_move: Some(best_move),
    });

    Ok(best_score)
}
