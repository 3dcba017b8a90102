use crate::attacks;
use crate::board::{Board, BitBoard};
use crate::game_elements::{Color, Color::*, PieceType::*, Move};

// Bitboards that have 1's in the required spaces to castle for
// both colors, and those that must not be in check to castle.
// Files ascend a..h as 0..7 (matching `Square`), so White's kingside
// squares f1/g1 are bits 5,6 and the king's path e1-f1-g1 is bits 4,5,6;
// queenside b1/c1/d1 are bits 1,2,3 and the king's path c1-d1-e1 is bits 2,3,4.
const WHITE_SHORT_CASTLE_BB: BitBoard = BitBoard::new(0x60);
const WHITE_LONG_CASTLE_BB: BitBoard = BitBoard::new(0x0E);
const BLACK_SHORT_CASTLE_BB: BitBoard = BitBoard::new(0x6000000000000000);
const BLACK_LONG_CASTLE_BB: BitBoard = BitBoard::new(0x0E00000000000000);
const WHITE_SHORT_CASTLE_CHECKS: BitBoard = BitBoard::new(0x70);
const WHITE_LONG_CASTLE_CHECKS: BitBoard = BitBoard::new(0x1C);
const BLACK_SHORT_CASTLE_CHECKS: BitBoard = BitBoard::new(0x7000000000000000);
const BLACK_LONG_CASTLE_CHECKS: BitBoard = BitBoard::new(0x1C00000000000000);

const THIRD_RANK_MASK: BitBoard = BitBoard::new(0x0000000000FF0000);
const SIXTH_RANK_MASK: BitBoard = BitBoard::new(0x0000FF0000000000);

pub fn get_pseudolegal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(100); // just to be safe and avoid reallocations
    let pieces = board.get_pieces(color);
    let enemy_pieces = board.get_color_bitboard(!color);
    let friendly_pieces_mask = !board.get_color_bitboard(color);
    let all_pieces = board.get_all_bitboard();
    let ep_square = board.ep_square();

    // Ah yes, pawns. The funniest of pieces.
    // We need an aux vec to later transform the moves that end up in the
    // last rank to promotion moves
    let mut pawn_moves = Vec::with_capacity(50);
    pieces.pawns.piece_indices().for_each(|from| {
        // Captures, which must target either an enemy piece or the e.p. square
        let cap_bb = attacks::pawn_attacks(from, color) & (enemy_pieces | ep_square);
        pawn_moves.extend(cap_bb.piece_indices().map(|to| Move::Normal { from, to }));

        // Next, pushes. Going one step forward is always an option, if nothing is
        // in the way
        let mut push_bb = attacks::pawn_pushes(from, color) & !all_pieces;

        // If it's a white pawn in the second rank, disable the double push if there
        // is a piece in front of it
        if color == Color::White && from < 16 {
            push_bb &= !((all_pieces & THIRD_RANK_MASK) << 8);
        } else if color == Color::Black && from > 47 {
            push_bb &= !((all_pieces & SIXTH_RANK_MASK) >> 8);
        }

        pawn_moves.extend(push_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    // Transform the pawn moves into promotions if needed
    moves.extend(expand_promotions(pawn_moves, color));

    // Rook
    pieces.rooks.piece_indices().for_each(|from| {
        let move_bb = attacks::rook_moves(from, all_pieces) & friendly_pieces_mask;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    // Bishop
    pieces.bishops.piece_indices().for_each(|from| {
        let move_bb = attacks::bishop_moves(from, all_pieces) & friendly_pieces_mask;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    // Queen
    pieces.queens.piece_indices().for_each(|from| {
        let move_bb = attacks::queen_moves(from, all_pieces) & friendly_pieces_mask;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    // Horsey
    pieces.knights.piece_indices().for_each(|from| {
        let move_bb = attacks::knight_moves(from) & friendly_pieces_mask;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    // King
    // First, the simple 1-square moves
    pieces.king.piece_indices().for_each(|from| {
        let move_bb = attacks::king_moves(from) & friendly_pieces_mask;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    // Next, castling. Legality check of castling is done here too
    let (short_bb, long_bb, short_checks, long_checks) = match color {
        White => (WHITE_SHORT_CASTLE_BB, WHITE_LONG_CASTLE_BB,
                  WHITE_SHORT_CASTLE_CHECKS, WHITE_LONG_CASTLE_CHECKS),
        Black => (BLACK_SHORT_CASTLE_BB, BLACK_LONG_CASTLE_BB,
                  BLACK_SHORT_CASTLE_CHECKS, BLACK_LONG_CASTLE_CHECKS),
    };

    let attackers = board.get_attack_bitboard(!color);

    if board.castling_info().can_castle_kingside(color) && (all_pieces & short_bb).is_empty()
        && (attackers & short_checks).is_empty()  {
        moves.push(Move::ShortCastle);
    }

    if board.castling_info().can_castle_queenside(color) && (all_pieces & long_bb).is_empty()
        && (attackers & long_checks).is_empty() {
        moves.push(Move::LongCastle);
    }

    moves
}

/// Pseudolegal captures and promotions, used by quiescence search: everything
/// that changes material on the board, plus quiet promotions since they
/// swing material just as hard.
pub fn get_pseudolegal_caps_proms(board: &Board) -> Vec<Move> {
    let color = board.turn_color();
    let pieces = board.get_pieces(color);
    let enemy_pieces = board.get_color_bitboard(!color);
    let all_pieces = board.get_all_bitboard();
    let ep_square = board.ep_square();

    let mut moves = Vec::with_capacity(30);
    let mut pawn_moves = Vec::with_capacity(20);

    pieces.pawns.piece_indices().for_each(|from| {
        let cap_bb = attacks::pawn_attacks(from, color) & (enemy_pieces | ep_square);
        pawn_moves.extend(cap_bb.piece_indices().map(|to| Move::Normal { from, to }));

        // Quiet promotions: a push onto the last rank with nothing to capture
        let push_bb = attacks::pawn_pushes(from, color) & !all_pieces;
        let to_last_rank = push_bb.piece_indices().filter(|to| in_promotion_rank(*to, color));
        pawn_moves.extend(to_last_rank.map(|to| Move::Normal { from, to }));
    });

    moves.extend(expand_promotions(pawn_moves, color));

    let targets = enemy_pieces;

    pieces.rooks.piece_indices().for_each(|from| {
        let move_bb = attacks::rook_moves(from, all_pieces) & targets;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    pieces.bishops.piece_indices().for_each(|from| {
        let move_bb = attacks::bishop_moves(from, all_pieces) & targets;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    pieces.queens.piece_indices().for_each(|from| {
        let move_bb = attacks::queen_moves(from, all_pieces) & targets;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    pieces.knights.piece_indices().for_each(|from| {
        let move_bb = attacks::knight_moves(from) & targets;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    pieces.king.piece_indices().for_each(|from| {
        let move_bb = attacks::king_moves(from) & targets;
        moves.extend(move_bb.piece_indices().map(|to| Move::Normal { from, to }));
    });

    moves
}

pub fn get_controlled_squares(board: &Board, color: Color) -> BitBoard {
    let mut controlled = BitBoard::new(0);
    let our_pieces = board.get_pieces(color);
    let all_pieces = board.get_all_bitboard();

    controlled |= our_pieces.king.piece_indices().map(attacks::king_moves).reduce(|a, b| a | b).unwrap_or_default();
    controlled |= our_pieces.knights.piece_indices().map(attacks::knight_moves).reduce(|a, b| a | b).unwrap_or_default();
    controlled |= our_pieces.queens.piece_indices().map(|from| attacks::queen_moves(from, all_pieces)).reduce(|a, b| a | b).unwrap_or_default();
    controlled |= our_pieces.bishops.piece_indices().map(|from| attacks::bishop_moves(from, all_pieces)).reduce(|a, b| a | b).unwrap_or_default();
    controlled |= our_pieces.rooks.piece_indices().map(|from| attacks::rook_moves(from, all_pieces)).reduce(|a, b| a | b).unwrap_or_default();
    controlled |= our_pieces.pawns.piece_indices().map(|from| attacks::pawn_attacks(from, color)).reduce(|a, b| a | b).unwrap_or_default();

    controlled
}

fn expand_promotions(pawn_moves: Vec<Move>, color: Color) -> Vec<Move> {
    pawn_moves.into_iter().flat_map(|mv| {
        if in_promotion_rank(mv.to(), color) {
            vec![
                Move::PawnPromotion { from: mv.from(), to: mv.to(), promote_to: Queen },
                Move::PawnPromotion { from: mv.from(), to: mv.to(), promote_to: Rook },
                Move::PawnPromotion { from: mv.from(), to: mv.to(), promote_to: Bishop },
                Move::PawnPromotion { from: mv.from(), to: mv.to(), promote_to: Knight },
            ].into_iter()
        } else {
            vec![mv].into_iter()
        }
    }).collect()
}

fn in_promotion_rank(pos: u8, color: Color) -> bool {
    match color {
        Color::Black => pos < 8,
        Color::White => pos > 55
    }
}
