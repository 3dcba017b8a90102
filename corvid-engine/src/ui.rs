use corvid_core::{Board, BoardError, Color, Color::*, Move, PieceType, PieceType::*, Square};

/// A square in `(row, col)` UI form, row 0 being rank 8 (Black's back rank).
pub type UiSquare = (u8, u8);

/// `(from, to, promotion)`. Castling is represented with the king's own
/// from/to squares; there is no UI representation for a null move, since it
/// only ever exists as an internal search device.
pub type UiMove = (UiSquare, UiSquare, Option<char>);

/// Extension methods on [`Board`] that translate to and from UI coordinates,
/// kept in `corvid-engine` since the rules adapter has no notion of a UI.
pub trait BoardUiExt {
    fn to_ui_grid(&self) -> [[char; 8]; 8];
    fn legal_moves_ui(&self) -> Vec<UiMove>;
    fn apply_ui_move(&self, ui_move: UiMove) -> Result<Board, BoardError>;
}

impl BoardUiExt for Board {
    fn to_ui_grid(&self) -> [[char; 8]; 8] {
        let mut grid = [['.'; 8]; 8];

        for square_index in 0..64u8 {
            let square = Square::new(square_index);
            let (row, col) = sq_to_rc(square_index);
            grid[row as usize][col as usize] = match self.piece_at(square) {
                Some((color, piece)) => piece.as_letter(color),
                None => '.',
            };
        }

        grid
    }

    fn legal_moves_ui(&self) -> Vec<UiMove> {
        self.legal_moves().iter().map(|mv| move_to_ui(mv, self)).collect()
    }

    fn apply_ui_move(&self, ui_move: UiMove) -> Result<Board, BoardError> {
        let mv = ui_move_to_move(ui_move, self)?;
        self.try_move(&mv)
    }
}

/// Internal square `s` to UI `(row, col)`: `s → ((7 - s/8), s%8)`.
pub fn sq_to_rc(square: u8) -> UiSquare {
    (7 - square / 8, square % 8)
}

/// UI `(row, col)` to internal square: `(r,c) → (7-r)*8 + c`.
pub fn rc_to_sq(rc: UiSquare) -> u8 {
    (7 - rc.0) * 8 + rc.1
}

fn promotion_letter(piece: PieceType) -> char {
    match piece {
        Queen => 'Q',
        Rook => 'R',
        Bishop => 'B',
        Knight => 'N',
        _ => unreachable!("only Q/R/B/N are legal promotion targets"),
    }
}

fn promotion_piece(letter: char) -> Option<PieceType> {
    match letter.to_ascii_uppercase() {
        'Q' => Some(Queen),
        'R' => Some(Rook),
        'B' => Some(Bishop),
        'N' => Some(Knight),
        _ => None,
    }
}

fn castle_squares(color: Color, short: bool) -> (u8, u8) {
    let rank_start = if color == White { 0 } else { 56 };
    if short {
        (rank_start + 4, rank_start + 6)
    } else {
        (rank_start + 4, rank_start + 2)
    }
}

pub(crate) fn move_to_ui(mv: &Move, board: &Board) -> UiMove {
    match mv {
        Move::Normal { from, to } => (sq_to_rc(*from), sq_to_rc(*to), None),
        Move::PawnPromotion { from, to, promote_to } => {
            (sq_to_rc(*from), sq_to_rc(*to), Some(promotion_letter(*promote_to)))
        }
        Move::ShortCastle => {
            let (from, to) = castle_squares(board.turn(), true);
            (sq_to_rc(from), sq_to_rc(to), None)
        }
        Move::LongCastle => {
            let (from, to) = castle_squares(board.turn(), false);
            (sq_to_rc(from), sq_to_rc(to), None)
        }
        Move::Null => unreachable!("a null move is never surfaced to the UI"),
    }
}

fn ui_move_to_move(ui_move: UiMove, board: &Board) -> Result<Move, BoardError> {
    let (from_rc, to_rc, promotion) = ui_move;
    let from = rc_to_sq(from_rc);
    let to = rc_to_sq(to_rc);

    if let Some((color, King)) = board.piece_at(Square::new(from)) {
        let (short_from, short_to) = castle_squares(color, true);
        let (long_from, long_to) = castle_squares(color, false);
        if from == short_from && to == short_to {
            return Ok(Move::ShortCastle);
        }
        if from == long_from && to == long_to {
            return Ok(Move::LongCastle);
        }
    }

    match promotion {
        Some(letter) => {
            let promote_to = promotion_piece(letter)
                .ok_or_else(|| BoardError::InvalidMoveNotation(letter.to_string()))?;
            Ok(Move::PawnPromotion { from, to, promote_to })
        }
        None => Ok(Move::Normal { from, to }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_roundtrip() {
        for square in 0..64u8 {
            assert_eq!(rc_to_sq(sq_to_rc(square)), square);
        }
    }

    #[test]
    fn e2_is_row6_col4() {
        // e2 is square 12 (rank 1, file 4)
        assert_eq!(sq_to_rc(12), (6, 4));
    }

    #[test]
    fn grid_matches_starting_position() {
        let board = Board::default();
        let grid = board.to_ui_grid();
        assert_eq!(grid[0], ['r', 'n', 'b', 'q', 'k', 'b', 'n', 'r']);
        assert_eq!(grid[6], ['p'; 8]);
        assert_eq!(grid[7], ['R', 'N', 'B', 'Q', 'K', 'B', 'N', 'R']);
    }

    #[test]
    fn castling_roundtrips_through_ui() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let ui_move = ((7, 4), (7, 6), None);
        let mv = ui_move_to_move(ui_move, &board).unwrap();
        assert_eq!(mv, Move::ShortCastle);
        assert_eq!(move_to_ui(&mv, &board), ui_move);
    }
}
