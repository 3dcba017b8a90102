use crate::game_elements::{Color, Color::*};
use PieceType::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    // For arrays
    pub const fn to_index(&self) -> usize {
        match self {
            Pawn => 0,
            Knight => 1,
            Bishop => 2,
            Rook => 3,
            Queen => 4,
            King => 5,
        }
    }
    pub fn as_char(&self, color: Color) -> char {
        match (color, self) {
            (White, Pawn) => '♙',
            (White, Knight) => '♘',
            (White, Bishop) => '♗',
            (White, Rook) => '♖',
            (White, Queen) => '♕',
            (White, King) => '♔',
            (Black, Pawn) => '♟',
            (Black, Knight) => '♞',
            (Black, Bishop) => '♝',
            (Black, Rook) => '♜',
            (Black, Queen) => '♛',
            (Black, King) => '♚',
        }
    }

    /// The plain ASCII letter used in FEN and in the UI grid: uppercase for
    /// White, lowercase for Black.
    pub fn as_letter(&self, color: Color) -> char {
        let letter = match self {
            Pawn => 'p',
            Knight => 'n',
            Bishop => 'b',
            Rook => 'r',
            Queen => 'q',
            King => 'k',
        };

        if color == White {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }

    pub fn from_fen_char(ch: char) -> Option<(Color, Self)> {
        let color = if ch.is_ascii_uppercase() { White } else { Black };
        let piece = match ch.to_ascii_lowercase() {
            'p' => Pawn,
            'n' => Knight,
            'b' => Bishop,
            'r' => Rook,
            'q' => Queen,
            'k' => King,
            _ => return None,
        };
        Some((color, piece))
    }
}