use std::fmt::{Display, Formatter};

use crate::board::BitBoard;
use crate::BoardError;

/// A square on the board, stored as `rank * 8 + file`, rank 0 being White's
/// back rank (so `e2` is square 12: rank 1, file 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    square: u8,
}

impl Square {
    pub fn new(square: u8) -> Self {
        assert!(square < 64);
        Self { square }
    }

    pub fn square(&self) -> u8 {
        self.square
    }

    pub fn file(&self) -> u8 {
        self.square % 8
    }

    pub fn rank(&self) -> u8 {
        self.square / 8
    }

    pub fn as_bitboard(&self) -> BitBoard {
        BitBoard::from_square(self.square)
    }

    pub fn from_file_rank(file: u8, rank: u8) -> Result<Self, BoardError> {
        if file > 7 {
            Err(BoardError::InvalidFile(file))
        } else if rank > 7 {
            Err(BoardError::InvalidRank(rank))
        } else {
            Ok(Self::new(rank * 8 + file))
        }
    }

    pub fn from_notation(pos: &str) -> Result<Self, BoardError> {
        let pos_chars: Vec<char> = pos.chars().collect();

        if pos_chars.len() != 2 {
            return Err(BoardError::InvalidSquare(pos.to_owned()));
        }

        let file = match pos_chars[0] {
            'a' | 'A' => 0,
            'b' | 'B' => 1,
            'c' | 'C' => 2,
            'd' | 'D' => 3,
            'e' | 'E' => 4,
            'f' | 'F' => 5,
            'g' | 'G' => 6,
            'h' | 'H' => 7,
            _ => return Err(BoardError::InvalidSquare(pos.to_owned())),
        };

        let rank = match pos_chars[1] {
            '1' => 0,
            '2' => 1,
            '3' => 2,
            '4' => 3,
            '5' => 4,
            '6' => 5,
            '7' => 6,
            '8' => 7,
            _ => return Err(BoardError::InvalidSquare(pos.to_owned())),
        };

        Self::from_file_rank(file, rank)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let file = match self.file() {
            0 => "a",
            1 => "b",
            2 => "c",
            3 => "d",
            4 => "e",
            5 => "f",
            6 => "g",
            7 => "h",
            _ => unreachable!(),
        };

        write!(f, "{}{}", file, self.rank() + 1)
    }
}
