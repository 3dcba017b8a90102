use std::fmt::{Display, Formatter};
use serde::{Serialize, Serializer};

use super::{PieceType, Square, PieceType::*};
use crate::board::{Board, BitBoard};
use crate::BoardError;

// Avoid clashes between the core Result and the formatter Result
type FmtResult = std::fmt::Result;

/// A chess move. `Null` is its own variant rather than a sentinel from/to
/// pair, so it can never alias a real move inside a killer or history table;
/// it only ever appears as the internal device used by null-move pruning.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Move {
    Normal { from: u8, to: u8 },
    PawnPromotion { from: u8, to: u8, promote_to: PieceType },
    ShortCastle,
    LongCastle,
    Null,
}

impl Move {
    pub fn empty() -> Self {
        // A placeholder move used to pre-fill fixed-size killer tables.
        Self::Normal { from: 0, to: 0 }
    }

    pub fn to(&self) -> u8 {
        match self {
            Self::Normal { to, .. } => *to,
            Self::PawnPromotion { to, .. } => *to,
            _ => unimplemented!()
        }
    }

    pub fn from(&self) -> u8 {
        match self {
            Self::Normal { from, .. } => *from,
            Self::PawnPromotion { from, .. } => *from,
            _ => unimplemented!()
        }
    }

    pub fn is_capture(&self, board: &Board) -> bool {
        // A move is a capture if the destination square is occupied,
        // or if it's an en passant pawn capture
        match self {
            Self::Normal {to, ..} => (BitBoard::from_square(*to) & (board.get_all_bitboard() | board.ep_square())).is_not_empty(),
            Self::PawnPromotion {to, ..} => (BitBoard::from_square(*to) & board.get_all_bitboard()).is_not_empty(),
            _ => false
        }
    }

    pub fn is_en_passant(&self, board: &Board) -> bool {
        match self {
            Self::Normal { from, to } => board.piece_on(*from) == Some(Pawn)
                && board.ep_square().is_not_empty()
                && BitBoard::from_square(*to) == board.ep_square(),
            _ => false,
        }
    }

    pub fn piece_moving(&self, board: &Board) -> PieceType {
        match self {
            Self::Normal {from, ..} => board.piece_on(*from).unwrap(),
            Self::PawnPromotion {..} => Pawn,
            Self::ShortCastle | Self::LongCastle => King,
            Self::Null => unreachable!("a null move does not move a piece"),
        }
    }

    pub fn piece_captured(&self, board: &Board) -> Option<PieceType> {
        match self {
            Self::Normal {..} if self.is_en_passant(board) => Some(Pawn),
            Self::Normal {to, ..} => board.piece_on(*to),
            Self::PawnPromotion {to, ..} => board.piece_on(*to),
            _ => None // Castling and null moves
        }
    }

    /// Whether playing this move leaves the opponent in check.
    pub fn gives_check(&self, board: &Board) -> bool {
        let resulting = board.make_move(self);
        resulting.is_check(resulting.turn_color())
    }

    pub fn from_notation(pos: &str) -> Result<Self, BoardError> {
        match pos {
            "O-O" | "0-0" => Ok(Self::ShortCastle),
            "O-O-O" | "0-0-0" => Ok(Self::LongCastle),
            "0000" | "null" => Ok(Self::Null),
            _ if pos.len() >= 4 => {
                let from = Square::from_notation(&pos[0..2])?.square();
                let to = Square::from_notation(&pos[2..4])?.square();

                if pos.len() == 4 {
                    Ok(Self::Normal{from, to})
                } else {
                    let promote_to = match pos[4..].to_lowercase().as_str() {
                        "q" | "=q" => Queen,
                        "r" | "=r" => Rook,
                        "b" | "=b" => Bishop,
                        "n" | "=n" => Knight,
                        _  => return Err(BoardError::InvalidMoveNotation(pos.to_owned())),
                    };

                    Ok(Self::PawnPromotion{from, to, promote_to})
                }
            },
            _ => Err(BoardError::InvalidMoveNotation(pos.to_owned())),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Normal { from, to, .. } => write!(f, "{}{}", Square::new(*from), Square::new(*to)),
            Self::ShortCastle => write!(f, "O-O"),
            Self::LongCastle => write!(f, "O-O-O"),
            Self::Null => write!(f, "0000"),
            Self::PawnPromotion { from, to, promote_to } => write!(f, "{}{}{}",
                Square::new(*from),
                Square::new(*to),
                match promote_to {
                    PieceType::Queen => "q",
                    PieceType::Rook => "r",
                    PieceType::Bishop => "b",
                    PieceType::Knight => "n",
                    _ => unreachable!()
                }),
        }
    }
}

// Custom serialization, following the same text formatting used to display moves
impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
