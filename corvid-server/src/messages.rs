use rocket::serde::{Deserialize, Serialize};

use corvid_core::Square;
use corvid_engine::{sq_to_rc, BoardUiExt};

use crate::state::GameSession;

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewGameRequest {
    pub player_white: bool,
    pub depth: Option<u8>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MoveRequest {
    pub from_square: String,
    pub to_square: String,
    pub promotion: Option<char>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct BotMoveRequest {
    pub depth: Option<u8>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct LegalMoveTarget {
    pub to: String,
    pub promotion: Option<char>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct LegalMovesResponse {
    pub moves: Vec<LegalMoveTarget>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MoveOption {
    pub from: String,
    pub to: String,
    pub promotion: Option<char>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct GameState {
    /// Board rows top-to-bottom (rank 8 first), each an 8-character string.
    pub board: Vec<String>,
    pub white_to_move: bool,
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw: Option<bool>,
    pub legal_moves: Vec<MoveOption>,
}

impl GameState {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        let grid = board.to_ui_grid();
        let rows = grid.iter().map(|row| row.iter().collect::<String>()).collect();

        let legal_moves: Vec<MoveOption> = board
            .legal_moves_ui()
            .into_iter()
            .map(|(from, to, promotion)| MoveOption {
                from: square_string(from),
                to: square_string(to),
                promotion,
            })
            .collect();

        let in_check = board.is_check(board.turn());
        let no_moves = legal_moves.is_empty();

        Self {
            board: rows,
            white_to_move: board.turn() == corvid_core::Color::White,
            check: in_check,
            checkmate: in_check && no_moves,
            stalemate: !in_check && no_moves,
            draw: session.is_draw().then_some(true),
            legal_moves,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MoveResponse {
    #[serde(flatten)]
    pub state: GameState,
    pub bot_needed: bool,
}

fn square_string((row, col): (u8, u8)) -> String {
    Square::new(corvid_engine::rc_to_sq((row, col))).to_string()
}

/// Parses an algebraic square string (`"e2"`) into UI `(row, col)` form.
pub fn parse_square(notation: &str) -> Result<(u8, u8), crate::error::ApiError> {
    Square::from_notation(notation)
        .map(|sq| sq_to_rc(sq.square()))
        .map_err(|_| crate::error::ApiError::InvalidSquare(notation.to_owned()))
}

