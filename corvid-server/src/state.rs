use corvid_core::{Board, DEFAULT_FEN};
use corvid_engine::{BoardUiExt, SearchContext, UiMove};

use crate::error::ApiError;

/// Fifty-move-rule counter is in half-moves; the rule fires at 100.
const FIFTY_MOVE_LIMIT: u16 = 100;
const REPETITION_LIMIT: usize = 3;

/// State for the single game the façade currently tracks. Only one game is
/// live at a time; starting a new one via `/newgame` replaces it outright.
pub struct GameSession {
    board: Board,
    history: Vec<u64>,
    ctx: SearchContext,
    player_white: bool,
    depth: u8,
}

impl GameSession {
    pub fn new(player_white: bool, depth: u8) -> Self {
        let board = Board::from_fen(DEFAULT_FEN).expect("default FEN is always valid");
        let history = vec![board.zobrist_key()];

        Self { board, history, ctx: SearchContext::new(), player_white, depth }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn player_white(&self) -> bool {
        self.player_white
    }

    pub fn search_ctx_mut(&mut self) -> &mut SearchContext {
        &mut self.ctx
    }

    /// Whether it's the bot's turn to move, given who the human is playing.
    pub fn bot_to_move(&self) -> bool {
        (self.board.turn() == corvid_core::Color::White) != self.player_white
    }

    /// True until the first move of the game has been applied; used to
    /// gate the opening-jitter book instead of a full-depth search.
    pub fn is_opening_position(&self) -> bool {
        self.history.len() == 1
    }

    pub fn apply_ui_move(&mut self, ui_move: UiMove) -> Result<(), ApiError> {
        self.board = self.board.apply_ui_move(ui_move)?;
        self.history.push(self.board.zobrist_key());
        Ok(())
    }

    fn is_repetition_draw(&self) -> bool {
        let current = self.board.zobrist_key();
        self.history.iter().filter(|&&key| key == current).count() >= REPETITION_LIMIT
    }

    pub fn is_draw(&self) -> bool {
        self.board.fifty_move_rule_counter() >= FIFTY_MOVE_LIMIT
            || self.board.is_draw_by_material()
            || self.is_repetition_draw()
    }
}
