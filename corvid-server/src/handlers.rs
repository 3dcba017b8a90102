use std::sync::Mutex;

use rand::seq::SliceRandom;
use rocket::serde::json::Json;
use rocket::{Route, State};

use corvid_core::Color;
use corvid_engine::{search_best_move, sq_to_rc, BoardUiExt, SearchOptions};

use crate::error::ApiError;
use crate::messages::{
    parse_square, BotMoveRequest, GameState, LegalMoveTarget, LegalMovesResponse, MoveRequest,
    MoveResponse, NewGameRequest,
};
use crate::state::GameSession;
use crate::EngineDefaults;

type Games = State<Mutex<Option<GameSession>>>;

/// Opening moves the bot jitters between instead of running a depth-10
/// search on an empty board, where every line looks the same to the evaluator.
const OPENING_BOOK: [&str; 5] = ["e2e4", "d2d4", "c2c4", "g1f3", "b1c3"];

pub fn get_routes() -> Vec<Route> {
    routes![legal_moves, new_game, make_move, bot_move]
}

#[get("/legal_moves?<from_square>")]
pub fn legal_moves(games: &Games, from_square: &str) -> Result<Json<LegalMovesResponse>, ApiError> {
    let lock = games.inner().lock().unwrap();
    let session = lock.as_ref().ok_or(ApiError::NoActiveGame)?;

    let from = parse_square(from_square)?;
    let moves = session
        .board()
        .legal_moves_ui()
        .into_iter()
        .filter(|(mv_from, _, _)| *mv_from == from)
        .map(|(_, to, promotion)| LegalMoveTarget { to: square_notation(to), promotion })
        .collect();

    Ok(Json(LegalMovesResponse { moves }))
}

#[post("/newgame", data = "<body>")]
pub fn new_game(games: &Games, defaults: &State<EngineDefaults>, body: Json<NewGameRequest>) -> Json<GameState> {
    let depth = body.depth.unwrap_or(defaults.default_depth);
    let session = GameSession::new(body.player_white, depth);
    tracing::info!(player_white = body.player_white, depth, "new game started");

    let state = GameState::from_session(&session);
    *games.inner().lock().unwrap() = Some(session);
    Json(state)
}

#[post("/move", data = "<body>")]
pub fn make_move(games: &Games, body: Json<MoveRequest>) -> Result<Json<MoveResponse>, ApiError> {
    let mut lock = games.inner().lock().unwrap();
    let session = lock.as_mut().ok_or(ApiError::NoActiveGame)?;

    if session.bot_to_move() {
        return Err(ApiError::WrongTurn);
    }

    let from = parse_square(&body.from_square)?;
    let to = parse_square(&body.to_square)?;
    session.apply_ui_move((from, to, body.promotion))?;
    tracing::info!(from = %body.from_square, to = %body.to_square, "move applied");

    let bot_needed = session.bot_to_move() && !session.is_draw();
    let state = GameState::from_session(session);
    Ok(Json(MoveResponse { state, bot_needed }))
}

#[post("/bot_move", data = "<body>")]
pub fn bot_move(
    games: &Games,
    defaults: &State<EngineDefaults>,
    body: Json<BotMoveRequest>,
) -> Result<Json<GameState>, ApiError> {
    let mut lock = games.inner().lock().unwrap();
    let session = lock.as_mut().ok_or(ApiError::NoActiveGame)?;

    if !session.bot_to_move() {
        return Err(ApiError::WrongTurn);
    }

    let depth = body.depth.unwrap_or_else(|| session.depth());
    let is_opening = session.board().turn() == Color::White && session.is_opening_position();

    let ui_move = if is_opening {
        let uci = OPENING_BOOK.choose(&mut rand::thread_rng()).unwrap();
        uci_to_ui_move(uci)
    } else {
        let options = SearchOptions {
            max_depth: depth,
            time_limit: defaults.time_limit(),
            ..SearchOptions::default()
        };
        search_best_move(session.search_ctx_mut(), session.board(), options)
            .ok_or(ApiError::NoLegalMoves)?
    };

    session.apply_ui_move(ui_move)?;
    tracing::info!(depth, "bot move computed");

    Ok(Json(GameState::from_session(session)))
}

fn square_notation(rc: (u8, u8)) -> String {
    corvid_core::Square::new(corvid_engine::rc_to_sq(rc)).to_string()
}

fn uci_to_ui_move(uci: &str) -> corvid_engine::UiMove {
    let from = corvid_core::Square::from_notation(&uci[0..2]).expect("opening book entry is valid");
    let to = corvid_core::Square::from_notation(&uci[2..4]).expect("opening book entry is valid");
    (sq_to_rc(from.square()), sq_to_rc(to.square()), None)
}
