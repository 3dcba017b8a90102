use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::serde_json::json;
use std::io::Cursor;
use thiserror::Error;

use corvid_core::BoardError;

/// Everything the HTTP layer can reject a request for. All variants map to a
/// 4xx response; the search itself never surfaces an error to this layer
/// (a timed-out search just returns the best move found so far, or `None`).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no active game; call /newgame first")]
    NoActiveGame,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("it isn't that player's turn to move")]
    WrongTurn,

    #[error("invalid square notation \"{0}\"")]
    InvalidSquare(String),

    #[error("no legal moves available; the game is over")]
    NoLegalMoves,
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request) -> response::Result<'static> {
        tracing::warn!(error = %self, "rejecting request");
        let body = json!({ "error": self.to_string() }).to_string();

        Response::build()
            .status(Status::BadRequest)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
