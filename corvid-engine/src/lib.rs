mod config;
mod error;
mod evaluation;
mod search;
mod transposition;
mod ui;

pub use config::{SearchOptions, ASPIRATION_WINDOW, DEFAULT_SEARCH_DEPTH, DEFAULT_TIME_LIMIT, INF};
pub use error::SearchError;
pub use evaluation::evaluate;
pub use search::{alphabeta, quiesce, search_best_move, search_best_move_parallel, SearchContext};
pub use transposition::{NodeType, TTEntry, TTable};
pub use ui::{rc_to_sq, sq_to_rc, BoardUiExt, UiMove, UiSquare};
