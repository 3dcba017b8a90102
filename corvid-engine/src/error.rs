use thiserror::Error;

/// The only condition the search core itself raises. Everything else (no
/// legal moves, TT flags, ...) is represented as an ordinary return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search deadline expired")]
    Timeout,
}
