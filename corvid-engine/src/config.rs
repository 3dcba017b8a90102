use std::time::Duration;

/// Effectively infinite score, used as the alpha-beta window's outer bound
/// and as the basis for mate scores.
pub const INF: i32 = 1_000_000_000;

pub const DEFAULT_SEARCH_DEPTH: u8 = 10;
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(20);
pub const ASPIRATION_WINDOW: i32 = 50;

/// Tuning knobs for a single `search_best_move`/`search_best_move_parallel`
/// call. `workers` only affects the parallel driver.
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    pub max_depth: u8,
    pub time_limit: Duration,
    pub workers: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_SEARCH_DEPTH,
            time_limit: DEFAULT_TIME_LIMIT,
            workers: rayon::current_num_threads(),
        }
    }
}
