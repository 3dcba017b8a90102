use std::time::{Duration, Instant};

use super::history::HistoryTable;
use super::killers::KillerTable;
use crate::transposition::TTable;

/// How often (in visited nodes) `alphabeta`/`quiesce` check the wall clock.
/// Checking every node would put `Instant::now()` on the hot path; checking
/// too rarely risks overrunning the deadline by a visible amount.
const DEADLINE_CHECK_INTERVAL: u64 = 4096;

const DEFAULT_TT_SIZE: usize = 1 << 20;

/// Mutable state threaded through one search call tree: the transposition
/// table outlives a single search (it's owned by the calling game session so
/// it survives across moves), while killers and history are cleared at the
/// start of every `search_best_move` call.
pub struct SearchContext {
    pub(crate) tt: TTable,
    pub(crate) killers: KillerTable,
    pub(crate) history: HistoryTable,
    nodes: u64,
    deadline: Instant,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::with_tt_size(DEFAULT_TT_SIZE)
    }

    pub fn with_tt_size(tt_size: usize) -> Self {
        Self {
            tt: TTable::new(tt_size),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            nodes: 0,
            deadline: Instant::now(),
        }
    }

    pub fn tt(&self) -> &TTable {
        &self.tt
    }

    pub fn node_count(&self) -> u64 {
        self.nodes
    }

    /// Resets per-search-call state. The TT is preserved on purpose.
    pub(crate) fn reset_for_search(&mut self, time_limit: Duration) {
        self.killers.clear();
        self.history.clear();
        self.nodes = 0;
        self.deadline = Instant::now() + time_limit;
    }

    pub(crate) fn visit_node(&mut self) -> bool {
        self.nodes += 1;
        self.nodes % DEADLINE_CHECK_INTERVAL != 0 || Instant::now() < self.deadline
    }

    pub(crate) fn deadline_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}
