use dashmap::DashMap;
use rayon::prelude::*;

use crate::game_elements::Move;
use crate::board::Board;

pub type PerftCache = DashMap<(u64, usize), u64>;

impl Board {
    /// Counts leaf nodes at `depth` plies, parallelizing the first ply.
    pub fn perft(&self, depth: usize) -> u64 {
        self._perft(depth, true, None)
    }

    /// Same as [`Board::perft`], memoizing subtree counts by (zobrist key, depth).
    /// Positions reached by transposition are only ever expanded once.
    pub fn perft_with_cache(&self, depth: usize, cache: &PerftCache) -> u64 {
        self._perft(depth, true, Some(cache))
    }

    fn _perft(&self, depth: usize, multithread: bool, cache: Option<&PerftCache>) -> u64 {
        if depth == 0 {
            return 1;
        }

        if let Some(cache) = cache {
            if let Some(res) = cache.get(&(self.zobrist_key(), depth)) {
                return *res;
            }
        }

        if depth == 1 {
            return self.legal_moves().len() as u64;
        }

        let pseudo_moves = self.pseudolegal_moves();
        let count_child = |mv: Move| {
            let new_board = self.make_move(&mv);
            if matches!(mv, Move::LongCastle | Move::ShortCastle) || !new_board.is_check(self.turn_color()) {
                Some(new_board._perft(depth - 1, false, cache))
            } else {
                None
            }
        };

        let res = if multithread {
            pseudo_moves.into_par_iter().filter_map(count_child).sum()
        } else {
            pseudo_moves.into_iter().filter_map(count_child).sum()
        };

        if let Some(cache) = cache {
            cache.insert((self.zobrist_key(), depth), res);
        }

        res
    }
}
