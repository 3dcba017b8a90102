use corvid_core::Move;

/// How the stored score relates to the true minimax value of the position,
/// from the perspective of the side to move when the entry was written.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeType {
    /// The search completed without a cutoff: `score` is the exact value.
    Exact,
    /// The search failed low (`score <= alpha`): the true value is at most `score`.
    Upper,
    /// The search failed high (`score >= beta`): the true value is at least `score`.
    Lower,
}

#[derive(Clone, Copy)]
pub struct TTEntry {
    pub zobrist: u64,
    pub depth: u8,
    pub node_type: NodeType,
    pub score: i32,
    pub best_move: Option<Move>,
}

/// A fixed-size, always-replace transposition table indexed by `zobrist % size`.
/// Collisions are resolved by simply overwriting the previous entry; a stale
/// or colliding entry is caught by the zobrist-key comparison on lookup.
pub struct TTable {
    slots: Vec<Option<TTEntry>>,
    size: usize,
}

impl TTable {
    pub fn new(size: usize) -> Self {
        Self { slots: vec![None; size], size }
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(&self, zobrist: u64) -> usize {
        (zobrist as usize) % self.size
    }

    /// Looks up an entry for this position, returning it regardless of depth
    /// so the caller can at least use its `best_move` for move ordering even
    /// when the stored depth is too shallow to trust the score.
    pub fn probe(&self, zobrist: u64) -> Option<&TTEntry> {
        self.slots[self.index(zobrist)]
            .as_ref()
            .filter(|entry| entry.zobrist == zobrist)
    }

    pub fn store(&mut self, entry: TTEntry) {
        let index = self.index(entry.zobrist);
        self.slots[index] = Some(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_probe_roundtrip() {
        let mut tt = TTable::new(1024);
        let entry = TTEntry { zobrist: 42, depth: 5, node_type: NodeType::Exact, score: 123, best_move: None };
        tt.store(entry);
        let probed = tt.probe(42).unwrap();
        assert_eq!(probed.score, 123);
        assert_eq!(probed.depth, 5);
    }

    #[test]
    fn probe_rejects_key_mismatch_on_collision() {
        let mut tt = TTable::new(1);
        tt.store(TTEntry { zobrist: 1, depth: 1, node_type: NodeType::Exact, score: 0, best_move: None });
        assert!(tt.probe(2).is_none());
    }
}
