use corvid_core::{Color, Move};

const MAX_HISTORY_VAL: i32 = i32::MAX / 2;

/// Accumulated score of how often a quiet move has been the best move at a
/// cutoff, indexed `[color][from][to]`. Used to order quiet moves that
/// aren't the TT move or a killer.
pub struct HistoryTable {
    data: Box<[[[i32; 64]; 64]; 2]>,
}

impl HistoryTable {
    pub fn new() -> Self {
        Self { data: Box::new([[[0; 64]; 64]; 2]) }
    }

    pub fn clear(&mut self) {
        self.data = Box::new([[[0; 64]; 64]; 2]);
    }

    pub fn get(&self, color: Color, mv: &Move) -> i32 {
        let (from, to) = from_to(mv);
        self.data[color.to_index()][from as usize][to as usize]
    }

    /// Rewards the move that caused the cutoff; callers also use this with a
    /// negative bonus to penalize quiet moves tried before it that didn't.
    pub fn add_bonus(&mut self, color: Color, mv: &Move, bonus: i32) {
        let (from, to) = from_to(mv);
        let entry = &mut self.data[color.to_index()][from as usize][to as usize];
        *entry += bonus;

        if *entry >= MAX_HISTORY_VAL {
            self.age();
        }
    }

    fn age(&mut self) {
        for color_table in self.data.iter_mut() {
            for row in color_table.iter_mut() {
                for value in row.iter_mut() {
                    *value /= 2;
                }
            }
        }
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

// Castling moves don't carry real from/to squares for history purposes, so
// they're bucketed under the king's own movement.
fn from_to(mv: &Move) -> (u8, u8) {
    match mv {
        Move::Normal { from, to } => (*from, *to),
        Move::PawnPromotion { from, to, .. } => (*from, *to),
        Move::ShortCastle => (4, 6),
        Move::LongCastle => (4, 2),
        Move::Null => (0, 0),
    }
}