use crate::engine::Move;
use crate::logic::board::{Board, Player};
use std::collections::HashMap;

/// Cache key for a root evaluation. Keyed by the board's cell contents
/// (the board hashes by value), the candidate move, the player the
/// score was computed for and the search depth. Two independently
/// constructed but identical positions must land on the same entry,
/// while a score computed for one player or depth is never reusable
/// for the other: a coordinate can be a legal move for both sides of
/// the same position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    board: Board,
    mv: Move,
    player: Player,
    depth: u8,
}

impl CacheKey {
    #[must_use]
    pub fn new(board: &Board, mv: Move, player: Player, depth: u8) -> Self {
        Self {
            board: board.clone(),
            mv,
            player,
            depth,
        }
    }
}

/// Memoizes exact root scores. Strictly an accelerator: only scores
/// known to be exact minimax values are stored (the search checks the
/// alpha bound before storing), so a hit can never change which move
/// is chosen, only how fast.
///
/// Growth is bounded: once `max_entries` is reached the whole table is
/// dropped before the next insert. The engine additionally clears it
/// at every game start so entries never outlive their game.
pub struct SearchCache {
    entries: HashMap<CacheKey, i32>,
    max_entries: usize,
}

impl SearchCache {
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    #[must_use]
    pub fn lookup(&self, key: &CacheKey) -> Option<i32> {
        self.entries.get(key).copied()
    }

    pub fn store(&mut self, key: CacheKey, score: i32) {
        if self.entries.len() >= self.max_entries {
            self.entries.clear();
        }
        self.entries.insert(key, score);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
