use crate::logic::board::{Board, Player};

pub mod cache;
pub mod config;
pub mod eval;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

/// Outcome of a root move selection. "No legal move" is a normal game
/// condition, not an error, and the transport needs to know whether it
/// means a forced pass or the end of the game, so the distinction is
/// carried here rather than in a bare option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Move(Move),
    Pass,
    GameOver,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
    pub time_ms: u64,
}

pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}
