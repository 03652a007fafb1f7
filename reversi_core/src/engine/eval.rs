use crate::engine::Evaluator;
use crate::logic::board::{Board, Player};

/// Material count: discs owned by the player minus discs owned by the
/// opponent. Empty cells contribute nothing, so the score always lies
/// in [-64, 64] and negating the player negates the score.
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        board.count(player) as i32 - board.count(player.opposite()) as i32
    }
}
