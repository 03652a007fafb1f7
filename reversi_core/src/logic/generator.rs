use crate::engine::Move;
use crate::logic::board::{Board, Player, SIZE};
use crate::logic::rules::is_legal_move;

/// Every legal move for `player`, scanned row-major (rows outer, cols
/// inner). The order is deterministic and the root search relies on it
/// for its first-candidate tie-break, so it must not change.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            if is_legal_move(board, player, row, col) {
                moves.push(Move {
                    row: row as u8,
                    col: col as u8,
                });
            }
        }
    }
    moves
}
