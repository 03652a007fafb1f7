use crate::engine::Move;
use crate::logic::board::{Board, Cell, Player, SIZE};

/// The eight compass directions a capture run can radiate along.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && col >= 0 && (row as usize) < SIZE && (col as usize) < SIZE
}

/// Sandwich rule: the target cell must be empty and at least one
/// direction must hold a run of one or more opponent discs immediately
/// adjacent, terminated by a disc of the moving player. A run that
/// reaches an empty cell or the board edge does not qualify.
#[must_use]
pub fn is_legal_move(board: &Board, player: Player, row: usize, col: usize) -> bool {
    if board.get(row, col) != Cell::Empty {
        return false;
    }

    let own = player.cell();
    let opponent = player.opposite().cell();

    for (dr, dc) in DIRECTIONS {
        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;
        let mut run_found = false;

        while in_bounds(r, c) {
            match board.get(r as usize, c as usize) {
                cell if cell == opponent => run_found = true,
                cell if cell == own => {
                    if run_found {
                        return true;
                    }
                    break;
                }
                _ => break,
            }
            r += dr;
            c += dc;
        }
    }

    false
}

/// Returns a new board with the move played and every sandwiched run
/// flipped to the moving player. The input board is left untouched.
///
/// # Panics
///
/// Calling this with an illegal move is a caller bug; the precondition
/// is asserted rather than silently producing a malformed board.
#[must_use]
pub fn simulate(board: &Board, mv: Move, player: Player) -> Board {
    let row = mv.row as usize;
    let col = mv.col as usize;
    assert!(
        is_legal_move(board, player, row, col),
        "simulate called with illegal move ({row},{col}) for {player:?}"
    );

    let own = player.cell();
    let opponent = player.opposite().cell();
    let mut next = board.clone();
    next.set(row, col, own);

    for (dr, dc) in DIRECTIONS {
        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;
        let mut run = Vec::new();

        while in_bounds(r, c) && board.get(r as usize, c as usize) == opponent {
            run.push((r as usize, c as usize));
            r += dr;
            c += dc;
        }

        // The run only flips when it is closed by one of our discs.
        if in_bounds(r, c) && board.get(r as usize, c as usize) == own {
            for (fr, fc) in run {
                next.set(fr, fc, own);
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_diagonal_flanks_are_legal() {
        let board = Board::starting();
        assert!(is_legal_move(&board, Player::One, 2, 3));
        assert!(is_legal_move(&board, Player::One, 3, 2));
        assert!(is_legal_move(&board, Player::One, 4, 5));
        assert!(is_legal_move(&board, Player::One, 5, 4));
    }

    #[test]
    fn occupied_cell_is_never_legal() {
        let board = Board::starting();
        assert!(!is_legal_move(&board, Player::One, 3, 3));
        assert!(!is_legal_move(&board, Player::One, 4, 3));
    }

    #[test]
    fn run_terminated_by_empty_does_not_qualify() {
        // One disc of each colour with a gap before the closer:
        // (0,0) empty target, (0,1) opponent, (0,2) empty.
        let mut board = Board::empty();
        board.set(0, 1, Cell::Two);
        assert!(!is_legal_move(&board, Player::One, 0, 0));
    }

    #[test]
    fn run_reaching_the_edge_does_not_qualify() {
        // Opponent discs all the way to the edge, no closing disc.
        let mut board = Board::empty();
        board.set(0, 1, Cell::Two);
        board.set(0, 2, Cell::Two);
        assert!(!is_legal_move(&board, Player::One, 0, 0));
    }

    #[test]
    fn adjacent_own_disc_without_run_does_not_qualify() {
        let mut board = Board::empty();
        board.set(0, 1, Cell::One);
        assert!(!is_legal_move(&board, Player::One, 0, 0));
    }

    #[test]
    fn simulate_flips_single_run() {
        let board = Board::starting();
        let next = simulate(&board, Move { row: 2, col: 3 }, Player::One);
        assert_eq!(next.get(2, 3), Cell::One);
        assert_eq!(next.get(3, 3), Cell::One);
        // Unrelated centre discs stay put.
        assert_eq!(next.get(4, 4), Cell::Two);
        assert_eq!(next.count(Player::One), 4);
        assert_eq!(next.count(Player::Two), 1);
    }

    #[test]
    fn simulate_flips_runs_in_multiple_directions() {
        // Placing at (2,2) sandwiches east along row 2 and south-east
        // along the diagonal at once.
        let mut board = Board::empty();
        board.set(2, 3, Cell::Two);
        board.set(2, 4, Cell::One);
        board.set(3, 3, Cell::Two);
        board.set(4, 4, Cell::One);
        let next = simulate(&board, Move { row: 2, col: 2 }, Player::One);
        assert_eq!(next.get(2, 3), Cell::One);
        assert_eq!(next.get(3, 3), Cell::One);
        assert_eq!(next.count(Player::Two), 0);
    }

    #[test]
    fn simulate_does_not_mutate_the_input() {
        let board = Board::starting();
        let snapshot = board.clone();
        let _ = simulate(&board, Move { row: 2, col: 3 }, Player::One);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn simulate_never_removes_discs() {
        let board = Board::starting();
        let next = simulate(&board, Move { row: 2, col: 3 }, Player::One);
        let before = board.count(Player::One) + board.count(Player::Two);
        let after = next.count(Player::One) + next.count(Player::Two);
        assert_eq!(after, before + 1);
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn simulate_rejects_illegal_move() {
        let board = Board::starting();
        let _ = simulate(&board, Move { row: 0, col: 0 }, Player::One);
    }
}
