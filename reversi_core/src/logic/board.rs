use std::fmt;

pub const SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Self::One => Cell::One,
            Self::Two => Cell::Two,
        }
    }

    /// Decodes the wire representation (1 or 2). Anything else is a
    /// protocol violation and is rejected, never coerced.
    pub fn from_wire(value: u8) -> Result<Self, BoardError> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(BoardError::BadPlayer(other)),
        }
    }

    #[must_use]
    pub const fn to_wire(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    WrongRowCount(usize),
    WrongRowLength { row: usize, len: usize },
    BadCell { row: usize, col: usize, value: u8 },
    BadPlayer(u8),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount(rows) => {
                write!(f, "board has {rows} rows, expected {SIZE}")
            }
            Self::WrongRowLength { row, len } => {
                write!(f, "board row {row} has {len} cells, expected {SIZE}")
            }
            Self::BadCell { row, col, value } => {
                write!(f, "cell ({row},{col}) holds {value}, expected 0, 1 or 2")
            }
            Self::BadPlayer(value) => {
                write!(f, "player id {value} is not 1 or 2")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// An 8x8 disc grid. Boards are value-like: simulating a move always
/// produces a new board, the source is never mutated. Equality and
/// hashing go by cell contents, which is what lets two independently
/// constructed but identical positions share a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// The conventional opening position: four centre discs, player two
    /// on the main diagonal.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Two;
        board.cells[3][4] = Cell::One;
        board.cells[4][3] = Cell::One;
        board.cells[4][4] = Cell::Two;
        board
    }

    /// Boundary validation for boards arriving off the wire: exactly
    /// 8 rows of 8 cells, every value in {0, 1, 2}.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        if rows.len() != SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }
        let mut board = Self::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(BoardError::WrongRowLength { row: r, len: row.len() });
            }
            for (c, &value) in row.iter().enumerate() {
                board.cells[r][c] = match value {
                    0 => Cell::Empty,
                    1 => Cell::One,
                    2 => Cell::Two,
                    _ => return Err(BoardError::BadCell { row: r, col: c, value }),
                };
            }
        }
        Ok(board)
    }

    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    #[must_use]
    pub fn count(&self, player: Player) -> u32 {
        let disc = player.cell();
        let mut total = 0;
        for row in &self.cells {
            for &cell in row {
                if cell == disc {
                    total += 1;
                }
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_four_centre_discs() {
        let board = Board::starting();
        assert_eq!(board.get(3, 3), Cell::Two);
        assert_eq!(board.get(3, 4), Cell::One);
        assert_eq!(board.get(4, 3), Cell::One);
        assert_eq!(board.get(4, 4), Cell::Two);
        assert_eq!(board.count(Player::One), 2);
        assert_eq!(board.count(Player::Two), 2);
    }

    #[test]
    fn from_rows_accepts_valid_grid() {
        let rows: Vec<Vec<u8>> = vec![vec![0; 8]; 8];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn from_rows_rejects_wrong_row_count() {
        let rows: Vec<Vec<u8>> = vec![vec![0; 8]; 7];
        assert_eq!(Board::from_rows(&rows), Err(BoardError::WrongRowCount(7)));
    }

    #[test]
    fn from_rows_rejects_ragged_row() {
        let mut rows: Vec<Vec<u8>> = vec![vec![0; 8]; 8];
        rows[5] = vec![0; 9];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::WrongRowLength { row: 5, len: 9 })
        );
    }

    #[test]
    fn from_rows_rejects_out_of_range_cell() {
        let mut rows: Vec<Vec<u8>> = vec![vec![0; 8]; 8];
        rows[2][6] = 3;
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::BadCell { row: 2, col: 6, value: 3 })
        );
    }

    #[test]
    fn player_wire_codes_round_trip() {
        assert_eq!(Player::from_wire(1), Ok(Player::One));
        assert_eq!(Player::from_wire(2), Ok(Player::Two));
        assert_eq!(Player::from_wire(0), Err(BoardError::BadPlayer(0)));
        assert_eq!(Player::One.opposite(), Player::Two);
        assert_eq!(Player::Two.opposite().opposite(), Player::Two);
    }
}
