//! Board module - the grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty or holds the colour of a
//! locked block. Storage is a flat row-major array, so clearing rows is a handful
//! of `copy_within` calls and never allocates.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the grid (y < 0) are treated as open space.

use arrayvec::ArrayVec;

use crate::types::{BlockColor, Cell, GRID_COLS, GRID_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// Row indices removed by a single clear, bottom to top
pub type ClearedRows = ArrayVec<usize, { GRID_ROWS as usize }>;

/// The locked-cell grid - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_COLS as i8 || y < 0 || y >= GRID_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (GRID_COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_COLS
    }

    pub fn height(&self) -> u8 {
        GRID_ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a single piece cell may sit at (x, y).
    ///
    /// Columns must be inside the grid and rows must be above the floor. Rows above
    /// the top edge are always free, which lets pieces hang partly off-screen.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= GRID_COLS as i8 || y >= GRID_ROWS as i8 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_ROWS as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * GRID_COLS as usize;
        &self.cells[start..start + GRID_COLS as usize]
    }

    /// Write `color` into each listed cell that lies on the grid.
    ///
    /// Cells above the top edge are dropped. Any other out-of-grid cell is a broken
    /// caller contract and panics.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], color: BlockColor) -> usize {
        let mut written = 0;
        for &(x, y) in cells {
            if y < 0 {
                continue;
            }
            assert!(
                self.set(x, y, Some(color)),
                "locked cell ({}, {}) is outside the {}x{} grid",
                x,
                y,
                GRID_COLS,
                GRID_ROWS
            );
            written += 1;
        }
        written
    }

    /// Remove every full row in one bottom-up pass.
    ///
    /// Surviving rows keep their order and slide down; the freed rows at the top are
    /// emptied. Returns the removed row indices, bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = GRID_COLS as usize;
        let mut write_y = GRID_ROWS as usize;

        for read_y in (0..GRID_ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Remove every full row and return how many were removed
    pub fn clear_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Number of locked cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over locked cells as `(x, y, color)`
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, BlockColor)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            let color = (*cell)?;
            let x = (idx % GRID_COLS as usize) as i8;
            let y = (idx / GRID_COLS as usize) as i8;
            Some((x, y, color))
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_grid(&self, out: &mut [[Cell; GRID_COLS as usize]; GRID_ROWS as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, color: BlockColor) {
        for x in 0..GRID_COLS as i8 {
            board.set(x, y, Some(color));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_rows_above_grid_are_free() {
        let board = Board::new();
        assert!(board.is_free(0, -1));
        assert!(board.is_free(9, -5));
        assert!(!board.is_free(-1, -1));
        assert!(!board.is_free(10, -1));
        assert!(!board.is_free(0, 20));
    }

    #[test]
    fn test_lock_cells_skips_rows_above_grid() {
        let mut board = Board::new();
        let written = board.lock_cells(&[(4, -1), (4, 0)], BlockColor::Green);
        assert_eq!(written, 1);
        assert_eq!(board.get(4, 0), Some(Some(BlockColor::Green)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_lock_cells_below_floor_panics() {
        let mut board = Board::new();
        board.lock_cells(&[(0, 20)], BlockColor::Red);
    }

    #[test]
    fn test_clear_full_rows_reports_bottom_to_top() {
        let mut board = Board::new();
        fill_row(&mut board, 19, BlockColor::Red);
        fill_row(&mut board, 17, BlockColor::Blue);
        board.set(2, 18, Some(BlockColor::Cyan));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(2, 19), Some(Some(BlockColor::Cyan)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_clear_every_row() {
        let mut board = Board::new();
        for y in 0..GRID_ROWS as i8 {
            fill_row(&mut board, y, BlockColor::Orange);
        }
        assert_eq!(board.clear_lines(), GRID_ROWS as usize);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_iterates_coordinates() {
        let mut board = Board::new();
        board.set(3, 7, Some(BlockColor::Yellow));
        board.set(9, 19, Some(BlockColor::Purple));
        let cells: Vec<_> = board.occupied().collect();
        assert_eq!(
            cells,
            vec![(3, 7, BlockColor::Yellow), (9, 19, BlockColor::Purple)]
        );
    }
}
