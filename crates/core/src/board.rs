//! Board module - the set of locked cells
//!
//! The board is an insertion-ordered collection of [`LockedCell`]s. Order has
//! no meaning; the invariant is that no two cells share a coordinate.
//!
//! Every operation takes `&self` and returns a new `Board`. The storage is an
//! `Arc<Vec<_>>`: cloning a board (and thus a game state) is a pointer copy,
//! and a write only copies the cells when another snapshot still holds them.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::types::{CellColor, Coord, BOARD_WIDTH, LAST_ROW};

/// An occupied board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockedCell {
    pub x: i8,
    pub y: i8,
    pub color: CellColor,
}

impl LockedCell {
    pub const fn new(x: i8, y: i8, color: CellColor) -> Self {
        Self { x, y, color }
    }

    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// The locked cells of the playfield
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    cells: Arc<Vec<LockedCell>>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from cells.
    ///
    /// Later cells at an already occupied coordinate are dropped.
    pub fn from_cells(cells: impl IntoIterator<Item = LockedCell>) -> Self {
        let mut seen = BTreeSet::new();
        let cells: Vec<LockedCell> = cells
            .into_iter()
            .filter(|c| seen.insert(c.coord()))
            .collect();
        Self {
            cells: Arc::new(cells),
        }
    }

    pub fn cells(&self) -> &[LockedCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if a coordinate holds a locked cell
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.cells.iter().any(|c| c.x == x && c.y == y)
    }

    /// Colour of the cell at `(x, y)`, if occupied
    pub fn color_at(&self, x: i8, y: i8) -> Option<CellColor> {
        self.cells
            .iter()
            .find(|c| c.x == x && c.y == y)
            .map(|c| c.color)
    }

    /// Append cells of one colour.
    ///
    /// Callers only append cells that passed collision checks.
    pub fn with_cells(&self, coords: &[Coord], color: CellColor) -> Board {
        debug_assert!(
            coords.iter().all(|c| !self.is_occupied(c.x, c.y)),
            "appending onto occupied cells"
        );
        let mut next = self.clone();
        Arc::make_mut(&mut next.cells)
            .extend(coords.iter().map(|c| LockedCell::new(c.x, c.y, color)));
        next
    }

    /// Number of locked cells per row
    pub fn row_cell_counts(&self) -> BTreeMap<i8, usize> {
        let mut counts = BTreeMap::new();
        for cell in self.cells.iter() {
            *counts.entry(cell.y).or_insert(0) += 1;
        }
        counts
    }

    /// Rows holding a full width of cells
    pub fn full_rows(&self) -> BTreeSet<i8> {
        self.row_cell_counts()
            .into_iter()
            .filter(|&(_, count)| count == BOARD_WIDTH as usize)
            .map(|(row, _)| row)
            .collect()
    }

    /// Drop every cell of `row` and move the cells above it down one row.
    ///
    /// Cells below `row` keep their position.
    pub fn remove_row(&self, row: i8) -> Board {
        let cells = self
            .cells
            .iter()
            .filter(|c| c.y != row)
            .map(|c| {
                if c.y < row {
                    LockedCell { y: c.y + 1, ..*c }
                } else {
                    *c
                }
            })
            .collect();
        Board {
            cells: Arc::new(cells),
        }
    }

    /// Move every cell up one row, freeing the bottom row.
    pub fn shift_up(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|c| LockedCell { y: c.y - 1, ..*c })
            .collect();
        Board {
            cells: Arc::new(cells),
        }
    }

    /// Shift the board up and fill the bottom row except for `hole`.
    pub fn push_difficulty_row(&self, hole: i8) -> Board {
        let row: Vec<Coord> = (0..BOARD_WIDTH as i8)
            .filter(|&x| x != hole)
            .map(|x| Coord::new(x, LAST_ROW))
            .collect();
        self.shift_up().with_cells(&row, CellColor::Grey)
    }

    /// Remove all full rows, returning the new board and how many were cleared.
    ///
    /// Rows are removed top to bottom: removing a row only moves cells above
    /// it, so the indices of the remaining full rows stay valid.
    pub fn clear_full_rows(&self) -> (Board, usize) {
        let full = self.full_rows();
        let cleared = full.len();
        let board = full
            .into_iter()
            .fold(self.clone(), |board, row| board.remove_row(row));
        (board, cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(y: i8, except: Option<i8>) -> Vec<LockedCell> {
        (0..BOARD_WIDTH as i8)
            .filter(|&x| Some(x) != except)
            .map(|x| LockedCell::new(x, y, CellColor::Red))
            .collect()
    }

    #[test]
    fn test_from_cells_drops_duplicates() {
        let board = Board::from_cells([
            LockedCell::new(1, 1, CellColor::Red),
            LockedCell::new(1, 1, CellColor::Blue),
        ]);
        assert_eq!(board.len(), 1);
        assert_eq!(board.color_at(1, 1), Some(CellColor::Red));
    }

    #[test]
    fn test_with_cells_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_cells(&[Coord::new(0, 19)], CellColor::Cyan);
        assert!(board.is_empty());
        assert!(next.is_occupied(0, 19));
    }

    #[test]
    fn test_row_cell_counts() {
        let mut cells = row(19, Some(3));
        cells.push(LockedCell::new(0, 18, CellColor::Grey));
        let board = Board::from_cells(cells);
        let counts = board.row_cell_counts();
        assert_eq!(counts.get(&19), Some(&9));
        assert_eq!(counts.get(&18), Some(&1));
        assert_eq!(counts.get(&17), None);
    }

    #[test]
    fn test_full_rows() {
        let mut cells = row(19, None);
        cells.extend(row(18, Some(0)));
        cells.extend(row(17, None));
        let board = Board::from_cells(cells);
        assert_eq!(board.full_rows().into_iter().collect::<Vec<_>>(), vec![17, 19]);
    }

    #[test]
    fn test_remove_row_shifts_cells_above() {
        let mut cells = row(19, None);
        cells.push(LockedCell::new(2, 17, CellColor::Blue));
        cells.push(LockedCell::new(4, 18, CellColor::Green));
        let board = Board::from_cells(cells).remove_row(19);

        assert_eq!(board.len(), 2);
        assert_eq!(board.color_at(2, 18), Some(CellColor::Blue));
        assert_eq!(board.color_at(4, 19), Some(CellColor::Green));
    }

    #[test]
    fn test_remove_row_keeps_cells_below() {
        let mut cells = row(10, None);
        cells.push(LockedCell::new(5, 15, CellColor::Blue));
        let board = Board::from_cells(cells).remove_row(10);
        assert_eq!(board.cells(), &[LockedCell::new(5, 15, CellColor::Blue)]);
    }

    #[test]
    fn test_shift_up() {
        let board = Board::from_cells([LockedCell::new(3, 0, CellColor::Red)]).shift_up();
        assert_eq!(board.cells(), &[LockedCell::new(3, -1, CellColor::Red)]);
    }

    #[test]
    fn test_push_difficulty_row() {
        let board = Board::from_cells([LockedCell::new(0, 19, CellColor::Red)]);
        let board = board.push_difficulty_row(4);

        assert_eq!(board.color_at(0, 18), Some(CellColor::Red));
        assert_eq!(board.row_cell_counts().get(&19), Some(&9));
        assert!(!board.is_occupied(4, 19));
        assert_eq!(board.color_at(0, 19), Some(CellColor::Grey));
    }

    #[test]
    fn test_clear_full_rows_multiple() {
        let mut cells = row(19, None);
        cells.extend(row(18, Some(5)));
        cells.extend(row(17, None));
        cells.push(LockedCell::new(7, 16, CellColor::Purple));
        let (board, cleared) = Board::from_cells(cells).clear_full_rows();

        assert_eq!(cleared, 2);
        // Row 18 drops into 19, the loose cell from 16 lands on 18.
        assert_eq!(board.row_cell_counts().get(&19), Some(&9));
        assert!(!board.is_occupied(5, 19));
        assert_eq!(board.color_at(7, 18), Some(CellColor::Purple));
        assert_eq!(board.len(), 10);
    }
}
