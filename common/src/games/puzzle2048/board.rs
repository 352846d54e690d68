use std::fmt;

use super::types::Axis;

pub const DEFAULT_BOARD_SIZE: usize = 4;
/// Largest tile a `u32` cell holds. Two of them never merge.
pub const MAX_TILE: u32 = 1 << 31;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    NotSquare { row: usize, expected: usize, found: usize },
    CellCountMismatch { size: usize, found: usize },
    InvalidTile { row: usize, col: usize, value: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NotSquare { row, expected, found } => write!(
                f,
                "Row {} has {} cells, expected {}",
                row, found, expected
            ),
            BoardError::CellCountMismatch { size, found } => write!(
                f,
                "Board of size {} needs {} cells, got {}",
                size,
                size * size,
                found
            ),
            BoardError::InvalidTile { row, col, value } => write!(
                f,
                "Cell ({}, {}) holds {}, expected 0 or a power of two >= 2",
                row, col, value
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// True for the empty marker and for powers of two from 2 upward.
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// N×N grid stored row-major. `0` is an empty cell.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Self::from_cells(size, cells)
    }

    pub fn from_cells(size: usize, cells: Vec<u32>) -> Result<Self, BoardError> {
        if cells.len() != size * size {
            return Err(BoardError::CellCountMismatch {
                size,
                found: cells.len(),
            });
        }
        if let Some(index) = cells.iter().position(|&value| !is_valid_tile(value)) {
            return Err(BoardError::InvalidTile {
                row: index / size,
                col: index % size,
                value: cells[index],
            });
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Panics when `cell` lies outside the board, like slice indexing.
    pub fn get(&self, cell: Cell) -> u32 {
        self.cells[self.index(cell)]
    }

    /// Panics when `cell` lies outside the board or `value` is not a tile value.
    pub fn place(&mut self, cell: Cell, value: u32) {
        assert!(is_valid_tile(value), "{} is not a tile value", value);
        let index = self.index(cell);
        self.cells[index] = value;
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == 0)
            .map(|(index, _)| Cell::new(index / self.size, index % self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&0)
    }

    pub fn count_non_zero(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Values of row or column `index`, read left to right or top to bottom.
    pub fn line(&self, axis: Axis, index: usize) -> Vec<u32> {
        match axis {
            Axis::Row => self.cells[index * self.size..(index + 1) * self.size].to_vec(),
            Axis::Column => (0..self.size)
                .map(|row| self.cells[row * self.size + index])
                .collect(),
        }
    }

    pub(crate) fn set_line(&mut self, axis: Axis, index: usize, values: &[u32]) {
        debug_assert_eq!(values.len(), self.size);
        for (offset, &value) in values.iter().enumerate() {
            let cell_index = match axis {
                Axis::Row => index * self.size + offset,
                Axis::Column => offset * self.size + index,
            };
            self.cells[cell_index] = value;
        }
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            cell.row < self.size && cell.col < self.size,
            "cell ({}, {}) outside a board of size {}",
            cell.row,
            cell.col,
            self.size
        );
        cell.row * self.size + cell.col
    }
}

#[cfg(test)]
pub(crate) fn board_from<const N: usize>(rows: [[u32; N]; N]) -> Board {
    Board::from_rows(&rows).unwrap()
}
