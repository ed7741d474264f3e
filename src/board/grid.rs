//! The fruit grid: fixed-size matrix of [`Item`]s with combo and streak
//! queries used by the monkeys and the presentation layer.

use std::cell::RefCell;
use std::collections::HashSet;

use bevy_prng::WyRand;

use crate::board::{Item, Position};
use crate::error::{Result, SimError};

/// Shortest run along one axis that counts as a combo.
pub const MIN_COMBO: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Item>,
}

impl Grid {
    /// Grid of independent uniform fruit draws.
    pub fn new(rows: usize, cols: usize, rng: &RefCell<WyRand>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidConfig("grid needs at least one row and one column"));
        }
        let cells = (0..rows * cols).map(|_| Item::random(rng)).collect();
        Ok(Self { rows, cols, cells })
    }

    /// Grid with explicit contents, row by row.
    pub fn from_rows(rows: Vec<Vec<Item>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(SimError::InvalidConfig("grid needs at least one row and one column"));
        }
        if rows.iter().any(|r| r.len() != cols) {
            return Err(SimError::InvalidConfig("grid rows must all have the same length"));
        }
        let n_rows = rows.len();
        Ok(Self { rows: n_rows, cols, cells: rows.into_iter().flatten().collect() })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index → position.
    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// Position → row-major index.
    pub fn index_of(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(SimError::OutOfBounds { row: pos.row, col: pos.col, rows: self.rows, cols: self.cols })
        }
    }

    pub fn get(&self, pos: Position) -> Result<Item> {
        let i = self.index_of(pos)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, pos: Position, item: Item) -> Result<()> {
        let i = self.index_of(pos)?;
        self.cells[i] = item;
        Ok(())
    }

    /// Row-major cells with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Item)> + '_ {
        self.cells.iter().enumerate().map(|(i, &item)| (self.position_of(i), item))
    }

    /// Row-major view of the cells.
    pub fn cells(&self) -> &[Item] {
        &self.cells
    }

    pub fn fill(&mut self, item: Item) {
        self.cells.fill(item);
    }

    /// Owned copy for renderers and tests.
    pub fn grid_copy(&self) -> Vec<Vec<Item>> {
        self.cells.chunks(self.cols).map(<[Item]>::to_vec).collect()
    }

    /// Row-major sort keys never decrease.
    pub fn is_sorted(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key())
    }

    /// Cells that form a combo through `pos`: the horizontal run and the
    /// vertical run of the same fruit, each kept only when it reaches
    /// [`MIN_COMBO`]. An `Empty` anchor never combos.
    pub fn combo_cells_at(&self, pos: Position) -> Result<Vec<Position>> {
        let item = self.get(pos)?;
        if item.is_empty() {
            return Ok(Vec::new());
        }

        let horizontal = self.run_through(pos, item, (0, 1));
        let vertical = self.run_through(pos, item, (1, 0));

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for run in [horizontal, vertical] {
            if run.len() >= MIN_COMBO {
                for p in run {
                    if seen.insert(p) {
                        out.push(p);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Anchor plus every matching neighbour walking both ways along `step`.
    fn run_through(&self, pos: Position, item: Item, step: (isize, isize)) -> Vec<Position> {
        let mut run = vec![pos];
        for sign in [1isize, -1] {
            let mut k = 1isize;
            while let Some(next) = self.offset(pos, step.0 * sign * k, step.1 * sign * k) {
                if self.cells[next.row * self.cols + next.col] != item {
                    break;
                }
                run.push(next);
                k += 1;
            }
        }
        run
    }

    fn offset(&self, pos: Position, dr: isize, dc: isize) -> Option<Position> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let p = Position::new(row, col);
        self.contains(p).then_some(p)
    }

    /// How many cells hold `item`.
    pub fn same_fruit_count(&self, item: Item) -> usize {
        self.cells.iter().filter(|&&c| c == item).count()
    }

    /// Longest streak of `item` in the row-major sequence. Streaks continue
    /// from the end of one row into the start of the next; the UI colouring
    /// reads the number that way.
    pub fn same_fruit_neighbor_count(&self, item: Item) -> usize {
        let mut best = 0;
        let mut current = 0;
        for &c in &self.cells {
            if c == item {
                current += 1;
                best = best.max(current);
            } else {
                current = 0;
            }
        }
        best
    }
}
