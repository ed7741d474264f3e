use std::cell::RefCell;

use bevy_prng::WyRand;

use crate::board::Grid;
use crate::sorting::{ShuffleTask, SortAlgorithm, SortStrategy, swap_if_out_of_order};

/// Bubble sort over the row-major grid, one comparison per call.
///
/// An out-of-order pair is proposed without moving the cursor, so the next
/// poll re-checks the same pair; it only advances once the pair reads in
/// order. After `total - 1` passes the pass counter starts over, which keeps
/// the cursor bounded while other monkeys keep stirring the grid.
#[derive(Clone, Debug)]
pub struct BubbleSort {
    rows: usize,
    cols: usize,
    index: usize,
    pass: usize,
}

impl BubbleSort {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, index: 0, pass: 0 }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(index, pass)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.index, self.pass)
    }
}

impl SortStrategy for BubbleSort {
    fn algorithm(&self) -> SortAlgorithm {
        SortAlgorithm::Bubble
    }

    fn next_task(&mut self, grid: &Grid, _rng: &RefCell<WyRand>) -> Option<ShuffleTask> {
        let total = (self.rows * self.cols).min(grid.len());
        if total < 2 {
            return None;
        }
        // The grid may be smaller than the one this cursor was built for.
        if self.index + 1 >= total || self.pass >= total - 1 {
            self.index = 0;
            self.pass = 0;
        }

        if let Some(task) = swap_if_out_of_order(grid, self.index, self.index + 1) {
            return Some(task);
        }

        self.index += 1;
        if self.index >= total - 1 - self.pass {
            self.index = 0;
            self.pass += 1;
            if self.pass >= total - 1 {
                self.pass = 0;
            }
        }
        None
    }
}
