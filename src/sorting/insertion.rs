use std::cell::RefCell;

use bevy_prng::WyRand;

use crate::board::Grid;
use crate::sorting::{ShuffleTask, SortAlgorithm, SortStrategy, swap_if_out_of_order};

/// Insertion sort over the row-major grid.
///
/// `sorted_index` is the element currently being inserted, `compare_index`
/// walks it backwards through the sorted prefix. After proposing a swap the
/// next call first steps `compare_index` back one cell. Reaching the end
/// wraps to index 1 and starts a new scan.
#[derive(Clone, Debug)]
pub struct InsertionSort {
    rows: usize,
    cols: usize,
    sorted_index: usize,
    compare_index: usize,
    just_swapped: bool,
}

impl InsertionSort {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, sorted_index: 1, compare_index: 1, just_swapped: false }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(sorted_index, compare_index)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.sorted_index, self.compare_index)
    }

    fn restart_at(&mut self, index: usize) {
        self.sorted_index = index;
        self.compare_index = index;
    }
}

impl SortStrategy for InsertionSort {
    fn algorithm(&self) -> SortAlgorithm {
        SortAlgorithm::Insertion
    }

    fn next_task(&mut self, grid: &Grid, _rng: &RefCell<WyRand>) -> Option<ShuffleTask> {
        let total = (self.rows * self.cols).min(grid.len());
        if total < 2 {
            return None;
        }
        if self.sorted_index >= total || self.compare_index >= total {
            self.restart_at(1);
            self.just_swapped = false;
        }

        if self.just_swapped {
            self.compare_index -= 1;
            self.just_swapped = false;
        }

        if self.compare_index > 0 {
            if let Some(task) = swap_if_out_of_order(grid, self.compare_index - 1, self.compare_index) {
                self.just_swapped = true;
                return Some(task);
            }
        }

        let next = self.sorted_index + 1;
        self.restart_at(if next >= total { 1 } else { next });
        None
    }
}
