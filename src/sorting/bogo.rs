use std::cell::RefCell;

use bevy_prng::WyRand;

use crate::board::Grid;
use crate::mechanics::stoch;
use crate::sorting::{ShuffleTask, SortAlgorithm, SortStrategy};

/// Starting tier: swap a random fruit with a random other cell. No cursor.
#[derive(Clone, Copy, Debug, Default)]
pub struct BogoSort;

impl SortStrategy for BogoSort {
    fn algorithm(&self) -> SortAlgorithm {
        SortAlgorithm::Bogo
    }

    fn next_task(&mut self, grid: &Grid, rng: &RefCell<WyRand>) -> Option<ShuffleTask> {
        let total = grid.len();
        if total < 2 {
            return None;
        }
        let sources: Vec<usize> = grid
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_empty())
            .map(|(i, _)| i)
            .collect();
        if sources.is_empty() {
            return None;
        }
        let from = sources[stoch::index(rng, sources.len())];
        // Uniform over the other `total - 1` cells.
        let mut to = stoch::index(rng, total - 1);
        if to >= from {
            to += 1;
        }
        let item = grid.cells()[from];
        ShuffleTask::new(grid.position_of(from), grid.position_of(to), item).ok()
    }
}
