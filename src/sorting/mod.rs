//! # Sorting strategies
//!
//! A strategy is an incremental planner: every call to
//! [`SortStrategy::next_task`] looks at the live grid and proposes at most one
//! swap. `None` means "nothing to do on this call", not "finished"; callers
//! keep polling. Strategies may move their internal cursor even when they
//! return `None`.
//!
//! The grid is shared with other monkeys, so a strategy never assumes its
//! previous proposal was carried out. Cursors wrap around instead of running
//! off the end.

use std::cell::RefCell;
use std::fmt;

use bevy_prng::WyRand;

use crate::board::{Grid, Item, Position};
use crate::error::{Result, SimError};

pub mod bogo;
pub mod bubble;
pub mod insertion;

pub use bogo::BogoSort;
pub use bubble::BubbleSort;
pub use insertion::InsertionSort;

/// Which planner a monkey runs. Ordered from the starting tier upwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortAlgorithm {
    #[default]
    Bogo,
    Bubble,
    Insertion,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] =
        [SortAlgorithm::Bogo, SortAlgorithm::Bubble, SortAlgorithm::Insertion];

    /// Short label drawn above the monkey sprite.
    pub fn label(self) -> &'static str {
        match self {
            SortAlgorithm::Bogo => "Bogo",
            SortAlgorithm::Bubble => "Bubble",
            SortAlgorithm::Insertion => "Insert",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// "Move the item at `from` to `to`." `item` is the value seen when the task
/// was planned; the monkey re-reads the grid when it executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShuffleTask {
    from: Position,
    to: Position,
    item: Item,
}

impl ShuffleTask {
    pub fn new(from: Position, to: Position, item: Item) -> Result<Self> {
        if from == to {
            return Err(SimError::DegenerateTask(from));
        }
        Ok(Self { from, to, item })
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn item(&self) -> Item {
        self.item
    }

    /// Both cells the task touches, in lock order.
    pub fn positions(&self) -> [Position; 2] {
        [self.from, self.to]
    }
}

/// Incremental "what to swap next" planner.
pub trait SortStrategy: Send {
    fn algorithm(&self) -> SortAlgorithm;

    /// Propose at most one swap for the current grid.
    fn next_task(&mut self, grid: &Grid, rng: &RefCell<WyRand>) -> Option<ShuffleTask>;
}

/// Fresh strategy with its cursor at the start.
pub fn make_strategy(algorithm: SortAlgorithm, rows: usize, cols: usize) -> Box<dyn SortStrategy> {
    match algorithm {
        SortAlgorithm::Bogo => Box::new(BogoSort),
        SortAlgorithm::Bubble => Box::new(BubbleSort::new(rows, cols)),
        SortAlgorithm::Insertion => Box::new(InsertionSort::new(rows, cols)),
    }
}

/// Task swapping the cells at row-major indices `a` and `b` when they are out
/// of order.
pub(crate) fn swap_if_out_of_order(grid: &Grid, a: usize, b: usize) -> Option<ShuffleTask> {
    let cells = grid.cells();
    let (left, right) = (*cells.get(a)?, *cells.get(b)?);
    if left.out_of_order(right) {
        ShuffleTask::new(grid.position_of(a), grid.position_of(b), left).ok()
    } else {
        None
    }
}
