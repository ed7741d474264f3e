//! # Monkeys
//!
//! A monkey is a small state machine bound to one sorting strategy. While it
//! is available (idle or in a cosmetic mood) the controller asks its strategy
//! for a task; once a task is assigned the monkey walks to the source cell,
//! picks the fruit up, swaps it with the destination cell, and carries the
//! displaced fruit back.
//!
//! Movement is measured in legs. Each update converts the elapsed,
//! time-scaled seconds into a progress budget of `speed * delta`. Finishing a
//! leg keeps the unspent budget for the next one, so one large update can
//! run through several legs and even several whole tasks.

use std::cell::RefCell;
use std::fmt;

use bevy_prng::WyRand;
use log::{debug, trace};

use crate::board::{Grid, Item, MIN_COMBO, Position};
use crate::error::Result;
use crate::mechanics::{Leg, ScreenPos, econ, stoch};
use crate::session::{Handles, MonkeyTuning};
use crate::sorting::{ShuffleTask, SortAlgorithm, SortStrategy, make_strategy};

pub mod mood;
pub mod state;

pub use mood::*;
pub use state::*;

/// Board geometry and rules a monkey needs, copied out of the game config.
#[derive(Clone, Copy, Debug)]
pub struct Env {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f64,
    pub reward_multiplier: u64,
    pub tuning: MonkeyTuning,
}

impl Env {
    /// Top-left corner of a cell on the canvas.
    pub fn cell_origin(&self, pos: Position) -> ScreenPos {
        ScreenPos::new(pos.col as f64 * self.cell_size, pos.row as f64 * self.cell_size)
    }

    /// Largest x/y a sprite may sit at and stay on the board.
    fn max_origin(&self) -> ScreenPos {
        ScreenPos::new(
            ((self.cols as f64 - 1.0) * self.cell_size).max(0.0),
            ((self.rows as f64 - 1.0) * self.cell_size).max(0.0),
        )
    }
}

/// A combo formed by a swap, with the coins it paid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboEvent {
    pub cells: Vec<Position>,
    pub reward: u64,
}

/// What one update did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub tasks_completed: usize,
    pub combos: Vec<ComboEvent>,
}

impl UpdateReport {
    pub fn coins_earned(&self) -> u64 {
        self.combos.iter().map(|c| c.reward).sum()
    }
}

pub struct Monkey {
    algorithm: SortAlgorithm,
    strategy: Box<dyn SortStrategy>,
    state: MonkeyState,
    carried: Option<Item>,
    rng: RefCell<WyRand>,
    env: Env,
    handles: Handles,
}

impl fmt::Debug for Monkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monkey")
            .field("algorithm", &self.algorithm)
            .field("state", &self.state)
            .field("carried", &self.carried)
            .finish_non_exhaustive()
    }
}

impl Monkey {
    /// Idle monkey standing on a random cell.
    pub fn new(algorithm: SortAlgorithm, env: Env, handles: Handles, seed: u64) -> Self {
        let rng = stoch::seeded(seed);
        let spawn = Position::new(
            stoch::index(&rng, env.rows.max(1)),
            stoch::index(&rng, env.cols.max(1)),
        );
        let at = env.cell_origin(spawn);
        Self::at(algorithm, env, handles, rng, at)
    }

    /// Idle monkey at an explicit canvas position.
    pub fn spawn_at(algorithm: SortAlgorithm, env: Env, handles: Handles, seed: u64, at: ScreenPos) -> Self {
        Self::at(algorithm, env, handles, stoch::seeded(seed), at)
    }

    fn at(algorithm: SortAlgorithm, env: Env, handles: Handles, rng: RefCell<WyRand>, at: ScreenPos) -> Self {
        Self {
            algorithm,
            strategy: make_strategy(algorithm, env.rows, env.cols),
            state: MonkeyState::Idle { at },
            carried: None,
            rng,
            env,
            handles,
        }
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Switch algorithm. The old strategy's cursor is thrown away; an
    /// in-flight task still runs to completion.
    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.algorithm = algorithm;
        self.strategy = make_strategy(algorithm, self.env.rows, self.env.cols);
    }

    pub fn strategy(&self) -> &dyn SortStrategy {
        self.strategy.as_ref()
    }

    pub fn state(&self) -> &MonkeyState {
        &self.state
    }

    pub fn position(&self) -> ScreenPos {
        self.state.position()
    }

    pub fn carried(&self) -> Option<Item> {
        self.carried
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Available for a new task.
    pub fn is_idle(&self) -> bool {
        self.state.is_available()
    }

    /// Legs per second for the current algorithm.
    pub fn speed(&self) -> f64 {
        self.env.tuning.speed(self.algorithm)
    }

    /// Overrides the mood rolls; used by tests that need a quiet monkey.
    pub fn set_moods(&mut self, moods: MoodTable) {
        self.env.tuning.moods = moods;
    }

    /// Claim both cells of `task` and start walking to its source. Fails
    /// without side effects when busy or when either cell is claimed.
    pub fn assign_task(&mut self, task: ShuffleTask) -> bool {
        if !self.is_idle() {
            return false;
        }
        if !self.handles.locks.try_lock(&task.positions()) {
            trace!("{} monkey: cells {:?} busy, retrying later", self.algorithm, task.positions());
            return false;
        }
        let start = self.state.position();
        let end = self.env.cell_origin(task.from());
        self.state = MonkeyState::MovingToSource { task, leg: Leg::new(start, end) };
        debug!(
            "{} monkey: move {} {:?} -> {:?}",
            self.algorithm,
            task.item(),
            task.from(),
            task.to()
        );
        true
    }

    /// If available, poll the strategy once and try to take its task.
    pub fn poll_task(&mut self, grid: &Grid) -> bool {
        if !self.is_idle() {
            return false;
        }
        match self.strategy.next_task(grid, &self.rng) {
            Some(task) => self.assign_task(task),
            None => false,
        }
    }

    /// Advance by `delta_secs` of already time-scaled game time.
    pub fn update(&mut self, delta_secs: f64, grid: &mut Grid) -> Result<UpdateReport> {
        let mut report = UpdateReport::default();
        if !(delta_secs > 0.0) {
            return Ok(report);
        }

        let mut budget = self.speed() * delta_secs;
        let mut chained = 0;
        let mut wander_legs = 0;
        loop {
            let current = self.state;
            match current {
                MonkeyState::Idle { at } => {
                    self.roll_mood(at);
                    break;
                }
                MonkeyState::Chatting { at, elapsed } => {
                    let elapsed = elapsed + delta_secs;
                    self.state = if elapsed >= self.env.tuning.cosmetic_secs {
                        MonkeyState::Idle { at }
                    } else {
                        MonkeyState::Chatting { at, elapsed }
                    };
                    break;
                }
                MonkeyState::Dancing { at, elapsed } => {
                    let elapsed = elapsed + delta_secs;
                    self.state = if elapsed >= self.env.tuning.cosmetic_secs {
                        MonkeyState::Idle { at }
                    } else {
                        MonkeyState::Dancing { at, elapsed }
                    };
                    break;
                }
                _ => {}
            }
            if budget <= 0.0 {
                break;
            }
            let Some(leg) = self.state.leg_mut() else { break };
            let Some(rest) = leg.advance(budget) else { break };
            budget = rest;

            if self.finish_leg(grid, &mut report)? {
                if budget <= 0.0 || chained >= self.env.tuning.max_chained_tasks {
                    break;
                }
                if !self.poll_within(grid, self.env.tuning.chain_polls) {
                    break;
                }
                chained += 1;
            } else if self.state.leg().is_none() {
                // Wandering ended; the mood roll waits for the next update.
                break;
            } else if matches!(self.state, MonkeyState::Wandering { .. }) {
                wander_legs += 1;
                if wander_legs >= self.env.tuning.max_chained_tasks {
                    break;
                }
            }
        }
        Ok(report)
    }

    /// Poll up to `tries` times, stopping at the first task taken. Cursor
    /// strategies answer `None` for every in-order pair they step over.
    fn poll_within(&mut self, grid: &Grid, tries: usize) -> bool {
        (0..tries.max(1)).any(|_| self.poll_task(grid))
    }

    /// Apply the end-of-leg effect. Returns true when a whole task finished.
    fn finish_leg(&mut self, grid: &mut Grid, report: &mut UpdateReport) -> Result<bool> {
        let current = self.state;
        match current {
            MonkeyState::MovingToSource { task, leg } => {
                let item = grid.get(task.from())?;
                grid.set(task.from(), Item::Empty)?;
                self.carried = Some(item);
                let end = self.env.cell_origin(task.to());
                self.state = MonkeyState::Carrying { task, leg: Leg::new(leg.end, end) };
                Ok(false)
            }
            MonkeyState::Carrying { task, leg } => {
                let displaced = grid.get(task.to())?;
                grid.set(task.to(), self.carried.take().unwrap_or(Item::Empty))?;
                self.carried = Some(displaced);

                let cells = grid.combo_cells_at(task.to())?;
                if cells.len() >= MIN_COMBO {
                    let reward = econ::combo_reward(cells.len(), self.env.reward_multiplier);
                    self.handles.wallet.deposit(reward);
                    debug!("{} monkey: combo of {} at {:?} (+{reward})", self.algorithm, cells.len(), task.to());
                    report.combos.push(ComboEvent { cells, reward });
                }

                let end = self.env.cell_origin(task.from());
                self.state = MonkeyState::Returning { task, leg: Leg::new(leg.end, end) };
                Ok(false)
            }
            MonkeyState::Returning { task, leg } => {
                grid.set(task.from(), self.carried.take().unwrap_or(Item::Empty))?;
                self.handles.locks.unlock(&task.positions());
                self.state = MonkeyState::Idle { at: leg.end };
                report.tasks_completed += 1;
                Ok(true)
            }
            MonkeyState::Wandering { leg } => {
                self.state = if stoch::bernoulli(&self.rng, self.env.tuning.wander_stop_chance) {
                    MonkeyState::Idle { at: leg.end }
                } else {
                    MonkeyState::Wandering { leg: Leg::new(leg.end, self.wander_target(leg.end)) }
                };
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn roll_mood(&mut self, at: ScreenPos) {
        self.state = match self.env.tuning.moods.roll(&self.rng) {
            Mood::Stay => return,
            Mood::Wander => MonkeyState::Wandering { leg: Leg::new(at, self.wander_target(at)) },
            Mood::Chat => MonkeyState::Chatting { at, elapsed: 0.0 },
            Mood::Dance => MonkeyState::Dancing { at, elapsed: 0.0 },
        };
    }

    fn wander_target(&self, from: ScreenPos) -> ScreenPos {
        let radius = self.env.tuning.wander_radius_factor * self.env.cell_size;
        let max = self.env.max_origin();
        let x = from.x + stoch::range(&self.rng, -radius, radius);
        let y = from.y + stoch::range(&self.rng, -radius, radius);
        ScreenPos::new(x.clamp(0.0, max.x), y.clamp(0.0, max.y))
    }

    /// Drop the current task without finishing its animation: put any
    /// carried fruit in the hole at `from`, free both cells and go idle where
    /// it stands. The grid is left with no `Empty` hole from this monkey.
    pub fn release(&mut self, grid: &mut Grid) -> Result<()> {
        if let Some(task) = self.state.task() {
            if let Some(item) = self.carried.take() {
                grid.set(task.from(), item)?;
            }
            self.handles.locks.unlock(&task.positions());
            self.state = MonkeyState::Idle { at: self.state.position() };
        }
        Ok(())
    }
}
