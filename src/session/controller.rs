//! The simulation controller: owns the grid and the monkeys, drives them
//! from frame ticks, and runs the shop (buy monkey, bulk upgrade).

use std::cell::RefCell;
use std::fmt;

use bevy_prng::WyRand;
use log::{debug, info, warn};

use crate::board::{Grid, Item, LockRegistry};
use crate::error::{Result, SimError};
use crate::mechanics::{econ, stoch};
use crate::monkey::{ComboEvent, Monkey, UpdateReport};
use crate::session::{FixedStep, FrameTime, GameConfig, Handles, Snapshot, SpeedPreset, Wallet};
use crate::sorting::SortAlgorithm;

/// What a `tick` or `advance` call did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Simulation steps run (0 when paused).
    pub steps: u32,
    pub tasks_completed: usize,
    pub combos: Vec<ComboEvent>,
    /// Real seconds the fixed-step driver threw away to catch up.
    pub dropped_secs: f64,
}

impl TickReport {
    pub fn coins_earned(&self) -> u64 {
        self.combos.iter().map(|c| c.reward).sum()
    }

    fn absorb(&mut self, update: UpdateReport) {
        self.tasks_completed += update.tasks_completed;
        self.combos.extend(update.combos);
    }
}

pub struct Simulation {
    config: GameConfig,
    grid: Grid,
    monkeys: Vec<Monkey>,
    handles: Handles,
    rng: RefCell<WyRand>,
    time_scale: f64,
    stepper: FixedStep,
    steps: u64,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("grid", &(self.grid.rows(), self.grid.cols()))
            .field("monkeys", &self.monkeys.len())
            .field("coins", &self.coins())
            .field("time_scale", &self.time_scale)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// New session with its own lock registry and `starting_coins`.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_handles(config, Handles::with_coins(config.starting_coins))
    }

    /// New session on injected registries. The wallet balance is left as
    /// the caller set it.
    pub fn with_handles(config: GameConfig, handles: Handles) -> Result<Self> {
        config.validate()?;
        let rng = stoch::seeded(config.seed);
        let grid = Grid::new(config.rows, config.cols, &rng)?;
        let mut sim = Self {
            config,
            grid,
            monkeys: Vec::with_capacity(config.starting_monkeys),
            handles,
            rng,
            time_scale: config.time_scale,
            stepper: FixedStep::new(config.fixed_step_secs(), config.max_catch_up_steps),
            steps: 0,
        };
        for _ in 0..config.starting_monkeys {
            sim.add_monkey(SortAlgorithm::Bogo);
        }
        info!(
            "session started: {}x{} grid, {} monkey(s), {} coins",
            config.rows,
            config.cols,
            sim.monkeys.len(),
            sim.coins()
        );
        Ok(sim)
    }

    // ---------------------------------------------------------------------
    // Driving
    // ---------------------------------------------------------------------

    /// Variable-step update from one presentation frame. Does nothing while
    /// paused.
    pub fn tick(&mut self, frame: FrameTime) -> Result<TickReport> {
        let mut report = TickReport::default();
        if self.time_scale == 0.0 {
            return Ok(report);
        }
        self.step(frame.scaled_secs(self.time_scale), &mut report)?;
        Ok(report)
    }

    /// Fixed-step update: feeds `real_secs` into the accumulator and runs
    /// every whole `1 / max_fps` step it yields, capped at
    /// `max_catch_up_steps`.
    pub fn advance(&mut self, real_secs: f64) -> Result<TickReport> {
        let mut report = TickReport::default();
        if self.time_scale == 0.0 {
            return Ok(report);
        }
        let (steps, dropped) = self.stepper.accumulate(real_secs);
        if dropped > 0.0 {
            warn!("simulation fell behind; dropped {dropped:.3}s of real time");
        }
        report.dropped_secs = dropped;
        let delta = self.stepper.step_secs() * self.time_scale;
        for _ in 0..steps {
            self.step(delta, &mut report)?;
        }
        Ok(report)
    }

    /// One pass over the monkeys, in order: idle ones poll their strategy
    /// and try to claim the task, then every monkey moves.
    fn step(&mut self, delta_secs: f64, report: &mut TickReport) -> Result<()> {
        for monkey in self.monkeys.iter_mut() {
            if monkey.is_idle() {
                monkey.poll_task(&self.grid);
            }
            let update = monkey.update(delta_secs, &mut self.grid)?;
            report.absorb(update);
        }
        report.steps += 1;
        self.steps += 1;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Shop
    // ---------------------------------------------------------------------

    /// Price of the next monkey; grows with every monkey owned.
    pub fn monkey_price(&self) -> u64 {
        econ::geometric_price(self.config.monkey_base_cost, self.config.monkey_cost_growth, self.monkeys.len())
    }

    pub fn can_buy_monkey(&self) -> bool {
        self.monkeys.len() < self.config.max_monkeys && self.handles.wallet.can_afford(self.monkey_price())
    }

    /// Pay for and add one idle bogo monkey. False (and no debit) when the
    /// cap is reached or the wallet is short.
    pub fn buy_monkey(&mut self) -> bool {
        if self.monkeys.len() >= self.config.max_monkeys {
            return false;
        }
        let price = self.monkey_price();
        if !self.handles.wallet.try_spend(price) {
            return false;
        }
        self.add_monkey(SortAlgorithm::Bogo);
        info!("bought monkey #{} for {price} coins", self.monkeys.len());
        true
    }

    /// Configured starting fee for a bulk upgrade to `algorithm`.
    pub fn base_upgrade_fee(&self, algorithm: SortAlgorithm) -> Option<u64> {
        match algorithm {
            SortAlgorithm::Bogo => None,
            SortAlgorithm::Bubble => Some(self.config.bubble_upgrade_fee),
            SortAlgorithm::Insertion => Some(self.config.insertion_upgrade_fee),
        }
    }

    /// Fee for converting every monkey to `algorithm`. Monkeys still to
    /// convert weigh more than converted ones, so the fee drops as adoption
    /// grows; it is never zero.
    pub fn upgrade_fee(&self, algorithm: SortAlgorithm, base_fee: u64) -> u64 {
        let adopted = self.count_running(algorithm);
        let others = self.monkeys.len() - adopted;
        econ::upgrade_fee(
            base_fee,
            others,
            adopted,
            self.config.upgrade_others_growth,
            self.config.upgrade_adopted_growth,
        )
    }

    /// Switch every monkey to `algorithm` for one fee. No-op returning false
    /// when no monkey would change or the wallet is short.
    pub fn upgrade_all_monkeys_to(&mut self, algorithm: SortAlgorithm, base_fee: u64) -> bool {
        if self.count_running(algorithm) == self.monkeys.len() {
            return false;
        }
        let fee = self.upgrade_fee(algorithm, base_fee);
        if !self.handles.wallet.try_spend(fee) {
            return false;
        }
        let mut switched = 0;
        for monkey in self.monkeys.iter_mut().filter(|m| m.algorithm() != algorithm) {
            monkey.set_algorithm(algorithm);
            switched += 1;
        }
        info!("upgraded {switched} monkey(s) to {algorithm} for {fee} coins");
        true
    }

    pub fn upgrade_all_to_bubble(&mut self) -> bool {
        self.upgrade_all_monkeys_to(SortAlgorithm::Bubble, self.config.bubble_upgrade_fee)
    }

    pub fn upgrade_all_to_insertion(&mut self) -> bool {
        self.upgrade_all_monkeys_to(SortAlgorithm::Insertion, self.config.insertion_upgrade_fee)
    }

    pub fn count_running(&self, algorithm: SortAlgorithm) -> usize {
        self.monkeys.iter().filter(|m| m.algorithm() == algorithm).count()
    }

    // ---------------------------------------------------------------------
    // Control and debug tooling
    // ---------------------------------------------------------------------

    /// Add a monkey without paying for it. Returns its index.
    pub fn add_monkey(&mut self, algorithm: SortAlgorithm) -> usize {
        let seed = stoch::next_seed(&self.rng);
        self.monkeys.push(Monkey::new(algorithm, self.config.monkey_env(), self.handles.clone(), seed));
        self.monkeys.len() - 1
    }

    pub fn set_monkey_algorithm(&mut self, index: usize, algorithm: SortAlgorithm) -> Result<()> {
        let count = self.monkeys.len();
        let monkey = self.monkeys.get_mut(index).ok_or(SimError::UnknownMonkey { index, count })?;
        monkey.set_algorithm(algorithm);
        debug!("monkey {index} now runs {algorithm}");
        Ok(())
    }

    pub fn monkey_mut(&mut self, index: usize) -> Result<&mut Monkey> {
        let count = self.monkeys.len();
        self.monkeys.get_mut(index).ok_or(SimError::UnknownMonkey { index, count })
    }

    /// Remove every monkey. In-flight tasks are released first so no fruit
    /// is lost and no cell stays claimed.
    pub fn clear_monkeys(&mut self) -> Result<()> {
        self.release_all()?;
        self.monkeys.clear();
        Ok(())
    }

    /// Overwrite every cell with `item`. In-flight tasks are released first.
    pub fn fill_grid(&mut self, item: Item) -> Result<()> {
        self.release_all()?;
        self.grid.fill(item);
        Ok(())
    }

    /// Replace the grid with `grid`, which must match the configured size.
    pub fn load_grid(&mut self, grid: Grid) -> Result<()> {
        if grid.rows() != self.config.rows || grid.cols() != self.config.cols {
            return Err(SimError::InvalidConfig("loaded grid does not match the configured size"));
        }
        self.release_all()?;
        self.grid = grid;
        Ok(())
    }

    /// Fresh board, one starting bogo monkey, starting coins, cleared locks.
    pub fn reset(&mut self) -> Result<()> {
        self.clear_monkeys()?;
        self.handles.locks.clear();
        self.grid = Grid::new(self.config.rows, self.config.cols, &self.rng)?;
        self.handles.wallet.set(self.config.starting_coins);
        self.time_scale = self.config.time_scale;
        self.stepper.reset();
        for _ in 0..self.config.starting_monkeys {
            self.add_monkey(SortAlgorithm::Bogo);
        }
        info!("session reset");
        Ok(())
    }

    fn release_all(&mut self) -> Result<()> {
        for monkey in self.monkeys.iter_mut() {
            monkey.release(&mut self.grid)?;
        }
        Ok(())
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// 0 pauses. Negative or non-finite scales are rejected.
    pub fn set_time_scale(&mut self, scale: f64) -> Result<()> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(SimError::InvalidTimeScale(scale));
        }
        self.time_scale = scale;
        Ok(())
    }

    /// Speed-button behaviour: activate `preset`, or go back to 1x if it is
    /// already active. Returns the new scale.
    pub fn toggle_speed(&mut self, preset: SpeedPreset) -> f64 {
        self.time_scale = if self.time_scale == preset.scale() { 1.0 } else { preset.scale() };
        self.time_scale
    }

    // ---------------------------------------------------------------------
    // Read access
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn monkeys(&self) -> &[Monkey] {
        &self.monkeys
    }

    pub fn wallet(&self) -> &Wallet {
        &self.handles.wallet
    }

    pub fn locks(&self) -> &LockRegistry {
        &self.handles.locks
    }

    pub fn coins(&self) -> u64 {
        self.handles.wallet.balance()
    }

    pub fn is_sorted(&self) -> bool {
        self.grid.is_sorted()
    }

    /// Steps run since the session started.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Owned copy of everything the presentation layer draws.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
