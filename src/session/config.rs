use crate::error::{Result, SimError};
use crate::monkey::{Env, MoodTable};
use crate::sorting::SortAlgorithm;

/// Per-monkey pacing and idle behaviour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonkeyTuning {
    /// Legs per game second, by algorithm. Bogo is deliberately slow so
    /// upgraded monkeys visibly outpace it.
    pub bogo_speed: f64,
    pub bubble_speed: f64,
    pub insertion_speed: f64,
    /// How long a chat or dance lasts, in game seconds.
    pub cosmetic_secs: f64,
    /// Wander radius in cells.
    pub wander_radius_factor: f64,
    /// Chance a finished wander leg ends the wander.
    pub wander_stop_chance: f64,
    pub moods: MoodTable,
    /// Whole tasks one update may chain after finishing its first; also caps
    /// wander legs per update.
    pub max_chained_tasks: usize,
    /// Strategy polls allowed between two chained tasks.
    pub chain_polls: usize,
}

impl Default for MonkeyTuning {
    fn default() -> Self {
        Self {
            bogo_speed: 1.0,
            bubble_speed: 25.0,
            insertion_speed: 25.0,
            cosmetic_secs: 100.0 / 60.0,
            wander_radius_factor: 4.0,
            wander_stop_chance: 0.2,
            moods: MoodTable::default(),
            max_chained_tasks: 16,
            chain_polls: 8,
        }
    }
}

impl MonkeyTuning {
    pub fn speed(&self, algorithm: SortAlgorithm) -> f64 {
        match algorithm {
            SortAlgorithm::Bogo => self.bogo_speed,
            SortAlgorithm::Bubble => self.bubble_speed,
            SortAlgorithm::Insertion => self.insertion_speed,
        }
    }
}

/// Everything a session needs to start. Plain data; check it with
/// [`GameConfig::validate`] (the controller does so on construction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Pixel size of one cell on the canvas.
    pub cell_size: f64,
    pub seed: u64,

    pub starting_coins: u64,
    pub starting_monkeys: usize,
    pub max_monkeys: usize,
    pub monkey_base_cost: f64,
    /// Price multiplier per monkey owned.
    pub monkey_cost_growth: f64,
    pub combo_reward_multiplier: u64,

    pub bubble_upgrade_fee: u64,
    pub insertion_upgrade_fee: u64,
    /// Fee multiplier per monkey still to convert.
    pub upgrade_others_growth: f64,
    /// Fee multiplier per monkey already converted.
    pub upgrade_adopted_growth: f64,

    /// Fixed-step rate for [`Simulation::advance`](crate::session::Simulation::advance).
    pub max_fps: u32,
    /// Fixed steps run at most per `advance` call; older backlog is dropped.
    pub max_catch_up_steps: u32,
    pub time_scale: f64,

    pub monkey: MonkeyTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 25,
            cell_size: 24.0,
            seed: 0x5eed_f00d,
            starting_coins: 50,
            starting_monkeys: 1,
            max_monkeys: 150,
            monkey_base_cost: 75.0,
            monkey_cost_growth: 1.1,
            combo_reward_multiplier: 15,
            bubble_upgrade_fee: 750,
            insertion_upgrade_fee: 1500,
            upgrade_others_growth: 1.1,
            upgrade_adopted_growth: 1.02,
            max_fps: 60,
            max_catch_up_steps: 8,
            time_scale: 1.0,
            monkey: MonkeyTuning::default(),
        }
    }
}

impl GameConfig {
    /// Default rules on a smaller board.
    pub fn small(rows: usize, cols: usize) -> Self {
        Self { rows, cols, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn fixed_step_secs(&self) -> f64 {
        1.0 / f64::from(self.max_fps.max(1))
    }

    /// What each monkey gets copied into it.
    pub fn monkey_env(&self) -> Env {
        Env {
            rows: self.rows,
            cols: self.cols,
            cell_size: self.cell_size,
            reward_multiplier: self.combo_reward_multiplier,
            tuning: self.monkey,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SimError::InvalidConfig("grid needs at least one row and one column"));
        }
        if !(self.cell_size > 0.0) {
            return Err(SimError::InvalidConfig("cell_size must be positive"));
        }
        if self.starting_monkeys > self.max_monkeys {
            return Err(SimError::InvalidConfig("starting_monkeys exceeds max_monkeys"));
        }
        // floor(base * g^n) strictly increases once base * (g - 1) >= 1.
        if !(self.monkey_cost_growth > 1.0)
            || self.monkey_base_cost * (self.monkey_cost_growth - 1.0) < 1.0
        {
            return Err(SimError::InvalidConfig(
                "monkey price must grow by at least one coin per purchase",
            ));
        }
        if !(self.upgrade_others_growth > self.upgrade_adopted_growth)
            || !(self.upgrade_adopted_growth > 0.0)
        {
            return Err(SimError::InvalidConfig(
                "upgrade fee must weigh unconverted monkeys above converted ones",
            ));
        }
        if self.max_fps == 0 {
            return Err(SimError::InvalidConfig("max_fps must be positive"));
        }
        if !(self.time_scale >= 0.0) || !self.time_scale.is_finite() {
            return Err(SimError::InvalidTimeScale(self.time_scale));
        }
        let t = &self.monkey;
        if SortAlgorithm::ALL.iter().any(|&a| !(t.speed(a) > 0.0) || !t.speed(a).is_finite()) {
            return Err(SimError::InvalidConfig("monkey speeds must be positive and finite"));
        }
        if !(t.wander_stop_chance > 0.0 && t.wander_stop_chance <= 1.0) {
            return Err(SimError::InvalidConfig("wander_stop_chance must be within (0, 1]"));
        }
        Ok(())
    }
}
