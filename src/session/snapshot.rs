use crate::board::Item;
use crate::monkey::StateKind;
use crate::session::Simulation;
use crate::sorting::SortAlgorithm;

/// One monkey as the renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonkeyView {
    pub x: f64,
    pub y: f64,
    pub kind: StateKind,
    pub carried: Option<Item>,
    pub algorithm: SortAlgorithm,
}

/// A bulk-upgrade button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpgradeOffer {
    pub algorithm: SortAlgorithm,
    pub fee: u64,
    /// Affordable and at least one monkey would change.
    pub available: bool,
}

/// Per-fruit numbers for the colour strip under the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FruitStat {
    pub item: Item,
    pub count: usize,
    /// Longest row-major streak, see
    /// [`Grid::same_fruit_neighbor_count`](crate::board::Grid::same_fruit_neighbor_count).
    pub longest_streak: usize,
}

/// Owned, point-in-time copy of the drawable state. Nothing in here aliases
/// the live simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub grid: Vec<Vec<Item>>,
    pub monkeys: Vec<MonkeyView>,
    pub coins: u64,
    pub sorted: bool,
    pub time_scale: f64,
    pub monkey_price: u64,
    pub can_buy_monkey: bool,
    pub upgrades: Vec<UpgradeOffer>,
    pub fruit_stats: Vec<FruitStat>,
}

impl Snapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let coins = sim.coins();
        let monkeys = sim
            .monkeys()
            .iter()
            .map(|m| {
                let at = m.position();
                MonkeyView {
                    x: at.x,
                    y: at.y,
                    kind: m.state().kind(),
                    carried: m.carried(),
                    algorithm: m.algorithm(),
                }
            })
            .collect();
        let upgrades = SortAlgorithm::ALL
            .iter()
            .filter_map(|&algorithm| {
                let base = sim.base_upgrade_fee(algorithm)?;
                let fee = sim.upgrade_fee(algorithm, base);
                let pending = sim.count_running(algorithm) < sim.monkeys().len();
                Some(UpgradeOffer { algorithm, fee, available: pending && coins >= fee })
            })
            .collect();

        let grid = sim.grid();
        let fruit_stats = Item::FRUITS
            .iter()
            .map(|&item| FruitStat {
                item,
                count: grid.same_fruit_count(item),
                longest_streak: grid.same_fruit_neighbor_count(item),
            })
            .collect();

        Self {
            grid: grid.grid_copy(),
            monkeys,
            coins,
            sorted: sim.is_sorted(),
            time_scale: sim.time_scale(),
            monkey_price: sim.monkey_price(),
            can_buy_monkey: sim.can_buy_monkey(),
            upgrades,
            fruit_stats,
        }
    }
}
