/*!
`monkey_sort`: simulation core for an idle game where monkeys sort a fruit
grid, one animated swap at a time.

What it does
- Keeps a fixed-size grid of fruit ([`board::Grid`]) and a registry of cells
  claimed by in-flight swaps ([`board::LockRegistry`]).
- Runs monkeys ([`monkey::Monkey`]): small state machines that ask their
  sorting strategy for one swap at a time and act it out as walk → pick up →
  carry → swap → return.
- Offers three incremental strategies ([`sorting`]): random-swap ("bogo"),
  bubble and insertion. Each is polled repeatedly and proposes at most one
  swap per call, so progress stays visible.
- Pays coins for combos (three or more equal fruits in a row or column)
  formed at a swap's destination, and sells monkeys and bulk upgrades
  ([`session::Simulation`]).

How to use (call surface only)
- Build a [`session::GameConfig`] (or take `GameConfig::default()`).
- `Simulation::new(config)?`, then every frame call
  `sim.tick(FrameTime::new(delta_ms))?` or feed real time to
  `sim.advance(secs)?` for fixed steps.
- Draw from `sim.snapshot()`; wire buttons to `buy_monkey`,
  `upgrade_all_to_bubble`, `upgrade_all_to_insertion`, `toggle_speed`.

What it does NOT do
- No rendering, no audio, no persistence, no networking. The library logs
  through the `log` facade and leaves the logger to the front end.
*/

pub mod board;
pub mod error;
pub mod mechanics;
pub mod monkey;
pub mod session;
pub mod sorting;

pub use board::{Grid, Item, LockRegistry, Position};
pub use error::{Result, SimError};
pub use monkey::{Monkey, MonkeyState, StateKind};
pub use session::{FrameTime, GameConfig, Simulation, Snapshot};
pub use sorting::{ShuffleTask, SortAlgorithm, SortStrategy};
