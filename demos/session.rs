// demos/session.rs
// Run with:
//   cargo run --example session

use monkey_sort::session::SpeedPreset;
use monkey_sort::{FrameTime, GameConfig, Simulation, SortAlgorithm};

fn main() -> monkey_sort::Result<()> {
    // Small board, generous wallet so the shop gets exercised.
    let config = GameConfig { starting_coins: 2_000, ..GameConfig::small(8, 8) }.with_seed(7);
    let mut sim = Simulation::new(config)?;
    sim.toggle_speed(SpeedPreset::Fast);

    let frame = FrameTime::new(1000.0 / 60.0);
    let mut frames = 0u64;
    let mut tasks = 0usize;
    let mut earned = 0u64;

    while frames < 60 * 60 * 10 && !sim.is_sorted() {
        let report = sim.tick(frame)?;
        tasks += report.tasks_completed;
        earned += report.coins_earned();
        frames += 1;

        // Poor man's player: buy when possible, upgrade as soon as affordable.
        if sim.can_buy_monkey() {
            sim.buy_monkey();
        }
        if sim.count_running(SortAlgorithm::Insertion) < sim.monkeys().len()
            && !sim.upgrade_all_to_insertion()
        {
            sim.upgrade_all_to_bubble();
        }
    }

    let snap = sim.snapshot();
    println!("== Monkey Sort Session ==");
    println!("frames     -> {frames} ({:.1}s real at 60 fps)", frames as f64 / 60.0);
    println!("monkeys    -> {}", snap.monkeys.len());
    for alg in SortAlgorithm::ALL {
        println!("  {:<8} -> {}", alg.label(), sim.count_running(alg));
    }
    println!("tasks done -> {tasks}");
    println!("coins      -> {} (earned {earned})", snap.coins);
    println!("sorted     -> {}", snap.sorted);
    println!();
    for row in &snap.grid {
        let line: String = row.iter().map(|item| item.emoji()).collect();
        println!("{line}");
    }
    Ok(())
}
