// tests/sorting.rs
use monkey_sort::mechanics::stoch;
use monkey_sort::sorting::{BogoSort, BubbleSort, InsertionSort, make_strategy};
use monkey_sort::{Grid, Item, Position, ShuffleTask, SimError, SortAlgorithm, SortStrategy};

fn row(items: &[Item]) -> Grid {
    Grid::from_rows(vec![items.to_vec()]).expect("one row")
}

/// Carry out a swap instantly, as an uncontested monkey eventually would.
fn apply(grid: &mut Grid, task: ShuffleTask) {
    let a = grid.get(task.from()).unwrap();
    let b = grid.get(task.to()).unwrap();
    grid.set(task.from(), b).unwrap();
    grid.set(task.to(), a).unwrap();
}

/// Poll and apply until the grid reads sorted. Returns the number of polls.
fn drive(strategy: &mut dyn SortStrategy, grid: &mut Grid, max_polls: usize) -> usize {
    let rng = stoch::seeded(3);
    for polls in 0..max_polls {
        if grid.is_sorted() {
            return polls;
        }
        if let Some(task) = strategy.next_task(grid, &rng) {
            apply(grid, task);
        }
    }
    panic!("not sorted after {max_polls} polls: {:?}", grid.grid_copy());
}

/* ──────────────────────────────────────────────────────────────────────────
1) Tasks
────────────────────────────────────────────────────────────────────────── */

#[test]
fn degenerate_task_is_rejected() {
    let p = Position::new(1, 1);
    assert_eq!(ShuffleTask::new(p, p, Item::Kiwi), Err(SimError::DegenerateTask(p)));
}

#[test]
fn factory_builds_the_requested_algorithm() {
    for alg in SortAlgorithm::ALL {
        assert_eq!(make_strategy(alg, 3, 3).algorithm(), alg);
    }
    assert_eq!(SortAlgorithm::Insertion.to_string(), "Insert");
}

/* ──────────────────────────────────────────────────────────────────────────
2) Bubble
────────────────────────────────────────────────────────────────────────── */

#[test]
fn bubble_proposes_the_first_out_of_order_pair() {
    let rng = stoch::seeded(1);
    let grid = row(&[Item::Cherry, Item::Banana, Item::Apple]);
    let mut bubble = BubbleSort::new(1, 3);
    let task = bubble.next_task(&grid, &rng).expect("CHERRY > BANANA");
    assert_eq!(task.from(), Position::new(0, 0));
    assert_eq!(task.to(), Position::new(0, 1));
    assert_eq!(task.item(), Item::Cherry);
}

#[test]
fn bubble_is_quiet_on_a_sorted_grid() {
    let rng = stoch::seeded(1);
    let grid = row(&[Item::Apple, Item::Banana, Item::Cherry]);
    let mut bubble = BubbleSort::new(1, 3);
    for _ in 0..50 {
        assert_eq!(bubble.next_task(&grid, &rng), None);
        let (index, pass) = bubble.cursor();
        assert!(index < 2 && pass < 2, "cursor ran off: {:?}", bubble.cursor());
    }
}

#[test]
fn bubble_repeats_a_pair_until_it_reads_in_order() {
    let rng = stoch::seeded(1);
    let grid = row(&[Item::Cherry, Item::Banana, Item::Apple]);
    let mut bubble = BubbleSort::new(1, 3);
    let first = bubble.next_task(&grid, &rng);
    let second = bubble.next_task(&grid, &rng);
    assert_eq!(first, second, "task not carried out yet, same pair again");
    assert_eq!(bubble.cursor(), (0, 0));
}

#[test]
fn bubble_skips_pairs_with_a_hole() {
    let rng = stoch::seeded(1);
    let grid = row(&[Item::Cherry, Item::Empty, Item::Apple]);
    let mut bubble = BubbleSort::new(1, 3);
    assert_eq!(bubble.next_task(&grid, &rng), None);
    assert_eq!(bubble.next_task(&grid, &rng), None);
}

#[test]
fn bubble_sorts_a_reversed_board() {
    let mut grid = Grid::from_rows(vec![
        vec![Item::Watermelon, Item::Strawberry, Item::Pineapple],
        vec![Item::Peach, Item::Mango, Item::Lemon],
        vec![Item::Kiwi, Item::Cherry, Item::Apple],
    ])
    .unwrap();
    let mut bubble = BubbleSort::new(3, 3);
    drive(&mut bubble, &mut grid, 1_000);
    assert!(grid.is_sorted());
}

/* ──────────────────────────────────────────────────────────────────────────
3) Insertion
────────────────────────────────────────────────────────────────────────── */

#[test]
fn insertion_starts_with_the_second_cell() {
    let rng = stoch::seeded(1);
    let grid = row(&[Item::Cherry, Item::Banana, Item::Apple]);
    let mut insertion = InsertionSort::new(1, 3);
    let task = insertion.next_task(&grid, &rng).expect("CHERRY > BANANA");
    assert_eq!(task.from(), Position::new(0, 0));
    assert_eq!(task.to(), Position::new(0, 1));
    assert_eq!(task.item(), Item::Cherry);
}

#[test]
fn insertion_walks_an_item_back_through_the_prefix() {
    let rng = stoch::seeded(1);
    let mut grid = row(&[Item::Cherry, Item::Banana, Item::Apple]);
    let mut insertion = InsertionSort::new(1, 3);
    let mut tasks = Vec::new();
    for _ in 0..10 {
        if let Some(task) = insertion.next_task(&grid, &rng) {
            apply(&mut grid, task);
            tasks.push((task.from().col, task.to().col));
        }
    }
    assert_eq!(tasks, vec![(0, 1), (1, 2), (0, 1)]);
    assert!(grid.is_sorted());
}

#[test]
fn insertion_wraps_instead_of_stopping() {
    let rng = stoch::seeded(1);
    let mut grid = row(&[Item::Apple, Item::Banana, Item::Cherry, Item::Kiwi]);
    let mut insertion = InsertionSort::new(1, 4);
    for _ in 0..40 {
        assert_eq!(insertion.next_task(&grid, &rng), None);
        let (sorted, _) = insertion.cursor();
        assert!((1..4).contains(&sorted), "cursor {:?}", insertion.cursor());
    }
    // Someone else unsorts the board; the scan picks it up again.
    grid.set(Position::new(0, 0), Item::Lemon).unwrap();
    assert!((0..10).any(|_| insertion.next_task(&grid, &rng).is_some()));
}

#[test]
fn insertion_sorts_a_reversed_board() {
    let mut grid = Grid::from_rows(vec![
        vec![Item::Watermelon, Item::Strawberry, Item::Pineapple],
        vec![Item::Peach, Item::Mango, Item::Lemon],
        vec![Item::Kiwi, Item::Cherry, Item::Apple],
    ])
    .unwrap();
    let mut insertion = InsertionSort::new(3, 3);
    drive(&mut insertion, &mut grid, 1_000);
    assert!(grid.is_sorted());
}

/* ──────────────────────────────────────────────────────────────────────────
4) Bogo
────────────────────────────────────────────────────────────────────────── */

#[test]
fn bogo_tasks_are_in_bounds_and_match_the_grid() {
    let rng = stoch::seeded(17);
    let grid = Grid::new(4, 6, &rng).unwrap();
    let mut bogo = BogoSort;
    for _ in 0..500 {
        let task = bogo.next_task(&grid, &rng).expect("bogo always has a move");
        assert!(grid.contains(task.from()) && grid.contains(task.to()));
        assert_ne!(task.from(), task.to());
        assert_eq!(grid.get(task.from()).unwrap(), task.item());
    }
}

#[test]
fn bogo_only_picks_up_fruit() {
    let rng = stoch::seeded(8);
    let mut grid = row(&[Item::Empty; 5]);
    grid.set(Position::new(0, 3), Item::Mango).unwrap();
    let mut bogo = BogoSort;
    for _ in 0..100 {
        let task = bogo.next_task(&grid, &rng).unwrap();
        assert_eq!(task.from(), Position::new(0, 3));
        assert_eq!(task.item(), Item::Mango);
    }
}

#[test]
fn bogo_has_nothing_to_do_on_a_single_cell_or_an_empty_board() {
    let rng = stoch::seeded(8);
    let mut bogo = BogoSort;
    assert_eq!(bogo.next_task(&row(&[Item::Kiwi]), &rng), None);
    assert_eq!(bogo.next_task(&row(&[Item::Empty; 4]), &rng), None);
}

#[test]
fn bogo_eventually_sorts_three_cells() {
    let mut grid = row(&[Item::Cherry, Item::Banana, Item::Apple]);
    let mut bogo = BogoSort;
    drive(&mut bogo, &mut grid, 10_000);
    assert!(grid.is_sorted());
}
