// tests/grid.rs
use monkey_sort::mechanics::stoch;
use monkey_sort::{Grid, Item, Position, SimError};

/// Banana/Grape checkerboard: no two neighbours match on either axis.
fn checker(rows: usize, cols: usize) -> Grid {
    let cells = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| if (r + c) % 2 == 0 { Item::Banana } else { Item::Grape })
                .collect()
        })
        .collect();
    Grid::from_rows(cells).expect("rectangular grid")
}

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/* ──────────────────────────────────────────────────────────────────────────
1) Access
────────────────────────────────────────────────────────────────────────── */

#[test]
fn set_then_get_returns_the_item_everywhere() {
    let mut grid = checker(4, 5);
    for (i, pos) in (0..4).flat_map(|r| (0..5).map(move |c| p(r, c))).enumerate() {
        let item = Item::FRUITS[i % Item::FRUITS.len()];
        grid.set(pos, item).unwrap();
        assert_eq!(grid.get(pos).unwrap(), item, "round trip at {pos:?}");
    }
    grid.set(p(3, 4), Item::Empty).unwrap();
    assert_eq!(grid.get(p(3, 4)).unwrap(), Item::Empty);
}

#[test]
fn out_of_bounds_access_fails_loudly() {
    let mut grid = checker(3, 4);
    assert_eq!(
        grid.get(p(3, 0)),
        Err(SimError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 4 })
    );
    assert!(matches!(grid.get(p(0, 4)), Err(SimError::OutOfBounds { .. })));
    assert!(matches!(grid.set(p(7, 7), Item::Apple), Err(SimError::OutOfBounds { .. })));
    assert!(matches!(grid.combo_cells_at(p(0, 9)), Err(SimError::OutOfBounds { .. })));
    // Nothing was clamped onto an edge cell.
    assert_eq!(grid, checker(3, 4));
}

#[test]
fn random_grid_has_no_empty_cells() {
    let rng = stoch::seeded(99);
    let grid = Grid::new(25, 25, &rng).unwrap();
    assert_eq!(grid.len(), 625);
    assert!(grid.iter().all(|(_, item)| !item.is_empty()));
}

#[test]
fn ragged_or_empty_rows_are_rejected() {
    assert!(matches!(
        Grid::from_rows(vec![vec![Item::Apple, Item::Kiwi], vec![Item::Apple]]),
        Err(SimError::InvalidConfig(_))
    ));
    assert!(matches!(Grid::from_rows(vec![]), Err(SimError::InvalidConfig(_))));
    let rng = stoch::seeded(1);
    assert!(Grid::new(0, 3, &rng).is_err());
}

#[test]
fn grid_copy_is_detached() {
    let grid = checker(2, 2);
    let mut copy = grid.grid_copy();
    copy[0][0] = Item::Lettuce;
    assert_eq!(grid.get(p(0, 0)).unwrap(), Item::Banana);
    assert_eq!(copy.len(), 2);
    assert_eq!(copy[1].len(), 2);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Combos
────────────────────────────────────────────────────────────────────────── */

#[test]
fn run_of_two_is_not_a_combo() {
    let mut grid = checker(5, 5);
    grid.set(p(2, 1), Item::Apple).unwrap();
    grid.set(p(2, 2), Item::Apple).unwrap();
    assert!(grid.combo_cells_at(p(2, 1)).unwrap().is_empty());

    let mut grid = checker(5, 5);
    grid.set(p(1, 3), Item::Apple).unwrap();
    grid.set(p(2, 3), Item::Apple).unwrap();
    assert!(grid.combo_cells_at(p(2, 3)).unwrap().is_empty());
}

#[test]
fn run_of_three_is_a_combo_on_either_axis() {
    let mut grid = checker(5, 5);
    for c in 1..4 {
        grid.set(p(0, c), Item::Apple).unwrap();
    }
    let cells = grid.combo_cells_at(p(0, 1)).unwrap();
    assert_eq!(cells.len(), 3);
    assert!(cells.contains(&p(0, 1)));
    assert!(cells.contains(&p(0, 3)));

    let mut grid = checker(5, 5);
    for r in 2..5 {
        grid.set(p(r, 4), Item::Cherry).unwrap();
    }
    let cells = grid.combo_cells_at(p(3, 4)).unwrap();
    assert_eq!(cells.len(), 3);
    assert!(cells.contains(&p(3, 4)));
}

#[test]
fn crossing_runs_are_merged_without_duplicates() {
    let mut grid = checker(5, 5);
    for i in 1..4 {
        grid.set(p(2, i), Item::Kiwi).unwrap();
        grid.set(p(i, 2), Item::Kiwi).unwrap();
    }
    let cells = grid.combo_cells_at(p(2, 2)).unwrap();
    assert_eq!(cells.len(), 5, "plus shape is 5 distinct cells: {cells:?}");

    // Anchored on an arm only the arm's own axis qualifies.
    let arm = grid.combo_cells_at(p(2, 1)).unwrap();
    assert_eq!(arm.len(), 3);
}

#[test]
fn long_run_is_reported_whole() {
    let mut grid = checker(1, 6);
    grid.fill(Item::Mango);
    assert_eq!(grid.combo_cells_at(p(0, 5)).unwrap().len(), 6);
}

#[test]
fn empty_anchor_never_combos() {
    let mut grid = checker(3, 3);
    grid.fill(Item::Empty);
    assert!(grid.combo_cells_at(p(1, 1)).unwrap().is_empty());
}

/* ──────────────────────────────────────────────────────────────────────────
3) Aggregates
────────────────────────────────────────────────────────────────────────── */

#[test]
fn all_empty_grid_is_sorted() {
    let mut grid = checker(4, 4);
    grid.fill(Item::Empty);
    assert!(grid.is_sorted());
}

#[test]
fn fresh_random_grid_is_not_sorted() {
    let rng = stoch::seeded(2024);
    let grid = Grid::new(25, 25, &rng).unwrap();
    assert!(!grid.is_sorted());
}

#[test]
fn sortedness_reads_row_major_by_name() {
    let sorted = Grid::from_rows(vec![
        vec![Item::Apple, Item::Banana],
        vec![Item::Cherry, Item::Kiwi],
    ])
    .unwrap();
    assert!(sorted.is_sorted());

    let unsorted = Grid::from_rows(vec![
        vec![Item::Apple, Item::Kiwi],
        vec![Item::Cherry, Item::Lemon],
    ])
    .unwrap();
    assert!(!unsorted.is_sorted(), "KIWI before CHERRY across the row break");

    let with_hole = Grid::from_rows(vec![vec![Item::Empty, Item::Apple, Item::Banana]]).unwrap();
    assert!(with_hole.is_sorted(), "EMPTY sorts first");
}

#[test]
fn same_fruit_count_counts_cells() {
    let mut grid = checker(4, 4);
    assert_eq!(grid.same_fruit_count(Item::Banana), 8);
    assert_eq!(grid.same_fruit_count(Item::Apple), 0);
    grid.fill(Item::Lemon);
    assert_eq!(grid.same_fruit_count(Item::Lemon), 16);
}

#[test]
fn neighbor_streak_wraps_across_rows() {
    let grid = Grid::from_rows(vec![
        vec![Item::Banana, Item::Apple, Item::Apple],
        vec![Item::Apple, Item::Banana, Item::Banana],
    ])
    .unwrap();
    assert_eq!(grid.same_fruit_neighbor_count(Item::Apple), 3);
    assert_eq!(grid.same_fruit_neighbor_count(Item::Banana), 2);
    assert_eq!(grid.same_fruit_neighbor_count(Item::Kiwi), 0);
}

#[test]
fn neighbor_streak_counts_a_trailing_run() {
    let grid = Grid::from_rows(vec![vec![Item::Apple, Item::Kiwi, Item::Kiwi, Item::Kiwi]]).unwrap();
    assert_eq!(grid.same_fruit_neighbor_count(Item::Kiwi), 3);
}
