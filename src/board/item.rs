use std::cell::RefCell;
use std::fmt;

use bevy_prng::WyRand;

use crate::mechanics::stoch;

/// One grid cell value: a fruit kind or the `Empty` hole left while a monkey
/// carries a fruit around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    Apple,
    Banana,
    Grape,
    Orange,
    Watermelon,
    Pineapple,
    Strawberry,
    Cherry,
    Kiwi,
    Peach,
    Mango,
    Blueberry,
    Lemon,
    Lettuce,
    Empty,
}

impl Item {
    /// Every fruit, i.e. every item except `Empty`.
    pub const FRUITS: [Item; 14] = [
        Item::Apple,
        Item::Banana,
        Item::Grape,
        Item::Orange,
        Item::Watermelon,
        Item::Pineapple,
        Item::Strawberry,
        Item::Cherry,
        Item::Kiwi,
        Item::Peach,
        Item::Mango,
        Item::Blueberry,
        Item::Lemon,
        Item::Lettuce,
    ];

    /// Canonical name; sorting compares these lexically. `Empty` is `""` so it
    /// sorts first.
    pub fn sort_key(self) -> &'static str {
        match self {
            Item::Apple => "APPLE",
            Item::Banana => "BANANA",
            Item::Grape => "GRAPE",
            Item::Orange => "ORANGE",
            Item::Watermelon => "WATERMELON",
            Item::Pineapple => "PINEAPPLE",
            Item::Strawberry => "STRAWBERRY",
            Item::Cherry => "CHERRY",
            Item::Kiwi => "KIWI",
            Item::Peach => "PEACH",
            Item::Mango => "MANGO",
            Item::Blueberry => "BLUEBERRY",
            Item::Lemon => "LEMON",
            Item::Lettuce => "LETTUCE",
            Item::Empty => "",
        }
    }

    /// Glyph for the presentation layer.
    pub fn emoji(self) -> &'static str {
        match self {
            Item::Apple => "🍎",
            Item::Banana => "🍌",
            Item::Grape => "🍇",
            Item::Orange => "🍊",
            Item::Watermelon => "🍉",
            Item::Pineapple => "🍍",
            Item::Strawberry => "🍓",
            Item::Cherry => "🍒",
            Item::Kiwi => "🥝",
            Item::Peach => "🍑",
            Item::Mango => "🥭",
            Item::Blueberry => "🫐",
            Item::Lemon => "🍋",
            Item::Lettuce => "🥬",
            Item::Empty => " ",
        }
    }

    pub fn is_empty(self) -> bool {
        self == Item::Empty
    }

    /// Uniform draw over the fruits.
    pub fn random(rng: &RefCell<WyRand>) -> Item {
        Self::FRUITS[stoch::index(rng, Self::FRUITS.len())]
    }

    /// True when `self` must move after `next` in sorted order. Pairs that
    /// involve `Empty` are never out of order.
    pub fn out_of_order(self, next: Item) -> bool {
        !self.is_empty() && !next.is_empty() && self.sort_key() > next.sort_key()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sort_key())
    }
}

/// Row/column address of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
