pub mod grid;
pub mod item;
pub mod locks;

pub use grid::*;
pub use item::*;
pub use locks::*;
