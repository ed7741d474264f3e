pub mod econ;
pub mod motion;
pub mod stoch;

pub use econ::*;
pub use motion::*;
