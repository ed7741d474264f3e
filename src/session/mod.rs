//! Session layer: configuration, timing, currency and the controller that owns
//! the grid and the monkeys.

use std::sync::Arc;

use crate::board::LockRegistry;

pub mod clock;
pub mod config;
pub mod controller;
pub mod snapshot;
pub mod wallet;

pub use clock::*;
pub use config::*;
pub use controller::*;
pub use snapshot::*;
pub use wallet::*;

/// Shared registries injected into every monkey of one session. Two sessions
/// with separate handles never see each other's locks or coins.
#[derive(Clone, Debug, Default)]
pub struct Handles {
    pub locks: Arc<LockRegistry>,
    pub wallet: Arc<Wallet>,
}

impl Handles {
    pub fn new(locks: Arc<LockRegistry>, wallet: Arc<Wallet>) -> Self {
        Self { locks, wallet }
    }

    /// Fresh registries with `coins` in the wallet.
    pub fn with_coins(coins: u64) -> Self {
        Self { locks: Arc::new(LockRegistry::new()), wallet: Arc::new(Wallet::new(coins)) }
    }
}
