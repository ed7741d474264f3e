use parking_lot::Mutex;

/// Coin balance shared by the controller (purchases), the monkeys (combo
/// rewards) and whoever draws the HUD. Never negative: a debit checks and
/// subtracts under one lock.
#[derive(Debug, Default)]
pub struct Wallet {
    coins: Mutex<u64>,
}

impl Wallet {
    pub fn new(coins: u64) -> Self {
        Self { coins: Mutex::new(coins) }
    }

    pub fn balance(&self) -> u64 {
        *self.coins.lock()
    }

    pub fn deposit(&self, amount: u64) {
        let mut coins = self.coins.lock();
        *coins = coins.saturating_add(amount);
    }

    /// Debit `amount` if the balance covers it.
    pub fn try_spend(&self, amount: u64) -> bool {
        let mut coins = self.coins.lock();
        if *coins < amount {
            return false;
        }
        *coins -= amount;
        true
    }

    pub fn can_afford(&self, amount: u64) -> bool {
        self.balance() >= amount
    }

    /// Overwrite the balance (reset and debug tooling).
    pub fn set(&self, coins: u64) {
        *self.coins.lock() = coins;
    }
}
