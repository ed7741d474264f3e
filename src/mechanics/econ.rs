//! Economy mechanics: price curves for monkeys and bulk upgrades.

/// Geometric price: floor(base * growth^count).
#[inline]
pub fn geometric_price(base: f64, growth: f64, count: usize) -> u64 {
    let raw = base * growth.powi(count as i32);
    if raw.is_finite() { raw.max(0.0).floor() as u64 } else { u64::MAX }
}

/// Bulk-upgrade fee. Each monkey still to convert costs `others_growth`,
/// each one already converted only `adopted_growth`, so with
/// `others_growth > adopted_growth` the fee falls as adoption grows.
/// Never below one coin.
#[inline]
pub fn upgrade_fee(
    base_fee: u64,
    others: usize,
    adopted: usize,
    others_growth: f64,
    adopted_growth: f64,
) -> u64 {
    let raw = base_fee as f64
        * others_growth.powi(others as i32)
        * adopted_growth.powi(adopted as i32);
    if raw.is_finite() { (raw.floor() as u64).max(1) } else { u64::MAX }
}

/// Coins paid for a combo of `cells` positions.
#[inline]
pub fn combo_reward(cells: usize, multiplier: u64) -> u64 {
    (cells as u64).saturating_mul(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grows_strictly_when_base_times_margin_is_at_least_one() {
        let mut prev = geometric_price(75.0, 1.1, 0);
        assert_eq!(prev, 75);
        for n in 1..150 {
            let p = geometric_price(75.0, 1.1, n);
            assert!(p > prev, "price did not grow at {n}: {prev} -> {p}");
            prev = p;
        }
    }

    #[test]
    fn fee_drops_as_adoption_grows() {
        let total = 10;
        let mut prev = u64::MAX;
        for adopted in 0..total {
            let fee = upgrade_fee(750, total - adopted, adopted, 1.1, 1.02);
            assert!(fee < prev);
            assert!(fee >= 1);
            prev = fee;
        }
    }

    #[test]
    fn fee_never_free() {
        assert_eq!(upgrade_fee(0, 0, 0, 1.1, 1.02), 1);
    }
}
