use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Spend up to this amount earns nothing.
const LOWER_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
/// Spend above this amount earns double.
const UPPER_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Reward points earned by a single purchase.
///
/// - `amount <= 50` earns 0
/// - `50 < amount <= 100` earns one point per dollar above 50
/// - `amount > 100` earns 50 plus two points per dollar above 100
///
/// Fractions are truncated, never rounded. Amounts too large for `i64`
/// saturate instead of failing.
pub fn reward_points(amount: Decimal) -> i64 {
    if amount <= LOWER_THRESHOLD {
        return 0;
    }

    let raw = if amount <= UPPER_THRESHOLD {
        amount - LOWER_THRESHOLD
    } else {
        (amount - UPPER_THRESHOLD)
            .checked_mul(Decimal::TWO)
            .and_then(|doubled| doubled.checked_add(LOWER_THRESHOLD))
            .unwrap_or(Decimal::MAX)
    };

    raw.trunc().to_i64().unwrap_or(i64::MAX)
}
