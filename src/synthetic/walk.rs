use rand::Rng;

/// Round to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a bounded random walk
///
/// The walk is seeded at `base` and every emitted value is one more step
/// along it, so the first value is already `base ± volatility / 2`. Steps
/// are `U(-0.5, 0.5) * volatility`. The walk accumulates unrounded values
/// and emits them rounded to cents. It is not mean-reverting.
pub fn random_walk<R: Rng + ?Sized>(
    rng: &mut R,
    base: f64,
    volatility: f64,
    count: usize,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(count);
    let mut last = base;

    for _ in 0..count {
        let change = (rng.gen::<f64>() - 0.5) * volatility;
        last += change;
        values.push(round_to_cents(last));
    }

    values
}
