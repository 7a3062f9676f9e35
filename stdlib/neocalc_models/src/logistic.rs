//! Logistic link shared by both models.

/// Smallest probability [`sigmoid`] returns.
const P_MIN: f64 = f64::MIN_POSITIVE;
/// Largest probability [`sigmoid`] returns: the last `f64` below one.
const P_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Logistic function `1 / (1 + e^-z)`.
///
/// Branches on the sign of `z` so the exponential only ever sees a
/// non-positive argument and cannot overflow. The result is kept strictly
/// inside `(0, 1)` even where the exact value rounds to an endpoint. NaN in,
/// NaN out.
pub fn sigmoid(z: f64) -> f64 {
    let p = if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    };
    p.clamp(P_MIN, P_MAX)
}
