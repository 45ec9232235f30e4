//! The two reduction steps behind the logarithm: pulling a value apart
//! into exponent and `[1, 2)` mantissa, and the squaring step that
//! extracts one batch of fractional bits.

use bits::{bits_of, float_of, EXPONENT_BIAS, EXPONENT_MASK, SIGNIF_BITS, SIGNIF_MASK};

/// Split a positive, finite, normal float into its unbiased power-of-two
/// exponent and a normalized value, returned as `(exponent, normalized)`
/// with `normalized` in `[1, 2)` and `x == normalized * 2^exponent`.
///
/// The exponent comes back as an `f32` (a numeric conversion of the small
/// integer, not a reinterpretation) since it seeds the result accumulator
/// directly.
///
/// The preconditions are not checked: zero, negative, non-finite and
/// subnormal inputs produce meaningless output. In particular a subnormal
/// has a stored exponent field of zero, so its extracted exponent is -127
/// regardless of its value.
///
/// # Examples
///
/// ```rust
/// assert_eq!(fastlog::decompose(12.0), (3.0, 1.5));
/// assert_eq!(fastlog::decompose(1.0), (0.0, 1.0));
/// assert_eq!(fastlog::decompose(0.75), (-1.0, 1.5));
/// ```
#[inline]
pub fn decompose(x: f32) -> (f32, f32) {
    let bits = bits_of(x);
    let expn = (bits >> SIGNIF_BITS) & EXPONENT_MASK;
    let signif = bits & SIGNIF_MASK;
    // keep the significand, force the exponent field back to the bias
    let normalized = float_of((EXPONENT_BIAS << SIGNIF_BITS) | signif);
    ((expn as i32 - EXPONENT_BIAS as i32) as f32, normalized)
}

/// Square `x` until it lands in `[2, 4)`, then halve it once back into
/// `[1, 2)`, returning `(squarings, reduced)`.
///
/// A value below 2 squares to below 4, so the first square at or past 2
/// is guaranteed to sit in `[2, 4)`. At least one squaring is always
/// performed.
///
/// `x` must lie in the open interval `(1, 2)`: exactly `1.0` squares to
/// itself and never reaches 2, so the loop would not terminate. Callers
/// check for `1.0` before every call, which is where that case belongs
/// (the logarithm is already exact there).
///
/// # Examples
///
/// ```rust
/// // 1.5^2 = 2.25, one squaring, reduced to 1.125
/// assert_eq!(fastlog::reduce(1.5), (1, 1.125));
///
/// // 1.25 takes two squarings to reach 2.44140625
/// assert_eq!(fastlog::reduce(1.25), (2, 1.220703125));
/// ```
#[inline]
pub fn reduce(mut x: f32) -> (u32, f32) {
    let mut k = 0;
    while x < 2.0 {
        x *= x;
        k += 1;
    }
    (k, x / 2.0)
}
