//! The iterative driver that turns the two reduction steps into a
//! logarithm.
//!
//! Any positive normal `x` sits in some interval `[2^n, 2^(n+1))`, so
//! `log2(x) = n + log2(x')` with `x' = x / 2^n` in `[1, 2)`. Squaring `x'`
//! `k` times until it reaches `[2, 4)` gives `x_new = x'^(2^k)`, and
//!
//! ```txt
//! log2(x') = log2(x_new) / 2^k = 2^-k + 2^-k * log2(x_new / 2)
//! ```
//!
//! where `x_new / 2` is back in `[1, 2)` and the relation can be applied
//! again. Collecting the counts `k1, k2, ...` of each pass:
//!
//! ```txt
//! log2(x) = n + 2^-k1 + 2^-(k1+k2) + 2^-(k1+k2+k3) + ...
//! ```
//!
//! Whenever the remaining value is exactly 1 the expansion has terminated
//! and the result is exact. Otherwise, stopping after the pass that brings
//! the accumulated count to `m` truncates the series, with the dropped
//! tail bounded by `2^-m`: each pass squares at least once, so a budget of
//! `p` passes guarantees an error below `2^-p`, and inputs needing more
//! squarings per pass converge faster.

use core::f32::consts::LN_2;

use bits::pow2_neg;
use reduce::{decompose, reduce};

/// The default number of reduction passes used by [`approx_log2`], giving
/// a worst-case truncation error of 2<sup>-9</sup> (about 0.002).
pub const DEFAULT_PASSES: u32 = 9;

/// Approximate the base-2 logarithm of `x` with an explicit pass budget.
///
/// After `passes` passes the truncation error is below
/// 2<sup>-`passes`</sup> (often much better, see the module docs); exact
/// powers of two short-circuit to the exact integer answer regardless of
/// the budget. Past roughly 24 passes the `f32` result stops improving.
///
/// `x` must be finite, positive and normal; anything else produces
/// unspecified numeric output.
///
/// # Examples
///
/// ```rust
/// use fastlog::approx_log2_passes;
///
/// let rough = approx_log2_passes(1.2345, 1);
/// let fine = approx_log2_passes(1.2345, 20);
/// let reference = 1.2345_f32.log2();
///
/// assert!((rough - reference).abs() < 0.5);
/// assert!((fine - reference).abs() < 1e-5);
/// ```
pub fn approx_log2_passes(x: f32, passes: u32) -> f32 {
    let (expn, mut x) = decompose(x);
    if x == 1.0 {
        // x was an exact power of two
        return expn;
    }

    let mut res = expn;
    let mut m = 0;
    for _ in 0..passes {
        let (k, reduced) = reduce(x);
        x = reduced;
        m += k;
        res += pow2_neg(m);
        if x == 1.0 {
            // the binary expansion terminated, no bits left to extract
            return res;
        }
    }
    res
}

/// Approximate the base-2 logarithm of `x`.
///
/// Exact when `x` is an exact power of two, within 2<sup>-9</sup> of the
/// true logarithm otherwise. `x` must be finite, positive and normal;
/// anything else produces unspecified numeric output. See
/// [`approx_log2_passes`] to trade passes for precision.
///
/// # Examples
///
/// ```rust
/// use fastlog::approx_log2;
///
/// assert_eq!(approx_log2(1.0), 0.0);
/// assert_eq!(approx_log2(4.0), 2.0);
/// assert_eq!(approx_log2(0.5), -1.0);
///
/// assert!((approx_log2(1.2345) - 1.2345_f32.log2()).abs() < 0.00195313);
/// ```
#[inline]
pub fn approx_log2(x: f32) -> f32 {
    approx_log2_passes(x, DEFAULT_PASSES)
}

/// Approximate the natural logarithm of `x`, as `approx_log2(x) * ln(2)`.
///
/// Same preconditions and error behavior as [`approx_log2`], scaled by
/// `ln(2)`.
///
/// # Examples
///
/// ```rust
/// use std::f32::consts::LN_2;
/// use fastlog::approx_ln;
///
/// assert_eq!(approx_ln(4.0), 2.0 * LN_2);
/// assert!((approx_ln(1.2345) - 1.2345_f32.ln()).abs() < 0.0014);
/// ```
#[inline]
pub fn approx_ln(x: f32) -> f32 {
    approx_log2(x) * LN_2
}
