//! Raw views of the IEEE754 single-precision representation.

use core::mem;

/// Width of the `f32` significand field, in bits.
pub const SIGNIF_BITS: u32 = 23;
/// Bias of the stored `f32` exponent field.
pub const EXPONENT_BIAS: u32 = 127;

pub(crate) const SIGNIF_MASK: u32 = (1 << SIGNIF_BITS) - 1;
pub(crate) const EXPONENT_MASK: u32 = (1 << 8) - 1;

/// View `x` as a collection of bits.
///
/// This is an exact reinterpretation of the storage, not a numeric
/// conversion.
///
/// # Examples
///
/// ```rust
/// assert_eq!(fastlog::bits_of(1.0), 0x3f80_0000);
/// ```
#[inline]
pub fn bits_of(x: f32) -> u32 {
    unsafe { mem::transmute(x) }
}

/// View a collection of bits as a floating point number.
///
/// # Examples
///
/// ```rust
/// assert_eq!(fastlog::float_of(0xbf80_0000), -1.0);
/// ```
#[inline]
pub fn float_of(bits: u32) -> f32 {
    unsafe { mem::transmute(bits) }
}

/// Return 2<sup>-`m`</sup> exactly, by placing `127 - m` straight into the
/// exponent field.
///
/// No floating point division is performed. For `m >= 127` the result
/// would leave the normal exponent range, so this saturates to `0.0`;
/// 2<sup>-127</sup> and below contribute nothing representable to a sum
/// held at `f32` precision anyway.
///
/// # Examples
///
/// ```rust
/// assert_eq!(fastlog::pow2_neg(0), 1.0);
/// assert_eq!(fastlog::pow2_neg(3), 0.125);
/// assert_eq!(fastlog::pow2_neg(126), std::f32::MIN_POSITIVE);
/// assert_eq!(fastlog::pow2_neg(200), 0.0);
/// ```
#[inline]
pub fn pow2_neg(m: u32) -> f32 {
    if m >= EXPONENT_BIAS {
        return 0.0;
    }
    float_of((EXPONENT_BIAS - m) << SIGNIF_BITS)
}

#[cfg(test)]
mod tests {
    use std::f32;

    use {bits_of, float_of, pow2_neg};

    #[test]
    fn roundtrip() {
        let cases = [0.0_f32, -0.0, 1.0, 1.2345, -1e30, f32::MIN_POSITIVE,
                     f32::INFINITY, f32::NEG_INFINITY];
        for &x in &cases {
            assert_eq!(bits_of(float_of(bits_of(x))), bits_of(x));
        }
        assert_eq!(bits_of(2.0), 0x4000_0000);
        assert_eq!(float_of(0x3fc0_0000), 1.5);
    }

    #[test]
    fn pow2_neg_exact() {
        assert_eq!(pow2_neg(0), 1.0);
        assert_eq!(pow2_neg(1), 0.5);
        assert_eq!(pow2_neg(9), 0.001953125);
        assert_eq!(pow2_neg(126), f32::MIN_POSITIVE);
    }

    #[test]
    fn pow2_neg_saturates() {
        assert_eq!(pow2_neg(127), 0.0);
        assert_eq!(pow2_neg(128), 0.0);
        assert_eq!(pow2_neg(1000), 0.0);
    }
}
