//! Bounded-error `log2` and `ln` approximations of positive `f32` values,
//! computed using only bit manipulation of the IEEE754 representation,
//! multiplication and comparison: no transcendental calls and no lookup
//! tables.
//!
//! # Installation
//!
//! Add this to your Cargo.toml
//!
//! ```toml
//! [dependencies]
//! fastlog = "0.1"
//! ```
//!
//! # Examples
//!
//! ```rust
//! // powers of two are exact...
//! assert_eq!(fastlog::approx_log2(4.0), 2.0);
//!
//! // ...and everything else is within 2^-9
//! let error = (fastlog::approx_log2(1.2345) - 1.2345_f32.log2()).abs();
//! assert!(error < 0.00195313);
//! ```

#![no_std]
#[cfg(test)] #[macro_use] extern crate std;

mod bits;
mod reduce;
mod log;

pub use bits::{bits_of, float_of, pow2_neg};
pub use reduce::{decompose, reduce};
pub use log::{approx_log2, approx_log2_passes, approx_ln, DEFAULT_PASSES};
