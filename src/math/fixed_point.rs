//! Q64.96 square-root price encoding.
//!
//! `encode_sqrt_price` is exact: an `f64` is a dyadic rational
//! `mantissa * 2^exponent`, so `price * 2^192` can be floored into a
//! 512-bit integer without error and its integer square root is exactly
//! `floor(sqrt(price) * 2^96)`. No floating-point `sqrt` is involved.

use crate::error::{ArithmeticError, DomainError, Error};
use crate::math::math_helpers::{narrow, sqrt_floor, u512_to_f64, widen};
use crate::{Price, SqrtPriceX96, RESOLUTION};
use alloy_primitives::U512;
use num_traits::Float;

/// Encodes a real price as `floor(sqrt(price) * 2^96)`.
///
/// Fails with `DomainError::NonPositivePrice` for zero, negative or NaN
/// input, `ArithmeticError::Overflow` for infinity or a result wider than
/// 256 bits, and `ArithmeticError::Underflow` when a positive price is too
/// small to be represented (below `2^-192`).
pub fn encode_sqrt_price(price: Price) -> Result<SqrtPriceX96, Error> {
    if !(price > 0.0) {
        return Err(DomainError::NonPositivePrice.into());
    }
    if !price.is_finite() {
        return Err(ArithmeticError::Overflow.into());
    }

    let (mantissa, exponent, _) = price.integer_decode();
    let shift = i32::from(exponent) + 2 * i32::from(RESOLUTION);

    let scaled = if shift >= 0 {
        let mantissa_bits = 64 - mantissa.leading_zeros() as i32;
        if mantissa_bits + shift > 512 {
            return Err(ArithmeticError::Overflow.into());
        }
        U512::from(mantissa) << shift as usize
    } else {
        U512::from(mantissa) >> shift.unsigned_abs() as usize
    };

    let sqrt_price = narrow(sqrt_floor(scaled))?;
    if sqrt_price.is_zero() {
        return Err(ArithmeticError::Underflow.into());
    }
    Ok(sqrt_price)
}

/// Decodes a Q64.96 square-root price back into a real price, `(x / 2^96)^2`.
///
/// The square is formed exactly in 512 bits and rounded to `f64` once.
/// The round trip through [`encode_sqrt_price`] is close but not exact.
pub fn decode_sqrt_price(sqrt_price_x96: SqrtPriceX96) -> Price {
    let wide = widen(sqrt_price_x96);
    u512_to_f64(wide * wide) * 2f64.powi(-2 * i32::from(RESOLUTION))
}
