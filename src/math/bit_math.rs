use crate::error::ArithmeticError;
use alloy_primitives::U256;

/// Index (0–255) of the most significant set bit of `x`.
///
/// Tick math uses it as the integer part of `log2`; bitmap search uses it
/// to find the nearest initialized tick at or below a position.
pub fn most_significant_bit(x: U256) -> Result<u8, ArithmeticError> {
    if x.is_zero() {
        return Err(ArithmeticError::ZeroValue);
    }
    Ok((255 - x.leading_zeros()) as u8)
}

/// Index (0–255) of the least significant set bit of `x`.
pub fn least_significant_bit(x: U256) -> Result<u8, ArithmeticError> {
    if x.is_zero() {
        return Err(ArithmeticError::ZeroValue);
    }
    Ok(x.trailing_zeros() as u8)
}
