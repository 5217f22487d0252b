use crate::error::{ArithmeticError, DomainError, Error};
use crate::math::math_helpers::{mul_div, narrow, narrow_u128, widen};
use crate::math::sqrt_price_math::normalize_range;
use crate::{Liquidity, SqrtPriceX96, TokenAmount, Q96, RESOLUTION};

/// Liquidity obtainable from `amount0` of token0 over `[pa, pb]`:
/// `floor(amount0 * pa * pb / Q96 / (pb - pa))`.
///
/// The full product is formed in 512 bits before any division, so the
/// only rounding is the final floor. Bounds may be given in either order;
/// equal bounds are `DomainError::DegenerateRange`.
pub fn liquidity_from_amount0(
    amount0: TokenAmount,
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
) -> Result<Liquidity, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = normalize_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96 == sqrt_ratio_b_x96 {
        return Err(DomainError::DegenerateRange.into());
    }

    let numerator = widen(amount0)
        .checked_mul(widen(sqrt_ratio_a_x96))
        .and_then(|product| product.checked_mul(widen(sqrt_ratio_b_x96)))
        .ok_or(ArithmeticError::Overflow)?;
    let denominator = widen(sqrt_ratio_b_x96 - sqrt_ratio_a_x96) << RESOLUTION;

    Ok(narrow_u128(narrow(numerator / denominator)?)?)
}

/// Liquidity obtainable from `amount1` of token1 over `[pa, pb]`:
/// `floor(amount1 * Q96 / (pb - pa))`.
pub fn liquidity_from_amount1(
    amount1: TokenAmount,
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
) -> Result<Liquidity, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = normalize_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96 == sqrt_ratio_b_x96 {
        return Err(DomainError::DegenerateRange.into());
    }

    let liquidity = mul_div(amount1, Q96, sqrt_ratio_b_x96 - sqrt_ratio_a_x96)?;
    Ok(narrow_u128(liquidity)?)
}

/// Liquidity obtainable from depositing both tokens into `[pa, pb]` while
/// the pool sits at `sqrt_price_x96`.
///
/// With the price inside the range each token bounds the result on its
/// own side and the smaller of the two wins; the surplus of the other
/// token is simply not deposited. Outside the range only one token counts.
/// The single-sided functions above never take this minimum themselves.
pub fn liquidity_for_amounts(
    sqrt_price_x96: SqrtPriceX96,
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
    amount0: TokenAmount,
    amount1: TokenAmount,
) -> Result<Liquidity, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = normalize_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let liquidity = if sqrt_price_x96 <= sqrt_ratio_a_x96 {
        liquidity_from_amount0(amount0, sqrt_ratio_a_x96, sqrt_ratio_b_x96)?
    } else if sqrt_price_x96 < sqrt_ratio_b_x96 {
        let liquidity0 = liquidity_from_amount0(amount0, sqrt_price_x96, sqrt_ratio_b_x96)?;
        let liquidity1 = liquidity_from_amount1(amount1, sqrt_ratio_a_x96, sqrt_price_x96)?;
        tracing::trace!(liquidity0, liquidity1, "in-range deposit");
        liquidity0.min(liquidity1)
    } else {
        liquidity_from_amount1(amount1, sqrt_ratio_a_x96, sqrt_ratio_b_x96)?
    };

    Ok(liquidity)
}
