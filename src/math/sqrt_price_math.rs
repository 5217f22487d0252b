use crate::error::{DomainError, Error};
use crate::math::math_helpers::mul_div;
use crate::{Liquidity, SqrtPriceX96, TokenAmount, Q96, RESOLUTION};
use alloy_primitives::U256;

/// Orders a pair of sqrt price bounds so that the first is the lower one.
#[inline]
pub fn normalize_range(a: SqrtPriceX96, b: SqrtPriceX96) -> (SqrtPriceX96, SqrtPriceX96) {
    if a > b { (b, a) } else { (a, b) }
}

/// Token0 amount held by `liquidity` across `[pa, pb]`, rounded down:
/// `floor(L * Q96 * (pb - pa) / pa / pb)`.
///
/// Bounds may be given in either order. A zero bound is
/// `DomainError::ZeroSqrtPrice`.
pub fn amount0_from_liquidity(
    liquidity: Liquidity,
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
) -> Result<TokenAmount, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = normalize_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_a_x96.is_zero() {
        return Err(DomainError::ZeroSqrtPrice.into());
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    // floor(floor(n / pb) / pa) == floor(n / (pa * pb))
    Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96)? / sqrt_ratio_a_x96)
}

/// Token1 amount held by `liquidity` across `[pa, pb]`, rounded down:
/// `floor(L * (pb - pa) / Q96)`.
pub fn amount1_from_liquidity(
    liquidity: Liquidity,
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
) -> Result<TokenAmount, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = normalize_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    Ok(mul_div(
        U256::from(liquidity),
        sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
        Q96,
    )?)
}

/// Token amounts `(amount0, amount1)` represented by a position of
/// `liquidity` over `[pa, pb]` when the pool sits at `sqrt_price_x96`.
///
/// Below the range the position is all token0, above it all token1, and
/// inside it is split at the current price.
pub fn amounts_for_liquidity(
    sqrt_price_x96: SqrtPriceX96,
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
    liquidity: Liquidity,
) -> Result<(TokenAmount, TokenAmount), Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = normalize_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_price_x96 <= sqrt_ratio_a_x96 {
        Ok((
            amount0_from_liquidity(liquidity, sqrt_ratio_a_x96, sqrt_ratio_b_x96)?,
            U256::ZERO,
        ))
    } else if sqrt_price_x96 < sqrt_ratio_b_x96 {
        Ok((
            amount0_from_liquidity(liquidity, sqrt_price_x96, sqrt_ratio_b_x96)?,
            amount1_from_liquidity(liquidity, sqrt_ratio_a_x96, sqrt_price_x96)?,
        ))
    } else {
        Ok((
            U256::ZERO,
            amount1_from_liquidity(liquidity, sqrt_ratio_a_x96, sqrt_ratio_b_x96)?,
        ))
    }
}
