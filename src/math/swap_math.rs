use crate::error::{ArithmeticError, DomainError, Error};
use crate::math::math_helpers::{mul_div, narrow, widen};
use crate::math::sqrt_price_math::{amount0_from_liquidity, amount1_from_liquidity};
use crate::{Liquidity, SqrtPriceX96, TokenAmount, Q96, RESOLUTION};

/// Outcome of a single swap step inside one liquidity range.
///
/// `amount_in` is what the price move actually absorbs, recomputed from the
/// start and end prices. Because both the new price and the amounts are
/// rounded down it can differ from `amount_specified` by a few units; the
/// caller decides what to do with the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapStep {
    /// `true` when token0 is sold for token1 (price falls).
    pub zero_for_one: bool,
    pub sqrt_price_start: SqrtPriceX96,
    pub sqrt_price_next: SqrtPriceX96,
    /// Input amount requested by the caller.
    pub amount_specified: TokenAmount,
    /// Input amount realized by the price move.
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
}

fn ensure_swappable(liquidity: Liquidity, sqrt_price_x96: SqrtPriceX96) -> Result<(), DomainError> {
    if sqrt_price_x96.is_zero() {
        return Err(DomainError::ZeroSqrtPrice);
    }
    if liquidity == 0 {
        return Err(DomainError::ZeroLiquidity);
    }
    Ok(())
}

/// Next sqrt price after adding `amount_in1` of token1 (price rises):
/// `current + floor(amount_in1 * Q96 / L)`.
pub fn step_input1(
    liquidity: Liquidity,
    sqrt_price_x96: SqrtPriceX96,
    amount_in1: TokenAmount,
) -> Result<SqrtPriceX96, Error> {
    ensure_swappable(liquidity, sqrt_price_x96)?;

    let price_diff = mul_div(amount_in1, Q96, SqrtPriceX96::from(liquidity))?;
    Ok(sqrt_price_x96
        .checked_add(price_diff)
        .ok_or(ArithmeticError::Overflow)?)
}

/// Next sqrt price after adding `amount_in0` of token0 (price falls):
/// `floor(L * current * Q96 / (L * Q96 + amount_in0 * current))`.
///
/// Both sides are evaluated in 512 bits; the result never exceeds the
/// current price so it always narrows back.
pub fn step_input0(
    liquidity: Liquidity,
    sqrt_price_x96: SqrtPriceX96,
    amount_in0: TokenAmount,
) -> Result<SqrtPriceX96, Error> {
    ensure_swappable(liquidity, sqrt_price_x96)?;

    let numerator1 = widen(SqrtPriceX96::from(liquidity)) << RESOLUTION;
    let price = widen(sqrt_price_x96);

    let numerator = numerator1
        .checked_mul(price)
        .ok_or(ArithmeticError::Overflow)?;
    let denominator = widen(amount_in0)
        .checked_mul(price)
        .and_then(|product| product.checked_add(numerator1))
        .ok_or(ArithmeticError::Overflow)?;

    Ok(narrow(numerator / denominator)?)
}

/// Runs one exact-input swap step and derives the amounts exchanged.
///
/// The step never crosses a tick; sequencing steps across initialized
/// ticks is up to the caller.
pub fn compute_swap_step(
    liquidity: Liquidity,
    sqrt_price_x96: SqrtPriceX96,
    amount_in: TokenAmount,
    zero_for_one: bool,
) -> Result<SwapStep, Error> {
    let sqrt_price_next = if zero_for_one {
        step_input0(liquidity, sqrt_price_x96, amount_in)?
    } else {
        step_input1(liquidity, sqrt_price_x96, amount_in)?
    };

    let amount0 = amount0_from_liquidity(liquidity, sqrt_price_x96, sqrt_price_next)?;
    let amount1 = amount1_from_liquidity(liquidity, sqrt_price_x96, sqrt_price_next)?;

    let (amount_in_realized, amount_out) = if zero_for_one {
        (amount0, amount1)
    } else {
        (amount1, amount0)
    };

    tracing::trace!(
        zero_for_one,
        %sqrt_price_x96,
        %sqrt_price_next,
        %amount_in,
        amount_in_realized = %amount_in_realized,
        %amount_out,
        "swap step"
    );

    Ok(SwapStep {
        zero_for_one,
        sqrt_price_start: sqrt_price_x96,
        sqrt_price_next,
        amount_specified: amount_in,
        amount_in: amount_in_realized,
        amount_out,
    })
}
