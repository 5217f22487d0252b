//! Concentrated-liquidity AMM price math in pure Rust.
//!
//! This crate exposes stateless primitives over the three price
//! representations used by constant-liquidity exchanges:
//! - real prices (`f64`, token1 per token0),
//! - discrete ticks on the `1.0001` grid (`i32`),
//! - Q64.96 fixed-point square-root prices (`U256`).
//!
//! On top of those it derives liquidity from deposits, token amounts from
//! liquidity, single-range swap steps and tick bitmap addressing. Pool
//! state, multi-tick swaps and fee accounting belong to the caller.
//!
//! # Examples
//!
//! ## Depositing into a range
//! ```no_run
//! use clmm_price_math::math::{fixed_point, liquidity_math};
//! use clmm_price_math::U256;
//!
//! let current = fixed_point::encode_sqrt_price(5000.0).unwrap();
//! let lower = fixed_point::encode_sqrt_price(4545.0).unwrap();
//! let upper = fixed_point::encode_sqrt_price(5500.0).unwrap();
//!
//! let eth = U256::from(10u64).pow(U256::from(18u64));
//! let liquidity = liquidity_math::liquidity_for_amounts(
//!     current,
//!     lower,
//!     upper,
//!     eth,
//!     eth * U256::from(5000u64),
//! )
//! .unwrap();
//! assert!(liquidity > 0);
//! ```
//!
//! ## Simulating one swap step
//! ```no_run
//! use clmm_price_math::math::{fixed_point, swap_math};
//! use clmm_price_math::U256;
//!
//! let sqrt_price = fixed_point::encode_sqrt_price(5000.0).unwrap();
//! let liquidity = 1_517_882_343_751_510_417_954u128;
//! let amount_in = U256::from(42_000_000_000_000_000_000u128);
//!
//! // token1 in, price rises
//! let step = swap_math::compute_swap_step(liquidity, sqrt_price, amount_in, false).unwrap();
//! assert!(step.sqrt_price_next > sqrt_price);
//! println!("in: {}, out: {}", step.amount_in, step.amount_out);
//! ```

pub use alloy_primitives::{I256, U256, U512};

pub mod error;
pub mod math;

pub use error::{ArithmeticError, DomainError, Error};
pub use math::swap_math::SwapStep;

/// A real price, token1 per token0.
pub type Price = f64;
/// `sqrt(price) * 2^96`.
pub type SqrtPriceX96 = U256;
/// Index on the `1.0001` price grid.
pub type Tick = i32;
/// The constant-liquidity parameter `L` of a range.
pub type Liquidity = u128;
/// Token units scaled by the token's decimals.
pub type TokenAmount = U256;
/// One 256-bit word of the tick bitmap.
pub type TickWord = U256;

const U256_1: U256 = U256::from_limbs([1, 0, 0, 0]);

pub const RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);

/// Base of the tick grid: `price(tick) = TICK_BASE^tick`.
pub const TICK_BASE: f64 = 1.0001;

/// Number of tick flags held by one bitmap word.
pub const WORD_BITS: u32 = 256;
