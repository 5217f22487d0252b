use crate::error::ArithmeticError;
use alloy_primitives::{U256, U512};

const U256_ONE: U256 = U256::ONE;
const U256_TWO: U256 = U256::from_limbs([2, 0, 0, 0]);
const U256_THREE: U256 = U256::from_limbs([3, 0, 0, 0]);

/// Computes `a * b / denominator` with full 512‑bit intermediate precision,
/// rounding down, and returning an `ArithmeticError` on overflow or
/// division by zero.
///
/// This mirrors the Solidity `FullMath.mulDiv` behavior and underpins
/// the liquidity, amount and swap calculations.
#[inline]
pub fn mul_div(a: U256, b: U256, mut denominator: U256) -> Result<U256, ArithmeticError> {
    if denominator.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    let mm = a.mul_mod(b, U256::MAX);
    let mut prod0 = a.wrapping_mul(b);

    let (mut prod1, borrow1) = mm.overflowing_sub(prod0);
    if borrow1 {
        prod1 = prod1.wrapping_sub(U256_ONE);
    }

    if prod1.is_zero() {
        return Ok(prod0.wrapping_div(denominator));
    }

    if denominator <= prod1 {
        return Err(ArithmeticError::Overflow);
    }

    let remainder = a.mul_mod(b, denominator);
    let (prod0_new, borrow2) = prod0.overflowing_sub(remainder);
    prod0 = prod0_new;
    if borrow2 {
        prod1 = prod1.wrapping_sub(U256_ONE);
    }

    let twos = denominator & denominator.wrapping_neg();
    denominator = denominator.wrapping_div(twos);
    prod0 = prod0.wrapping_div(twos);

    let twos_adj = twos
        .wrapping_neg()
        .wrapping_div(twos)
        .wrapping_add(U256_ONE);
    prod0 |= prod1.wrapping_mul(twos_adj);

    let mut inv = U256_THREE.wrapping_mul(denominator) ^ U256_TWO;

    macro_rules! newton_iteration {
        () => {
            inv = inv.wrapping_mul(U256_TWO.wrapping_sub(denominator.wrapping_mul(inv)))
        };
    }

    newton_iteration!();
    newton_iteration!();
    newton_iteration!();
    newton_iteration!();
    newton_iteration!();
    newton_iteration!();

    Ok(prod0.wrapping_mul(inv))
}

/// Zero‑extends a `U256` into a `U512`.
#[inline]
pub fn widen(x: U256) -> U512 {
    let l = x.as_limbs();
    U512::from_limbs([l[0], l[1], l[2], l[3], 0, 0, 0, 0])
}

/// Truncates a `U512` back to 256 bits, failing with
/// `ArithmeticError::Overflow` if any high limb is set.
#[inline]
pub fn narrow(x: U512) -> Result<U256, ArithmeticError> {
    let l = x.as_limbs();
    if l[4..].iter().any(|&limb| limb != 0) {
        return Err(ArithmeticError::Overflow);
    }
    Ok(U256::from_limbs([l[0], l[1], l[2], l[3]]))
}

/// Narrows a 256‑bit value to `u128`, the width used for liquidity.
#[inline]
pub fn narrow_u128(x: U256) -> Result<u128, ArithmeticError> {
    let l = x.as_limbs();
    if l[2] != 0 || l[3] != 0 {
        return Err(ArithmeticError::Overflow);
    }
    Ok(((l[1] as u128) << 64) | l[0] as u128)
}

/// Integer square root, `floor(sqrt(n))`, by Newton iteration.
///
/// The starting point `2^ceil(bits / 2)` is never below the root, so the
/// iterates decrease monotonically and stop at the floor.
pub fn sqrt_floor(n: U512) -> U512 {
    if n < U512::from(2u8) {
        return n;
    }

    let mut x = U512::ONE << n.bit_len().div_ceil(2);
    loop {
        let y = (x + n / x) >> 1usize;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Converts a `U512` to the nearest `f64`.
///
/// The top 64 bits are kept and every discarded bit is folded into a
/// sticky bit, so the final `u64 -> f64` cast rounds exactly once.
pub fn u512_to_f64(x: U512) -> f64 {
    let bits = x.bit_len();
    if bits <= 64 {
        return x.as_limbs()[0] as f64;
    }

    let shift = bits - 64;
    let mut top = (x >> shift).as_limbs()[0];
    if x.trailing_zeros() < shift {
        top |= 1;
    }
    top as f64 * 2f64.powi(shift as i32)
}

#[inline]
pub fn u256_to_f64(x: U256) -> f64 {
    u512_to_f64(widen(x))
}
