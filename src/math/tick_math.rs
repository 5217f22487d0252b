use crate::error::{ArithmeticError, DomainError, Error};
use crate::math::bit_math::most_significant_bit;
use crate::math::fixed_point::encode_sqrt_price;
use crate::math::math_helpers::{u512_to_f64, widen};
use crate::{Price, SqrtPriceX96, Tick, TICK_BASE};
use alloy_primitives::{I256, U256, U512};

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

pub const SQRT_10001: I256 = I256::from_raw(U256::from_limbs([11745905768312294533, 13863, 0, 0]));
pub const TICK_LOW: I256 = I256::from_raw(U256::from_limbs([
    6552757943157144234,
    184476617836266586,
    0,
    0,
]));
pub const TICK_HIGH: I256 = I256::from_raw(U256::from_limbs([
    4998474450511881007,
    15793544031827761793,
    0,
    0,
]));

/// `sqrt(1.0001)^-abs_tick` as a Q128.128 number, truncated at every step.
///
/// Callers must keep `abs_tick <= MAX_TICK`; the bit table below covers
/// exactly that range.
fn inverse_sqrt_ratio_x128(abs_tick: u32) -> U256 {
    let mut ratio = if abs_tick & 1 != 0 {
        U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0])
    } else {
        U256::from_limbs([0, 0, 1, 0])
    };

    macro_rules! apply_multiplier {
        ($bit:expr, $l0:expr, $l1:expr) => {
            if abs_tick & $bit != 0 {
                ratio = ratio.wrapping_mul(U256::from_limbs([$l0, $l1, 0, 0])) >> 128usize;
            }
        };
    }

    apply_multiplier!(2, 6459403834229662010, 18444899583751176498);
    apply_multiplier!(4, 17226890335427755468, 18443055278223354162);
    apply_multiplier!(8, 2032852871939366096, 18439367220385604838);
    apply_multiplier!(16, 14545316742740207172, 18431993317065449817);
    apply_multiplier!(32, 5129152022828963008, 18417254355718160513);
    apply_multiplier!(64, 4894419605888772193, 18387811781193591352);
    apply_multiplier!(128, 1280255884321894483, 18329067761203520168);
    apply_multiplier!(256, 15924666964335305636, 18212142134806087854);
    apply_multiplier!(512, 8010504389359918676, 17980523815641551639);
    apply_multiplier!(1024, 10668036004952895731, 17526086738831147013);
    apply_multiplier!(2048, 4878133418470705625, 16651378430235024244);
    apply_multiplier!(4096, 9537173718739605541, 15030750278693429944);
    apply_multiplier!(8192, 9972618978014552549, 12247334978882834399);
    apply_multiplier!(16384, 10428997489610666743, 8131365268884726200);
    apply_multiplier!(32768, 9305304367709015974, 3584323654723342297);
    apply_multiplier!(65536, 14301143598189091785, 696457651847595233);
    apply_multiplier!(131072, 7393154844743099908, 26294789957452057);
    apply_multiplier!(262144, 2209338891292245656, 37481735321082);
    apply_multiplier!(524288, 10518117631919034274, 76158723);

    ratio
}

/// Returns the Q64.96 sqrt price at `tick`, rounded up, or
/// `DomainError::TickOutOfBounds` outside `[MIN_TICK, MAX_TICK]`.
pub fn get_sqrt_ratio_at_tick(tick: Tick) -> Result<SqrtPriceX96, DomainError> {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK as u32 {
        return Err(DomainError::TickOutOfBounds);
    }

    let mut ratio = inverse_sqrt_ratio_x128(abs_tick);
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so the result is never below the
    // true ratio at this tick
    let lower_32_bits = ratio.as_limbs()[0] & 0xFFFF_FFFF;
    Ok((ratio >> 32usize) + U256::from((lower_32_bits != 0) as u64))
}

/// Returns the greatest tick whose sqrt ratio is `<= sqrt_price_x96`.
///
/// Only defined on `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`; anything else is
/// `DomainError::SqrtPriceOutOfBounds`. Integer-only: `log2` is taken from
/// the most significant bit plus 14 squaring steps for the fraction.
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: SqrtPriceX96) -> Result<Tick, Error> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(DomainError::SqrtPriceOutOfBounds.into());
    }

    let ratio = sqrt_price_x96 << 32usize;
    let msb = most_significant_bit(ratio)? as usize;

    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    let mut log_2: I256 =
        (I256::from_raw(U256::from(msb)) - I256::from_raw(U256::from(128u64))) << 64usize;

    for shift in (50usize..=63).rev() {
        r = r.wrapping_mul(r) >> 127usize;
        let f = (r >> 128usize).as_limbs()[0] as usize;
        log_2 |= I256::from_raw(U256::from(f) << shift);
        r >>= f;
    }

    let log_sqrt10001 = log_2.wrapping_mul(SQRT_10001);
    let tick_low = (log_sqrt10001 - TICK_LOW).asr(128).low_i32();
    let tick_high = (log_sqrt10001 + TICK_HIGH).asr(128).low_i32();

    Ok(if tick_low == tick_high {
        tick_low
    } else if get_sqrt_ratio_at_tick(tick_high)? <= sqrt_price_x96 {
        tick_high
    } else {
        tick_low
    })
}

/// Returns the real price `1.0001^tick`.
///
/// Accuracy: for `|tick| <= MAX_TICK` the price is built from the Q128.128
/// sqrt ratio, squared exactly in 512 bits and rounded to `f64` once. The
/// truncation error of the ratio stays below `2^-60` relative, so the
/// result is within one ULP of the true value over the whole tick range.
/// Past `MAX_TICK` this falls back to `f64::powf`; the representation error
/// of `1.0001` itself is amplified by `|tick|` there, so the error exceeds
/// one ULP from the first tick outside the range.
pub fn tick_to_price(tick: Tick) -> Price {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK as u32 {
        return TICK_BASE.powf(f64::from(tick));
    }

    let ratio = widen(inverse_sqrt_ratio_x128(abs_tick));
    // Q256.256 of 1.0001^-|tick|, at most 2^256
    let inverse_price = ratio * ratio;
    let scale = 2f64.powi(-256);

    if tick <= 0 {
        u512_to_f64(inverse_price) * scale
    } else {
        u512_to_f64(U512::MAX / inverse_price) * scale
    }
}

/// Maps a real price to the highest tick whose grid price does not exceed it.
///
/// Inside the sqrt-ratio bounds the estimate comes from exact integer tick
/// math on the encoded price; outside them from `floor(ln(p) / ln(1.0001))`.
/// The estimate is then settled against [`tick_to_price`], so
/// `tick_to_price(t) <= price < tick_to_price(t + 1)` always holds.
pub fn price_to_tick(price: Price) -> Result<Tick, Error> {
    if !(price > 0.0) {
        return Err(DomainError::NonPositivePrice.into());
    }
    if !price.is_finite() {
        return Err(ArithmeticError::Overflow.into());
    }

    let estimate = match encode_sqrt_price(price) {
        Ok(sqrt_price) if sqrt_price >= MIN_SQRT_RATIO && sqrt_price < MAX_SQRT_RATIO => {
            get_tick_at_sqrt_ratio(sqrt_price)?
        }
        Ok(_) | Err(Error::Arithmetic(_)) => {
            let tick = (price.ln() / TICK_BASE.ln()).floor() as i32;
            tracing::debug!(price, tick, "price outside sqrt ratio bounds, using float estimate");
            tick
        }
        Err(err) => return Err(err),
    };

    let mut tick = estimate;
    while tick_to_price(tick) > price {
        tick -= 1;
    }
    while tick_to_price(tick + 1) <= price {
        tick += 1;
    }
    if tick != estimate {
        tracing::trace!(estimate, tick, "tick estimate corrected");
    }
    Ok(tick)
}
