#![allow(dead_code)]

use clmm_price_math::math::{
    bit_math, fixed_point, liquidity_math, math_helpers, sqrt_price_math, swap_math, tick_bitmap,
    tick_math,
};
use clmm_price_math::U256;
use criterion::{black_box, Criterion};
use std::str::FromStr;

fn sqrt_price(s: &str) -> U256 {
    U256::from_str(s).unwrap()
}

pub fn bench_tick_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_math");

    group.bench_function("get_sqrt_ratio_at_tick", |b| {
        b.iter(|| tick_math::get_sqrt_ratio_at_tick(black_box(85176)))
    });
    group.bench_function("get_tick_at_sqrt_ratio", |b| {
        let price = sqrt_price("5602277097478613991873193822745");
        b.iter(|| tick_math::get_tick_at_sqrt_ratio(black_box(price)))
    });
    group.bench_function("tick_to_price", |b| {
        b.iter(|| tick_math::tick_to_price(black_box(-85177)))
    });
    group.bench_function("price_to_tick", |b| {
        b.iter(|| tick_math::price_to_tick(black_box(5003.913912782393)))
    });
    group.bench_function("price_to_tick_out_of_bounds", |b| {
        b.iter(|| tick_math::price_to_tick(black_box(1e-45)))
    });

    group.finish();
}

pub fn bench_fixed_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_point");

    group.bench_function("encode_sqrt_price", |b| {
        b.iter(|| fixed_point::encode_sqrt_price(black_box(5000.0)))
    });
    group.bench_function("decode_sqrt_price", |b| {
        let price = sqrt_price("5602277097478613991873193822745");
        b.iter(|| fixed_point::decode_sqrt_price(black_box(price)))
    });

    group.finish();
}

pub fn bench_sqrt_price_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_price_math");

    let lower = sqrt_price("5341294542274603308663431498078");
    let current = sqrt_price("5602277097478613991873193822745");
    let upper = sqrt_price("5875717789736564960263981960873");
    let liquidity = 1_517_882_343_751_510_417_954u128;

    group.bench_function("amount0_from_liquidity", |b| {
        b.iter(|| {
            sqrt_price_math::amount0_from_liquidity(
                black_box(liquidity),
                black_box(current),
                black_box(upper),
            )
        })
    });
    group.bench_function("amount1_from_liquidity", |b| {
        b.iter(|| {
            sqrt_price_math::amount1_from_liquidity(
                black_box(liquidity),
                black_box(lower),
                black_box(current),
            )
        })
    });
    group.bench_function("liquidity_for_amounts", |b| {
        let amount0 = U256::from(1_000_000_000_000_000_000u128);
        let amount1 = U256::from(5_000_000_000_000_000_000_000u128);
        b.iter(|| {
            liquidity_math::liquidity_for_amounts(
                black_box(current),
                black_box(lower),
                black_box(upper),
                black_box(amount0),
                black_box(amount1),
            )
        })
    });

    group.finish();
}

pub fn bench_swap_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_math");

    let current = sqrt_price("5602277097478613991873193822745");
    let liquidity = 1_517_882_343_751_510_417_954u128;

    group.bench_function("compute_swap_step_one_for_zero", |b| {
        let amount = U256::from(42_000_000_000_000_000_000u128);
        b.iter(|| {
            swap_math::compute_swap_step(
                black_box(liquidity),
                black_box(current),
                black_box(amount),
                false,
            )
        })
    });
    group.bench_function("compute_swap_step_zero_for_one", |b| {
        let amount = U256::from(13_370_000_000_000_000u128);
        b.iter(|| {
            swap_math::compute_swap_step(
                black_box(liquidity),
                black_box(current),
                black_box(amount),
                true,
            )
        })
    });

    group.finish();
}

pub fn bench_math_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("math_helpers");

    group.bench_function("mul_div", |b| {
        let a = U256::MAX >> 1usize;
        let m = U256::from(3u64) << 200usize;
        let d = U256::MAX >> 2usize;
        b.iter(|| math_helpers::mul_div(black_box(a), black_box(m), black_box(d)))
    });
    group.bench_function("sqrt_floor", |b| {
        let n = math_helpers::widen(U256::MAX) << 190usize;
        b.iter(|| math_helpers::sqrt_floor(black_box(n)))
    });

    group.finish();
}

pub fn bench_tick_bitmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_bitmap");

    let word = U256::from_limbs([0x10, 0, 1 << 40, 0]);

    group.bench_function("word_and_bit", |b| {
        b.iter(|| tick_bitmap::word_and_bit(black_box(-85177)))
    });
    group.bench_function("flip_bit", |b| {
        b.iter(|| tick_bitmap::flip_bit(black_box(word), black_box(184)))
    });
    group.bench_function("next_initialized_bit_within_word", |b| {
        b.iter(|| tick_bitmap::next_initialized_bit_within_word(black_box(word), 100, true))
    });

    group.finish();
}

pub fn bench_bit_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_math");

    let x = U256::from_limbs([0, 1 << 17, 0, 1 << 3]);

    group.bench_function("most_significant_bit", |b| {
        b.iter(|| bit_math::most_significant_bit(black_box(x)))
    });
    group.bench_function("least_significant_bit", |b| {
        b.iter(|| bit_math::least_significant_bit(black_box(x)))
    });

    group.finish();
}
