use crate::U256_1;
use crate::error::{DomainError, Error};
use crate::math::bit_math::{least_significant_bit, most_significant_bit};
use crate::{Tick, TickWord, WORD_BITS};
use alloy_primitives::U256;
use std::ops::Shr;

/// Computes the bitmap word index and bit position for a given tick.
///
/// The word is an arithmetic shift (rounds toward negative infinity) and
/// the bit is the Euclidean remainder, so negative ticks land in `[0, 256)`
/// too and `word * 256 + bit == tick` always holds.
pub fn word_and_bit(tick: Tick) -> (i32, u8) {
    (tick.shr(8), tick.rem_euclid(WORD_BITS as i32) as u8)
}

/// Returns a word with only `bit_index` set.
///
/// Fails with `DomainError::BitIndexOutOfRange` outside `[0, 256)`.
pub fn bit_mask(bit_index: i32) -> Result<TickWord, DomainError> {
    if !(0..WORD_BITS as i32).contains(&bit_index) {
        return Err(DomainError::BitIndexOutOfRange);
    }
    Ok(U256_1 << bit_index as usize)
}

/// Toggles the initialized flag at `bit_index` and returns the new word.
///
/// The caller owns bitmap storage and writes the result back itself.
pub fn flip_bit(word: TickWord, bit_index: i32) -> Result<TickWord, DomainError> {
    Ok(word ^ bit_mask(bit_index)?)
}

/// Whether the flag at `bit_index` is set in `word`.
pub fn is_initialized(word: TickWord, bit_index: i32) -> Result<bool, DomainError> {
    Ok(!(word & bit_mask(bit_index)?).is_zero())
}

/// Searches a single word for the nearest set bit at or below `bit`
/// (`lte`) or strictly above it.
///
/// Returns the bit found and `true`, or the word boundary in the search
/// direction (`0` or `255`) and `false` when the word has no candidate.
pub fn next_initialized_bit_within_word(
    word: TickWord,
    bit: u8,
    lte: bool,
) -> Result<(u8, bool), Error> {
    if lte {
        // all bits at or below `bit`
        let mask: U256 = (U256_1 << bit as usize) - U256_1 + (U256_1 << bit as usize);
        let masked = word & mask;

        if masked.is_zero() {
            Ok((0, false))
        } else {
            Ok((most_significant_bit(masked)?, true))
        }
    } else {
        if bit == u8::MAX {
            return Ok((u8::MAX, false));
        }
        // all bits strictly above `bit`
        let mask: U256 = !((U256_1 << (bit as usize + 1)) - U256_1);
        let masked = word & mask;

        if masked.is_zero() {
            Ok((u8::MAX, false))
        } else {
            Ok((least_significant_bit(masked)?, true))
        }
    }
}
