//! Signed to unsigned mappings that keep small magnitudes small.
//!
//! Plain zigzag interleaves the signs: 0, -1, 1, -2, 2, ... become
//! 0, 1, 2, 3, 4, ... The block form does the same to blocks of
//! `2^block_exponent` values, leaving the position inside a block as is. With
//! `block_exponent` 2 the order of codes is
//! 0, 1, 2, 3, -1, -2, -3, -4, 4, 5, 6, 7, -5, -6, -7, -8, ...

use crate::bit_repr::lower_bits;

pub fn encode(val: i64) -> u64 {
    ((val as u64) << 1) ^ ((val >> 63) as u64)
}

pub fn decode(val: u64) -> i64 {
    if val & 1 == 1 {
        // computed this way so that u64::MAX decodes to i64::MIN without overflow
        -1 - (val >> 1) as i64
    } else {
        (val >> 1) as i64
    }
}

pub fn encode_block(val: i64, block_exponent: u8) -> u64 {
    assert!(block_exponent < 64, "block exponent {} out of range", block_exponent);
    // magnitude of negative numbers is shifted by one: -1 -> 0, i64::MIN -> i64::MAX
    let (magnitude, sign) = if val >= 0 {
        (val as u64, 0)
    } else {
        (!val as u64, 1)
    };
    let block_num = ((magnitude >> block_exponent) << 1) + sign;
    let pos = lower_bits(magnitude, block_exponent);
    (block_num << block_exponent) + pos
}

pub fn decode_block(val: u64, block_exponent: u8) -> i64 {
    assert!(block_exponent < 64, "block exponent {} out of range", block_exponent);
    let block_num = val >> block_exponent;
    let pos = lower_bits(val, block_exponent);
    let magnitude = (((block_num >> 1) << block_exponent) + pos) as i64;
    if block_num & 1 == 1 {
        -1 - magnitude
    } else {
        magnitude
    }
}

/// Block exponent actually used for a `bits` wide signed value. Exponents past
/// `bits - 1` only move the sign out of the value's width, so they are capped
/// there; the code then always fits in `bits` bits.
pub fn effective_exponent(block_exponent: u8, bits: u8) -> u8 {
    assert!(block_exponent < 64, "block exponent {} out of range", block_exponent);
    block_exponent.min(bits - 1)
}
