//! Limb-level arithmetic over the `(high, low)` pair.
//!
//! Carry and borrow are detected by comparing the result limb against the
//! original operand limb after the fact; there is no portable carry flag to
//! read. Shifts split into three cases around the limb boundary. Division
//! is restoring shift-subtract long division, bounded to one pass over the
//! 128 bits of the dividend.

use crate::error::DivideByZeroError;
use crate::wide128::Wide128;
use std::cmp::Ordering;

/// Addition modulo 2^128.
///
/// If the low limb of the sum compares smaller than the low limb of either
/// operand, the low addition overflowed and the carry goes into the high
/// limb.
pub(crate) fn wrapping_add(lhs: Wide128, rhs: Wide128) -> Wide128 {
    let low = lhs.low.wrapping_add(rhs.low);
    let mut high = lhs.high.wrapping_add(rhs.high);
    if low < lhs.low {
        high = high.wrapping_add(1);
    }
    Wide128 { high, low }
}

/// Subtraction modulo 2^128.
///
/// Symmetric to [`wrapping_add`]: a result low limb larger than the
/// minuend's low limb means the low subtraction borrowed from the high
/// limb.
pub(crate) fn wrapping_sub(lhs: Wide128, rhs: Wide128) -> Wide128 {
    let low = lhs.low.wrapping_sub(rhs.low);
    let mut high = lhs.high.wrapping_sub(rhs.high);
    if low > lhs.low {
        high = high.wrapping_sub(1);
    }
    Wide128 { high, low }
}

/// Left shift. Shifting by 128 or more yields zero.
pub(crate) fn shl(value: Wide128, bits: u32) -> Wide128 {
    if bits == 0 {
        return value;
    }
    if bits >= 128 {
        return Wide128::ZERO;
    }
    if bits >= 64 {
        return Wide128 {
            high: value.low << (bits - 64),
            low: 0,
        };
    }
    let spill = value.low >> (64 - bits);
    Wide128 {
        high: (value.high << bits) | spill,
        low: value.low << bits,
    }
}

/// Right shift. Shifting by 128 or more yields zero.
pub(crate) fn shr(value: Wide128, bits: u32) -> Wide128 {
    if bits == 0 {
        return value;
    }
    if bits >= 128 {
        return Wide128::ZERO;
    }
    if bits >= 64 {
        return Wide128 {
            high: 0,
            low: value.high >> (bits - 64),
        };
    }
    let spill = value.high << (64 - bits);
    Wide128 {
        high: value.high >> bits,
        low: (value.low >> bits) | spill,
    }
}

/// Binary long multiplication modulo 2^128.
///
/// Consumes the multiplier bit by bit; for each set bit at position `k`
/// adds `lhs << k` into the accumulator. Partial products shifted past bit
/// 127 are discarded by the shift contract, which is exactly the mod-2^128
/// reduction. Cost is proportional to the bit length of the multiplier.
pub(crate) fn wrapping_mul(lhs: Wide128, rhs: Wide128) -> Wide128 {
    let mut sum = Wide128::ZERO;
    let mut multiplier = rhs;
    let mut shift = 0u32;
    while multiplier != Wide128::ZERO {
        if multiplier.low & 1 == 1 {
            sum = wrapping_add(sum, shl(lhs, shift));
        }
        multiplier = shr(multiplier, 1);
        shift += 1;
    }
    sum
}

/// Restoring shift-subtract long division.
///
/// Builds the remainder one dividend bit at a time, most significant
/// first, subtracting the divisor whenever the running remainder reaches
/// it. The remainder stays below the divisor between iterations, so the
/// loop runs exactly 128 times regardless of the operand values.
pub(crate) fn div_rem(
    lhs: Wide128,
    rhs: Wide128,
) -> Result<(Wide128, Wide128), DivideByZeroError> {
    if rhs == Wide128::ZERO {
        return Err(DivideByZeroError);
    }
    let mut quotient = Wide128::ZERO;
    let mut remainder = Wide128::ZERO;
    for bit in (0..128u32).rev() {
        // A remainder already occupying bit 127 loses that bit in the
        // shift; the true doubled value then necessarily exceeds the
        // divisor, so the shifted-out bit forces the subtraction, and the
        // wrapping subtraction below lands on the correct remainder.
        let shifted_out = remainder.high >> 63;
        remainder = shl(remainder, 1);
        remainder.low |= bit_at(lhs, bit);
        if shifted_out == 1 || compare(remainder, rhs) != Ordering::Less {
            remainder = wrapping_sub(remainder, rhs);
            set_bit(&mut quotient, bit);
        }
    }
    Ok((quotient, remainder))
}

/// Lexicographic comparison on `(high, low)`.
pub(crate) fn compare(lhs: Wide128, rhs: Wide128) -> Ordering {
    match lhs.high.cmp(&rhs.high) {
        Ordering::Equal => lhs.low.cmp(&rhs.low),
        ord => ord,
    }
}

pub(crate) fn leading_zeros(value: Wide128) -> u32 {
    if value.high != 0 {
        value.high.leading_zeros()
    } else {
        u64::BITS + value.low.leading_zeros()
    }
}

fn bit_at(value: Wide128, bit: u32) -> u64 {
    if bit >= 64 {
        (value.high >> (bit - 64)) & 1
    } else {
        (value.low >> bit) & 1
    }
}

fn set_bit(value: &mut Wide128, bit: u32) {
    if bit >= 64 {
        value.high |= 1u64 << (bit - 64);
    } else {
        value.low |= 1u64 << bit;
    }
}
