use std::ops::ShlAssign;

use crate::algorithms;
use crate::cast::CastFrom;
use crate::error::{DivideByZeroError, UnwrapResultExt};

/// An unsigned 128-bit integer emulated as two 64-bit limbs.
///
/// The represented value is `high * 2^64 + low`. Arithmetic wraps modulo
/// 2^128, like the native unsigned fixed-width types; the only checked
/// failure mode is division by zero.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Wide128 {
    pub(crate) high: u64,
    pub(crate) low: u64,
}

impl Wide128 {
    pub const BITS: u32 = 128;
    pub const MIN: Self = Self { high: 0, low: 0 };
    pub const MAX: Self = Self {
        high: u64::MAX,
        low: u64::MAX,
    };
    pub const ZERO: Self = Self { high: 0, low: 0 };
    pub const ONE: Self = Self { high: 0, low: 1 };
    pub const TWO: Self = Self { high: 0, low: 2 };

    /// Builds a value from its low limb, with a zero high limb.
    pub const fn from_low(low: u64) -> Self {
        Self { high: 0, low }
    }

    /// Builds a value from an explicit `(high, low)` limb pair.
    pub const fn from_parts(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Bits 64..=127 of the value.
    pub const fn high(self) -> u64 {
        self.high
    }

    /// Bits 0..=63 of the value.
    pub const fn low(self) -> u64 {
        self.low
    }

    /// Adds one in place, wrapping at [`Self::MAX`].
    ///
    /// `Wide128` is `Copy`, so the postfix-increment idiom is a caller-side
    /// snapshot: `let before = v; v.increment();`.
    pub fn increment(&mut self) {
        let before = self.low;
        self.low = self.low.wrapping_add(1);
        if before > self.low {
            self.high = self.high.wrapping_add(1);
        }
    }

    /// Subtracts one in place, wrapping at [`Self::ZERO`].
    pub fn decrement(&mut self) {
        let before = self.low;
        self.low = self.low.wrapping_sub(1);
        if before < self.low {
            self.high = self.high.wrapping_sub(1);
        }
    }

    /// Computes quotient and remainder in a single pass.
    ///
    /// Unlike the `%` operator, the remainder returned here comes from the
    /// same checked surface as the quotient: a zero divisor is an error for
    /// both.
    pub fn div_rem(self, rhs: Self) -> Result<(Self, Self), DivideByZeroError> {
        algorithms::div_rem(self, rhs)
    }

    /// Checked division. Returns an error when `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, DivideByZeroError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn is_power_of_two(self) -> bool {
        if self == Self::ZERO {
            return false;
        }
        (self & (self - Self::ONE)) == Self::ZERO
    }

    pub fn leading_zeros(self) -> u32 {
        algorithms::leading_zeros(self)
    }

    pub fn ilog2(self) -> u32 {
        // Rust has the same assert
        assert!(
            self > Self::ZERO,
            "argument of integer logarithm must be positive"
        );
        Self::BITS - self.leading_zeros() - 1
    }

    pub fn ceil_ilog2(self) -> u32 {
        self.ilog2() + u32::from(!self.is_power_of_two())
    }
}

#[cfg(test)]
impl rand::distributions::Distribution<Wide128> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Wide128 {
        Wide128::from_parts(rng.gen(), rng.gen())
    }
}

impl std::cmp::Ord for Wide128 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        algorithms::compare(*self, *other)
    }
}

impl std::cmp::PartialOrd for Wide128 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u64> for Wide128 {
    fn eq(&self, other: &u64) -> bool {
        self.high == 0 && self.low == *other
    }
}

impl PartialEq<Wide128> for u64 {
    fn eq(&self, other: &Wide128) -> bool {
        other == self
    }
}

impl PartialOrd<u64> for Wide128 {
    fn partial_cmp(&self, other: &u64) -> Option<std::cmp::Ordering> {
        Some(algorithms::compare(*self, Wide128::from_low(*other)))
    }
}

impl PartialOrd<Wide128> for u64 {
    fn partial_cmp(&self, other: &Wide128) -> Option<std::cmp::Ordering> {
        Some(algorithms::compare(Wide128::from_low(*self), *other))
    }
}

impl std::ops::Add<Self> for Wide128 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign<Self> for Wide128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = algorithms::wrapping_add(*self, rhs);
    }
}

impl std::ops::Add<u64> for Wide128 {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        self + Self::from_low(rhs)
    }
}

impl std::ops::AddAssign<u64> for Wide128 {
    fn add_assign(&mut self, rhs: u64) {
        *self += Self::from_low(rhs);
    }
}

impl std::ops::Sub<Self> for Wide128 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl std::ops::SubAssign<Self> for Wide128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = algorithms::wrapping_sub(*self, rhs);
    }
}

impl std::ops::Sub<u64> for Wide128 {
    type Output = Self;

    fn sub(self, rhs: u64) -> Self::Output {
        self - Self::from_low(rhs)
    }
}

impl std::ops::SubAssign<u64> for Wide128 {
    fn sub_assign(&mut self, rhs: u64) {
        *self -= Self::from_low(rhs);
    }
}

impl std::ops::MulAssign<Self> for Wide128 {
    fn mul_assign(&mut self, rhs: Self) {
        if rhs.is_power_of_two() {
            self.shl_assign(rhs.ilog2());
            return;
        }
        *self = algorithms::wrapping_mul(*self, rhs);
    }
}

impl std::ops::Mul<Self> for Wide128 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl std::ops::Mul<u64> for Wide128 {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self::Output {
        self * Self::from_low(rhs)
    }
}

impl std::ops::MulAssign<u64> for Wide128 {
    fn mul_assign(&mut self, rhs: u64) {
        *self *= Self::from_low(rhs);
    }
}

impl std::ops::DivAssign<Self> for Wide128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl std::ops::Div<Self> for Wide128 {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when `rhs` is zero, with the [`DivideByZeroError`] message.
    /// Use [`Wide128::checked_div`] for the recoverable form.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_display()
    }
}

impl std::ops::Div<u64> for Wide128 {
    type Output = Self;

    fn div(self, rhs: u64) -> Self::Output {
        self / Self::from_low(rhs)
    }
}

impl std::ops::DivAssign<u64> for Wide128 {
    fn div_assign(&mut self, rhs: u64) {
        *self = *self / rhs;
    }
}

impl std::ops::RemAssign<Self> for Wide128 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl std::ops::Rem<Self> for Wide128 {
    type Output = Self;

    /// A zero divisor returns the dividend unchanged instead of failing.
    ///
    /// This is a deliberate asymmetry with `/`, which panics on a zero
    /// divisor; [`Wide128::div_rem`] errors on a zero divisor for callers
    /// that want `%` and `/` to agree.
    fn rem(self, rhs: Self) -> Self::Output {
        match algorithms::div_rem(self, rhs) {
            Ok((_, r)) => r,
            Err(DivideByZeroError) => self,
        }
    }
}

impl std::ops::Rem<u64> for Wide128 {
    type Output = Self;

    fn rem(self, rhs: u64) -> Self::Output {
        self % Self::from_low(rhs)
    }
}

impl std::ops::RemAssign<u64> for Wide128 {
    fn rem_assign(&mut self, rhs: u64) {
        *self = *self % rhs;
    }
}

impl std::ops::Shl<u32> for Wide128 {
    type Output = Self;

    /// Shift distances of 128 or more yield zero; the distance is not
    /// masked the way the native types mask it.
    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShlAssign<u32> for Wide128 {
    fn shl_assign(&mut self, shift: u32) {
        *self = algorithms::shl(*self, shift);
    }
}

impl std::ops::Shr<u32> for Wide128 {
    type Output = Self;

    /// Shift distances of 128 or more yield zero; the distance is not
    /// masked the way the native types mask it.
    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::ShrAssign<u32> for Wide128 {
    fn shr_assign(&mut self, shift: u32) {
        *self = algorithms::shr(*self, shift);
    }
}

impl std::ops::Shl<usize> for Wide128 {
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShlAssign<usize> for Wide128 {
    fn shl_assign(&mut self, shift: usize) {
        *self = algorithms::shl(*self, shift.min(u32::MAX as usize) as u32);
    }
}

impl std::ops::Shr<usize> for Wide128 {
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::ShrAssign<usize> for Wide128 {
    fn shr_assign(&mut self, shift: usize) {
        *self = algorithms::shr(*self, shift.min(u32::MAX as usize) as u32);
    }
}

impl std::ops::Not for Wide128 {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            high: !self.high,
            low: !self.low,
        }
    }
}

impl std::ops::BitAnd<Self> for Wide128 {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl std::ops::BitAndAssign<Self> for Wide128 {
    fn bitand_assign(&mut self, rhs: Self) {
        self.high &= rhs.high;
        self.low &= rhs.low;
    }
}

impl std::ops::BitAnd<u64> for Wide128 {
    type Output = Self;

    /// A 64-bit mask cannot retain any high-limb bit, so the high limb of
    /// the result is always zero.
    fn bitand(self, rhs: u64) -> Self::Output {
        Self {
            high: 0,
            low: self.low & rhs,
        }
    }
}

impl std::ops::BitAndAssign<u64> for Wide128 {
    fn bitand_assign(&mut self, rhs: u64) {
        self.high = 0;
        self.low &= rhs;
    }
}

impl std::ops::BitOrAssign<Self> for Wide128 {
    fn bitor_assign(&mut self, rhs: Self) {
        self.high |= rhs.high;
        self.low |= rhs.low;
    }
}

impl std::ops::BitOr<Self> for Wide128 {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl std::ops::BitOr<u64> for Wide128 {
    type Output = Self;

    fn bitor(self, rhs: u64) -> Self::Output {
        Self {
            high: self.high,
            low: self.low | rhs,
        }
    }
}

impl std::ops::BitOrAssign<u64> for Wide128 {
    fn bitor_assign(&mut self, rhs: u64) {
        self.low |= rhs;
    }
}

impl std::ops::BitXorAssign<Self> for Wide128 {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.high ^= rhs.high;
        self.low ^= rhs.low;
    }
}

impl std::ops::BitXor<Self> for Wide128 {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl std::ops::BitXor<u64> for Wide128 {
    type Output = Self;

    fn bitxor(self, rhs: u64) -> Self::Output {
        Self {
            high: self.high,
            low: self.low ^ rhs,
        }
    }
}

impl std::ops::BitXorAssign<u64> for Wide128 {
    fn bitxor_assign(&mut self, rhs: u64) {
        self.low ^= rhs;
    }
}

impl From<bool> for Wide128 {
    fn from(input: bool) -> Self {
        Self::from_low(u64::from(input))
    }
}

impl From<u8> for Wide128 {
    fn from(value: u8) -> Self {
        Self::from_low(u64::from(value))
    }
}

impl From<u16> for Wide128 {
    fn from(value: u16) -> Self {
        Self::from_low(u64::from(value))
    }
}

impl From<u32> for Wide128 {
    fn from(value: u32) -> Self {
        Self::from_low(u64::from(value))
    }
}

impl From<u64> for Wide128 {
    fn from(value: u64) -> Self {
        Self::from_low(value)
    }
}

impl CastFrom<u64> for Wide128 {
    fn cast_from(input: u64) -> Self {
        Self::from_low(input)
    }
}

impl CastFrom<Wide128> for bool {
    fn cast_from(input: Wide128) -> Self {
        (input.high | input.low) != 0
    }
}

impl CastFrom<Wide128> for u64 {
    fn cast_from(input: Wide128) -> Self {
        input.low
    }
}

impl CastFrom<Wide128> for u32 {
    fn cast_from(input: Wide128) -> Self {
        input.low as u32
    }
}

impl CastFrom<Wide128> for u16 {
    fn cast_from(input: Wide128) -> Self {
        input.low as u16
    }
}

impl CastFrom<Wide128> for u8 {
    fn cast_from(input: Wide128) -> Self {
        input.low as u8
    }
}

impl CastFrom<Wide128> for i64 {
    fn cast_from(input: Wide128) -> Self {
        input.low as i64
    }
}

impl CastFrom<Wide128> for i32 {
    fn cast_from(input: Wide128) -> Self {
        input.low as i32
    }
}

impl CastFrom<Wide128> for i16 {
    fn cast_from(input: Wide128) -> Self {
        input.low as i16
    }
}

impl CastFrom<Wide128> for i8 {
    fn cast_from(input: Wide128) -> Self {
        input.low as i8
    }
}

impl std::fmt::LowerHex for Wide128 {
    /// Lowercase hexadecimal without leading zero digits; the value zero
    /// renders as a single `0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut emitting = false;
        for shift in (0..=124u32).rev().step_by(4) {
            let nibble = if shift >= 64 {
                (self.high >> (shift - 64)) & 0xf
            } else {
                (self.low >> shift) & 0xf
            };
            if nibble != 0 || emitting || shift == 0 {
                emitting = true;
                write!(f, "{nibble:x}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Wide128 {
    /// Hexadecimal is the only textual form of the type.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(self, f)
    }
}

// SAFETY
//
// Wide128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for Wide128 {}

// SAFETY
//
// Wide128 is repr(C) over two u64 fields with no padding, and u64 impl
// bytemuck::Pod
unsafe impl bytemuck::Pod for Wide128 {}
