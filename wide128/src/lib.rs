//! Software emulation of an unsigned 128-bit integer.
//!
//! [`Wide128`] stores a value as two 64-bit limbs (`high * 2^64 + low`) and
//! implements the arithmetic, bitwise, shift, comparison, conversion and
//! hexadecimal-formatting surface of a native unsigned fixed-width integer,
//! with wraparound (mod 2^128) overflow semantics. It is meant for targets
//! and toolchains that do not provide a native 128-bit type.
//!
//! Every operation is a pure, allocation-free transformation over the limb
//! pair; values are `Copy` and safe to share across threads.
//!
//! The only checked failure mode is division by zero, see
//! [`DivideByZeroError`]. The remainder operator deliberately does *not*
//! fail on a zero divisor, see the documentation on [`Wide128`]'s `Rem`
//! implementation.
//!
//! ```
//! use wide128::Wide128;
//!
//! let a = Wide128::from_parts(0, u64::MAX);
//! let b = a + Wide128::ONE;
//! assert_eq!(b, Wide128::from_parts(1, 0));
//! assert_eq!(format!("{b:x}"), "10000000000000000");
//! ```

mod algorithms;
mod cast;
mod error;
mod wide128;

pub use cast::{CastFrom, CastInto};
pub use error::{DivideByZeroError, UnwrapResultExt};
pub use wide128::Wide128;
