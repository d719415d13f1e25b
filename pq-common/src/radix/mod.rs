//! Generalized base-R packing.
//!
//! An array of `n` digits in `[0, R)` is read as the number `sum(d[i] * R^i)` (index 0 least
//! significant) and written little-endian into the fewest bytes that can hold `R^n - 1`.
//! Power-of-two radices take a bit-accumulator fast path; every other radix goes through
//! schoolbook multiplication on encode and long division on decode. Both paths produce the
//! same positional number.
//!
//! Neither direction branches on digit or byte values. The only data-dependent work is
//! arithmetic on public-length buffers.

mod codecs;

pub use codecs::*;

use alloc::vec::Vec;
use core::fmt::Debug;
use hybrid_array::{Array, ArraySize, typenum::Unsigned};
use zeroize::Zeroize;

use crate::{FixedArray, ct};

/// Exclusive bound on non-power-of-two radices: long division goes through
/// [`ct::divmod_u14`].
pub const MAX_DIVISOR_RADIX: u32 = 16384;

/// Limbs of scratch available to [`str_bytes`]: 32768 bits.
const BIG_LIMBS: usize = 1024;

/// Integer types that can hold a single digit.
pub trait Digit: Copy + Default + Debug + Eq + Into<u32> {
    /// Largest radix a digit of this width can carry.
    const MAX_RADIX: u32;

    /// Keeps the low bits of `x` that fit in `Self`.
    fn truncate(x: u32) -> Self;
}

macro_rules! define_digit {
    ($t:ty) => {
        impl Digit for $t {
            const MAX_RADIX: u32 = <$t>::MAX as u32 + 1;

            #[allow(clippy::cast_possible_truncation)]
            fn truncate(x: u32) -> $t {
                (x & u32::from(<$t>::MAX)) as $t
            }
        }
    };
}

define_digit!(u8);
define_digit!(u16);

const fn bit_length(x: u32) -> usize {
    (u32::BITS - x.leading_zeros()) as usize
}

/// Minimal number of bytes holding `radix^items - 1`.
///
/// Usable in constant context; every [`RadixCodec`] checks its `StrBytes` against it at
/// compile time.
///
/// # Panics
/// If `radix < 2`, or the number needs more than 32768 bits.
#[must_use]
pub const fn str_bytes(radix: u32, items: usize) -> usize {
    assert!(radix >= 2, "radix must be at least 2");
    if items == 0 {
        return 0;
    }
    if radix.is_power_of_two() {
        return (items * radix.trailing_zeros() as usize).div_ceil(8);
    }

    // radix^items in 32-bit limbs, least significant first
    let mut limbs = [0u32; BIG_LIMBS];
    limbs[0] = 1;
    let mut len = 1;
    let mut n = 0;
    while n < items {
        let mut carry = 0u64;
        let mut i = 0;
        while i < len {
            let t = limbs[i] as u64 * radix as u64 + carry;
            limbs[i] = t as u32;
            carry = t >> 32;
            i += 1;
        }
        if carry != 0 {
            assert!(len < BIG_LIMBS, "radix codec too large");
            limbs[len] = carry as u32;
            len += 1;
        }
        n += 1;
    }

    // radix is not a power of two, so neither is radix^items, and subtracting one keeps
    // the bit length
    let bits = (len - 1) * 32 + bit_length(limbs[len - 1]);
    bits.div_ceil(8)
}

/// Length check for the slice entry points. Cheap for powers of two only.
fn debug_check_len(radix: u32, items: usize, bytes: usize) {
    if cfg!(debug_assertions) {
        assert_eq!(bytes, str_bytes(radix, items), "packed length for radix {radix}");
    }
}

/// Number of low bytes that can be non-zero while the value is below `radix^digits`.
fn live_bytes(radix: u32, digits: usize, len: usize) -> usize {
    (digits * bit_length(radix)).div_ceil(8).min(len)
}

/// Packs `digits` into `out`.
///
/// `out.len()` must equal [`str_bytes`]`(radix, digits.len())` and every digit must be
/// below `radix`; both are checked in debug builds only.
///
/// # Panics
/// If `radix` is not a power of two and exceeds [`MAX_DIVISOR_RADIX`], or does not fit
/// the digit type.
pub fn encode_into<D: Digit>(radix: u32, digits: &[D], out: &mut [u8]) {
    assert!((2..=D::MAX_RADIX).contains(&radix), "radix {radix} out of range");
    debug_check_len(radix, digits.len(), out.len());
    debug_assert!(
        digits.iter().all(|&d| Into::<u32>::into(d) < radix),
        "digit out of range for radix {radix}"
    );

    if radix.is_power_of_two() {
        let bits = radix.trailing_zeros();
        let mut acc = 0u32;
        let mut pending = 0;
        let mut pos = 0;
        for &d in digits {
            let d: u32 = d.into();
            acc |= d << pending;
            pending += bits;
            while pending >= 8 {
                out[pos] = acc as u8;
                pos += 1;
                acc >>= 8;
                pending -= 8;
            }
        }
        if pending > 0 {
            // the unused high bits of acc are already zero
            out[pos] = acc as u8;
            pos += 1;
        }
        debug_assert_eq!(pos, out.len());
        return;
    }

    assert!(radix < MAX_DIVISOR_RADIX, "radix {radix} too large");
    out.fill(0);
    // Horner: most significant digit first, out = out * radix + d
    for (k, &d) in digits.iter().rev().enumerate() {
        let live = live_bytes(radix, k + 1, out.len());
        let mut carry: u32 = d.into();
        for b in &mut out[..live] {
            let t = u32::from(*b) * radix + carry;
            *b = t as u8;
            carry = t >> 8;
        }
        debug_assert_eq!(carry, 0);
    }
}

/// Unpacks `out.len()` digits from `s`; the exact inverse of [`encode_into`].
///
/// On a string whose value exceeds `radix^out.len() - 1` every digit is still below
/// `radix`, but which digits come back is unspecified.
///
/// # Panics
/// Under the same conditions as [`encode_into`].
pub fn decode_into<D: Digit>(radix: u32, s: &[u8], out: &mut [D]) {
    assert!((2..=D::MAX_RADIX).contains(&radix), "radix {radix} out of range");
    debug_check_len(radix, out.len(), s.len());

    if radix.is_power_of_two() {
        let bits = radix.trailing_zeros();
        let mask = radix - 1;
        let mut acc = 0u32;
        let mut avail = 0;
        let mut bytes = s.iter();
        for d in out.iter_mut() {
            while avail < bits {
                acc |= u32::from(bytes.next().copied().unwrap_or_default()) << avail;
                avail += 8;
            }
            *d = D::truncate(acc & mask);
            acc >>= bits;
            avail -= bits;
        }
        return;
    }

    assert!(radix < MAX_DIVISOR_RADIX, "radix {radix} too large");
    let m = radix as u16;
    let mut scratch: Vec<u8> = s.to_vec();
    let n = out.len();
    // peel off the least significant digit with one long division per digit
    for (i, d) in out.iter_mut().enumerate() {
        let live = live_bytes(radix, n - i, scratch.len());
        let mut rem = 0u32;
        for b in scratch[..live].iter_mut().rev() {
            let (q, r) = ct::divmod_u14((rem << 8) | u32::from(*b), m);
            *b = q as u8;
            rem = r.into();
        }
        *d = D::truncate(rem);
    }
    scratch.zeroize();
}

/// A fixed instantiation of the codec: radix, digit count and packed size are constants.
///
/// Declare one with [`define_radix_codec!`](crate::define_radix_codec). A non-minimal
/// `StrBytes`, or a `DIGIT_BOUND` above `RADIX`, fails to compile on first use.
pub trait RadixCodec {
    /// Storage type of one digit
    type Digit: Digit;
    /// Positional base
    const RADIX: u32;
    /// Exclusive upper bound on digit values, at most `RADIX`. The `x3` codecs store ternary
    /// digits (bound 3) in radix-4 slots.
    const DIGIT_BOUND: u32 = Self::RADIX;
    /// The unpacked digits, `[Digit; ITEMS]`
    type Digits: FixedArray<Self::Digit>;
    /// Packed length in bytes
    type StrBytes: ArraySize;

    /// Number of digits
    const ITEMS: usize = <Self::Digits as FixedArray<Self::Digit>>::LEN;
    /// Packed length in bytes
    const STRBYTES: usize = Self::StrBytes::USIZE;
    /// Bytes of storage per unpacked digit
    const ITEMBYTES: usize = size_of::<Self::Digit>();

    #[doc(hidden)]
    const MINIMAL: () = {
        assert!(Self::DIGIT_BOUND >= 2 && Self::DIGIT_BOUND <= Self::RADIX);
        assert!(Self::STRBYTES == str_bytes(Self::RADIX, Self::ITEMS));
    };

    /// Packs `digits`, each of which must be below `DIGIT_BOUND`.
    #[must_use]
    fn encode(digits: &Self::Digits) -> Array<u8, Self::StrBytes> {
        let () = Self::MINIMAL;
        let digits = digits.as_ref();
        debug_assert!(digits.iter().all(|&d| Into::<u32>::into(d) < Self::DIGIT_BOUND));
        let mut out = Array::<u8, Self::StrBytes>::default();
        encode_into(Self::RADIX, digits, &mut out);
        out
    }

    /// Unpacks a string produced by [`encode`](Self::encode). Every returned digit is below
    /// `DIGIT_BOUND`, whatever the input.
    #[must_use]
    fn decode(s: &Array<u8, Self::StrBytes>) -> Self::Digits {
        let () = Self::MINIMAL;
        let mut out = Self::Digits::from_fn(|_| Self::Digit::default());
        decode_into(Self::RADIX, s, out.as_mut());
        if Self::DIGIT_BOUND < Self::RADIX {
            let bound = Self::DIGIT_BOUND as u16;
            for d in out.as_mut() {
                *d = <Self::Digit as Digit>::truncate(ct::mod_u14((*d).into(), bound).into());
            }
        }
        out
    }
}

/// Declares a unit struct implementing [`RadixCodec`].
///
/// ```
/// use pq_common::{RadixCodec, array::sizes::U2, define_radix_codec};
///
/// define_radix_codec! {
///     /// Three decimal digits
///     Decimal3: u8, radix = 10, items = 3, str_bytes = U2
/// }
///
/// let packed = Decimal3::encode(&[7, 5, 9]);
/// assert_eq!(u16::from_le_bytes(packed.0), 957);
/// assert_eq!(Decimal3::decode(&packed), [7, 5, 9]);
/// ```
#[macro_export]
macro_rules! define_radix_codec {
    (
        $(#[$meta:meta])*
        $name:ident: $digit:ty, radix = $radix:expr, items = $items:expr, str_bytes = $bytes:ty
    ) => {
        $crate::define_radix_codec! {
            $(#[$meta])*
            $name: $digit, radix = $radix, bound = $radix, items = $items, str_bytes = $bytes
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident: $digit:ty, radix = $radix:expr, bound = $bound:expr, items = $items:expr,
        str_bytes = $bytes:ty
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::radix::RadixCodec for $name {
            type Digit = $digit;
            const RADIX: u32 = $radix;
            const DIGIT_BOUND: u32 = $bound;
            type Digits = [$digit; $items];
            type StrBytes = $bytes;
        }
    };
}
