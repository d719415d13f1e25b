use subtle::Choice;

/// Compares two byte strings without an early exit.
///
/// Returns `0` when `a` and `b` are identical and `1` otherwise. Every byte of the common
/// prefix is visited whatever the position of the first difference; strings of different
/// lengths (a public property) always compare unequal.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> u8 {
    let mut diff = u64::from(a.len() != b.len());
    for (x, y) in a.iter().zip(b) {
        diff |= u64::from(x ^ y);
    }
    // diff is in 0..=255, so its negation has the top bit set iff it is non-zero
    (diff.wrapping_neg() >> 63) as u8
}

/// [`compare`] in the `subtle` convention: the returned [`Choice`] is 1 iff `a == b`.
#[must_use]
pub fn compare_choice(a: &[u8], b: &[u8]) -> Choice {
    Choice::from(1 ^ compare(a, b))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equal_buffers() {
        assert_eq!(compare(&[], &[]), 0);
        assert_eq!(compare(b"sntrup761", b"sntrup761"), 0);
        assert_eq!(compare(&[0xff; 1000], &[0xff; 1000]), 0);
    }

    #[test]
    fn every_position_and_bit() {
        let a = [0x5a_u8; 64];
        for i in 0..a.len() {
            for bit in 0..8 {
                let mut b = a;
                b[i] ^= 1 << bit;
                assert_eq!(compare(&a, &b), 1, "byte {i} bit {bit}");
                assert_eq!(compare(&b, &a), 1, "byte {i} bit {bit}");
            }
        }
    }

    #[test]
    fn unequal_lengths() {
        assert_eq!(compare(b"abc", b"abcd"), 1);
        assert_eq!(compare(b"", b"a"), 1);
    }

    #[test]
    fn choice_convention() {
        assert_eq!(compare_choice(b"ab", b"ab").unwrap_u8(), 1);
        assert_eq!(compare_choice(b"ab", b"aB").unwrap_u8(), 0);
    }
}
