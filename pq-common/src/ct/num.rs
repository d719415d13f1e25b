//! Division by a public modulus below 2^14 in time independent of the dividend.
//!
//! Hardware dividers typically take time that depends on the operands. These routines
//! only multiply, shift and mask, so the dividend may be secret. The modulus is assumed
//! public: the reciprocal computed from it uses a real division.

const fn check_bounds(m: u32, v: u32) {
    debug_assert!(m > 0);
    debug_assert!(m < 16384);
    debug_assert!(v * m <= 0x8000_0000);
    debug_assert!(0x8000_0000 < v * m + m);
}

/// Returns `(x / m, x % m)` for `0 < m < 16384`.
#[must_use]
pub const fn divmod_u14(x: u32, m: u16) -> (u32, u16) {
    let m = m as u32;
    // floor(2^31 / m), an underestimate of the reciprocal
    let v = 0x8000_0000_u32 / m;
    check_bounds(m, v);

    let mut x = x;
    let mut q = 0u32;

    // each round leaves a remainder below 3m-ish; two rounds bring any u32 below 2m
    let mut qpart = ((x as u64 * v as u64) >> 31) as u32;
    x -= qpart * m;
    q += qpart;

    qpart = ((x as u64 * v as u64) >> 31) as u32;
    x -= qpart * m;
    q += qpart;

    // final correction: subtract once more and add it back if that went negative
    x = x.wrapping_sub(m);
    q = q.wrapping_add(1);
    let mask = (x >> 31).wrapping_neg();
    x = x.wrapping_add(mask & m);
    q = q.wrapping_add(mask);

    (q, x as u16)
}

/// Returns `x / m` for `0 < m < 16384`.
#[must_use]
pub const fn div_u14(x: u32, m: u16) -> u32 {
    divmod_u14(x, m).0
}

/// Returns `x % m` for `0 < m < 16384`.
#[must_use]
pub const fn mod_u14(x: u32, m: u16) -> u16 {
    divmod_u14(x, m).1
}

/// Floor division of a signed dividend: returns `(q, r)` with `x = q*m + r` and
/// `0 <= r < m`.
#[must_use]
pub const fn sdivmod_u14(x: i32, m: u16) -> (i32, u16) {
    // shift into unsigned range, divide, then remove the shift's contribution
    let (q, r) = divmod_u14(0x8000_0000_u32.wrapping_add(x as u32), m);
    let (q_off, r_off) = divmod_u14(0x8000_0000, m);
    let mut q = q.wrapping_sub(q_off);
    let mut r = r.wrapping_sub(r_off);
    let mask = ((r >> 15) as u32).wrapping_neg();
    r = r.wrapping_add(mask as u16 & m);
    q = q.wrapping_add(mask);
    (q as i32, r)
}

/// Returns `floor(x / m)` for `0 < m < 16384`.
#[must_use]
pub const fn sdiv_u14(x: i32, m: u16) -> i32 {
    sdivmod_u14(x, m).0
}

/// Returns the representative of `x mod m` in `0..m` for `0 < m < 16384`.
#[must_use]
pub const fn smod_u14(x: i32, m: u16) -> u16 {
    sdivmod_u14(x, m).1
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    const MODULI: [u16; 12] = [1, 2, 3, 4, 256, 1541, 2741, 3079, 4591, 5167, 6343, 16383];

    #[test]
    fn unsigned_edges() {
        for m in MODULI {
            for x in [0, 1, u32::from(m) - 1, u32::from(m), u32::MAX - 1, u32::MAX] {
                let (q, r) = divmod_u14(x, m);
                assert_eq!(q, x / u32::from(m), "{x} / {m}");
                assert_eq!(u32::from(r), x % u32::from(m), "{x} % {m}");
            }
        }
    }

    #[test]
    fn signed_edges() {
        for m in MODULI {
            for x in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX] {
                let (q, r) = sdivmod_u14(x, m);
                assert_eq!(q, x.div_euclid(i32::from(m)), "{x} / {m}");
                assert_eq!(i32::from(r), x.rem_euclid(i32::from(m)), "{x} % {m}");
            }
        }
    }

    proptest! {
        #[test]
        fn unsigned_matches_hardware(x in any::<u32>(), m in 1u16..16384) {
            prop_assert_eq!(div_u14(x, m), x / u32::from(m));
            prop_assert_eq!(u32::from(mod_u14(x, m)), x % u32::from(m));
        }

        #[test]
        fn signed_matches_euclid(x in any::<i32>(), m in 1u16..16384) {
            prop_assert_eq!(sdiv_u14(x, m), x.div_euclid(i32::from(m)));
            prop_assert_eq!(i32::from(smod_u14(x, m)), x.rem_euclid(i32::from(m)));
        }
    }
}
