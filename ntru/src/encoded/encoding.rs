//! The NTRU Prime mixed-radix "Encode".
//!
//! Values `r[i] < m[i]` are merged pairwise into values below `m[i] * m[i+1]`; whenever a
//! merged modulus reaches 2^14 its low byte is emitted. The pairs are merged again until one
//! value remains, which is written out byte by byte. Every modulus is public, so the
//! sequence of byte positions does not depend on the values.

use alloc::vec::Vec;
use pq_common::ct::{divmod_u14, mod_u14};

/// Packs `values` (each below the matching modulus) into `out`.
pub fn encode(values: &[u16], moduli: &[u16], out: &mut [u8]) {
    debug_assert_eq!(values.len(), moduli.len());
    match moduli {
        [] => {}
        [m] => {
            let mut r = values[0];
            let mut m = *m;
            let mut pos = 0;
            while m > 1 {
                out[pos] = r as u8;
                pos += 1;
                r >>= 8;
                m = (m + 255) >> 8;
            }
        }
        _ => {
            let half = moduli.len().div_ceil(2);
            let mut values2 = Vec::with_capacity(half);
            let mut moduli2 = Vec::with_capacity(half);
            let mut pos = 0;
            for (r, m) in values.chunks(2).zip(moduli.chunks(2)) {
                let (&[r0, r1], &[m0, m1]) = (r, m) else {
                    values2.push(r[0]);
                    moduli2.push(m[0]);
                    continue;
                };
                let mut r = u32::from(r0) + u32::from(r1) * u32::from(m0);
                let mut m = u32::from(m1) * u32::from(m0);
                while m >= 16384 {
                    out[pos] = r as u8;
                    pos += 1;
                    r >>= 8;
                    m = (m + 255) >> 8;
                }
                values2.push(r as u16);
                moduli2.push(m as u16);
            }
            encode(&values2, &moduli2, &mut out[pos..]);
        }
    }
}

/// Unpacks `out.len()` values from `s`; inverse of [`encode`]. Every returned value is
/// below its modulus, whatever `s` holds.
pub fn decode(s: &[u8], moduli: &[u16], out: &mut [u16]) {
    debug_assert_eq!(out.len(), moduli.len());
    match moduli {
        [] => {}
        [1] => out[0] = 0,
        [m] if *m < 256 => out[0] = mod_u14(u32::from(s[0]), *m),
        [m] => out[0] = mod_u14(u32::from(s[0]) | (u32::from(s[1]) << 8), *m),
        _ => {
            let half = moduli.len().div_ceil(2);
            let mut moduli2 = Vec::with_capacity(half);
            // (low bits, their range) of each merged pair
            let mut bottom = Vec::with_capacity(moduli.len() / 2);
            let mut pos = 0;
            for m in moduli.chunks(2) {
                let &[m0, m1] = m else {
                    moduli2.push(m[0]);
                    continue;
                };
                let m = u32::from(m0) * u32::from(m1);
                if m > 256 * 16383 {
                    bottom.push((u32::from(s[pos]) | (u32::from(s[pos + 1]) << 8), 1 << 16));
                    pos += 2;
                    moduli2.push(((((m + 255) >> 8) + 255) >> 8) as u16);
                } else if m >= 16384 {
                    bottom.push((u32::from(s[pos]), 1 << 8));
                    pos += 1;
                    moduli2.push(((m + 255) >> 8) as u16);
                } else {
                    bottom.push((0, 1));
                    moduli2.push(m as u16);
                }
            }

            let mut values2 = alloc::vec![0u16; half];
            decode(&s[pos..], &moduli2, &mut values2);

            for ((pair, m), (&(low, range), &top)) in out
                .chunks_mut(2)
                .zip(moduli.chunks(2))
                .zip(bottom.iter().zip(values2.iter()))
            {
                let r = low + range * u32::from(top);
                let (r1, r0) = divmod_u14(r, m[0]);
                pair[0] = r0;
                pair[1] = mod_u14(r1, m[1]);
            }
            if moduli.len() % 2 == 1 {
                out[moduli.len() - 1] = values2[half - 1];
            }
        }
    }
}
