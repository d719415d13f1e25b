//! Arithmetic in `R/3` and `R/q` for `R = Z[x]/(x^p - x - 1)`.

pub mod f3;
pub mod fq;
pub mod r3;
pub mod rq;

use alloc::vec;

/// Schoolbook product of two length-`p` coefficient vectors modulo `x^p - x - 1`.
///
/// The result is not reduced modulo anything; callers freeze each coefficient. Inputs are
/// bounded by `q/2` and `1` in absolute value, so every sum fits an `i32`.
pub(crate) fn ring_mul(a: &[i32], b: &[i32], out: &mut [i32]) {
    let p = a.len();
    debug_assert_eq!(b.len(), p);
    debug_assert_eq!(out.len(), p);

    let mut fg = vec![0i32; 2 * p - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            fg[i + j] += ai * bj;
        }
    }
    // x^p = x + 1
    for i in (p..2 * p - 1).rev() {
        fg[i - p] += fg[i];
        fg[i - p + 1] += fg[i];
    }
    out.copy_from_slice(&fg[..p]);
}
