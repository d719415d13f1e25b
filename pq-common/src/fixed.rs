//! Length-`N` storage whose length is part of the type.
//!
//! Polynomial degrees and digit counts such as 761 or 953 have no `typenum` array size, so
//! those arrays are plain `[T; N]` behind this trait. Generic code names them through an
//! associated type and still never sees a runtime length.

use core::{
    fmt::Debug,
    ops::{Index, IndexMut},
};

/// `[T; N]` for some fixed `N`.
pub trait FixedArray<T>:
    AsRef<[T]> + AsMut<[T]> + Index<usize, Output = T> + IndexMut<usize> + Clone + Debug + Eq
{
    /// Number of elements
    const LEN: usize;

    /// Builds the array from its elements by index.
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self;
}

impl<T: Clone + Debug + Eq, const N: usize> FixedArray<T> for [T; N] {
    const LEN: usize = N;

    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        core::array::from_fn(f)
    }
}
