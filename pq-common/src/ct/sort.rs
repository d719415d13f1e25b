/// Orders a pair so the smaller value comes first, without a comparison branch.
#[inline]
fn minmax(a: u32, b: u32) -> (u32, u32) {
    let ab = a ^ b;
    // the sign bit of c ends up set iff b < a
    let mut c = b.wrapping_sub(a);
    c ^= ab & (c ^ b ^ 0x8000_0000);
    let swap = (c >> 31).wrapping_neg() & ab;
    (a ^ swap, b ^ swap)
}

#[inline]
fn exchange(list: &mut [u32], i: usize, j: usize) {
    let (lo, hi) = minmax(list[i], list[j]);
    list[i] = lo;
    list[j] = hi;
}

/// Sorts `list` ascending with a Batcher merge-exchange network.
///
/// The sequence of compared positions depends only on `list.len()`.
pub fn sort_u32(list: &mut [u32]) {
    let n = list.len();
    if n < 2 {
        return;
    }
    let mut top = 1;
    while top < n - top {
        top += top;
    }

    let mut p = top;
    while p > 0 {
        for i in (0..n - p).filter(|i| i & p == 0) {
            exchange(list, i, i + p);
        }
        let mut q = top;
        while q > p {
            for i in (0..n - q).filter(|i| i & p == 0) {
                exchange(list, i + p, i + q);
            }
            q >>= 1;
        }
        p >>= 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pairs() {
        assert_eq!(minmax(0, 0), (0, 0));
        assert_eq!(minmax(2, 1), (1, 2));
        assert_eq!(minmax(1, 2), (1, 2));
        assert_eq!(minmax(u32::MAX, u32::MAX - 1), (u32::MAX - 1, u32::MAX));
        assert_eq!(minmax(4, u32::MAX), (4, u32::MAX));
        assert_eq!(minmax(u32::MAX - 1, 4), (4, u32::MAX - 1));
    }

    #[test]
    fn short_lists() {
        let mut empty: [u32; 0] = [];
        sort_u32(&mut empty);
        let mut one = [7];
        sort_u32(&mut one);
        assert_eq!(one, [7]);
        let mut two = [9, 3];
        sort_u32(&mut two);
        assert_eq!(two, [3, 9]);
    }

    #[test]
    fn reversed() {
        let mut v: Vec<u32> = (0..761).rev().collect();
        sort_u32(&mut v);
        assert!(v.iter().copied().eq(0..761));
    }

    proptest! {
        #[test]
        fn matches_std_sort(mut v in proptest::collection::vec(any::<u32>(), 0..300)) {
            let mut expected = v.clone();
            expected.sort_unstable();
            sort_u32(&mut v);
            prop_assert_eq!(v, expected);
        }
    }
}
