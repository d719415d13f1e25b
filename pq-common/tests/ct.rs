use pq_common::ct::{compare, compare_choice, select, select_i16};
use proptest::prelude::*;

proptest! {
    #[test]
    fn compare_is_equality(a in proptest::collection::vec(any::<u8>(), 0..256), b in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(compare(&a, &b) == 0, a == b);
        prop_assert_eq!(compare(&a, &a), 0);
        prop_assert_eq!(bool::from(compare_choice(&a, &b)), a == b);
    }

    #[test]
    fn single_flip_detected(
        a in proptest::collection::vec(any::<u8>(), 1..1024),
        pos in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut b = a.clone();
        b[pos.index(a.len())] ^= 1 << bit;
        prop_assert_eq!(compare(&a, &b), 1);
    }

    #[test]
    fn select_blends(
        (dst, src) in (0usize..512).prop_flat_map(|n| (
            proptest::collection::vec(any::<u8>(), n),
            proptest::collection::vec(any::<u8>(), n),
        )),
        flag in 0u8..2,
    ) {
        let mut out = dst.clone();
        select(&mut out, &src, flag);
        prop_assert_eq!(out, if flag == 1 { src } else { dst });
    }

    #[test]
    fn select_word(r in any::<i16>(), v in any::<i16>(), flag in 0u8..2) {
        let mut out = r;
        select_i16(&mut out, v, flag);
        prop_assert_eq!(out, if flag == 1 { v } else { r });
    }
}
