use subtle::Choice;

/// Conditionally overwrites `dst` with `src`: `dst` becomes `src` when `flag` is 1 and is
/// left untouched when `flag` is 0.
///
/// # Panics
/// If `dst` and `src` differ in length, or `flag` is neither 0 nor 1 (debug builds).
pub fn select(dst: &mut [u8], src: &[u8], flag: u8) {
    select_choice(dst, src, Choice::from(flag));
}

/// [`select`] driven by a [`Choice`].
///
/// # Panics
/// If `dst` and `src` differ in length.
pub fn select_choice(dst: &mut [u8], src: &[u8], choice: Choice) {
    assert_eq!(dst.len(), src.len(), "select: length mismatch");
    // 0x00 or 0xff; the value passes through subtle's optimization barrier first
    let mask = choice.unwrap_u8().wrapping_neg();
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= mask & (*d ^ s);
    }
}

macro_rules! define_select_word {
    ($($name:ident: $t:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Sets `*r = v` when `flag` is 1 and leaves `*r` alone when it is 0, for `", stringify!($t), "` slots.")]
            pub fn $name(r: &mut $t, v: $t, flag: u8) {
                let mask = (Choice::from(flag).unwrap_u8() as $t).wrapping_neg();
                *r ^= mask & (*r ^ v);
            }
        )+
    };
}

define_select_word! {
    select_i8: i8,
    select_i16: i16,
    select_u16: u16,
    select_i32: i32,
    select_u32: u32,
}
