/// Returns -1 if `x != 0` and 0 otherwise.
#[must_use]
pub const fn nonzero_mask_i16(x: i16) -> i32 {
    // the negation of a non-zero 16 bit value has bit 31 set
    ((x as u16 as u32).wrapping_neg() >> 31).wrapping_neg() as i32
}

/// Returns -1 if `x < 0` and 0 otherwise.
#[must_use]
pub const fn negative_mask_i16(x: i16) -> i32 {
    -(((x as u16) >> 15) as i32)
}
