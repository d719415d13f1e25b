//! Named codec instantiations.
//!
//! The `x3` codecs are the NTRU Prime small-polynomial wire form: a ternary digit per
//! 2-bit slot, four digits per byte. The `Base3` codecs pack the same digits densely at
//! log2(3) bits each.

use hybrid_array::sizes::{U151, U164, U189, U191, U215, U239, U254, U320};

crate::define_radix_codec! {
    /// 653 ternary digits in 164 bytes
    Encode653x3: u8, radix = 4, bound = 3, items = 653, str_bytes = U164
}

crate::define_radix_codec! {
    /// 761 ternary digits in 191 bytes
    Encode761x3: u8, radix = 4, bound = 3, items = 761, str_bytes = U191
}

crate::define_radix_codec! {
    /// 857 ternary digits in 215 bytes
    Encode857x3: u8, radix = 4, bound = 3, items = 857, str_bytes = U215
}

crate::define_radix_codec! {
    /// 953 ternary digits in 239 bytes
    Encode953x3: u8, radix = 4, bound = 3, items = 953, str_bytes = U239
}

crate::define_radix_codec! {
    /// 1013 ternary digits in 254 bytes
    Encode1013x3: u8, radix = 4, bound = 3, items = 1013, str_bytes = U254
}

crate::define_radix_codec! {
    /// 1277 ternary digits in 320 bytes
    Encode1277x3: u8, radix = 4, bound = 3, items = 1277, str_bytes = U320
}

crate::define_radix_codec! {
    /// 761 ternary digits packed densely in 151 bytes
    Encode761Base3: u8, radix = 3, items = 761, str_bytes = U151
}

crate::define_radix_codec! {
    /// 953 ternary digits packed densely in 189 bytes
    Encode953Base3: u8, radix = 3, items = 953, str_bytes = U189
}
