//! Branch-free primitives for handling secret data.
//!
//! Nothing in this module branches on, or indexes memory by, the value of its inputs.
//! Loop bounds come from slice lengths only, which are public.

mod compare;
mod masks;
mod num;
mod select;
mod sort;

pub use compare::{compare, compare_choice};
pub use masks::{negative_mask_i16, nonzero_mask_i16};
pub use num::{div_u14, divmod_u14, mod_u14, sdiv_u14, sdivmod_u14, smod_u14};
pub use select::{select, select_choice, select_i8, select_i16, select_i32, select_u16, select_u32};
pub use sort::sort_u32;
